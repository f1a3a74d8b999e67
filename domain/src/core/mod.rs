//! Core domain primitives

pub mod error;
pub mod query;

pub use error::DomainError;
pub use query::Query;
