//! Use cases for the query-orchestration pipeline

pub mod aggregate;
pub mod answer_query;
pub mod classify;
pub mod dispatch;
