//! Infrastructure layer for coverquery
//!
//! Adapters for the application-layer ports plus process configuration:
//!
//! - [`config`] - layered TOML configuration (defaults, global, project)
//! - [`corpus`] - JSON corpus and topic-descriptor loading
//! - [`cache`] - JSON-file implementation of the cache store port
//! - [`providers`] - OpenAI-compatible chat completions adapter

pub mod cache;
pub mod config;
pub mod corpus;
pub mod providers;

pub use cache::JsonCacheStore;
pub use config::{ConfigLoader, FileConfig};
pub use corpus::CorpusLoader;
pub use providers::OpenAiChatModel;
