//! Application layer for coverquery
//!
//! Use cases orchestrating the query pipeline, and the ports they need
//! implemented by the infrastructure layer:
//!
//! - [`ChatModel`] - the external text-generation service
//! - [`CacheStore`] - durable persistence for the response cache
//!
//! The pipeline for one query is cache check, classification, concurrent
//! fan-out to topic responders, conditional aggregation, then a single
//! cache-and-history mutation. [`AnswerQueryUseCase`] drives the whole
//! flow and owns the session state behind a single-writer lock so the
//! HTTP front end can admit concurrent requests safely.

pub mod backend;
pub mod ports;
pub mod use_cases;

pub use backend::FailoverBackend;
pub use ports::cache_store::{CacheStore, CacheStoreError};
pub use ports::chat_model::{ChatModel, ModelError};
pub use use_cases::aggregate::Aggregator;
pub use use_cases::answer_query::{AnswerOutcome, AnswerQueryUseCase, SessionState};
pub use use_cases::classify::Classifier;
pub use use_cases::dispatch::{Dispatcher, ResponderError};
