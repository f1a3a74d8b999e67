//! Chat model port
//!
//! Defines the interface for communicating with the external
//! text-generation service.

use async_trait::async_trait;
use coverquery_domain::Message;
use thiserror::Error;

/// Errors that can occur while talking to a chat model
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Timeout")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

/// Gateway for chat completions
///
/// This port defines how the application layer requests a completion for
/// an ordered sequence of role-tagged messages. Implementations
/// (adapters) live in the infrastructure layer.
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Request a completion from the named model
    async fn complete(&self, model: &str, messages: &[Message]) -> Result<String, ModelError>;
}
