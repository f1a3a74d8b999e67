//! Presentation layer for coverquery
//!
//! Thin front ends over the answer-query use case: a clap CLI surface,
//! an interactive chat REPL, and an axum HTTP endpoint. All of them
//! share one use-case instance, so cache and history stay consistent
//! whichever surface a query arrives through.

pub mod chat;
pub mod cli;
pub mod http;

pub use chat::ChatRepl;
pub use cli::Cli;
pub use http::{ChatRequest, ChatResponse, serve};
