//! HTTP front end

mod server;

pub use server::{ChatRequest, ChatResponse, serve};
