//! Ports implemented by infrastructure adapters

pub mod cache_store;
pub mod chat_model;
