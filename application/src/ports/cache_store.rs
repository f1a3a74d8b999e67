//! Cache store port
//!
//! Durable persistence for the response cache. The cache is small and is
//! rewritten in full on every mutation, so the interface is a plain
//! load/persist pair.

use coverquery_domain::ResponseCache;
use thiserror::Error;

/// Errors that can occur reading or writing the persisted cache
#[derive(Error, Debug)]
pub enum CacheStoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Durable storage for the response cache
pub trait CacheStore: Send + Sync {
    /// Load the persisted cache, bounded to `capacity` answer entries.
    ///
    /// Callers treat a load failure as "start empty"; the error is only
    /// surfaced so it can be logged.
    fn load(&self, capacity: usize) -> Result<ResponseCache, CacheStoreError>;

    /// Rewrite the full persisted cache
    fn persist(&self, cache: &ResponseCache) -> Result<(), CacheStoreError>;
}
