//! JSON-file implementation of the cache store port
//!
//! The whole cache is one JSON object: answers under their query text,
//! classifications under the query text plus a fixed suffix. The file is
//! rewritten in full on every mutation, so a crash loses at most the
//! in-flight turn.

use coverquery_application::{CacheStore, CacheStoreError};
use coverquery_domain::ResponseCache;
use serde_json::{Map, Value};
use std::path::PathBuf;

/// Cache store backed by a single JSON file
pub struct JsonCacheStore {
    path: PathBuf,
}

impl JsonCacheStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl CacheStore for JsonCacheStore {
    fn load(&self, capacity: usize) -> Result<ResponseCache, CacheStoreError> {
        if !self.path.exists() {
            return Ok(ResponseCache::new(capacity));
        }
        let data = std::fs::read_to_string(&self.path)?;
        let map: Map<String, Value> = serde_json::from_str(&data)?;
        Ok(ResponseCache::from_map(&map, capacity))
    }

    fn persist(&self, cache: &ResponseCache) -> Result<(), CacheStoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&Value::Object(cache.to_map()))?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}
