//! Bounded response cache with insertion-order eviction
//!
//! Caches final answers keyed by the verbatim query text, alongside the
//! classification result for each query. Eviction is FIFO by insertion:
//! reads never promote an entry, so a frequently re-read entry is still
//! evicted once enough newer entries have been inserted. This matches the
//! persisted-store semantics the rest of the system is written against
//! and is deliberate, not an LRU with a bug.

use crate::topic::TopicLabel;
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Maximum number of answer entries kept by default
pub const DEFAULT_CACHE_CAPACITY: usize = 20;

/// Key suffix under which a query's classification is persisted
pub const LABEL_KEY_SUFFIX: &str = "_categories";

/// Bounded query → answer store with a parallel query → labels record
///
/// Only answer entries count against the capacity. A classification
/// record shares the lifecycle of its answer entry: when the answer is
/// evicted, the classification goes with it. A classification recorded
/// for an in-flight query (answer not yet computed) is kept until that
/// answer lands or is itself evicted.
#[derive(Debug, Clone)]
pub struct ResponseCache {
    capacity: usize,
    answers: Vec<(String, String)>,
    labels: HashMap<String, Vec<TopicLabel>>,
}

impl ResponseCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            answers: Vec::new(),
            labels: HashMap::new(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of answer entries (classification records are not counted)
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Look up a cached answer. Never promotes the entry.
    pub fn answer(&self, query: &str) -> Option<&str> {
        self.answers
            .iter()
            .find(|(q, _)| q == query)
            .map(|(_, a)| a.as_str())
    }

    /// Look up the classification recorded for a query
    pub fn labels(&self, query: &str) -> Option<&[TopicLabel]> {
        self.labels.get(query).map(|v| v.as_slice())
    }

    /// Record the classification result for a query
    pub fn record_classification(&mut self, query: &str, labels: Vec<TopicLabel>) {
        self.labels.insert(query.to_string(), labels);
    }

    /// Insert or overwrite an answer, then evict oldest entries beyond
    /// capacity. Overwriting keeps the entry's original position.
    pub fn record_answer(&mut self, query: &str, answer: &str) {
        match self.answers.iter_mut().find(|(q, _)| q == query) {
            Some((_, existing)) => {
                *existing = answer.to_string();
            }
            None => {
                self.answers.push((query.to_string(), answer.to_string()));
            }
        }

        while self.answers.len() > self.capacity {
            let (evicted, _) = self.answers.remove(0);
            self.labels.remove(&evicted);
        }
    }

    /// Render the cache as the persisted JSON object: each answer entry
    /// under its query text, each classification under the query text
    /// plus [`LABEL_KEY_SUFFIX`], insertion order preserved.
    pub fn to_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        for (query, answer) in &self.answers {
            map.insert(query.clone(), Value::String(answer.clone()));
            if let Some(labels) = self.labels.get(query) {
                map.insert(
                    format!("{query}{LABEL_KEY_SUFFIX}"),
                    label_array(labels),
                );
            }
        }
        // Classifications for in-flight queries (no answer yet)
        for (query, labels) in &self.labels {
            if self.answer(query).is_none() {
                map.insert(format!("{query}{LABEL_KEY_SUFFIX}"), label_array(labels));
            }
        }
        map
    }

    /// Rebuild a cache from the persisted JSON object, dropping entries
    /// that do not fit the expected shape. Enforces the capacity bound in
    /// case the persisted file was written with a larger one.
    pub fn from_map(map: &Map<String, Value>, capacity: usize) -> Self {
        let mut cache = Self::new(capacity);
        for (key, value) in map {
            if let Some(query) = key.strip_suffix(LABEL_KEY_SUFFIX) {
                if let Some(items) = value.as_array() {
                    let labels: Vec<TopicLabel> = items
                        .iter()
                        .filter_map(|v| v.as_str())
                        .filter_map(|s| s.parse().ok())
                        .collect();
                    cache.record_classification(query, labels);
                }
            } else if let Some(answer) = value.as_str() {
                cache.record_answer(key, answer);
            }
        }
        cache
    }
}

impl Default for ResponseCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}

fn label_array(labels: &[TopicLabel]) -> Value {
    Value::Array(
        labels
            .iter()
            .map(|l| Value::String(l.as_str().to_string()))
            .collect(),
    )
}
