//! Static reference corpus and per-topic knowledge base

use crate::topic::TopicLabel;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One document of a topic's reference corpus (Entity)
///
/// Immutable after load; `id` is unique within a topic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusEntry {
    pub id: String,
    pub title: String,
    pub content: String,
    pub source_name: String,
    pub source_url: String,
}

/// Short description of a domain topic, used only as classifier context
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicDescriptor {
    pub category_name: String,
    pub description: String,
}

/// The full reference material for all domain topics (Aggregate)
///
/// Loaded once at startup and shared read-only for the process lifetime.
#[derive(Debug, Default)]
pub struct KnowledgeBase {
    corpora: HashMap<TopicLabel, Vec<CorpusEntry>>,
    descriptors: Vec<TopicDescriptor>,
}

impl KnowledgeBase {
    pub fn new(
        corpora: HashMap<TopicLabel, Vec<CorpusEntry>>,
        descriptors: Vec<TopicDescriptor>,
    ) -> Self {
        Self {
            corpora,
            descriptors,
        }
    }

    /// Corpus entries for a topic, or None if the topic was never loaded
    pub fn entries(&self, label: TopicLabel) -> Option<&[CorpusEntry]> {
        self.corpora.get(&label).map(|v| v.as_slice())
    }

    pub fn descriptors(&self) -> &[TopicDescriptor] {
        &self.descriptors
    }

    /// Render a topic's corpus as one `title: content` block per entry,
    /// the reference material a topic responder answers from.
    ///
    /// Returns None when the topic has no loaded corpus at all, so the
    /// caller can distinguish "empty corpus" from "missing corpus".
    pub fn reference_block(&self, label: TopicLabel) -> Option<String> {
        self.entries(label).map(|entries| {
            entries
                .iter()
                .map(|e| format!("{}: {}", e.title, e.content))
                .collect::<Vec<_>>()
                .join("\n")
        })
    }

    /// Render all topic descriptors as `name: description` lines,
    /// the disambiguating context handed to the classifier.
    pub fn descriptor_context(&self) -> String {
        self.descriptors
            .iter()
            .map(|d| format!("{}: {}", d.category_name, d.description))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
