//! Classify use case
//!
//! Maps a raw query to a non-empty set of topic labels, using the topic
//! descriptors as disambiguating context for the backend.

use crate::backend::FailoverBackend;
use coverquery_domain::{KnowledgeBase, Message, PromptTemplate, TopicLabel, parse_label_list};
use std::sync::Arc;
use tracing::debug;

/// Use case for classifying a query into topic labels
pub struct Classifier {
    backend: FailoverBackend,
    knowledge: Arc<KnowledgeBase>,
}

impl Classifier {
    pub fn new(backend: FailoverBackend, knowledge: Arc<KnowledgeBase>) -> Self {
        Self { backend, knowledge }
    }

    /// Classify a query. Total: always returns at least one recognized
    /// label, degrading to `unrelated` when the backend reply is
    /// unusable.
    pub async fn classify(&self, query: &str) -> Vec<TopicLabel> {
        let context = self.knowledge.descriptor_context();
        let messages = [
            Message::system(PromptTemplate::classify_system()),
            Message::user(PromptTemplate::classify_prompt(query, &context)),
        ];

        let response = self.backend.invoke(&messages).await;
        let labels = parse_label_list(&response);
        debug!("Classified query into {labels:?}");
        labels
    }
}
