//! Dispatch use case
//!
//! Fans a query out to one responder per selected topic label, running
//! them concurrently and joining on all of them before returning. A
//! failure inside one responder becomes an error-tagged entry for that
//! label only; sibling responders are never cancelled. No timeout is
//! enforced here: the failover backend already bounds each completion to
//! at most two attempts plus a fixed apology.

use crate::backend::FailoverBackend;
use coverquery_domain::{
    ConversationHistory, DispatchResult, KnowledgeBase, Message, PromptTemplate, TopicAnswer,
    TopicLabel, UNRELATED_REPLY,
};
use std::sync::Arc;
use thiserror::Error;
use tokio::task::JoinSet;
use tracing::{debug, warn};

/// Errors a single topic responder can produce
#[derive(Error, Debug)]
pub enum ResponderError {
    #[error("no reference corpus loaded for {0}")]
    MissingCorpus(TopicLabel),
}

/// Use case for the fan-out/fan-in round of one query
pub struct Dispatcher {
    backend: FailoverBackend,
    knowledge: Arc<KnowledgeBase>,
}

impl Dispatcher {
    pub fn new(backend: FailoverBackend, knowledge: Arc<KnowledgeBase>) -> Self {
        Self { backend, knowledge }
    }

    /// Run one responder per label concurrently and collect every
    /// outcome. The result always has exactly one entry per dispatched
    /// label, success or failure.
    pub async fn dispatch(
        &self,
        query: &str,
        labels: &[TopicLabel],
        history: &ConversationHistory,
    ) -> DispatchResult {
        let transcript = history.transcript();
        let mut join_set = JoinSet::new();

        for &label in labels {
            let backend = self.backend.clone();
            let knowledge = Arc::clone(&self.knowledge);
            let query = query.to_string();
            let transcript = transcript.clone();

            join_set.spawn(async move {
                let outcome = respond(&backend, &knowledge, label, &query, &transcript).await;
                (label, outcome)
            });
        }

        let mut result = DispatchResult::default();

        while let Some(joined) = join_set.join_next().await {
            match joined {
                Ok((label, Ok(text))) => {
                    debug!("Responder {label} completed");
                    result.push(TopicAnswer::success(label, text));
                }
                Ok((label, Err(e))) => {
                    warn!("Responder {label} failed: {e}");
                    result.push(TopicAnswer::failure(label, e.to_string()));
                }
                Err(e) => {
                    warn!("Responder task join error: {e}");
                }
            }
        }

        // A panicked task loses its label in the join error, so backfill
        // to keep the one-entry-per-label invariant.
        for &label in labels {
            if result.get(label).is_none() {
                result.push(TopicAnswer::failure(label, "responder task panicked"));
            }
        }

        result
    }
}

/// Answer one topic. Pure function of (label, query, history snapshot,
/// static corpus); backend failures are absorbed into apology text by the
/// failover backend, so the only error here is a missing corpus.
async fn respond(
    backend: &FailoverBackend,
    knowledge: &KnowledgeBase,
    label: TopicLabel,
    query: &str,
    transcript: &str,
) -> Result<String, ResponderError> {
    match label {
        TopicLabel::Greeting => {
            let messages = [
                Message::system(PromptTemplate::greeting_system()),
                Message::user(query),
            ];
            Ok(backend.invoke(&messages).await)
        }
        TopicLabel::Unrelated => Ok(UNRELATED_REPLY.to_string()),
        TopicLabel::PolicyTypes
        | TopicLabel::Benefits
        | TopicLabel::Eligibility
        | TopicLabel::Claims => {
            let reference = knowledge
                .reference_block(label)
                .ok_or(ResponderError::MissingCorpus(label))?;
            let messages = [
                Message::system(PromptTemplate::responder_system(label)),
                Message::user(PromptTemplate::responder_prompt(&reference, transcript, query)),
            ];
            Ok(backend.invoke(&messages).await)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::chat_model::{ChatModel, ModelError};
    use async_trait::async_trait;
    use coverquery_domain::CorpusEntry;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Echoes the topic named in the system prompt; counts invocations
    struct EchoModel {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl ChatModel for EchoModel {
        async fn complete(
            &self,
            _model: &str,
            messages: &[Message],
        ) -> Result<String, ModelError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(format!("answer for: {}", messages[0].content))
        }
    }

    fn entry(id: &str) -> CorpusEntry {
        CorpusEntry {
            id: id.to_string(),
            title: "Overview".to_string(),
            content: "Reference text.".to_string(),
            source_name: "handbook".to_string(),
            source_url: "https://example.com".to_string(),
        }
    }

    fn knowledge_with(labels: &[TopicLabel]) -> Arc<KnowledgeBase> {
        let mut corpora = HashMap::new();
        for &label in labels {
            corpora.insert(label, vec![entry("e1")]);
        }
        Arc::new(KnowledgeBase::new(corpora, vec![]))
    }

    fn dispatcher(knowledge: Arc<KnowledgeBase>) -> (Dispatcher, Arc<EchoModel>) {
        let model = Arc::new(EchoModel {
            calls: AtomicUsize::new(0),
        });
        let backend = FailoverBackend::new(Arc::clone(&model) as Arc<dyn ChatModel>, "big", "small");
        (Dispatcher::new(backend, knowledge), model)
    }

    #[tokio::test]
    async fn one_entry_per_dispatched_label() {
        let (dispatcher, _) =
            dispatcher(knowledge_with(&[TopicLabel::Benefits, TopicLabel::Claims]));
        let result = dispatcher
            .dispatch(
                "Benefits and claims?",
                &[TopicLabel::Benefits, TopicLabel::Claims],
                &ConversationHistory::default(),
            )
            .await;

        assert_eq!(result.len(), 2);
        assert!(result.get(TopicLabel::Benefits).unwrap().success);
        assert!(result.get(TopicLabel::Claims).unwrap().success);
    }

    #[tokio::test]
    async fn failed_responder_does_not_abort_siblings() {
        // Claims has no corpus, so its responder fails; benefits succeeds.
        let (dispatcher, _) = dispatcher(knowledge_with(&[TopicLabel::Benefits]));
        let result = dispatcher
            .dispatch(
                "Benefits and claims?",
                &[TopicLabel::Benefits, TopicLabel::Claims],
                &ConversationHistory::default(),
            )
            .await;

        assert_eq!(result.len(), 2);
        assert!(result.get(TopicLabel::Benefits).unwrap().success);
        let failed = result.get(TopicLabel::Claims).unwrap();
        assert!(!failed.success);
        assert!(failed.content.starts_with("Error in claims responder"));
    }

    #[tokio::test]
    async fn unrelated_is_canned_without_backend_call() {
        let (dispatcher, model) = dispatcher(knowledge_with(&[]));
        let result = dispatcher
            .dispatch(
                "What's the weather?",
                &[TopicLabel::Unrelated],
                &ConversationHistory::default(),
            )
            .await;

        assert_eq!(result.get(TopicLabel::Unrelated).unwrap().content, UNRELATED_REPLY);
        assert_eq!(model.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn greeting_uses_conversational_responder() {
        let (dispatcher, model) = dispatcher(knowledge_with(&[]));
        let result = dispatcher
            .dispatch("Hello", &[TopicLabel::Greeting], &ConversationHistory::default())
            .await;

        let greeting = result.get(TopicLabel::Greeting).unwrap();
        assert!(greeting.success);
        assert_eq!(model.calls.load(Ordering::SeqCst), 1);
    }
}
