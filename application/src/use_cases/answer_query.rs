//! Answer Query use case
//!
//! Orchestrates the full lifecycle of one query:
//! cache check → classify → dispatch → aggregate → cache write + history
//! append. Session state (response cache and conversation history) lives
//! behind a single `tokio::sync::Mutex`, so concurrent requests from the
//! HTTP front end serialize their read-modify-write of shared state while
//! classification and fan-out still run unlocked.

use crate::backend::FailoverBackend;
use crate::ports::cache_store::CacheStore;
use crate::use_cases::aggregate::Aggregator;
use crate::use_cases::classify::Classifier;
use crate::use_cases::dispatch::Dispatcher;
use coverquery_domain::{
    ConversationHistory, ConversationTurn, KnowledgeBase, Query, ResponseCache, TopicLabel,
};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, warn};

/// Mutable per-process session state, mutated once per completed query
pub struct SessionState {
    pub cache: ResponseCache,
    pub history: ConversationHistory,
}

impl SessionState {
    pub fn new(cache: ResponseCache, history: ConversationHistory) -> Self {
        Self { cache, history }
    }
}

/// Final outcome of one query, as returned to any front end
#[derive(Debug, Clone)]
pub struct AnswerOutcome {
    /// The original query text
    pub query: String,
    /// The answer shown to the user
    pub answer: String,
    /// The topic labels used (from cache when the query was seen before)
    pub labels: Vec<TopicLabel>,
    /// Whether the answer came from the cache
    pub cached: bool,
}

/// Use case driving the whole query pipeline
pub struct AnswerQueryUseCase {
    classifier: Classifier,
    dispatcher: Dispatcher,
    aggregator: Aggregator,
    store: Arc<dyn CacheStore>,
    state: Mutex<SessionState>,
}

impl AnswerQueryUseCase {
    pub fn new(
        backend: FailoverBackend,
        knowledge: Arc<KnowledgeBase>,
        store: Arc<dyn CacheStore>,
        state: SessionState,
    ) -> Self {
        Self {
            classifier: Classifier::new(backend.clone(), Arc::clone(&knowledge)),
            dispatcher: Dispatcher::new(backend.clone(), knowledge),
            aggregator: Aggregator::new(backend),
            store,
            state: Mutex::new(state),
        }
    }

    /// Answer one query. Total: every path terminates with a text answer.
    pub async fn execute(&self, query: &Query) -> AnswerOutcome {
        let text = query.content();

        // Cache check. A hit is still a completed turn, so it is
        // appended to the history like any other.
        {
            let mut state = self.state.lock().await;
            if let Some(answer) = state.cache.answer(text) {
                info!("Cache hit for query");
                let answer = answer.to_string();
                let labels = state
                    .cache
                    .labels(text)
                    .map(<[TopicLabel]>::to_vec)
                    .unwrap_or_default();
                state.history.push(ConversationTurn::new(text, &answer));
                return AnswerOutcome {
                    query: text.to_string(),
                    answer,
                    labels,
                    cached: true,
                };
            }
        }

        let labels = self.classifier.classify(text).await;

        // Record the classification and snapshot the history the
        // responders will read.
        let history = {
            let mut state = self.state.lock().await;
            state.cache.record_classification(text, labels.clone());
            self.persist(&state.cache);
            state.history.clone()
        };

        let dispatched = self.dispatcher.dispatch(text, &labels, &history).await;
        let answer = self.aggregator.aggregate(text, &dispatched).await;

        {
            let mut state = self.state.lock().await;
            state.cache.record_answer(text, &answer);
            self.persist(&state.cache);
            state.history.push(ConversationTurn::new(text, &answer));
        }

        AnswerOutcome {
            query: text.to_string(),
            answer,
            labels,
            cached: false,
        }
    }

    fn persist(&self, cache: &ResponseCache) {
        // A failed persist loses the entry on restart, nothing worse;
        // log it and keep serving.
        if let Err(e) = self.store.persist(cache) {
            warn!("Failed to persist response cache: {e}");
        }
    }
}
