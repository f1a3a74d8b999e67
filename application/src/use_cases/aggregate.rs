//! Aggregate use case
//!
//! Reduces a dispatch result to the single answer shown to the user.
//! The backend is invoked for a merge only when more than one domain
//! topic produced an entry; the single-topic case is a pure pass-through
//! and never costs a second completion.

use crate::backend::FailoverBackend;
use coverquery_domain::{
    DispatchResult, Message, PromptTemplate, TopicLabel, UNRELATED_REPLY,
};
use tracing::debug;

/// Use case for merging multi-topic answers
pub struct Aggregator {
    backend: FailoverBackend,
}

impl Aggregator {
    pub fn new(backend: FailoverBackend) -> Self {
        Self { backend }
    }

    /// Produce the final answer for a dispatch result.
    ///
    /// Error-tagged entries participate in a merge as ordinary text, so
    /// the all-failures path still terminates with a user-visible answer.
    pub async fn aggregate(&self, query: &str, result: &DispatchResult) -> String {
        let sections: Vec<(TopicLabel, String)> = result
            .domain_answers()
            .map(|a| (a.label, a.content.clone()))
            .collect();

        if sections.len() > 1 {
            debug!("Merging {} topic answers", sections.len());
            let messages = [
                Message::system(PromptTemplate::merge_system()),
                Message::user(PromptTemplate::merge_prompt(query, &sections)),
            ];
            return self.backend.invoke(&messages).await;
        }

        if let Some((_, text)) = sections.into_iter().next() {
            return text;
        }

        if let Some(greeting) = result.get(TopicLabel::Greeting) {
            return greeting.content.clone();
        }

        result
            .get(TopicLabel::Unrelated)
            .map(|a| a.content.clone())
            .unwrap_or_else(|| UNRELATED_REPLY.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::chat_model::{ChatModel, ModelError};
    use async_trait::async_trait;
    use coverquery_domain::TopicAnswer;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingModel {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl ChatModel for CountingModel {
        async fn complete(
            &self,
            _model: &str,
            _messages: &[Message],
        ) -> Result<String, ModelError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok("merged answer".to_string())
        }
    }

    fn aggregator() -> (Aggregator, Arc<CountingModel>) {
        let model = Arc::new(CountingModel {
            calls: AtomicUsize::new(0),
        });
        let backend = FailoverBackend::new(Arc::clone(&model) as Arc<dyn ChatModel>, "big", "small");
        (Aggregator::new(backend), model)
    }

    #[tokio::test]
    async fn single_topic_is_passed_through_unchanged() {
        let (aggregator, model) = aggregator();
        let result = DispatchResult::new(vec![TopicAnswer::success(
            TopicLabel::Benefits,
            "Payouts are tax free.",
        )]);

        let answer = aggregator.aggregate("Tax benefits?", &result).await;
        assert_eq!(answer, "Payouts are tax free.");
        assert_eq!(model.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn multiple_topics_trigger_one_merge() {
        let (aggregator, model) = aggregator();
        let result = DispatchResult::new(vec![
            TopicAnswer::success(TopicLabel::Benefits, "Payouts are tax free."),
            TopicAnswer::success(TopicLabel::Claims, "File within 30 days."),
        ]);

        let answer = aggregator.aggregate("Benefits and claims?", &result).await;
        assert_eq!(answer, "merged answer");
        assert_eq!(model.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn greeting_alone_is_passed_through() {
        let (aggregator, model) = aggregator();
        let result = DispatchResult::new(vec![TopicAnswer::success(
            TopicLabel::Greeting,
            "Hi! How can I help?",
        )]);

        let answer = aggregator.aggregate("Hello", &result).await;
        assert_eq!(answer, "Hi! How can I help?");
        assert_eq!(model.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn domain_answer_preferred_over_greeting() {
        let (aggregator, _) = aggregator();
        let result = DispatchResult::new(vec![
            TopicAnswer::success(TopicLabel::Greeting, "Hi!"),
            TopicAnswer::success(TopicLabel::Claims, "File within 30 days."),
        ]);

        let answer = aggregator.aggregate("Hi, how do I claim?", &result).await;
        assert_eq!(answer, "File within 30 days.");
    }

    #[tokio::test]
    async fn error_entries_merge_as_ordinary_text() {
        let (aggregator, model) = aggregator();
        let result = DispatchResult::new(vec![
            TopicAnswer::failure(TopicLabel::Benefits, "boom"),
            TopicAnswer::failure(TopicLabel::Claims, "bust"),
        ]);

        let answer = aggregator.aggregate("Benefits and claims?", &result).await;
        assert_eq!(answer, "merged answer");
        assert_eq!(model.calls.load(Ordering::SeqCst), 1);
    }
}
