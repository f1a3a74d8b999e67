//! Dispatch result value objects - per-topic answers collected by fan-out.
//!
//! These types carry the outcome of one fan-out round:
//! - [`TopicAnswer`] - One responder's answer or error marker
//! - [`DispatchResult`] - The complete per-label outcome map

use crate::topic::TopicLabel;
use serde::{Deserialize, Serialize};

/// Answer (or error marker) produced for one dispatched topic label
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicAnswer {
    /// The topic this answer belongs to
    pub label: TopicLabel,
    /// The answer text, or for failures the diagnostic rendered as text
    pub content: String,
    /// Whether the responder completed normally
    pub success: bool,
    /// Diagnostic message if the responder failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TopicAnswer {
    /// Creates a successful answer for a topic.
    pub fn success(label: TopicLabel, content: impl Into<String>) -> Self {
        Self {
            label,
            content: content.into(),
            success: true,
            error: None,
        }
    }

    /// Creates an error-tagged entry for a topic whose responder failed.
    ///
    /// The content is the diagnostic rendered as ordinary text, so a
    /// failed topic can still flow through aggregation like any other.
    pub fn failure(label: TopicLabel, error: impl Into<String>) -> Self {
        let error = error.into();
        Self {
            label,
            content: format!("Error in {label} responder: {error}"),
            success: false,
            error: Some(error),
        }
    }
}

/// Complete outcome of one fan-out: exactly one entry per dispatched label
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DispatchResult {
    answers: Vec<TopicAnswer>,
}

impl DispatchResult {
    pub fn new(answers: Vec<TopicAnswer>) -> Self {
        Self { answers }
    }

    pub fn push(&mut self, answer: TopicAnswer) {
        self.answers.push(answer);
    }

    pub fn get(&self, label: TopicLabel) -> Option<&TopicAnswer> {
        self.answers.iter().find(|a| a.label == label)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TopicAnswer> {
        self.answers.iter()
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Entries for corpus-backed topics, the input to aggregation
    pub fn domain_answers(&self) -> impl Iterator<Item = &TopicAnswer> {
        self.answers.iter().filter(|a| a.label.is_domain())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_renders_error_as_content() {
        let answer = TopicAnswer::failure(TopicLabel::Claims, "corpus missing");
        assert!(!answer.success);
        assert_eq!(answer.content, "Error in claims responder: corpus missing");
        assert_eq!(answer.error.as_deref(), Some("corpus missing"));
    }

    #[test]
    fn test_domain_answers_excludes_conversational() {
        let result = DispatchResult::new(vec![
            TopicAnswer::success(TopicLabel::Greeting, "Hi!"),
            TopicAnswer::success(TopicLabel::Benefits, "Payout details."),
            TopicAnswer::failure(TopicLabel::Claims, "boom"),
        ]);
        let domain: Vec<_> = result.domain_answers().map(|a| a.label).collect();
        assert_eq!(domain, vec![TopicLabel::Benefits, TopicLabel::Claims]);
    }

    #[test]
    fn test_get_by_label() {
        let result = DispatchResult::new(vec![TopicAnswer::success(
            TopicLabel::Eligibility,
            "Age 18 to 65.",
        )]);
        assert!(result.get(TopicLabel::Eligibility).is_some());
        assert!(result.get(TopicLabel::Claims).is_none());
    }
}
