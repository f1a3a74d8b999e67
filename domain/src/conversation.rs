//! Bounded conversation history shared by topic responders

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Number of recent turns kept by default
pub const DEFAULT_HISTORY_DEPTH: usize = 5;

/// One completed exchange: the query and the answer it produced
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub query: String,
    pub answer: String,
}

impl ConversationTurn {
    pub fn new(query: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            answer: answer.into(),
        }
    }
}

/// Insertion-ordered record of the most recent turns (Entity)
///
/// Holds at most `depth` turns, oldest evicted first. Responders read it,
/// only the orchestration core appends to it, once per completed query.
#[derive(Debug, Clone)]
pub struct ConversationHistory {
    turns: VecDeque<ConversationTurn>,
    depth: usize,
}

impl ConversationHistory {
    pub fn new(depth: usize) -> Self {
        Self {
            turns: VecDeque::with_capacity(depth),
            depth,
        }
    }

    pub fn push(&mut self, turn: ConversationTurn) {
        if self.depth == 0 {
            return;
        }
        while self.turns.len() >= self.depth {
            self.turns.pop_front();
        }
        self.turns.push_back(turn);
    }

    pub fn turns(&self) -> impl Iterator<Item = &ConversationTurn> {
        self.turns.iter()
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Render the history as a `User:`/`Assistant:` transcript for
    /// inclusion in responder prompts.
    pub fn transcript(&self) -> String {
        self.turns
            .iter()
            .map(|t| format!("User: {}\nAssistant: {}", t.query, t.answer))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for ConversationHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_DEPTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oldest_turn_evicted_first() {
        let mut history = ConversationHistory::new(2);
        history.push(ConversationTurn::new("q1", "a1"));
        history.push(ConversationTurn::new("q2", "a2"));
        history.push(ConversationTurn::new("q3", "a3"));

        assert_eq!(history.len(), 2);
        let queries: Vec<_> = history.turns().map(|t| t.query.as_str()).collect();
        assert_eq!(queries, vec!["q2", "q3"]);
    }

    #[test]
    fn test_transcript_format() {
        let mut history = ConversationHistory::default();
        history.push(ConversationTurn::new("Hello", "Hi! How can I help?"));
        let transcript = history.transcript();
        assert_eq!(transcript, "User: Hello\nAssistant: Hi! How can I help?");
    }

    #[test]
    fn test_empty_transcript() {
        let history = ConversationHistory::default();
        assert!(history.transcript().is_empty());
        assert!(history.is_empty());
    }

    #[test]
    fn test_default_depth() {
        let mut history = ConversationHistory::default();
        for i in 0..10 {
            history.push(ConversationTurn::new(format!("q{i}"), "a"));
        }
        assert_eq!(history.len(), DEFAULT_HISTORY_DEPTH);
    }
}
