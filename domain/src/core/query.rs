//! Query value object

use serde::{Deserialize, Serialize};

/// A user query to be answered (Value Object)
///
/// The raw text is used verbatim as the cache key, so it is stored
/// trimmed but otherwise untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    content: String,
}

impl Query {
    /// Try to create a new query, returning None if empty or whitespace
    pub fn try_new(content: impl Into<String>) -> Option<Self> {
        let content = content.into().trim().to_string();
        if content.is_empty() {
            None
        } else {
            Some(Self { content })
        }
    }

    /// Get the query content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Consume and return the inner content
    pub fn into_content(self) -> String {
        self.content
    }
}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_creation() {
        let q = Query::try_new("What riders can I add?").unwrap();
        assert_eq!(q.content(), "What riders can I add?");
    }

    #[test]
    fn test_query_trims_whitespace() {
        let q = Query::try_new("  Hello  ").unwrap();
        assert_eq!(q.content(), "Hello");
    }

    #[test]
    fn test_try_new_empty() {
        assert!(Query::try_new("").is_none());
        assert!(Query::try_new("   ").is_none());
    }
}
