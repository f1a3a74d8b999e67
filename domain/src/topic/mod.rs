//! Topic label value object and classifier-output parsing

pub mod parsing;

use crate::core::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The fixed set of topics a query can be routed to (Value Object)
///
/// Conversational labels (`Greeting`, `Unrelated`) are handled without a
/// reference corpus; domain labels are each backed by one corpus file.
/// The set is closed on purpose: dispatch is matched exhaustively, so a
/// new topic cannot be added without the compiler pointing at every
/// place that must handle it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TopicLabel {
    Greeting,
    Unrelated,
    PolicyTypes,
    Benefits,
    Eligibility,
    Claims,
}

impl TopicLabel {
    /// Get the string identifier for this label
    pub fn as_str(&self) -> &'static str {
        match self {
            TopicLabel::Greeting => "greeting",
            TopicLabel::Unrelated => "unrelated",
            TopicLabel::PolicyTypes => "policy_types",
            TopicLabel::Benefits => "benefits",
            TopicLabel::Eligibility => "eligibility",
            TopicLabel::Claims => "claims",
        }
    }

    /// All recognized labels, conversational and domain
    pub fn all() -> [TopicLabel; 6] {
        [
            TopicLabel::Greeting,
            TopicLabel::Unrelated,
            TopicLabel::PolicyTypes,
            TopicLabel::Benefits,
            TopicLabel::Eligibility,
            TopicLabel::Claims,
        ]
    }

    /// The labels backed by a reference corpus
    pub fn domain_labels() -> [TopicLabel; 4] {
        [
            TopicLabel::PolicyTypes,
            TopicLabel::Benefits,
            TopicLabel::Eligibility,
            TopicLabel::Claims,
        ]
    }

    /// Check if this label is backed by a reference corpus
    pub fn is_domain(&self) -> bool {
        !matches!(self, TopicLabel::Greeting | TopicLabel::Unrelated)
    }
}

impl std::fmt::Display for TopicLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TopicLabel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "greeting" => Ok(TopicLabel::Greeting),
            "unrelated" => Ok(TopicLabel::Unrelated),
            "policy_types" => Ok(TopicLabel::PolicyTypes),
            "benefits" => Ok(TopicLabel::Benefits),
            "eligibility" => Ok(TopicLabel::Eligibility),
            "claims" => Ok(TopicLabel::Claims),
            other => Err(DomainError::UnknownLabel(other.to_string())),
        }
    }
}

impl Serialize for TopicLabel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TopicLabel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_roundtrip() {
        for label in TopicLabel::all() {
            let s = label.to_string();
            let parsed: TopicLabel = s.parse().unwrap();
            assert_eq!(label, parsed);
        }
    }

    #[test]
    fn test_unknown_label_rejected() {
        let result: Result<TopicLabel, _> = "weather".parse();
        assert!(result.is_err());
    }

    #[test]
    fn test_domain_partition() {
        assert!(TopicLabel::Claims.is_domain());
        assert!(TopicLabel::Benefits.is_domain());
        assert!(!TopicLabel::Greeting.is_domain());
        assert!(!TopicLabel::Unrelated.is_domain());
        assert_eq!(TopicLabel::domain_labels().len(), 4);
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&TopicLabel::PolicyTypes).unwrap();
        assert_eq!(json, "\"policy_types\"");
        let back: TopicLabel = serde_json::from_str(&json).unwrap();
        assert_eq!(back, TopicLabel::PolicyTypes);
    }
}
