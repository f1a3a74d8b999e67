//! Prompt templates for the classify / respond / merge flow

use crate::topic::TopicLabel;

/// Fixed apology returned when both backends fail
pub const APOLOGY: &str =
    "Sorry, I am unable to process your request at the moment. Please try again later.";

/// Canned reply for queries outside the supported domain
pub const UNRELATED_REPLY: &str = "Sorry, I can only answer questions about life insurance \
policies, benefits, eligibility, and claims.";

/// Templates for generating prompts at each stage
pub struct PromptTemplate;

impl PromptTemplate {
    /// System prompt for the classification stage
    pub fn classify_system() -> &'static str {
        r#"You are a life insurance query classifier.
- If the query is about insurance, return the relevant categories.
- If it is a greeting or small talk, include "greeting".
- If it is unrelated to insurance, include "unrelated".
Return ONLY a JSON list of category names. Example: ["policy_types", "claims"]"#
    }

    /// User prompt for the classification stage
    pub fn classify_prompt(query: &str, descriptor_context: &str) -> String {
        format!("Query: {query}\nContext: {descriptor_context}")
    }

    /// System prompt for greetings and small talk
    pub fn greeting_system() -> &'static str {
        "You are a friendly life insurance assistant. Respond politely to greetings \
or small talk about insurance."
    }

    /// System prompt for a topic responder, binding it to one corpus
    pub fn responder_system(label: TopicLabel) -> String {
        format!("You answer strictly using the {label} reference material provided.")
    }

    /// User prompt for a topic responder: reference block, transcript of
    /// recent turns, then the query.
    pub fn responder_prompt(reference: &str, transcript: &str, query: &str) -> String {
        format!("Content:\n{reference}\n\nHistory:\n{transcript}\nQuery:\n{query}")
    }

    /// System prompt for merging multiple topic answers
    pub fn merge_system() -> &'static str {
        "Combine and refine these category answers into one clean, coherent response."
    }

    /// User prompt for the merge stage
    pub fn merge_prompt(query: &str, sections: &[(TopicLabel, String)]) -> String {
        let combined = sections
            .iter()
            .map(|(label, text)| format!("{label}: {text}"))
            .collect::<Vec<_>>()
            .join("\n");
        format!("Query: {query}\nAnswers:\n{combined}")
    }
}
