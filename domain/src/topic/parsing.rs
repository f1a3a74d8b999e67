//! Label-list parsing for classifier output.
//!
//! The classifier asks the chat backend to reply with a bare list such as
//! `["policy_types", "claims"]`, but the reply is untrusted free text: it
//! may be wrapped in prose or a code fence, use single quotes, or contain
//! labels outside the recognized set. These functions extract whatever
//! list is present and degrade to `unrelated` when nothing usable remains.
//! Pure domain logic, no I/O.

use super::TopicLabel;

/// Parse a classifier reply into a non-empty, deduplicated label list.
///
/// Unknown labels are dropped. A reply with no bracketed list, an
/// unparsable list, or only unknown labels yields `[Unrelated]`, so the
/// result is always non-empty and classification never fails.
pub fn parse_label_list(response: &str) -> Vec<TopicLabel> {
    let labels = extract_list(response)
        .map(|tokens| {
            tokens
                .iter()
                .filter_map(|t| t.parse::<TopicLabel>().ok())
                .collect::<Vec<_>>()
        })
        .unwrap_or_default();

    let mut unique = Vec::new();
    for label in labels {
        if !unique.contains(&label) {
            unique.push(label);
        }
    }

    if unique.is_empty() {
        vec![TopicLabel::Unrelated]
    } else {
        unique
    }
}

/// Extract the string items of the first bracketed list in the response.
///
/// Tries strict JSON first, then a lenient comma-split of the bracket
/// interior for replies that use single quotes or no quotes at all.
fn extract_list(response: &str) -> Option<Vec<String>> {
    let start = response.find('[')?;
    let end = response[start..].find(']')? + start;
    let inner = &response[start..=end];

    if let Ok(items) = serde_json::from_str::<Vec<String>>(inner) {
        return Some(items);
    }

    let items: Vec<String> = inner[1..inner.len() - 1]
        .split(',')
        .map(|item| item.trim().trim_matches(['\'', '"']).to_string())
        .filter(|item| !item.is_empty())
        .collect();

    if items.is_empty() { None } else { Some(items) }
}
