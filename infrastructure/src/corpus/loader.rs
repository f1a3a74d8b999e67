//! Loads the per-topic reference corpora and topic descriptors
//!
//! On-disk layout, one file per domain topic plus one descriptor file:
//!
//! ```text
//! <corpus_dir>/
//!   category_classification.json
//!   policy_types/policy_types_data.json
//!   benefits/benefits_data.json
//!   eligibility/eligibility_data.json
//!   claims/claims_data.json
//! ```
//!
//! A missing or malformed file is logged and loaded as empty; corpus
//! problems never fail process start.

use coverquery_domain::{CorpusEntry, KnowledgeBase, TopicDescriptor, TopicLabel};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use thiserror::Error;
use tracing::{info, warn};

/// Errors reading a single corpus or descriptor file
#[derive(Error, Debug)]
pub enum CorpusLoadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Loads the knowledge base from a corpus directory
pub struct CorpusLoader;

impl CorpusLoader {
    /// Load every domain topic's corpus plus the descriptor file
    pub fn load(corpus_dir: &Path) -> KnowledgeBase {
        let mut corpora = HashMap::new();

        for label in TopicLabel::domain_labels() {
            let path = corpus_dir
                .join(label.as_str())
                .join(format!("{}_data.json", label.as_str()));

            let entries = match Self::read_entries(&path) {
                Ok(entries) => {
                    info!("Loaded {} corpus entries for {label}", entries.len());
                    entries
                }
                Err(e) => {
                    warn!("Failed to load corpus for {label} from {}: {e}", path.display());
                    Vec::new()
                }
            };

            Self::warn_on_duplicate_ids(label, &entries);
            corpora.insert(label, entries);
        }

        let descriptor_path = corpus_dir.join("category_classification.json");
        let descriptors = match Self::read_descriptors(&descriptor_path) {
            Ok(descriptors) => descriptors,
            Err(e) => {
                warn!(
                    "Failed to load topic descriptors from {}: {e}",
                    descriptor_path.display()
                );
                Vec::new()
            }
        };

        KnowledgeBase::new(corpora, descriptors)
    }

    fn read_entries(path: &Path) -> Result<Vec<CorpusEntry>, CorpusLoadError> {
        let data = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    fn read_descriptors(path: &Path) -> Result<Vec<TopicDescriptor>, CorpusLoadError> {
        let data = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    fn warn_on_duplicate_ids(label: TopicLabel, entries: &[CorpusEntry]) {
        let mut seen = HashSet::new();
        for entry in entries {
            if !seen.insert(entry.id.as_str()) {
                warn!("Duplicate corpus id '{}' in {label}", entry.id);
            }
        }
    }
}
