//! Corpus loading

mod loader;

pub use loader::{CorpusLoadError, CorpusLoader};
