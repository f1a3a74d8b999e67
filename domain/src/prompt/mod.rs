//! Prompt construction for each pipeline stage

mod template;

pub use template::{APOLOGY, PromptTemplate, UNRELATED_REPLY};
