//! Domain layer for coverquery
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Topic routing
//!
//! Every query is classified into a fixed set of [`TopicLabel`]s. Domain
//! labels (policy types, benefits, eligibility, claims) are backed by a
//! static reference corpus; conversational labels (greeting, unrelated)
//! are handled without one.
//!
//! ## Fan-out / fan-in
//!
//! A query may touch several topics at once. The answers collected from
//! each topic responder form a [`DispatchResult`], which is merged into a
//! single reply only when more than one domain topic applies.

pub mod cache;
pub mod chat;
pub mod conversation;
pub mod core;
pub mod corpus;
pub mod dispatch;
pub mod prompt;
pub mod topic;

// Re-export commonly used types
pub use cache::{DEFAULT_CACHE_CAPACITY, LABEL_KEY_SUFFIX, ResponseCache};
pub use chat::{Message, Role};
pub use conversation::{ConversationHistory, ConversationTurn, DEFAULT_HISTORY_DEPTH};
pub use self::core::{error::DomainError, query::Query};
pub use corpus::{CorpusEntry, KnowledgeBase, TopicDescriptor};
pub use dispatch::{DispatchResult, TopicAnswer};
pub use prompt::{APOLOGY, PromptTemplate, UNRELATED_REPLY};
pub use topic::{TopicLabel, parsing::parse_label_list};
