//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! Every field has a default, so a missing file or section still yields a
//! fully usable configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Primary/fallback model selection and backend endpoint
    pub models: ModelsConfig,
    /// Corpus and cache file locations
    pub paths: PathsConfig,
    /// History depth and cache capacity
    pub limits: LimitsConfig,
    /// HTTP front end settings
    pub server: ServerConfig,
}

/// `[models]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelsConfig {
    /// Model tried first for every completion
    pub primary: String,
    /// Smaller model used when the primary fails
    pub fallback: String,
    /// Base URL of the OpenAI-compatible completions endpoint
    pub base_url: String,
    /// Environment variable holding the API key
    pub api_key_env: String,
    /// Sampling temperature for all completions
    pub temperature: f32,
}

impl Default for ModelsConfig {
    fn default() -> Self {
        Self {
            primary: "llama-3.3-70b-versatile".to_string(),
            fallback: "llama-3.3-7b-instant".to_string(),
            base_url: "https://api.groq.com/openai/v1".to_string(),
            api_key_env: "GROQ_API_KEY".to_string(),
            temperature: 0.3,
        }
    }
}

/// `[paths]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Directory holding one corpus file per domain topic plus the
    /// topic descriptor file
    pub corpus_dir: PathBuf,
    /// Persisted response cache
    pub cache_file: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            corpus_dir: PathBuf::from("database/final"),
            cache_file: PathBuf::from("database/query_cache.json"),
        }
    }
}

/// `[limits]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Conversation turns kept for responder context
    pub history_depth: usize,
    /// Maximum cached answer entries
    pub cache_capacity: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            history_depth: coverquery_domain::DEFAULT_HISTORY_DEPTH,
            cache_capacity: coverquery_domain::DEFAULT_CACHE_CAPACITY,
        }
    }
}

/// `[server]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address for the HTTP front end
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:8000".to_string(),
        }
    }
}
