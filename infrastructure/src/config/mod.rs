//! Process configuration

mod file_config;
mod loader;

pub use file_config::{FileConfig, LimitsConfig, ModelsConfig, PathsConfig, ServerConfig};
pub use loader::ConfigLoader;
