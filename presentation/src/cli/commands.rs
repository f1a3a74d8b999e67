//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for coverquery
#[derive(Parser, Debug)]
#[command(name = "coverquery")]
#[command(author, version, about = "Life insurance support assistant - topic-routed Q&A")]
#[command(long_about = r#"
Coverquery answers life-insurance questions from a static reference corpus.

Each query is classified into topic categories, answered by one responder
per category running concurrently, and merged into a single reply when
several categories apply. Answers are cached, so repeating a query is free.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./coverquery.toml   Project-level config
3. ~/.config/coverquery/config.toml   Global config

Example:
  coverquery "What are the tax benefits and how do I file a claim?"
  coverquery --chat
  coverquery --serve
"#)]
pub struct Cli {
    /// One-shot question to answer (not required with --chat or --serve)
    pub query: Option<String>,

    /// Start interactive chat mode
    #[arg(short, long)]
    pub chat: bool,

    /// Start the HTTP front end
    #[arg(short, long)]
    pub serve: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,
}
