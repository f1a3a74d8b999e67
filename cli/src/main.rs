//! CLI entrypoint for coverquery
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use coverquery_application::{
    AnswerQueryUseCase, CacheStore, ChatModel, FailoverBackend, SessionState,
};
use coverquery_domain::{ConversationHistory, Query, ResponseCache};
use coverquery_infrastructure::{ConfigLoader, CorpusLoader, JsonCacheStore, OpenAiChatModel};
use coverquery_presentation::{ChatRepl, Cli, serve};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("Starting coverquery");

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("Failed to load configuration")?
    };

    let api_key = std::env::var(&config.models.api_key_env).with_context(|| {
        format!(
            "{} must be set in the environment",
            config.models.api_key_env
        )
    })?;

    // === Dependency Injection ===
    let knowledge = Arc::new(CorpusLoader::load(&config.paths.corpus_dir));

    let gateway: Arc<dyn ChatModel> = Arc::new(OpenAiChatModel::new(
        &config.models.base_url,
        api_key,
        config.models.temperature,
    )?);

    let backend = FailoverBackend::new(gateway, &config.models.primary, &config.models.fallback);

    let store: Arc<dyn CacheStore> = Arc::new(JsonCacheStore::new(&config.paths.cache_file));

    let cache = match store.load(config.limits.cache_capacity) {
        Ok(cache) => {
            info!("Loaded {} cached answers", cache.len());
            cache
        }
        Err(e) => {
            warn!("Failed to load persisted cache, starting empty: {e}");
            ResponseCache::new(config.limits.cache_capacity)
        }
    };

    let state = SessionState::new(cache, ConversationHistory::new(config.limits.history_depth));

    let use_case = Arc::new(AnswerQueryUseCase::new(backend, knowledge, store, state));

    // HTTP mode
    if cli.serve {
        serve(use_case, &config.server.bind).await?;
        return Ok(());
    }

    // Chat mode
    if cli.chat {
        let repl = ChatRepl::new(use_case);
        repl.run().await?;
        return Ok(());
    }

    // Single question mode - query is required
    let query = match cli.query.as_deref().and_then(Query::try_new) {
        Some(q) => q,
        None => bail!("A query is required. Use --chat for interactive mode or --serve for HTTP."),
    };

    let outcome = use_case.execute(&query).await;
    info!("Categories: {:?} (cached: {})", outcome.labels, outcome.cached);
    println!("{}", outcome.answer);

    Ok(())
}
