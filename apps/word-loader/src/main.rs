mod config;
mod driver;
mod errors;
mod generation;
mod llm_client;
mod models;
mod store;
mod words;

use std::sync::Arc;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::generation::EntryGenerator;
use crate::llm_client::LlmClient;
use crate::words::load_words;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("word_loader={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting word-loader v{}", env!("CARGO_PKG_VERSION"));

    let words = load_words(&config.words_path)?;
    info!(
        "Loaded {} candidate words from {}",
        words.len(),
        config.words_path.display()
    );

    let llm = LlmClient::new(
        config.openai_api_key.clone(),
        &config.openai_base_url,
        config.request_timeout,
    )?;
    let generator = EntryGenerator::new(Arc::new(llm), config.model.clone());
    info!("LLM client initialized (model: {})", generator.model());

    let summary = driver::run(&config, &words, &generator).await?;

    info!(
        "Done: {} words already processed, {} remaining, {} chunks processed, {} entries appended to {} ({} retries)",
        summary.already_processed,
        summary.remaining_words,
        summary.chunks_processed,
        summary.entries_appended,
        config.dict_path.display(),
        summary.retries
    );

    Ok(())
}
