use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{bail, Context, Result};

use crate::driver::RetryPolicy;

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "o4-mini";

/// Loader configuration read from the environment (and `.env`, if present).
/// Built once in `main` and passed by reference; nothing else reads env vars.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub model: String,
    pub words_path: PathBuf,
    pub dict_path: PathBuf,
    pub chunk_size: NonZeroUsize,
    pub retry: RetryPolicy,
    pub request_timeout: Duration,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let chunk_size: usize = parse_or(&lookup, "CHUNK_SIZE", 5)?;
        let Some(chunk_size) = NonZeroUsize::new(chunk_size) else {
            bail!("CHUNK_SIZE must be at least 1");
        };

        let max_attempts: u32 = parse_or(&lookup, "MAX_CHUNK_ATTEMPTS", 5)?;
        let base_delay_ms: u64 = parse_or(&lookup, "RETRY_BASE_DELAY_MS", 1000)?;
        let max_delay_ms: u64 = parse_or(&lookup, "RETRY_MAX_DELAY_MS", 30_000)?;

        Ok(Config {
            openai_api_key: lookup("OPENAI_API_KEY").with_context(|| {
                "Required environment variable 'OPENAI_API_KEY' is not set".to_string()
            })?,
            openai_base_url: lookup("OPENAI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            model: lookup("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            words_path: lookup("WORDS_PATH")
                .unwrap_or_else(|| "words.txt".to_string())
                .into(),
            dict_path: lookup("DICT_PATH")
                .unwrap_or_else(|| "dict.json".to_string())
                .into(),
            chunk_size,
            retry: RetryPolicy {
                max_attempts: (max_attempts > 0).then_some(max_attempts),
                base_delay: Duration::from_millis(base_delay_ms),
                max_delay: Duration::from_millis(max_delay_ms),
            },
            request_timeout: Duration::from_secs(parse_or(&lookup, "REQUEST_TIMEOUT_SECS", 600)?),
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        None => Ok(default),
    }
}
