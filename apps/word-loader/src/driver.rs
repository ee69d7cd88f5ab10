//! Driver loop — incremental processing of the word list.
//!
//! Flow: load store → collect processed words → filter → chunk →
//!       for each chunk: generate → append to store.
//!
//! A failed chunk (transport, parse, validation or filesystem error) is retried
//! in place with exponential backoff. When the retry policy runs out the loop
//! stops with `DriverError::RetriesExhausted`; chunks already appended stay on disk
//! and are skipped on the next run.

use std::time::Duration;

use tracing::{error, info, warn};

use crate::config::Config;
use crate::errors::{ChunkError, DriverError};
use crate::generation::{chunks, EntryGenerator};
use crate::store::{append_entries, filter_remaining, processed_words, read_store, StoreContents};

/// Per-chunk retry policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Attempts per chunk including the first; `None` retries forever.
    pub max_attempts: Option<u32>,
    pub base_delay: Duration,
    pub max_delay: Duration,
}

impl RetryPolicy {
    /// Whether another attempt may follow `attempts_made` failed ones.
    pub fn allows_retry(&self, attempts_made: u32) -> bool {
        self.max_attempts.map_or(true, |max| attempts_made < max)
    }

    /// Delay before the attempt following `attempts_made` failures.
    pub fn delay_for(&self, attempts_made: u32) -> Duration {
        // Exponential backoff: base, 2×base, 4×base, ... capped at max_delay
        let exponent = attempts_made.saturating_sub(1).min(31);
        self.base_delay
            .saturating_mul(1u32 << exponent)
            .min(self.max_delay)
    }
}

/// Counters reported when the loop reaches `Done`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub already_processed: usize,
    pub remaining_words: usize,
    pub chunks_processed: usize,
    pub entries_appended: usize,
    pub retries: u32,
}

/// Runs the loop to completion over `words`.
pub async fn run(
    config: &Config,
    words: &[String],
    generator: &EntryGenerator,
) -> Result<RunSummary, DriverError> {
    // Loading
    let contents = read_store(&config.dict_path)?;
    if let StoreContents::Corrupt { reason, .. } = &contents {
        warn!(
            "{} is not a valid JSON array ({reason}). Starting fresh.",
            config.dict_path.display()
        );
    }
    let processed = processed_words(&contents.into_records());
    info!("Loaded {} already processed words.", processed.len());

    // Filtering
    let remaining = filter_remaining(words, &processed);
    info!("Remaining words to process: {}", remaining.len());

    let chunk_list: Vec<&[String]> = chunks(&remaining, config.chunk_size).collect();
    let total = chunk_list.len();

    let mut summary = RunSummary {
        already_processed: processed.len(),
        remaining_words: remaining.len(),
        ..RunSummary::default()
    };

    // Processing
    for (index, chunk) in chunk_list.into_iter().enumerate() {
        let mut attempt: u32 = 1;
        loop {
            info!("Processing chunk {}/{}: {:?}", index + 1, total, chunk);

            match process_chunk(config, generator, chunk).await {
                Ok(appended) => {
                    summary.chunks_processed += 1;
                    summary.entries_appended += appended;
                    break;
                }
                Err(err) => {
                    error!(
                        "Error on chunk {}/{} (attempt {}): {}",
                        index + 1,
                        total,
                        attempt,
                        err
                    );

                    if !config.retry.allows_retry(attempt) {
                        return Err(DriverError::RetriesExhausted {
                            chunk_index: index,
                            words: chunk.to_vec(),
                            attempts: attempt,
                            last_error: err,
                        });
                    }

                    let delay = config.retry.delay_for(attempt);
                    info!("Retrying the same chunk in {}ms...", delay.as_millis());
                    if !delay.is_zero() {
                        tokio::time::sleep(delay).await;
                    }

                    attempt += 1;
                    summary.retries += 1;
                }
            }
        }
    }

    Ok(summary)
}

async fn process_chunk(
    config: &Config,
    generator: &EntryGenerator,
    chunk: &[String],
) -> Result<usize, ChunkError> {
    let entries = generator.generate(chunk).await?;
    Ok(append_entries(&config.dict_path, &entries)?)
}
