use std::path::PathBuf;

use thiserror::Error;

use crate::llm_client::LlmError;

/// Failure of one generation call for a chunk.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error(transparent)]
    Completion(#[from] LlmError),

    #[error("Failed to parse JSON response: {source}\n\nRaw response:\n{raw}")]
    Parse {
        source: serde_json::Error,
        raw: String,
    },

    #[error("Invalid entry at index {index}: {reason}\n\nRaw response:\n{raw}")]
    Validation {
        index: usize,
        reason: String,
        raw: String,
    },
}

/// Filesystem or serialization failure while reading or writing the dictionary file.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to serialize dictionary: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum WordSourceError {
    #[error("Failed to read word list {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Word list {} is not a JSON array of strings: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Anything that can go wrong while processing a single chunk.
#[derive(Debug, Error)]
pub enum ChunkError {
    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Terminal failures of the driver loop.
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("Chunk {} {words:?} failed after {attempts} attempts: {last_error}", .chunk_index + 1)]
    RetriesExhausted {
        chunk_index: usize,
        words: Vec<String>,
        attempts: u32,
        last_error: ChunkError,
    },

    #[error("Failed to load dictionary: {0}")]
    Store(#[from] StoreError),
}
