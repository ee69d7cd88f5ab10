//! Dictionary file persistence.
//!
//! The file is a single pretty-printed JSON array. Every append re-reads the file,
//! extends the array and replaces the file through a temp file + rename, so a crash
//! mid-write leaves the previous version intact.
//!
//! A file that is not a JSON array is treated as empty. Its bytes are copied to a
//! timestamped `.corrupt-*` sibling before the next write replaces it; an existing
//! backup with identical bytes is reused.
//!
//! The replacement file takes over the permissions of the file it replaces.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde_json::Value;
use tempfile::NamedTempFile;
use tracing::{info, warn};

use crate::errors::StoreError;
use crate::models::ValidatedEntry;

/// What was found at the dictionary path.
#[derive(Debug)]
pub enum StoreContents {
    Missing,
    Records(Vec<Value>),
    Corrupt { bytes: Vec<u8>, reason: String },
}

impl StoreContents {
    /// Stored records; missing and corrupt files both read as empty.
    pub fn into_records(self) -> Vec<Value> {
        match self {
            StoreContents::Records(records) => records,
            StoreContents::Missing | StoreContents::Corrupt { .. } => Vec::new(),
        }
    }
}

/// Reads the dictionary file without modifying it.
/// Only I/O failures other than "not found" are errors.
pub fn read_store(path: &Path) -> Result<StoreContents, StoreError> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(StoreContents::Missing),
        Err(e) => return Err(io_error(path, e)),
    };

    match serde_json::from_slice::<Value>(&bytes) {
        Ok(Value::Array(records)) => Ok(StoreContents::Records(records)),
        Ok(other) => Ok(StoreContents::Corrupt {
            bytes,
            reason: format!("top-level value is {} rather than an array", json_kind(&other)),
        }),
        Err(e) => Ok(StoreContents::Corrupt {
            bytes,
            reason: e.to_string(),
        }),
    }
}

/// Appends `entries` to the dictionary at `path` and rewrites it in full.
/// Returns the number of entries appended.
pub fn append_entries(path: &Path, entries: &[ValidatedEntry]) -> Result<usize, StoreError> {
    let mut records = match read_store(path)? {
        StoreContents::Corrupt { bytes, reason } => {
            let backup = backup_corrupt(path, &bytes)?;
            warn!(
                "{} is not a valid JSON array ({reason}); starting fresh, previous content saved to {}",
                path.display(),
                backup.display()
            );
            Vec::new()
        }
        contents => contents.into_records(),
    };

    records.extend(entries.iter().map(|e| e.as_value().clone()));

    write_atomic(path, &records)?;

    info!("Appended {} entries to {}", entries.len(), path.display());
    Ok(entries.len())
}

fn write_atomic(path: &Path, records: &[Value]) -> Result<(), StoreError> {
    let body = serde_json::to_vec_pretty(records)?;

    let dir = parent_dir(path);

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| io_error(dir, e))?;
    tmp.write_all(&body).map_err(|e| io_error(tmp.path(), e))?;
    match fs::metadata(path) {
        Ok(existing) => tmp
            .as_file()
            .set_permissions(existing.permissions())
            .map_err(|e| io_error(tmp.path(), e))?,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(io_error(path, e)),
    }
    tmp.as_file()
        .sync_all()
        .map_err(|e| io_error(tmp.path(), e))?;
    tmp.persist(path).map_err(|e| io_error(path, e.error))?;
    Ok(())
}

fn backup_corrupt(path: &Path, bytes: &[u8]) -> Result<PathBuf, StoreError> {
    let prefix = format!(
        "{}.corrupt-",
        path.file_name().unwrap_or_default().to_string_lossy()
    );
    if let Some(existing) = find_backup(path, &prefix, bytes)? {
        return Ok(existing);
    }

    let mut name = prefix;
    name.push_str(&Utc::now().format("%Y%m%dT%H%M%S%.3fZ").to_string());
    let backup = path.with_file_name(name);
    fs::write(&backup, bytes).map_err(|e| io_error(&backup, e))?;
    Ok(backup)
}

/// A sibling backup already holding exactly `bytes`, left by an earlier failed attempt.
fn find_backup(path: &Path, prefix: &str, bytes: &[u8]) -> Result<Option<PathBuf>, StoreError> {
    let dir = parent_dir(path);
    let listing = match fs::read_dir(dir) {
        Ok(listing) => listing,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(io_error(dir, e)),
    };

    for item in listing {
        let candidate = item.map_err(|e| io_error(dir, e))?.path();
        let is_backup = candidate
            .file_name()
            .is_some_and(|n| n.to_string_lossy().starts_with(prefix));
        if is_backup && fs::read(&candidate).is_ok_and(|existing| existing == bytes) {
            return Ok(Some(candidate));
        }
    }
    Ok(None)
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

fn io_error(path: &Path, source: io::Error) -> StoreError {
    StoreError::Io {
        path: path.to_path_buf(),
        source,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
