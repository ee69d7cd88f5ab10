//! Word source: the list of candidate words, loaded once at startup.
//!
//! `.json` files hold an array of strings (`null` members are dropped).
//! Anything else is plain text, one word per line; blank lines and `#` comments are skipped.

use std::fs;
use std::path::Path;

use crate::errors::WordSourceError;

pub fn load_words(path: &Path) -> Result<Vec<String>, WordSourceError> {
    let text = fs::read_to_string(path).map_err(|source| WordSourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        parse_json_words(&text).map_err(|source| WordSourceError::Parse {
            path: path.to_path_buf(),
            source,
        })
    } else {
        Ok(parse_text_words(&text))
    }
}

fn parse_json_words(text: &str) -> Result<Vec<String>, serde_json::Error> {
    let words: Vec<Option<String>> = serde_json::from_str(text)?;
    Ok(words.into_iter().flatten().collect())
}

fn parse_text_words(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_owned)
        .collect()
}
