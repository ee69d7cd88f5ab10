use std::collections::HashSet;

use serde_json::Value;

/// Lowercased `word` of every stored record that has one.
/// Records without a string `word` field are ignored.
pub fn processed_words(records: &[Value]) -> HashSet<String> {
    records
        .iter()
        .filter_map(|r| r.get("word").and_then(|w| w.as_str()))
        .map(str::to_lowercase)
        .collect()
}

/// Words still to be generated, in source order.
///
/// Drops empty words and words already in `processed` (case-insensitive).
/// Repeats within `words` are kept; they are only checked against the store.
pub fn filter_remaining(words: &[String], processed: &HashSet<String>) -> Vec<String> {
    words
        .iter()
        .filter(|w| !w.is_empty() && !processed.contains(&w.to_lowercase()))
        .cloned()
        .collect()
}
