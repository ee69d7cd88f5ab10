//! Entry generation — turns one chunk of words into validated dictionary entries.
//!
//! Flow: build messages → chat completion → strip fences → parse JSON →
//!       validate each item as a `DictionaryEntry` → coverage check (warn only).
//!
//! Not idempotent: the same chunk can yield different entries on every call.

use std::collections::HashSet;
use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, warn};

use crate::errors::GenerationError;
use crate::generation::prompts::{entry_instruction, words_prompt};
use crate::llm_client::{strip_json_fences, ChatCompletion, ChatMessage, Role};
use crate::models::ValidatedEntry;

/// Generates dictionary entries through a `ChatCompletion` backend.
#[derive(Clone)]
pub struct EntryGenerator {
    llm: Arc<dyn ChatCompletion>,
    model: String,
    instruction: String,
}

impl EntryGenerator {
    pub fn new(llm: Arc<dyn ChatCompletion>, model: impl Into<String>) -> Self {
        Self {
            llm,
            model: model.into(),
            instruction: entry_instruction(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Requests entries for `words` and returns them in reply order.
    ///
    /// Fails with `Parse` when the reply is not JSON and with `Validation` when it
    /// is JSON but not an array of schema-conforming entries. Completion errors
    /// pass through unchanged.
    pub async fn generate(&self, words: &[String]) -> Result<Vec<ValidatedEntry>, GenerationError> {
        let user_prompt = words_prompt(words);
        let messages = [
            ChatMessage {
                role: Role::Developer,
                content: &self.instruction,
            },
            ChatMessage {
                role: Role::User,
                content: &user_prompt,
            },
        ];

        let reply = self.llm.complete(&self.model, &messages).await?;
        let entries = parse_entries(&reply)?;

        debug!("Model returned {} entries for {} words", entries.len(), words.len());
        warn_on_coverage_gaps(words, &entries);

        Ok(entries)
    }
}

/// Parses a raw model reply into validated entries, keeping each item's JSON as written.
pub fn parse_entries(reply: &str) -> Result<Vec<ValidatedEntry>, GenerationError> {
    let text = strip_json_fences(reply);

    let value: Value = serde_json::from_str(text).map_err(|source| GenerationError::Parse {
        source,
        raw: text.to_string(),
    })?;

    let Value::Array(items) = value else {
        return Err(GenerationError::Validation {
            index: 0,
            reason: "reply is not a JSON array".to_string(),
            raw: text.to_string(),
        });
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            ValidatedEntry::parse(item).map_err(|reason| GenerationError::Validation {
                index,
                reason,
                raw: text.to_string(),
            })
        })
        .collect()
}

fn warn_on_coverage_gaps(words: &[String], entries: &[ValidatedEntry]) {
    let requested: HashSet<String> = words.iter().map(|w| w.to_lowercase()).collect();
    let returned: HashSet<String> = entries
        .iter()
        .map(|e| e.entry().word.to_lowercase())
        .collect();

    let mut missing: Vec<&String> = requested.difference(&returned).collect();
    if !missing.is_empty() {
        missing.sort();
        warn!("Model returned no entry for {:?}", missing);
    }

    let mut unexpected: Vec<&String> = returned.difference(&requested).collect();
    if !unexpected.is_empty() {
        unexpected.sort();
        warn!("Model returned entries for unrequested words {:?}", unexpected);
    }
}
