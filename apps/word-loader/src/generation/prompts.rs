// Prompt constants for dictionary entry generation.
// Output-format fragments come from llm_client::prompts.

use crate::llm_client::prompts::{JSON_ARRAY_ONLY, SCHEMA_STRICTNESS};

const PREAMBLE: &str = "You are an advanced linguistic assistant. For each word in the upcoming \
list, generate a comprehensive dictionary entry strictly following the JSON schema below.";

const ACCURACY: &str =
    "Ensure accurate contextual translations, definitions, and examples.";

/// JSON Schema of the reply. Must stay in sync with `models::entry::DictionaryEntry`.
pub const ENTRY_SCHEMA: &str = r#"{
  "$schema": "http://json-schema.org/draft-07/schema#",
  "title": "Dictionary",
  "type": "array",
  "items": {
    "type": "object",
    "properties": {
      "word": { "type": "string" },
      "persian_translations": {
        "type": "array",
        "items": {
          "type": "object",
          "properties": {
            "text": { "type": "string" },
            "transliteration": { "type": "string" }
          },
          "required": ["text"]
        }
      },
      "simple_form": { "type": "string" },
      "definition": { "type": "string" },
      "type": {
        "oneOf": [
          { "type": "string" },
          { "type": "array", "items": { "type": "string" } }
        ]
      },
      "other_forms": {
        "type": "array",
        "items": {
          "type": "object",
          "properties": {
            "form": { "type": "string" },
            "pos": { "type": "string" }
          },
          "required": ["form"]
        }
      },
      "forms": {
        "type": "object",
        "patternProperties": {
          "^[A-Za-z]+$": {
            "type": "array",
            "items": { "type": "string" }
          }
        },
        "additionalProperties": false
      },
      "pronunciation": { "type": "string" },
      "synonyms": { "type": "array", "items": { "type": "string" } },
      "antonyms": { "type": "array", "items": { "type": "string" } },
      "examples": { "type": "array", "items": { "type": "string" } },
      "learning_notes": { "type": "string" },
      "collocations": { "type": "array", "items": { "type": "string" } },
      "word_family": { "type": "array", "items": { "type": "string" } },
      "register": {
        "enum": ["More formal", "Neutral/all situations", "Less formal", "Slang"]
      },
      "word_meaning": { "enum": ["Positive", "Neutral", "Negative"] }
    },
    "required": ["word", "simple_form", "type", "pronunciation"],
    "additionalProperties": false
  }
}"#;

const REQUIREMENTS: &str = r#"Requirements:
Translations, collocations, and examples must match meaning and usage context.

Use natural, varied sentences for examples.

Minimums (where applicable):

Synonyms/antonyms: 5 each, if available

Collocations: 5 or more

Register: Choose from "More formal", "Neutral/all situations", "Less formal", or "Slang".

Word tone (word_meaning): Choose from "Positive", "Neutral", or "Negative"."#;

/// Full instruction message sent with every chunk.
pub fn entry_instruction() -> String {
    format!(
        "{PREAMBLE}\n\n{JSON_ARRAY_ONLY}\n\n{ACCURACY}\n\nSchema:\n{ENTRY_SCHEMA}\n\n{REQUIREMENTS}\n\n{SCHEMA_STRICTNESS}\n"
    )
}

/// User message listing the chunk's words, one `- word` line each.
pub fn words_prompt(words: &[String]) -> String {
    let list = words
        .iter()
        .map(|w| format!("- {w}"))
        .collect::<Vec<_>>()
        .join("\n");
    format!("List of words:\n{list}\n\nReturn only the JSON array.")
}
