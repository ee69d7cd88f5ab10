use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One dictionary entry as produced by the model.
///
/// Field order matches the schema given to the model; absent optional fields are
/// omitted on output. Unknown fields are rejected at parse time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DictionaryEntry {
    pub word: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub persian_translations: Option<Vec<Translation>>,
    pub simple_form: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,
    #[serde(rename = "type")]
    pub word_type: WordType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other_forms: Option<Vec<OtherForm>>,
    /// Grammatical forms keyed by an alphabetic tag, e.g. `"plural"` or `"pastTense"`.
    /// Kept as a JSON map so the model's key order survives.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forms: Option<Map<String, Value>>,
    pub pronunciation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub synonyms: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub antonyms: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub examples: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub learning_notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collocations: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_family: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub register: Option<Register>,
    /// Tone of the word.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_meaning: Option<Tone>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Translation {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transliteration: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OtherForm {
    pub form: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pos: Option<String>,
}

/// Part of speech: a single tag or several.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WordType {
    Single(String),
    Multiple(Vec<String>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Register {
    #[serde(rename = "More formal")]
    MoreFormal,
    #[serde(rename = "Neutral/all situations")]
    Neutral,
    #[serde(rename = "Less formal")]
    LessFormal,
    Slang,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tone {
    Positive,
    Neutral,
    Negative,
}

impl DictionaryEntry {
    /// Checks the constraints serde cannot express. Returns the first violation.
    pub fn validate(&self) -> Result<(), String> {
        if self.word.trim().is_empty() {
            return Err("`word` must not be empty".to_string());
        }
        if let Some(forms) = &self.forms {
            for (key, values) in forms {
                if key.is_empty() || !key.chars().all(|c| c.is_ascii_alphabetic()) {
                    return Err(format!("`forms` key '{key}' must contain only letters A-Z/a-z"));
                }
                let all_strings = values
                    .as_array()
                    .is_some_and(|items| items.iter().all(Value::is_string));
                if !all_strings {
                    return Err(format!("`forms.{key}` must be an array of strings"));
                }
            }
        }
        Ok(())
    }
}

/// A model reply item that passed validation.
///
/// The JSON is stored exactly as the model wrote it, so key order in the
/// dictionary file follows the reply rather than the struct layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedEntry {
    entry: DictionaryEntry,
    raw: Value,
}

impl ValidatedEntry {
    pub fn parse(raw: Value) -> Result<Self, String> {
        let entry: DictionaryEntry =
            serde_json::from_value(raw.clone()).map_err(|e| e.to_string())?;
        entry.validate()?;
        Ok(Self { entry, raw })
    }

    pub fn entry(&self) -> &DictionaryEntry {
        &self.entry
    }

    pub fn as_value(&self) -> &Value {
        &self.raw
    }
}
