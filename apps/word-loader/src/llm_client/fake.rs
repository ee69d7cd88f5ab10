//! Scripted `ChatCompletion` used by unit tests in place of the HTTP client.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use super::{ChatCompletion, ChatMessage, LlmError, Role};

/// Replays queued replies in order and records every user message it receives.
/// Once the queue is empty, further calls fail with `EmptyContent`.
#[derive(Default)]
pub struct ScriptedCompletion {
    replies: Mutex<VecDeque<Result<String, LlmError>>>,
    requests: Mutex<Vec<String>>,
}

impl ScriptedCompletion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, text: impl Into<String>) -> Self {
        self.replies.lock().unwrap().push_back(Ok(text.into()));
        self
    }

    pub fn fail(self, err: LlmError) -> Self {
        self.replies.lock().unwrap().push_back(Err(err));
        self
    }

    /// User-message bodies of every call made so far.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatCompletion for ScriptedCompletion {
    async fn complete(&self, _model: &str, messages: &[ChatMessage<'_>]) -> Result<String, LlmError> {
        let user = messages
            .iter()
            .filter(|m| m.role == Role::User)
            .map(|m| m.content)
            .collect::<Vec<_>>()
            .join("\n");
        self.requests.lock().unwrap().push(user);

        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(LlmError::EmptyContent))
    }
}

/// A schema-valid JSON reply containing one minimal entry per word.
pub fn entries_reply(words: &[&str]) -> String {
    let entries: Vec<serde_json::Value> = words
        .iter()
        .map(|w| {
            serde_json::json!({
                "word": w,
                "simple_form": w,
                "type": "noun",
                "pronunciation": format!("/{w}/"),
            })
        })
        .collect();
    serde_json::to_string(&entries).unwrap()
}
