//! LLM Client — the single point of entry for all chat completion calls.
//!
//! No other module talks to the completion API directly. Callers go through
//! the `ChatCompletion` trait so the driver can be exercised without a network.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

#[cfg(test)]
pub mod fake;
pub mod prompts;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// Role tag of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Instruction role used by the reasoning models (successor of `system`).
    Developer,
    User,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage<'a> {
    pub role: Role,
    pub content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage<'a>],
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<Choice>,
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
pub struct ResponseMessage {
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
}

impl ChatResponse {
    /// Content of the first choice, if the model produced any.
    pub fn text(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.message.content.as_deref())
    }
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// A chat-style completion backend: ordered role-tagged messages in, reply text out.
#[async_trait]
pub trait ChatCompletion: Send + Sync {
    async fn complete(&self, model: &str, messages: &[ChatMessage<'_>]) -> Result<String, LlmError>;
}

/// HTTP client for an OpenAI-compatible `/chat/completions` endpoint.
///
/// Makes exactly one request per call; retry policy belongs to the driver.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
    endpoint: String,
}

impl LlmClient {
    pub fn new(api_key: String, base_url: &str, timeout: Duration) -> Result<Self> {
        Ok(Self {
            client: Client::builder()
                .timeout(timeout)
                .build()
                .context("Failed to build HTTP client")?,
            api_key,
            endpoint: format!("{base_url}/chat/completions"),
        })
    }

    /// Makes a raw call to the completion API, returning the full response object.
    pub async fn call(
        &self,
        model: &str,
        messages: &[ChatMessage<'_>],
    ) -> Result<ChatResponse, LlmError> {
        let request_body = ChatRequest { model, messages };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorEnvelope>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let chat_response: ChatResponse = response.json().await?;

        if let Some(usage) = &chat_response.usage {
            debug!(
                "LLM call succeeded: prompt_tokens={}, completion_tokens={}",
                usage.prompt_tokens, usage.completion_tokens
            );
        }

        Ok(chat_response)
    }
}

#[async_trait]
impl ChatCompletion for LlmClient {
    async fn complete(&self, model: &str, messages: &[ChatMessage<'_>]) -> Result<String, LlmError> {
        let response = self.call(model, messages).await?;
        response
            .text()
            .map(str::to_owned)
            .ok_or(LlmError::EmptyContent)
    }
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
pub fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_json_fences_with_json_tag() {
        let input = "```json\n[{\"word\": \"run\"}]\n```";
        assert_eq!(strip_json_fences(input), "[{\"word\": \"run\"}]");
    }

    #[test]
    fn test_strip_json_fences_without_tag() {
        let input = "```\n[]\n```";
        assert_eq!(strip_json_fences(input), "[]");
    }

    #[test]
    fn test_strip_json_fences_trims_plain_reply() {
        assert_eq!(strip_json_fences("  \n[1, 2]\n "), "[1, 2]");
    }

    #[test]
    fn test_request_serializes_roles_lowercase() {
        let messages = [
            ChatMessage {
                role: Role::Developer,
                content: "rules",
            },
            ChatMessage {
                role: Role::User,
                content: "words",
            },
        ];
        let body = serde_json::to_value(ChatRequest {
            model: "o4-mini",
            messages: &messages,
        })
        .unwrap();
        assert_eq!(body["model"], "o4-mini");
        assert_eq!(body["messages"][0]["role"], "developer");
        assert_eq!(body["messages"][1]["role"], "user");
        assert_eq!(body["messages"][1]["content"], "words");
    }

    #[test]
    fn test_response_text_takes_first_choice() {
        let response: ChatResponse = serde_json::from_str(
            r#"{
                "choices": [
                    {"message": {"role": "assistant", "content": "[]"}},
                    {"message": {"role": "assistant", "content": "ignored"}}
                ],
                "usage": {"prompt_tokens": 10, "completion_tokens": 2, "total_tokens": 12}
            }"#,
        )
        .unwrap();
        assert_eq!(response.text(), Some("[]"));
    }

    #[test]
    fn test_response_without_choices_has_no_text() {
        let response: ChatResponse = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        assert!(response.text().is_none());
    }
}
