use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use super::types::{ChatMessage, CompletionApi};
use crate::error::{ProofError, Result};
use crate::settings::SecretString;

const DEFAULT_API_URL: &str = "https://api.openai.com/v1/chat/completions";
const MODEL: &str = "gpt-4o-mini";
const TEMPERATURE: f64 = 0.3;
const MAX_TOKENS: u32 = 1000;

/// The transport default is effectively unbounded; proofreading calls that
/// take longer than this have failed.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Chat-completion client (OpenAI-compatible API).
pub struct OpenAiClient {
    http_client: Client,
    api_url: String,
}

impl OpenAiClient {
    pub fn new() -> Self {
        Self::with_api_url(DEFAULT_API_URL)
    }

    /// Point the client at a different endpoint (tests, compatible proxies).
    pub fn with_api_url(api_url: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            api_url: api_url.into(),
        }
    }
}

impl Default for OpenAiClient {
    fn default() -> Self {
        Self::new()
    }
}

fn build_request_body(messages: &[ChatMessage]) -> serde_json::Value {
    json!({
        "model": MODEL,
        "messages": messages,
        "temperature": TEMPERATURE,
        "max_tokens": MAX_TOKENS,
    })
}

#[async_trait]
impl CompletionApi for OpenAiClient {
    async fn complete(&self, api_key: &SecretString, messages: &[ChatMessage]) -> Result<String> {
        let body = build_request_body(messages);
        tracing::debug!(message_count = messages.len(), "Dispatching chat completion");

        let response = self
            .http_client
            .post(&self.api_url)
            .timeout(REQUEST_TIMEOUT)
            .header("Authorization", format!("Bearer {}", api_key.expose()))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status().as_u16();
        if status != 200 {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status, "Chat completion request failed");
            return Err(ProofError::Api { status, body });
        }

        let reply: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| ProofError::Parse(e.to_string()))?;

        reply
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| ProofError::Parse("completion reply contained no text".to_string()))
    }
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize, Default)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize, Default)]
struct ChatChoiceMessage {
    content: Option<String>,
}
