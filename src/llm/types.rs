use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::settings::SecretString;

/// Role of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

/// A role-tagged message for the chat-completion endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(text: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: text.into(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: text.into(),
        }
    }
}

/// Chat-completion endpoint interface.
///
/// One synchronous (awaited) call per user action; no streaming, no retries.
/// Tests substitute canned replies.
#[async_trait]
pub trait CompletionApi: Send + Sync {
    /// Send `messages` and return the first completion's text verbatim.
    async fn complete(&self, api_key: &SecretString, messages: &[ChatMessage]) -> Result<String>;
}
