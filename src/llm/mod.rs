pub mod client;
pub mod prompt;
pub mod types;

pub use client::OpenAiClient;
pub use prompt::{grammar_messages, typo_messages};
pub use types::{ChatMessage, CompletionApi, Role};
