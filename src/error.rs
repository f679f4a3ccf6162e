use thiserror::Error;

/// Crate error type. Action handlers surface one of these as a single
/// user-facing alert; nothing is retried and nothing is written on failure.
#[derive(Error, Debug)]
pub enum ProofError {
    #[error("No API key configured. Set your API key first.")]
    MissingApiKey,

    #[error("Nothing to check: select a cell with text first.")]
    EmptySelection,

    #[error("API request failed ({status}): {body}")]
    Api { status: u16, body: String },

    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Could not interpret the model reply: {0}")]
    Parse(String),

    #[error("Settings storage error: {0}")]
    Storage(String),
}

pub type Result<T> = std::result::Result<T, ProofError>;
