//! Proofreading core for a spreadsheet add-on.
//!
//! Sends selected cell text to a chat-completion API to detect misspellings
//! or improve grammar, interprets the loosely structured reply, drives the
//! accept/reject review of suggestions, maintains a per-user custom
//! dictionary and language preference, and writes accepted corrections back
//! to the originating cell.
//!
//! The host spreadsheet UI is a collaborator, not part of this crate. Hosts
//! plug in at three seams: [`settings::PropertyStore`] for per-user
//! persistence, [`llm::CompletionApi`] for the outbound API call, and
//! [`host::CellWriter`] for write-back.

pub mod actions;
pub mod error;
pub mod host;
pub mod interpret;
pub mod llm;
pub mod review;
pub mod session;
pub mod settings;

pub use actions::{apply_correction, check_typos, improve_grammar, TypoCheck};
pub use error::{ProofError, Result};
pub use host::{CellWriter, MemoryWorkbook};
pub use interpret::TypoSuggestion;
pub use llm::{ChatMessage, CompletionApi, OpenAiClient, Role};
pub use review::{GrammarReview, TypoReview};
pub use session::{PendingEditTarget, ProofSession};
pub use settings::{
    DictionaryManager, FilePropertyStore, Language, MemoryPropertyStore, PropertyStore,
    SecretString, UserSettings,
};
