//! Action handlers behind the host menu items.
//!
//! Errors from the client and interpreter are caught at this boundary and
//! surfaced as a single typed error for the host to alert. Nothing is
//! retried, and nothing is written to the sheet on failure.

use crate::error::{ProofError, Result};
use crate::host::CellWriter;
use crate::interpret;
use crate::llm::{grammar_messages, typo_messages, CompletionApi};
use crate::review::{GrammarReview, TypoReview};
use crate::session::{PendingEditTarget, ProofSession};
use crate::settings::{PropertyStore, UserSettings};

/// Outcome of a typo check.
#[derive(Debug)]
pub enum TypoCheck {
    /// Detection succeeded and found nothing to offer; informational.
    NoFindings,
    /// Detected typos, ready for review.
    Findings(TypoReview),
}

/// Run typo detection over the selected text.
///
/// On findings, the target is remembered in the session slot so the eventual
/// [`apply_correction`] knows where to write.
pub async fn check_typos<S, A>(
    session: &mut ProofSession,
    settings: &UserSettings<S>,
    api: &A,
    target: PendingEditTarget,
    text: &str,
) -> Result<TypoCheck>
where
    S: PropertyStore,
    A: CompletionApi + ?Sized,
{
    let text = selected_text(text)?;
    let api_key = settings.api_key().ok_or(ProofError::MissingApiKey)?;

    let messages = typo_messages(settings.language(), text);
    let reply = api.complete(&api_key, &messages).await?;
    let suggestions = interpret::interpret_typos(&reply)?;
    tracing::debug!(count = suggestions.len(), "Typo check complete");

    let review = TypoReview::new(text, suggestions, settings.dictionary());
    if review.is_done() {
        return Ok(TypoCheck::NoFindings);
    }

    session.remember_target(target);
    Ok(TypoCheck::Findings(review))
}

/// Run grammar improvement over the selected text.
pub async fn improve_grammar<S, A>(
    session: &mut ProofSession,
    settings: &UserSettings<S>,
    api: &A,
    target: PendingEditTarget,
    text: &str,
) -> Result<GrammarReview>
where
    S: PropertyStore,
    A: CompletionApi + ?Sized,
{
    let text = selected_text(text)?;
    let api_key = settings.api_key().ok_or(ProofError::MissingApiKey)?;

    let messages = grammar_messages(settings.language(), text);
    let reply = api.complete(&api_key, &messages).await?;
    let improved = interpret::interpret_grammar(&reply);

    session.remember_target(target);
    Ok(GrammarReview::new(text, improved))
}

/// Write an accepted correction into the remembered cell, consuming the
/// pending slot. No-op when no target is pending (an earlier dialog was
/// superseded by a newer check).
pub fn apply_correction<W: CellWriter>(session: &mut ProofSession, writer: &mut W, text: &str) {
    match session.take_target() {
        Some(target) => writer.write_back(&target.sheet_id, &target.cell_address, text),
        None => tracing::debug!("No pending edit target, dropping correction"),
    }
}

fn selected_text(text: &str) -> Result<&str> {
    if text.trim().is_empty() {
        return Err(ProofError::EmptySelection);
    }
    Ok(text)
}
