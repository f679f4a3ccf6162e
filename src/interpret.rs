//! Interpretation of free-form model replies.
//!
//! Typo-detection replies are JSON in intent but arrive as chat text, often
//! wrapped in markdown fences or prose. Extraction runs three stages in
//! order — fenced code block, first brace-matched object, whole reply — and
//! the first candidate that parses as a typo report wins.

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use crate::error::{ProofError, Result};

/// A detected misspelling and its candidate corrections.
///
/// `word` is the misspelling exactly as it appears in the source text.
/// `replacements` keeps the model's order; a reply entry without a
/// `replacements` field is tolerated as empty.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TypoSuggestion {
    pub word: String,
    #[serde(default)]
    pub replacements: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct TypoReport {
    #[serde(default)]
    typos: Vec<TypoSuggestion>,
}

static FENCED_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```(?:json)?\s*(.*?)```").unwrap());

/// Extract the typo report from a raw typo-detection reply.
///
/// An empty list means detection succeeded and found nothing; the caller
/// presents that as a neutral result, not a failure.
pub fn interpret_typos(reply: &str) -> Result<Vec<TypoSuggestion>> {
    let candidates = [
        extract_fenced(reply),
        extract_braced(reply),
        Some(reply.to_string()),
    ];

    for candidate in candidates.into_iter().flatten() {
        if let Ok(report) = serde_json::from_str::<TypoReport>(&candidate) {
            return Ok(report.typos);
        }
    }

    Err(ProofError::Parse(
        "reply did not contain a typo report object".to_string(),
    ))
}

/// Interpret a grammar-improvement reply: the trimmed text is the result.
pub fn interpret_grammar(reply: &str) -> String {
    reply.trim().to_string()
}

/// Stage 1: contents of the first fenced code block, bare or json-tagged.
fn extract_fenced(reply: &str) -> Option<String> {
    FENCED_BLOCK
        .captures(reply)
        .map(|captures| captures[1].trim().to_string())
}

/// Stage 2: first top-level `{...}` by brace matching, skipping braces
/// inside JSON string literals.
fn extract_braced(reply: &str) -> Option<String> {
    let start = reply.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in reply[start..].char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match ch {
            '\\' if in_string => escaped = true,
            '"' => in_string = !in_string,
            '{' if !in_string => depth += 1,
            '}' if !in_string => {
                depth -= 1;
                if depth == 0 {
                    return Some(reply[start..start + offset + 1].to_string());
                }
            }
            _ => {}
        }
    }
    None
}
