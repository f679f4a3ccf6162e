//! Accept/reject state behind the suggestion dialogs.

use crate::interpret::TypoSuggestion;
use crate::settings::{merge_replacements, PropertyStore, UserSettings};

/// Review state for a round of typo suggestions.
///
/// Accepted replacements substitute globally in a working copy of the text
/// and accumulate; nothing touches the source cell until the host finalizes
/// and hands the result to the cell writer.
#[derive(Debug)]
pub struct TypoReview {
    working_text: String,
    pending: Vec<TypoSuggestion>,
    dictionary: Vec<String>,
}

impl TypoReview {
    /// Suggestions without any replacement cannot be offered and are skipped.
    pub fn new(
        text: impl Into<String>,
        suggestions: Vec<TypoSuggestion>,
        dictionary: Vec<String>,
    ) -> Self {
        let pending = suggestions
            .into_iter()
            .filter(|suggestion| {
                if suggestion.replacements.is_empty() {
                    tracing::debug!(word = %suggestion.word, "Skipping typo with no replacements");
                    false
                } else {
                    true
                }
            })
            .collect();

        Self {
            working_text: text.into(),
            pending,
            dictionary,
        }
    }

    /// Typos still awaiting a decision.
    pub fn pending(&self) -> &[TypoSuggestion] {
        &self.pending
    }

    pub fn is_done(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn working_text(&self) -> &str {
        &self.working_text
    }

    /// Replacement options for the pending typo at `index`: the model's
    /// suggestions first, then similar dictionary words, deduplicated.
    pub fn display_replacements(&self, index: usize) -> Vec<String> {
        let Some(typo) = self.pending.get(index) else {
            return Vec::new();
        };
        merge_replacements(&typo.replacements, &self.dictionary, &typo.word)
    }

    /// Replace every literal occurrence of the typo at `index` with
    /// `replacement` in the working text. The typo leaves the pending set.
    pub fn accept(&mut self, index: usize, replacement: &str) {
        if index >= self.pending.len() {
            return;
        }
        let typo = self.pending.remove(index);
        self.working_text = self.working_text.replace(&typo.word, replacement);
    }

    /// Drop the typo at `index` from review, leaving the text unchanged.
    pub fn dismiss(&mut self, index: usize) {
        if index < self.pending.len() {
            self.pending.remove(index);
        }
    }

    /// Add `word` to the custom dictionary, then apply it as the replacement
    /// for the typo at `index`. Blank words are ignored.
    pub fn accept_custom<S: PropertyStore>(
        &mut self,
        index: usize,
        word: &str,
        settings: &mut UserSettings<S>,
    ) {
        let word = word.trim();
        if word.is_empty() {
            return;
        }
        self.dictionary = settings.add_word(word);
        self.accept(index, word);
    }

    /// The fully substituted text, ready for write-back.
    pub fn finalize(self) -> String {
        self.working_text
    }
}

/// Review state for a grammar-improvement round: original and improved text
/// side by side, accepted or discarded as a whole.
#[derive(Debug)]
pub struct GrammarReview {
    original: String,
    improved: String,
}

impl GrammarReview {
    pub fn new(original: impl Into<String>, improved: impl Into<String>) -> Self {
        Self {
            original: original.into(),
            improved: improved.into(),
        }
    }

    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn improved(&self) -> &str {
        &self.improved
    }

    /// Accept the rewrite; the improved text goes to the cell writer verbatim.
    pub fn accept(self) -> String {
        self.improved
    }

    /// Discard the rewrite; the source cell stays untouched.
    pub fn cancel(self) {}
}
