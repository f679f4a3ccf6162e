//! Typed view over the per-user property store: API key, proofreading
//! language, and the custom dictionary.

use serde::{Deserialize, Serialize};

use super::secret::SecretString;
use super::store::PropertyStore;

const KEY_API_KEY: &str = "api_key";
const KEY_LANGUAGE: &str = "language";
const KEY_DICTIONARY: &str = "custom_dictionary";

/// Proofreading language preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Spanish,
}

impl Language {
    /// Stored property value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Spanish => "spanish",
        }
    }

    /// Name used in prompts and dialogs.
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Spanish => "Spanish",
        }
    }

    fn from_property(raw: &str) -> Option<Self> {
        match raw {
            "english" => Some(Language::English),
            "spanish" => Some(Language::Spanish),
            _ => None,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Per-user settings over a [`PropertyStore`].
///
/// All operations are synchronous and persist immediately; stored values
/// that fail to parse fall back to defaults rather than erroring.
pub struct UserSettings<S: PropertyStore> {
    store: S,
}

impl<S: PropertyStore> UserSettings<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn api_key(&self) -> Option<SecretString> {
        self.store
            .get(KEY_API_KEY)
            .filter(|key| !key.trim().is_empty())
            .map(SecretString::new)
    }

    pub fn set_api_key(&mut self, key: &str) {
        self.store.set(KEY_API_KEY, key.trim());
    }

    pub fn language(&self) -> Language {
        match self.store.get(KEY_LANGUAGE) {
            None => Language::default(),
            Some(raw) => Language::from_property(&raw).unwrap_or_else(|| {
                tracing::warn!(value = %raw, "Unrecognized stored language, using English");
                Language::default()
            }),
        }
    }

    pub fn set_language(&mut self, language: Language) {
        self.store.set(KEY_LANGUAGE, language.as_str());
    }

    /// The custom dictionary, in insertion order. A stored value that is not
    /// a JSON string array yields an empty dictionary.
    pub fn dictionary(&self) -> Vec<String> {
        let Some(raw) = self.store.get(KEY_DICTIONARY) else {
            return Vec::new();
        };
        match serde_json::from_str(&raw) {
            Ok(words) => words,
            Err(e) => {
                tracing::warn!("Failed to parse stored dictionary: {}", e);
                Vec::new()
            }
        }
    }

    /// Append `word` to the dictionary. No-op on blank input or an exact
    /// (case-sensitive) duplicate. Returns the post-mutation list.
    pub fn add_word(&mut self, word: &str) -> Vec<String> {
        let word = word.trim();
        let mut words = self.dictionary();
        if word.is_empty() || words.iter().any(|w| w == word) {
            return words;
        }
        words.push(word.to_string());
        self.persist_dictionary(&words);
        words
    }

    /// Remove the entry at `index`. No-op when the index is out of bounds.
    /// Returns the post-mutation list.
    pub fn remove_word(&mut self, index: usize) -> Vec<String> {
        let mut words = self.dictionary();
        if index >= words.len() {
            return words;
        }
        words.remove(index);
        self.persist_dictionary(&words);
        words
    }

    fn persist_dictionary(&mut self, words: &[String]) {
        match serde_json::to_string(words) {
            Ok(json) => self.store.set(KEY_DICTIONARY, &json),
            Err(e) => tracing::warn!("Failed to serialize dictionary: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::MemoryPropertyStore;

    fn settings() -> UserSettings<MemoryPropertyStore> {
        UserSettings::new(MemoryPropertyStore::new())
    }

    #[test]
    fn test_api_key_unset_and_blank() {
        let mut s = settings();
        assert!(s.api_key().is_none());

        s.set_api_key("   ");
        assert!(s.api_key().is_none());

        s.set_api_key("sk-abc");
        assert_eq!(s.api_key().unwrap().expose(), "sk-abc");
    }

    #[test]
    fn test_language_defaults_to_english() {
        let s = settings();
        assert_eq!(s.language(), Language::English);
    }

    #[test]
    fn test_language_round_trip() {
        let mut s = settings();
        s.set_language(Language::Spanish);
        assert_eq!(s.language(), Language::Spanish);
    }

    #[test]
    fn test_unrecognized_language_falls_back() {
        let mut s = settings();
        s.store.set("language", "klingon");
        assert_eq!(s.language(), Language::English);
    }

    #[test]
    fn test_dictionary_empty_by_default() {
        let s = settings();
        assert!(s.dictionary().is_empty());
    }

    #[test]
    fn test_corrupt_dictionary_yields_empty() {
        let mut s = settings();
        s.store.set("custom_dictionary", "{not json");
        assert!(s.dictionary().is_empty());
    }

    #[test]
    fn test_add_word_appends_and_persists() {
        let mut s = settings();
        let words = s.add_word("colour");
        assert_eq!(words, vec!["colour"]);
        assert_eq!(s.dictionary(), vec!["colour"]);
    }

    #[test]
    fn test_add_word_is_idempotent() {
        let mut s = settings();
        s.add_word("colour");
        let words = s.add_word("colour");
        assert_eq!(words.len(), 1);
    }

    #[test]
    fn test_add_word_blank_is_noop() {
        let mut s = settings();
        s.add_word("colour");
        let words = s.add_word("   ");
        assert_eq!(words, vec!["colour"]);
    }

    #[test]
    fn test_add_word_is_case_sensitive() {
        let mut s = settings();
        s.add_word("colour");
        let words = s.add_word("Colour");
        assert_eq!(words, vec!["colour", "Colour"]);
    }

    #[test]
    fn test_add_word_preserves_order() {
        let mut s = settings();
        s.add_word("alpha");
        s.add_word("beta");
        let words = s.add_word("gamma");
        assert_eq!(words, vec!["alpha", "beta", "gamma"]);
    }

    #[test]
    fn test_remove_word_by_index() {
        let mut s = settings();
        s.add_word("alpha");
        s.add_word("beta");
        s.add_word("gamma");

        let words = s.remove_word(1);
        assert_eq!(words, vec!["alpha", "gamma"]);
        assert_eq!(s.dictionary(), vec!["alpha", "gamma"]);
    }

    #[test]
    fn test_remove_word_out_of_bounds_is_noop() {
        let mut s = settings();
        s.add_word("alpha");
        let words = s.remove_word(5);
        assert_eq!(words, vec!["alpha"]);
    }

    #[test]
    fn test_dictionary_stored_as_json() {
        let mut s = settings();
        s.add_word("colour");
        s.add_word("grey");
        assert_eq!(
            s.store.get("custom_dictionary"),
            Some(r#"["colour","grey"]"#.to_string())
        );
    }
}
