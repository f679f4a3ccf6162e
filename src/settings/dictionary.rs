//! Custom dictionary glue: the similarity heuristic for folding dictionary
//! entries into replacement options, and the management dialog operations.

use super::store::PropertyStore;
use super::user::UserSettings;

/// Coarse similarity between a dictionary word and a detected misspelling:
/// same lowercase first character and a character-count difference of at
/// most two. Symmetric; empty strings are never similar.
pub fn similar(a: &str, b: &str) -> bool {
    let (Some(first_a), Some(first_b)) = (a.chars().next(), b.chars().next()) else {
        return false;
    };
    if !first_a.to_lowercase().eq(first_b.to_lowercase()) {
        return false;
    }
    let len_a = a.chars().count() as i64;
    let len_b = b.chars().count() as i64;
    (len_a - len_b).abs() <= 2
}

/// The replacement set shown for a detected misspelling: the model's
/// suggestions first, then dictionary words similar to the typo,
/// deduplicated.
pub fn merge_replacements(model: &[String], dictionary: &[String], typo: &str) -> Vec<String> {
    let mut merged: Vec<String> = Vec::new();
    for replacement in model {
        if !merged.contains(replacement) {
            merged.push(replacement.clone());
        }
    }
    for word in dictionary {
        if similar(word, typo) && !merged.contains(word) {
            merged.push(word.clone());
        }
    }
    merged
}

/// Glue behind the dictionary management dialog.
///
/// Mutations return the authoritative post-mutation list; callers re-render
/// from it rather than editing a local copy, so the view stays consistent if
/// the store changed underneath.
pub struct DictionaryManager<'a, S: PropertyStore> {
    settings: &'a mut UserSettings<S>,
}

impl<'a, S: PropertyStore> DictionaryManager<'a, S> {
    pub fn new(settings: &'a mut UserSettings<S>) -> Self {
        Self { settings }
    }

    pub fn entries(&self) -> Vec<String> {
        self.settings.dictionary()
    }

    pub fn add(&mut self, word: &str) -> Vec<String> {
        self.settings.add_word(word)
    }

    pub fn remove(&mut self, index: usize) -> Vec<String> {
        self.settings.remove_word(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::MemoryPropertyStore;

    fn owned(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_similar_same_first_char_close_length() {
        assert!(similar("teh", "the"));
        assert!(similar("color", "colour"));
        assert!(similar("grey", "gray"));
    }

    #[test]
    fn test_similar_rejects_different_first_char() {
        assert!(!similar("teh", "hte"));
        assert!(!similar("word", "sword"));
    }

    #[test]
    fn test_similar_rejects_large_length_delta() {
        assert!(!similar("cat", "catalog"));
        assert!(similar("cat", "cater"));
    }

    #[test]
    fn test_similar_first_char_case_insensitive() {
        assert!(similar("Teh", "the"));
    }

    #[test]
    fn test_similar_empty_never_matches() {
        assert!(!similar("", ""));
        assert!(!similar("", "the"));
        assert!(!similar("the", ""));
    }

    #[test]
    fn test_similar_is_symmetric() {
        let words = ["teh", "the", "", "Teh", "cat", "catalog", "ñandú", "ñu"];
        for a in &words {
            for b in &words {
                assert_eq!(similar(a, b), similar(b, a), "similar({:?}, {:?})", a, b);
            }
        }
    }

    #[test]
    fn test_similar_counts_chars_not_bytes() {
        // Five chars vs three chars, multi-byte either way.
        assert!(similar("ñoño", "ñu"));
    }

    #[test]
    fn test_merge_model_order_first() {
        let merged = merge_replacements(&owned(&["the", "then"]), &owned(&["teal"]), "teh");
        assert_eq!(merged, owned(&["the", "then", "teal"]));
    }

    #[test]
    fn test_merge_dedupes() {
        let merged = merge_replacements(&owned(&["the", "the"]), &owned(&["the"]), "teh");
        assert_eq!(merged, owned(&["the"]));
    }

    #[test]
    fn test_merge_filters_dissimilar_dictionary_words() {
        let merged = merge_replacements(&owned(&["the"]), &owned(&["zebra", "tea"]), "teh");
        assert_eq!(merged, owned(&["the", "tea"]));
    }

    #[test]
    fn test_manager_returns_authoritative_list() {
        let mut settings = UserSettings::new(MemoryPropertyStore::new());
        let mut manager = DictionaryManager::new(&mut settings);

        assert!(manager.entries().is_empty());
        assert_eq!(manager.add("colour"), owned(&["colour"]));
        assert_eq!(manager.add("grey"), owned(&["colour", "grey"]));
        assert_eq!(manager.remove(0), owned(&["grey"]));
        assert_eq!(manager.remove(7), owned(&["grey"]));
    }
}
