//! Prompt construction for the two proofreading tasks.

use super::types::ChatMessage;
use crate::settings::Language;

/// Messages for the misspelling-detection task. The system message pins the
/// reply to a strict JSON shape; the user message is the raw selected text.
pub fn typo_messages(language: Language, text: &str) -> Vec<ChatMessage> {
    let system = format!(
        r#"You are a spell checker for {} text.
Find every misspelled word in the user's text.
Respond with JSON only, in exactly this shape:
{{"typos":[{{"word":"<misspelled word as written>","replacements":["<correction>"]}}]}}
List the most likely correction first when there is more than one.
If there are no misspellings respond with {{"typos":[]}}.
Do not rewrite the text and do not add commentary."#,
        language.display_name(),
    );
    vec![ChatMessage::system(system), ChatMessage::user(text)]
}

/// Messages for the grammar-improvement task. The reply is the rewritten
/// text and nothing else.
pub fn grammar_messages(language: Language, text: &str) -> Vec<ChatMessage> {
    let system = format!(
        r#"You improve the grammar and clarity of {} text.
Rewrite the user's text with correct grammar, keeping the meaning and tone.
Return only the improved text, with no commentary and no surrounding quotes."#,
        language.display_name(),
    );
    vec![ChatMessage::system(system), ChatMessage::user(text)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::Role;

    #[test]
    fn test_typo_messages_order_and_content() {
        let messages = typo_messages(Language::English, "I teh went");
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, Role::System);
        assert!(messages[0].content.contains("English"));
        assert!(messages[0].content.contains(r#""typos""#));
        assert_eq!(messages[1].role, Role::User);
        assert_eq!(messages[1].content, "I teh went");
    }

    #[test]
    fn test_typo_messages_spanish() {
        let messages = typo_messages(Language::Spanish, "ola mundo");
        assert!(messages[0].content.contains("Spanish"));
        assert!(!messages[0].content.contains("English"));
    }

    #[test]
    fn test_grammar_messages_order_and_content() {
        let messages = grammar_messages(Language::English, "me want go store");
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, Role::System);
        assert!(messages[0].content.contains("grammar"));
        assert!(messages[0].content.contains("only the improved text"));
        assert_eq!(messages[1].content, "me want go store");
    }

    #[test]
    fn test_user_text_passed_verbatim() {
        let raw = "  spacing\nand\nnewlines kept  ";
        let messages = grammar_messages(Language::English, raw);
        assert_eq!(messages[1].content, raw);
    }
}
