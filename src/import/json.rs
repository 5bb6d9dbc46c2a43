//! JSON word-list decoder.
//!
//! The input must be an array of objects. Unlike the forgiving CSV path,
//! a single bad element fails the whole import: each object needs a
//! non-empty `word`; `pronunciation` and `definition` pass through
//! unchanged when present.

use serde_json::Value;

use super::{ImportError, Result};
use crate::vocabulary::VocabularyEntry;

pub fn parse_json(content: &str) -> Result<Vec<VocabularyEntry>> {
    let value: Value = serde_json::from_str(content)?;
    let items = value.as_array().ok_or(ImportError::NotAnArray)?;

    items
        .iter()
        .map(|item| {
            let word = item
                .get("word")
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|word| !word.is_empty())
                .ok_or(ImportError::MissingWord)?;
            Ok(VocabularyEntry {
                word: word.to_string(),
                pronunciation: string_field(item, "pronunciation"),
                definition: string_field(item, "definition"),
            })
        })
        .collect()
}

fn string_field(item: &Value, key: &str) -> Option<String> {
    item.get(key).and_then(Value::as_str).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_entry_array() {
        let json = r#"[
            {"word": "cat", "pronunciation": "/kat/", "definition": "a small domesticated animal"},
            {"word": "dog"}
        ]"#;

        let vocabulary = parse_json(json).unwrap();
        assert_eq!(vocabulary.len(), 2);
        assert_eq!(vocabulary[0].word, "cat");
        assert_eq!(vocabulary[0].pronunciation.as_deref(), Some("/kat/"));
        assert_eq!(vocabulary[1].word, "dog");
        assert_eq!(vocabulary[1].pronunciation, None);
        assert_eq!(vocabulary[1].definition, None);
    }

    #[test]
    fn test_rejects_non_array_document() {
        assert!(matches!(
            parse_json(r#"{"word": "cat"}"#),
            Err(ImportError::NotAnArray)
        ));
    }

    #[test]
    fn test_rejects_missing_or_blank_word() {
        assert!(matches!(
            parse_json(r#"[{"definition": "no word here"}]"#),
            Err(ImportError::MissingWord)
        ));
        assert!(matches!(
            parse_json(r#"[{"word": "   "}]"#),
            Err(ImportError::MissingWord)
        ));
    }

    #[test]
    fn test_one_bad_element_fails_the_whole_import() {
        let json = r#"[{"word": "cat"}, {"definition": "orphan"}]"#;
        assert!(parse_json(json).is_err());
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(parse_json("[{"), Err(ImportError::Json(_))));
    }
}
