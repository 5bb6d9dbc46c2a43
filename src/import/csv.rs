//! CSV word-list decoder.
//!
//! Expects a header row followed by `index, word, pronunciation,
//! definition` records. Rows with fewer than four fields or a blank word
//! are skipped. Definitions from dictionary exports often carry HTML
//! markup; tags are stripped, whitespace runs collapsed, and stray quote
//! characters removed before the text is stored.

use csv::ReaderBuilder;
use regex::Regex;

use super::Result;
use crate::vocabulary::VocabularyEntry;

pub fn parse_csv(content: &str) -> Result<Vec<VocabularyEntry>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let mut vocabulary = Vec::new();
    for record in reader.records() {
        let record = record?;
        if record.len() < 4 {
            log::debug!("skipping CSV row with {} fields", record.len());
            continue;
        }

        let word = record.get(1).unwrap_or("").replace('"', "");
        let word = word.trim();
        if word.is_empty() {
            log::debug!("skipping CSV row with a blank word");
            continue;
        }

        vocabulary.push(VocabularyEntry {
            word: word.to_string(),
            pronunciation: clean_field(record.get(2).unwrap_or("")),
            definition: clean_definition(record.get(3).unwrap_or("")),
        });
    }

    Ok(vocabulary)
}

fn clean_field(raw: &str) -> Option<String> {
    let cleaned = raw.replace('"', "");
    let cleaned = cleaned.trim();
    (!cleaned.is_empty()).then(|| cleaned.to_string())
}

/// Strip HTML tags, collapse whitespace runs to one space, and remove
/// embedded quote characters.
fn clean_definition(raw: &str) -> Option<String> {
    let tag_re = Regex::new(r"<[^>]+>").unwrap();
    let text = tag_re.replace_all(raw, " ");

    let space_re = Regex::new(r"\s+").unwrap();
    let text = space_re.replace_all(&text, " ");

    let text = text.replace('"', "");
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_animal_word_list() {
        let csv = "idx,word,ipa,def\n\
                   1,cat,/k\u{e6}t/,a small domesticated animal\n\
                   2,dog,/d\u{252}\u{261}/,a domesticated canine\n\
                   3,fish,/f\u{26a}\u{283}/,an aquatic animal\n\
                   4,bird,/b\u{25c}\u{2d0}d/,a flying animal";

        let vocabulary = parse_csv(csv).unwrap();
        assert_eq!(vocabulary.len(), 4);
        assert_eq!(vocabulary[0].word, "cat");
        assert_eq!(vocabulary[0].pronunciation.as_deref(), Some("/k\u{e6}t/"));
        assert_eq!(
            vocabulary[0].definition.as_deref(),
            Some("a small domesticated animal")
        );
        assert_eq!(vocabulary[3].word, "bird");
    }

    #[test]
    fn test_header_row_is_not_an_entry() {
        let vocabulary = parse_csv("index,word,pronunciation,definition\n1,cat,,purrs").unwrap();
        assert_eq!(vocabulary.len(), 1);
        assert_eq!(vocabulary[0].word, "cat");
    }

    #[test]
    fn test_skips_short_rows_and_blank_words() {
        let csv = "idx,word,ipa,def\n\
                   1,cat\n\
                   2,,/x/,orphaned definition\n\
                   3,dog,/d/,a domesticated canine";

        let vocabulary = parse_csv(csv).unwrap();
        assert_eq!(vocabulary.len(), 1);
        assert_eq!(vocabulary[0].word, "dog");
    }

    #[test]
    fn test_quoted_field_keeps_embedded_comma() {
        let csv = "idx,word,ipa,def\n1,run,/r\u{28c}n/,\"to move quickly, on foot\"";
        let vocabulary = parse_csv(csv).unwrap();
        assert_eq!(
            vocabulary[0].definition.as_deref(),
            Some("to move quickly, on foot")
        );
    }

    #[test]
    fn test_definition_cleanup() {
        let csv = "idx,word,ipa,def\n1,cat,,<b>feline</b>   \"mammal\"  <i>kept as a pet</i>";
        let vocabulary = parse_csv(csv).unwrap();
        assert_eq!(
            vocabulary[0].definition.as_deref(),
            Some("feline mammal kept as a pet")
        );
    }

    #[test]
    fn test_empty_cleaned_fields_become_none() {
        let csv = "idx,word,ipa,def\n1,cat,,<br/>";
        let vocabulary = parse_csv(csv).unwrap();
        assert_eq!(vocabulary[0].pronunciation, None);
        assert_eq!(vocabulary[0].definition, None);
    }
}
