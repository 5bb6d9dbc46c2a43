//! PDF word-list decoder.
//!
//! Extracts text page by page and treats every line containing a `;`
//! separator as a `word;definition` pair. Pages whose text cannot be
//! extracted are skipped rather than failing the import.

use std::path::Path;

use lopdf::Document;

use super::Result;
use crate::vocabulary::VocabularyEntry;

pub fn parse_pdf(path: &Path) -> Result<Vec<VocabularyEntry>> {
    let document = Document::load(path)?;

    let mut vocabulary = Vec::new();
    for (page_number, _) in document.get_pages() {
        let text = match document.extract_text(&[page_number]) {
            Ok(text) => text,
            Err(err) => {
                log::warn!("failed to extract text from PDF page {page_number}: {err}");
                continue;
            }
        };
        vocabulary.extend(entries_from_text(&text));
    }

    log::info!("extracted {} entries from {}", vocabulary.len(), path.display());
    Ok(vocabulary)
}

fn entries_from_text(text: &str) -> Vec<VocabularyEntry> {
    text.lines()
        .filter_map(|line| {
            let (word, definition) = line.split_once(';')?;
            let word = word.trim();
            if word.is_empty() {
                return None;
            }
            let definition = definition.trim();
            Some(VocabularyEntry {
                word: word.to_string(),
                pronunciation: None,
                definition: (!definition.is_empty()).then(|| definition.to_string()),
            })
        })
        .collect()
}
