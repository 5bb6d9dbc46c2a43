//! Data models for the vocabulary service

use serde::{Deserialize, Serialize};

/// A single word imported from a word list.
///
/// Identity is the `word` value. Entries are immutable once added;
/// duplicate words from repeated imports coexist as separate entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabularyEntry {
    pub word: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pronunciation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,
}

impl VocabularyEntry {
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            pronunciation: None,
            definition: None,
        }
    }

    pub fn with_definition(word: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            pronunciation: None,
            definition: Some(definition.into()),
        }
    }

    /// Whether the entry qualifies for a quiz round.
    pub fn has_definition(&self) -> bool {
        self.definition
            .as_deref()
            .map_or(false, |d| !d.trim().is_empty())
    }
}

/// Learning progress over the whole vocabulary.
///
/// Derived on demand, never stored. Percentage display (and the
/// `total == 0` case) is left to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    pub total: usize,
    pub completed: usize,
}

/// A multiple-choice question: one entry plus shuffled definition options.
///
/// Ephemeral — generated per round and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub correct: VocabularyEntry,
    pub options: Vec<String>,
}

/// One row of the incorrect-words report: an attempt count joined with
/// the matching vocabulary entry, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncorrectWord {
    pub word: String,
    pub incorrect_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pronunciation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,
}
