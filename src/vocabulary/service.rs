//! The vocabulary/quiz state service.
//!
//! Owns the authoritative in-memory model (vocabulary list, completed
//! set, incorrect-attempt counts), mutates it in response to UI calls,
//! generates quiz rounds, and keeps the persisted slots in sync. Every
//! operation runs to completion before the next begins; the service is
//! shared behind the application state mutex.

use std::collections::{HashMap, HashSet};

use rand::thread_rng;
use thiserror::Error;

use super::models::{IncorrectWord, Progress, QuizQuestion, VocabularyEntry};
use super::notify::ChangeNotifier;
use super::quiz;
use crate::storage::StateStore;

#[derive(Error, Debug)]
pub enum VocabularyError {
    #[error("Vocabulary input must not be empty")]
    InvalidInput,

    #[error("No valid entries to import")]
    NoValidEntries,

    #[error("No entries extracted from the document")]
    NoEntriesExtracted,
}

pub type Result<T> = std::result::Result<T, VocabularyError>;

pub struct WordService {
    store: StateStore,
    vocabulary: Vec<VocabularyEntry>,
    completed_words: HashSet<String>,
    incorrect_attempts: HashMap<String, u32>,
    vocabulary_changed: ChangeNotifier<Vec<VocabularyEntry>>,
    completed_count_changed: ChangeNotifier<usize>,
    incorrect_attempts_changed: ChangeNotifier<HashMap<String, u32>>,
}

impl WordService {
    /// Initialize the service from the persisted slots. Missing or
    /// corrupt slots start empty.
    pub fn load(store: StateStore) -> Self {
        let vocabulary = store.load_vocabulary();
        let completed_words = store.load_completed_words();
        let incorrect_attempts = store.load_incorrect_attempts();
        log::info!(
            "loaded {} vocabulary entries, {} completed words, {} incorrect-attempt records",
            vocabulary.len(),
            completed_words.len(),
            incorrect_attempts.len()
        );
        Self {
            store,
            vocabulary,
            completed_words,
            incorrect_attempts,
            vocabulary_changed: ChangeNotifier::new(),
            completed_count_changed: ChangeNotifier::new(),
            incorrect_attempts_changed: ChangeNotifier::new(),
        }
    }

    // ===== Change channels =====

    /// Channel carrying the full updated list after every vocabulary change.
    pub fn vocabulary_changed(&self) -> &ChangeNotifier<Vec<VocabularyEntry>> {
        &self.vocabulary_changed
    }

    /// Channel carrying the completed-word cardinality.
    pub fn completed_count_changed(&self) -> &ChangeNotifier<usize> {
        &self.completed_count_changed
    }

    /// Channel carrying a snapshot of the incorrect-attempt mapping.
    pub fn incorrect_attempts_changed(&self) -> &ChangeNotifier<HashMap<String, u32>> {
        &self.incorrect_attempts_changed
    }

    // ===== Mutations =====

    /// Append imported entries to the vocabulary, in order.
    ///
    /// Entries whose word is blank after trimming are dropped; surviving
    /// words are stored trimmed. Duplicate words accumulate — repeated
    /// imports are appends, never merges. Returns the number appended.
    pub fn add_vocabulary(&mut self, entries: Vec<VocabularyEntry>) -> Result<usize> {
        if entries.is_empty() {
            return Err(VocabularyError::InvalidInput);
        }

        let mut valid: Vec<VocabularyEntry> = entries
            .into_iter()
            .filter_map(|mut entry| {
                let word = entry.word.trim();
                if word.is_empty() {
                    log::debug!("dropping imported entry with blank word");
                    return None;
                }
                entry.word = word.to_string();
                Some(entry)
            })
            .collect();
        if valid.is_empty() {
            return Err(VocabularyError::NoValidEntries);
        }

        let added = valid.len();
        self.vocabulary.append(&mut valid);
        log::info!("added {added} entries, vocabulary now has {}", self.vocabulary.len());
        self.persist();
        self.vocabulary_changed.emit(&self.vocabulary);
        Ok(added)
    }

    /// Entries already extracted from a staged PDF by the import layer.
    pub fn import_extracted(&mut self, entries: Vec<VocabularyEntry>) -> Result<usize> {
        if entries.is_empty() {
            return Err(VocabularyError::NoEntriesExtracted);
        }
        self.add_vocabulary(entries)
    }

    /// Record a correct answer. Unknown or blank words are a logged
    /// no-op: stale UI state may reference a cleared word.
    pub fn mark_word_completed(&mut self, word: &str) {
        if !self.contains_word(word) {
            log::warn!("mark_word_completed: {word:?} is not in the vocabulary");
            return;
        }
        self.completed_words.insert(word.to_string());
        self.persist();
        self.completed_count_changed.emit(&self.completed_words.len());
    }

    /// Record a wrong answer, incrementing the word's attempt count.
    /// Same existence guard as [`Self::mark_word_completed`].
    pub fn mark_word_incorrect(&mut self, word: &str) {
        if !self.contains_word(word) {
            log::warn!("mark_word_incorrect: {word:?} is not in the vocabulary");
            return;
        }
        *self.incorrect_attempts.entry(word.to_string()).or_insert(0) += 1;
        self.persist();
        self.incorrect_attempts_changed.emit(&self.incorrect_attempts);
    }

    /// Reset all three state slots to empty and persist the reset.
    /// The only operation that removes entries.
    pub fn clear_vocabulary(&mut self) {
        self.vocabulary.clear();
        self.completed_words.clear();
        self.incorrect_attempts.clear();
        log::info!("vocabulary cleared");
        self.persist();
        self.vocabulary_changed.emit(&self.vocabulary);
        self.completed_count_changed.emit(&self.completed_words.len());
        self.incorrect_attempts_changed.emit(&self.incorrect_attempts);
    }

    // ===== Queries =====

    /// Snapshot of the ordered vocabulary.
    pub fn get_vocabulary(&self) -> Vec<VocabularyEntry> {
        self.vocabulary.clone()
    }

    /// Generate one quiz round, or `None` when too few entries qualify.
    pub fn generate_quiz_options(&self) -> Option<QuizQuestion> {
        quiz::generate_question(&self.vocabulary, &mut thread_rng())
    }

    pub fn get_incorrect_attempts(&self, word: &str) -> u32 {
        self.incorrect_attempts.get(word).copied().unwrap_or(0)
    }

    pub fn get_all_incorrect_attempts(&self) -> HashMap<String, u32> {
        self.incorrect_attempts.clone()
    }

    pub fn get_progress(&self) -> Progress {
        Progress {
            total: self.vocabulary.len(),
            completed: self.completed_words.len(),
        }
    }

    /// Attempt counts joined with their vocabulary entries (first entry
    /// wins for duplicated words), sorted by count descending.
    pub fn incorrect_words_report(&self) -> Vec<IncorrectWord> {
        let mut report: Vec<IncorrectWord> = self
            .incorrect_attempts
            .iter()
            .map(|(word, count)| {
                let entry = self.vocabulary.iter().find(|entry| entry.word == *word);
                IncorrectWord {
                    word: word.clone(),
                    incorrect_count: *count,
                    pronunciation: entry.and_then(|e| e.pronunciation.clone()),
                    definition: entry.and_then(|e| e.definition.clone()),
                }
            })
            .collect();
        report.sort_by(|a, b| {
            b.incorrect_count
                .cmp(&a.incorrect_count)
                .then_with(|| a.word.cmp(&b.word))
        });
        report
    }

    // ===== Lifecycle =====

    /// Final best-effort save, called on application shutdown.
    pub fn flush(&self) {
        self.persist();
    }

    fn contains_word(&self, word: &str) -> bool {
        !word.trim().is_empty() && self.vocabulary.iter().any(|entry| entry.word == word)
    }

    /// Best-effort write of all three slots. Failures never reach the
    /// caller and leave the in-memory state untouched.
    fn persist(&self) {
        if let Err(err) = self.store.save(
            &self.vocabulary,
            &self.completed_words,
            &self.incorrect_attempts,
        ) {
            log::warn!("failed to persist vocabulary state: {err}");
        }
    }
}
