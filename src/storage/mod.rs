//! Local persistence for the vocabulary service.
//!
//! Three independent JSON slots under the application data directory:
//! ```text
//! <data dir>/
//! ├── vocabulary.json          # Ordered entry list
//! ├── completed_words.json     # Completed set, as a sorted array
//! └── incorrect_attempts.json  # Attempt counts, as word/count pairs
//! ```
//!
//! Persistence is best effort: loads fall back to empty on missing or
//! corrupt slots, and the service swallows save failures. Errors only
//! surface from explicit setup calls like [`StateStore::init`].

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::vocabulary::VocabularyEntry;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Data directory not found")]
    DataDirNotFound,
}

pub type Result<T> = std::result::Result<T, StorageError>;

const VOCABULARY_SLOT: &str = "vocabulary";
const COMPLETED_WORDS_SLOT: &str = "completed_words";
const INCORRECT_ATTEMPTS_SLOT: &str = "incorrect_attempts";

/// File-backed store for the three state slots.
pub struct StateStore {
    base_path: PathBuf,
}

impl StateStore {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    /// Get the default data directory.
    pub fn default_data_dir() -> Result<PathBuf> {
        dirs::data_local_dir()
            .map(|p| p.join("wordwise"))
            .ok_or(StorageError::DataDirNotFound)
    }

    /// Create the data directory if it does not exist yet.
    pub fn init(&self) -> Result<()> {
        fs::create_dir_all(&self.base_path)?;
        Ok(())
    }

    fn slot_path(&self, slot: &str) -> PathBuf {
        self.base_path.join(format!("{slot}.json"))
    }

    /// Read one slot, treating a missing or unreadable file and any
    /// parse failure as "no stored value".
    fn load_slot<T: DeserializeOwned>(&self, slot: &str) -> Option<T> {
        let path = self.slot_path(slot);
        let content = fs::read_to_string(&path).ok()?;
        match serde_json::from_str(&content) {
            Ok(value) => Some(value),
            Err(err) => {
                log::warn!("discarding corrupt {slot} slot: {err}");
                None
            }
        }
    }

    fn save_slot<T: Serialize>(&self, slot: &str, value: &T) -> Result<()> {
        let path = self.slot_path(slot);
        fs::write(&path, serde_json::to_string_pretty(value)?)?;
        Ok(())
    }

    pub fn load_vocabulary(&self) -> Vec<VocabularyEntry> {
        self.load_slot(VOCABULARY_SLOT).unwrap_or_default()
    }

    pub fn load_completed_words(&self) -> HashSet<String> {
        self.load_slot::<Vec<String>>(COMPLETED_WORDS_SLOT)
            .map(|words| words.into_iter().collect())
            .unwrap_or_default()
    }

    pub fn load_incorrect_attempts(&self) -> HashMap<String, u32> {
        self.load_slot::<Vec<(String, u32)>>(INCORRECT_ATTEMPTS_SLOT)
            .map(|pairs| pairs.into_iter().collect())
            .unwrap_or_default()
    }

    /// Overwrite all three slots. Set and map slots are written sorted
    /// so files stay stable across saves of equal state.
    pub fn save(
        &self,
        vocabulary: &[VocabularyEntry],
        completed_words: &HashSet<String>,
        incorrect_attempts: &HashMap<String, u32>,
    ) -> Result<()> {
        self.save_slot(VOCABULARY_SLOT, &vocabulary)?;

        let mut completed: Vec<&String> = completed_words.iter().collect();
        completed.sort();
        self.save_slot(COMPLETED_WORDS_SLOT, &completed)?;

        let mut attempts: Vec<(&String, &u32)> = incorrect_attempts.iter().collect();
        attempts.sort_by_key(|(word, _)| word.as_str());
        self.save_slot(INCORRECT_ATTEMPTS_SLOT, &attempts)?;

        Ok(())
    }
}
