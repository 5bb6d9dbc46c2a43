//! Tauri commands for word-list imports

use std::path::PathBuf;

use tauri::State;

use crate::import::{csv, json, pdf};
use crate::vocabulary::VocabularyEntry;
use crate::AppState;

use super::CommandResult;

/// Decode CSV text and append the entries. Returns the updated list.
#[tauri::command]
pub fn import_csv(state: State<AppState>, content: String) -> CommandResult<Vec<VocabularyEntry>> {
    let entries = csv::parse_csv(&content)?;
    let mut words = state.words.lock().unwrap();
    words.add_vocabulary(entries)?;
    Ok(words.get_vocabulary())
}

/// Decode a JSON entry array and append it. Returns the updated list.
#[tauri::command]
pub fn import_json(state: State<AppState>, content: String) -> CommandResult<Vec<VocabularyEntry>> {
    let entries = json::parse_json(&content)?;
    let mut words = state.words.lock().unwrap();
    words.add_vocabulary(entries)?;
    Ok(words.get_vocabulary())
}

/// Extract `word;definition` pairs from a staged PDF and append them.
/// Returns the number of entries added.
#[tauri::command]
pub fn import_pdf(state: State<AppState>, path: String) -> CommandResult<usize> {
    let entries = pdf::parse_pdf(&PathBuf::from(path))?;
    let mut words = state.words.lock().unwrap();
    Ok(words.import_extracted(entries)?)
}
