//! Tauri commands for vocabulary state

use tauri::State;

use crate::vocabulary::{Progress, VocabularyEntry};
use crate::AppState;

use super::CommandResult;

/// Append entries to the vocabulary and return the updated list.
#[tauri::command]
pub fn add_vocabulary(
    state: State<AppState>,
    entries: Vec<VocabularyEntry>,
) -> CommandResult<Vec<VocabularyEntry>> {
    let mut words = state.words.lock().unwrap();
    words.add_vocabulary(entries)?;
    Ok(words.get_vocabulary())
}

#[tauri::command]
pub fn get_vocabulary(state: State<AppState>) -> CommandResult<Vec<VocabularyEntry>> {
    let words = state.words.lock().unwrap();
    Ok(words.get_vocabulary())
}

#[tauri::command]
pub fn get_progress(state: State<AppState>) -> CommandResult<Progress> {
    let words = state.words.lock().unwrap();
    Ok(words.get_progress())
}

#[tauri::command]
pub fn clear_vocabulary(state: State<AppState>) -> CommandResult<()> {
    let mut words = state.words.lock().unwrap();
    words.clear_vocabulary();
    Ok(())
}
