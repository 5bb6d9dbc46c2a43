//! Tauri commands for quiz rounds and answer tracking

use std::collections::HashMap;

use tauri::State;

use crate::vocabulary::{IncorrectWord, QuizQuestion};
use crate::AppState;

use super::CommandResult;

/// Generate one multiple-choice round. `None` means the vocabulary does
/// not hold enough defined entries yet.
#[tauri::command]
pub fn generate_quiz_options(state: State<AppState>) -> CommandResult<Option<QuizQuestion>> {
    let words = state.words.lock().unwrap();
    Ok(words.generate_quiz_options())
}

#[tauri::command]
pub fn mark_word_completed(state: State<AppState>, word: String) -> CommandResult<()> {
    let mut words = state.words.lock().unwrap();
    words.mark_word_completed(&word);
    Ok(())
}

#[tauri::command]
pub fn mark_word_incorrect(state: State<AppState>, word: String) -> CommandResult<()> {
    let mut words = state.words.lock().unwrap();
    words.mark_word_incorrect(&word);
    Ok(())
}

#[tauri::command]
pub fn get_incorrect_attempts(state: State<AppState>, word: String) -> CommandResult<u32> {
    let words = state.words.lock().unwrap();
    Ok(words.get_incorrect_attempts(&word))
}

#[tauri::command]
pub fn get_all_incorrect_attempts(
    state: State<AppState>,
) -> CommandResult<HashMap<String, u32>> {
    let words = state.words.lock().unwrap();
    Ok(words.get_all_incorrect_attempts())
}

/// Attempt counts joined with their entries, most-missed first.
#[tauri::command]
pub fn get_incorrect_words_report(state: State<AppState>) -> CommandResult<Vec<IncorrectWord>> {
    let words = state.words.lock().unwrap();
    Ok(words.incorrect_words_report())
}
