//! Tauri command surface for the webview frontend.

pub mod import;
pub mod quiz;
pub mod shell;
pub mod vocabulary;

use crate::import::ImportError;
use crate::vocabulary::VocabularyError;

#[derive(Debug, serde::Serialize)]
pub struct CommandError {
    pub message: String,
}

impl From<VocabularyError> for CommandError {
    fn from(err: VocabularyError) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

impl From<ImportError> for CommandError {
    fn from(err: ImportError) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for CommandError {
    fn from(err: std::io::Error) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

pub type CommandResult<T> = Result<T, CommandError>;
