//! Word-list import decoders
//!
//! Each decoder turns one file format into a sequence of
//! [`VocabularyEntry`](crate::vocabulary::VocabularyEntry) values the
//! service can append:
//! - CSV exports with `index, word, pronunciation, definition` columns
//! - JSON arrays of entry objects
//! - PDFs with `word;definition` lines

pub mod csv;
pub mod json;
pub mod pdf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("CSV error: {0}")]
    Csv(#[from] ::csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("JSON word lists must be an array of entries")]
    NotAnArray,

    #[error("Every JSON entry must have a non-empty \"word\" field")]
    MissingWord,
}

pub type Result<T> = std::result::Result<T, ImportError>;
