//! Vocabulary and quiz state for the flashcard application
//!
//! This module provides:
//! - The authoritative in-memory model (entries, completed set, attempt counts)
//! - Mutation and query operations with best-effort persistence
//! - Multiple-choice question generation with unbiased shuffling
//! - Synchronous change-notification channels for the presentation layer

pub mod models;
pub mod notify;
pub mod quiz;
pub mod service;

pub use models::{IncorrectWord, Progress, QuizQuestion, VocabularyEntry};
pub use notify::{ChangeNotifier, SubscriptionId};
pub use service::{VocabularyError, WordService};
