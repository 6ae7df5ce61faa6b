//! Flashcards - emoji vocabulary learning engine
//!
//! This library holds everything behind the flashcards front end: local
//! profiles, the word inventory, level unlocking, quiz generation and
//! scoring, and backup export/import over a key-value persistence gateway.

pub mod config;
pub mod defaults;
pub mod engine;
pub mod error;
pub mod levels;
pub mod logging;
pub mod quiz;
pub mod service;
pub mod storage;
pub mod transfer;
pub mod types;

// Re-export commonly used types
pub use config::Config;
pub use engine::{reduce, Action, AppState};
pub use error::{FlashcardsError, Result};
pub use service::FlashcardService;
pub use storage::{FileStore, KeyValueStore, MemoryStore, Persistence};
pub use transfer::{ExportData, ImportOptions, ImportSummary};
pub use types::{Level, Progress, QuizResult, User, Word};
