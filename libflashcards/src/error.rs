//! Error types for Flashcards

use std::fmt;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, FlashcardsError>;

#[derive(Error, Debug)]
pub enum FlashcardsError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Import error: {0}")]
    Import(#[from] ImportError),

    #[error("Profile error: {0}")]
    Profile(#[from] ProfileError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl FlashcardsError {
    /// Returns the appropriate exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            FlashcardsError::InvalidInput(_) => 3,
            FlashcardsError::Profile(_) => 3,
            FlashcardsError::Import(ImportError::Validation(_)) => 3,
            FlashcardsError::Import(ImportError::Parse(_)) => 3,
            FlashcardsError::Import(_) => 1,
            FlashcardsError::Config(_) => 1,
            FlashcardsError::Storage(_) => 1,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Missing required field: {0}")]
    MissingField(String),
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Storage IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode or decode record: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Storage backend failure: {0}")]
    Backend(String),
}

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("Import failed: {}", join_field_errors(.0))]
    Validation(Vec<FieldError>),

    #[error("Error reading file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Invalid JSON file format: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ImportError {
    /// Field-level problems, when this is a validation rejection
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            ImportError::Validation(errors) => errors,
            _ => &[],
        }
    }
}

/// Rejection of a username during profile creation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProfileError {
    #[error("Username cannot be empty")]
    Empty,

    #[error("Username must be at least 2 characters long")]
    TooShort,

    #[error("Username already exists")]
    AlreadyExists,
}

/// One offending field in a payload or form
///
/// Renders as `"<subject>: <problem>"`, e.g. `User 1: missing or invalid ID`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub subject: String,
    pub problem: String,
}

impl FieldError {
    pub fn new(subject: impl Into<String>, problem: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            problem: problem.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.subject, self.problem)
    }
}

fn join_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
