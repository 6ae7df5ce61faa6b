//! Actions for the reducer pattern
//!
//! All state transitions are triggered by actions. This module defines
//! every action that can modify application state.

use crate::types::{Level, Progress, User, Word};

/// Actions that trigger state transitions
///
/// Actions are immutable data describing what should happen. The reducer
/// (see `reducer.rs`) is responsible for applying them to state.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // === Profiles ===
    /// Select a user, or clear the selection
    SetCurrentUser(Option<User>),

    /// Append a user; the caller checks username uniqueness first
    AddUser(User),

    /// Remove a user by id
    DeleteUser(String),

    /// Replace a user's progress wholesale
    UpdateUserProgress { user_id: String, progress: Progress },

    /// Record a finished quiz attempt
    UpdateQuizResult {
        user_id: String,
        level: Level,
        score: u32,
        passed: bool,
    },

    /// Wipe a user's progress and quiz history
    ResetUserProgress(String),

    // === Vocabulary ===
    /// Replace the entire word inventory
    SetWords(Vec<Word>),

    /// Append one word; the caller generates a unique id
    AddWord(Word),

    /// Replace the word with the same id
    UpdateWord(Word),

    /// Remove a word by id
    DeleteWord(String),

    // === Bulk ===
    /// Replace users and words at once (startup, after import)
    LoadData { users: Vec<User>, words: Vec<Word> },
}

impl Action {
    /// Short name for logging, without the payload
    pub fn kind(&self) -> &'static str {
        match self {
            Action::SetCurrentUser(_) => "set_current_user",
            Action::AddUser(_) => "add_user",
            Action::DeleteUser(_) => "delete_user",
            Action::UpdateUserProgress { .. } => "update_user_progress",
            Action::UpdateQuizResult { .. } => "update_quiz_result",
            Action::ResetUserProgress(_) => "reset_user_progress",
            Action::SetWords(_) => "set_words",
            Action::AddWord(_) => "add_word",
            Action::UpdateWord(_) => "update_word",
            Action::DeleteWord(_) => "delete_word",
            Action::LoadData { .. } => "load_data",
        }
    }
}
