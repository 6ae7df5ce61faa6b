//! Application state
//!
//! Immutable state structure. All state transitions happen through the
//! reducer (see `reducer.rs`).

use crate::types::{User, Word};

/// Root application state
///
/// The single source of truth for profiles and vocabulary. When a user is
/// selected, `current_user` is always identical to that user's entry in
/// `users`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    /// Selected profile, if any
    pub current_user: Option<User>,

    /// All local profiles, unique by id
    pub users: Vec<User>,

    /// Word inventory, unique by id
    pub words: Vec<Word>,
}

impl AppState {
    /// Create new application state with no users and no words
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user(&self, user_id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == user_id)
    }

    pub fn word(&self, word_id: &str) -> Option<&Word> {
        self.words.iter().find(|w| w.id == word_id)
    }

    pub fn is_current_user(&self, user_id: &str) -> bool {
        self.current_user
            .as_ref()
            .is_some_and(|current| current.id == user_id)
    }

    /// Does any profile already use this username (case-insensitive)?
    pub fn username_taken(&self, username: &str) -> bool {
        let wanted = username.to_lowercase();
        self.users
            .iter()
            .any(|u| u.username.to_lowercase() == wanted)
    }
}
