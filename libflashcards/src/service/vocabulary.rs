//! Word form validation for managing the word list

use crate::error::FieldError;
use crate::types::{Level, Word};

/// Raw input for adding or editing a word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordForm {
    pub emoji: String,
    pub english: String,
    pub hebrew: String,
    pub level: i64,
}

impl Default for WordForm {
    fn default() -> Self {
        Self {
            emoji: String::new(),
            english: String::new(),
            hebrew: String::new(),
            level: 1,
        }
    }
}

/// Validate `form` and build a trimmed word
///
/// Keeps `existing_id` when editing, otherwise generates a new id.
pub fn build_word(form: &WordForm, existing_id: Option<&str>) -> Result<Word, Vec<FieldError>> {
    let mut errors = Vec::new();

    let emoji = form.emoji.trim();
    let english = form.english.trim();
    let hebrew = form.hebrew.trim();

    if emoji.is_empty() {
        errors.push(FieldError::new("emoji", "Emoji is required"));
    }
    if english.is_empty() {
        errors.push(FieldError::new("english", "English word is required"));
    }
    if hebrew.is_empty() {
        errors.push(FieldError::new("hebrew", "Hebrew translation is required"));
    }

    let level = Level::try_from(form.level).ok().filter(|&l| l >= 1);
    if level.is_none() {
        errors.push(FieldError::new("level", "Level must be at least 1"));
    }

    match level {
        Some(level) if errors.is_empty() => {
            let mut word = Word::new(emoji, english, hebrew, level);
            if let Some(id) = existing_id {
                word.id = id.to_string();
            }
            Ok(word)
        }
        _ => Err(errors),
    }
}
