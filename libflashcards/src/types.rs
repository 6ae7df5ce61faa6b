//! Core types for Flashcards
//!
//! Field names serialize in camelCase so persisted records and backup files
//! keep the layout the browser front end reads.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use uuid::Uuid;

/// Curriculum tier, starting at 1
pub type Level = u32;

/// Per-level quiz bookkeeping, keyed by level
pub type QuizResults = BTreeMap<Level, QuizResult>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    pub id: String,
    pub emoji: String,
    pub english: String,
    pub hebrew: String,
    pub level: Level,
}

impl Word {
    /// Build a word with a freshly generated id
    pub fn new(
        emoji: impl Into<String>,
        english: impl Into<String>,
        hebrew: impl Into<String>,
        level: Level,
    ) -> Self {
        Self {
            id: format!("word-{}", Uuid::new_v4()),
            emoji: emoji.into(),
            english: english.into(),
            hebrew: hebrew.into(),
            level,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    /// Passed levels, ascending and unique
    pub completed_levels: BTreeSet<Level>,
    pub current_level: Level,
}

impl Default for Progress {
    fn default() -> Self {
        Self {
            completed_levels: BTreeSet::new(),
            current_level: 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizResult {
    /// Percentage of the most recent attempt
    pub score: u32,
    pub passed: bool,
    pub attempts: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub progress: Progress,
    pub quiz_results: QuizResults,
}

impl User {
    /// Fresh profile with default progress and no quiz history
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            username: username.into(),
            progress: Progress::default(),
            quiz_results: QuizResults::new(),
        }
    }

    pub fn has_completed(&self, level: Level) -> bool {
        self.progress.completed_levels.contains(&level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_defaults() {
        let user = User::new("dana");
        assert_eq!(user.username, "dana");
        assert_eq!(user.progress.current_level, 1);
        assert!(user.progress.completed_levels.is_empty());
        assert!(user.quiz_results.is_empty());
    }

    #[test]
    fn test_new_users_get_unique_ids() {
        assert_ne!(User::new("a").id, User::new("a").id);
        assert_ne!(
            Word::new("🍎", "Apple", "תפוח", 1).id,
            Word::new("🍎", "Apple", "תפוח", 1).id
        );
    }

    #[test]
    fn test_word_id_prefix() {
        let word = Word::new("🐱", "Cat", "חתול", 1);
        assert!(word.id.starts_with("word-"));
    }

    #[test]
    fn test_user_serializes_camel_case() {
        let mut user = User::new("noa");
        user.progress.completed_levels.insert(2);
        user.progress.completed_levels.insert(1);
        user.quiz_results.insert(
            1,
            QuizResult {
                score: 90,
                passed: true,
                attempts: 1,
            },
        );

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["progress"]["completedLevels"], serde_json::json!([1, 2]));
        assert_eq!(json["progress"]["currentLevel"], 1);
        assert_eq!(json["quizResults"]["1"]["score"], 90);
    }

    #[test]
    fn test_user_deserializes_string_level_keys() {
        let json = r#"{
            "id": "u1",
            "username": "Lior",
            "progress": { "completedLevels": [3, 1, 3], "currentLevel": 4 },
            "quizResults": { "3": { "score": 70, "passed": true, "attempts": 2 } }
        }"#;

        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(
            user.progress.completed_levels.iter().copied().collect::<Vec<_>>(),
            vec![1, 3]
        );
        assert_eq!(user.quiz_results[&3].attempts, 2);
        assert!(user.has_completed(3));
        assert!(!user.has_completed(2));
    }
}
