//! Backup export and import
//!
//! Export snapshots whatever is in persistence (which may lag the live state).
//! Import validates an untyped JSON payload first and only then replaces or
//! merges it into persistence; a rejected payload writes nothing. Callers
//! re-seed their state engine from persistence afterwards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::error::{FieldError, ImportError};
use crate::storage::{KeyValueStore, Persistence};
use crate::types::{User, Word};

/// Format version written into every export
pub const EXPORT_VERSION: &str = "1.0";

/// Timestamp of a backup, serialized as ISO-8601
pub type ExportDate = DateTime<Utc>;

/// Backup file contents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportData {
    pub version: String,
    pub export_date: ExportDate,
    pub users: Vec<User>,
    pub words: Vec<Word>,
    pub current_user: Option<User>,
}

/// Validated import payload; every category is optional
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportPayload {
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub users: Option<Vec<User>>,
    #[serde(default)]
    pub words: Option<Vec<Word>>,
    #[serde(default)]
    pub current_user: Option<User>,
}

impl From<ExportData> for ImportPayload {
    fn from(data: ExportData) -> Self {
        Self {
            version: Some(data.version),
            users: Some(data.users),
            words: Some(data.words),
            current_user: data.current_user,
        }
    }
}

/// How imported data combines with what is already stored
///
/// `replace_all` wins over the merge flags. A category present in the payload
/// whose merge flag is off is appended to the stored list as-is, duplicate ids
/// included.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportOptions {
    pub merge_users: bool,
    pub merge_words: bool,
    pub replace_all: bool,
}

impl ImportOptions {
    pub fn replace_all() -> Self {
        Self {
            replace_all: true,
            ..Self::default()
        }
    }

    pub fn merge() -> Self {
        Self {
            merge_users: true,
            merge_words: true,
            replace_all: false,
        }
    }
}

/// Counts reported after a successful import
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    pub users: usize,
    pub words: usize,
}

impl ImportSummary {
    pub fn message(&self) -> String {
        format!(
            "Import successful! {} users and {} words imported.",
            self.users, self.words
        )
    }
}

/// Snapshot everything currently persisted
pub fn export_all_data<S: KeyValueStore>(persistence: &Persistence<S>) -> ExportData {
    let data = ExportData {
        version: EXPORT_VERSION.to_string(),
        export_date: Utc::now(),
        users: persistence.load_users(),
        words: persistence.load_words(),
        current_user: persistence.load_current_user(),
    };
    debug!(
        "Exported {} users and {} words",
        data.users.len(),
        data.words.len()
    );
    data
}

/// File name for a backup taken at `at`
pub fn default_backup_filename(at: DateTime<Utc>) -> String {
    format!("english-flashcards-backup-{}.json", at.format("%Y-%m-%d"))
}

/// Read and parse an import file
pub async fn read_import_file(path: impl AsRef<Path>) -> Result<Value, ImportError> {
    let content = tokio::fs::read_to_string(path.as_ref()).await?;
    Ok(serde_json::from_str(&content)?)
}

/// Check an untyped payload and convert it into an [`ImportPayload`]
///
/// Collects one [`FieldError`] per offending field instead of stopping at the
/// first problem. Only a non-object top level short-circuits.
pub fn validate_import_data(data: &Value) -> Result<ImportPayload, Vec<FieldError>> {
    let Some(object) = data.as_object() else {
        return Err(vec![FieldError::new(
            "Invalid data format",
            "expected JSON object",
        )]);
    };

    let mut errors = Vec::new();

    if let Some(version) = present(object.get("version")) {
        if !version.is_string() {
            errors.push(FieldError::new("version", "invalid version format"));
        }
    }

    if let Some(users) = present(object.get("users")) {
        match users.as_array() {
            Some(users) => {
                for (index, user) in users.iter().enumerate() {
                    check_user(user, &format!("User {}", index + 1), &mut errors);
                }
            }
            None => errors.push(FieldError::new("users", "must be an array")),
        }
    }

    if let Some(words) = present(object.get("words")) {
        match words.as_array() {
            Some(words) => {
                for (index, word) in words.iter().enumerate() {
                    check_word(word, &format!("Word {}", index + 1), &mut errors);
                }
            }
            None => errors.push(FieldError::new("words", "must be an array")),
        }
    }

    if let Some(current) = present(object.get("currentUser")) {
        check_user(current, "Current user", &mut errors);
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    // Shape checks passed; anything serde still rejects is nested detail
    ImportPayload::deserialize(data).map_err(|e| vec![FieldError::new("data", e.to_string())])
}

/// Validate, then replace or merge `data` into persistence
pub fn import_data<S: KeyValueStore>(
    persistence: &mut Persistence<S>,
    data: &Value,
    options: ImportOptions,
) -> Result<ImportSummary, ImportError> {
    let payload = validate_import_data(data).map_err(|errors| {
        warn!("Rejected import with {} problems", errors.len());
        ImportError::Validation(errors)
    })?;

    let summary = ImportSummary {
        users: payload.users.as_ref().map_or(0, Vec::len),
        words: payload.words.as_ref().map_or(0, Vec::len),
    };

    let (users, words, current_user) = if options.replace_all {
        (
            payload.users.unwrap_or_default(),
            payload.words.unwrap_or_default(),
            payload.current_user,
        )
    } else {
        let users = match payload.users {
            Some(imported) if options.merge_users => {
                merge_users(persistence.load_users(), imported)
            }
            Some(imported) => concat(persistence.load_users(), imported),
            None => persistence.load_users(),
        };

        let words = match payload.words {
            Some(imported) if options.merge_words => {
                merge_words(persistence.load_words(), imported)
            }
            Some(imported) => concat(persistence.load_words(), imported),
            None => persistence.load_words(),
        };

        let current_user = payload
            .current_user
            .filter(|current| users.iter().any(|u| u.id == current.id));

        (users, words, current_user)
    };

    if !users.is_empty() {
        persistence.save_users(&users);
    }
    if !words.is_empty() {
        persistence.save_words(&words);
    }
    if let Some(current) = &current_user {
        persistence.save_current_user(Some(current));
    }

    info!(
        "Imported {} users and {} words (replace_all: {}, merge_users: {}, merge_words: {})",
        summary.users, summary.words, options.replace_all, options.merge_users, options.merge_words
    );
    Ok(summary)
}

/// Merge users by id
///
/// A colliding user keeps its identity but takes the imported username; its
/// completed levels are unioned, the higher current level wins, and imported
/// quiz results overwrite stored ones level by level.
pub fn merge_users(existing: Vec<User>, imported: Vec<User>) -> Vec<User> {
    let mut merged = existing;
    for incoming in imported {
        match merged.iter_mut().find(|u| u.id == incoming.id) {
            Some(current) => {
                current.username = incoming.username;
                current
                    .progress
                    .completed_levels
                    .extend(incoming.progress.completed_levels);
                current.progress.current_level = current
                    .progress
                    .current_level
                    .max(incoming.progress.current_level);
                current.quiz_results.extend(incoming.quiz_results);
            }
            None => merged.push(incoming),
        }
    }
    merged
}

/// Merge words by id; an imported word replaces the stored one wholesale
pub fn merge_words(existing: Vec<Word>, imported: Vec<Word>) -> Vec<Word> {
    let mut merged = existing;
    for incoming in imported {
        match merged.iter_mut().find(|w| w.id == incoming.id) {
            Some(current) => *current = incoming,
            None => merged.push(incoming),
        }
    }
    merged
}

// TODO: appending without de-duplication can store two records with the same
// id; decide whether this path should merge by id too.
fn concat<T>(mut existing: Vec<T>, imported: Vec<T>) -> Vec<T> {
    existing.extend(imported);
    existing
}

/// Treat JSON `null` like an absent field
fn present(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| !v.is_null())
}

fn non_empty_string(value: Option<&Value>) -> bool {
    value
        .and_then(Value::as_str)
        .is_some_and(|s| !s.is_empty())
}

fn level_number(value: &Value) -> Option<u32> {
    value.as_u64().and_then(|n| u32::try_from(n).ok())
}

fn check_user(user: &Value, subject: &str, errors: &mut Vec<FieldError>) {
    if !non_empty_string(user.get("id")) {
        errors.push(FieldError::new(subject, "missing or invalid ID"));
    }
    if !non_empty_string(user.get("username")) {
        errors.push(FieldError::new(subject, "missing or invalid username"));
    }

    match user.get("progress").filter(|p| p.is_object()) {
        Some(progress) => {
            match progress.get("completedLevels").and_then(Value::as_array) {
                Some(levels) => {
                    if !levels.iter().all(|l| level_number(l).is_some()) {
                        errors.push(FieldError::new(
                            subject,
                            "completedLevels must contain only level numbers",
                        ));
                    }
                }
                None => errors.push(FieldError::new(
                    subject,
                    "completedLevels must be an array",
                )),
            }
            if progress
                .get("currentLevel")
                .and_then(level_number)
                .is_none()
            {
                errors.push(FieldError::new(subject, "currentLevel must be a number"));
            }
        }
        None => errors.push(FieldError::new(subject, "missing or invalid progress")),
    }

    if !user.get("quizResults").is_some_and(Value::is_object) {
        errors.push(FieldError::new(subject, "missing or invalid quizResults"));
    }
}

fn check_word(word: &Value, subject: &str, errors: &mut Vec<FieldError>) {
    for (field, label) in [
        ("id", "ID"),
        ("emoji", "emoji"),
        ("english", "english"),
        ("hebrew", "hebrew"),
    ] {
        if !non_empty_string(word.get(field)) {
            errors.push(FieldError::new(
                subject,
                format!("missing or invalid {}", label),
            ));
        }
    }

    if !word
        .get("level")
        .and_then(level_number)
        .is_some_and(|level| level >= 1)
    {
        errors.push(FieldError::new(subject, "level must be a positive number"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn user_json(id: &str, username: &str) -> Value {
        json!({
            "id": id,
            "username": username,
            "progress": { "completedLevels": [], "currentLevel": 1 },
            "quizResults": {}
        })
    }

    fn word_json(id: &str, english: &str, level: u32) -> Value {
        json!({ "id": id, "emoji": "🔤", "english": english, "hebrew": "מילה", "level": level })
    }

    fn messages(errors: &[FieldError]) -> Vec<String> {
        errors.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_rejects_non_object() {
        let errors = validate_import_data(&json!([1, 2, 3])).unwrap_err();
        assert_eq!(
            messages(&errors),
            vec!["Invalid data format: expected JSON object"]
        );
        assert!(validate_import_data(&Value::Null).is_err());
    }

    #[test]
    fn test_accepts_empty_object() {
        let payload = validate_import_data(&json!({})).unwrap();
        assert_eq!(payload, ImportPayload::default());
    }

    #[test]
    fn test_rejects_non_array_collections() {
        let errors =
            validate_import_data(&json!({ "users": {}, "words": "lots" })).unwrap_err();
        assert_eq!(
            messages(&errors),
            vec!["users: must be an array", "words: must be an array"]
        );
    }

    #[test]
    fn test_itemizes_user_problems() {
        let data = json!({
            "users": [
                user_json("u1", "Maya"),
                { "id": "", "username": 5, "progress": { "completedLevels": "1", "currentLevel": "2" } }
            ]
        });
        let errors = validate_import_data(&data).unwrap_err();
        assert_eq!(
            messages(&errors),
            vec![
                "User 2: missing or invalid ID",
                "User 2: missing or invalid username",
                "User 2: completedLevels must be an array",
                "User 2: currentLevel must be a number",
                "User 2: missing or invalid quizResults",
            ]
        );
    }

    #[test]
    fn test_itemizes_word_problems() {
        let data = json!({
            "words": [
                word_json("w1", "Apple", 1),
                { "id": "w2", "emoji": "", "english": "Pear", "level": 0 }
            ]
        });
        let errors = validate_import_data(&data).unwrap_err();
        assert_eq!(
            messages(&errors),
            vec![
                "Word 2: missing or invalid emoji",
                "Word 2: missing or invalid hebrew",
                "Word 2: level must be a positive number",
            ]
        );
    }

    #[test]
    fn test_nested_shape_problems_are_reported() {
        let mut user = user_json("u1", "Maya");
        user["quizResults"] = json!({ "1": { "score": "high" } });
        let errors = validate_import_data(&json!({ "users": [user] })).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].subject, "data");
    }

    #[test]
    fn test_null_collections_count_as_absent() {
        let payload =
            validate_import_data(&json!({ "users": null, "currentUser": null })).unwrap();
        assert!(payload.users.is_none());
        assert!(payload.current_user.is_none());
    }

    #[test]
    fn test_merge_users_combines_progress() {
        let mut existing = User::new("maya");
        existing.id = "u1".to_string();
        existing.progress.completed_levels.insert(1);
        existing.progress.current_level = 2;
        existing.quiz_results.insert(
            1,
            crate::types::QuizResult {
                score: 80,
                passed: true,
                attempts: 2,
            },
        );

        let mut imported = existing.clone();
        imported.username = "Maya".to_string();
        imported.progress.completed_levels = [2].into_iter().collect();
        imported.progress.current_level = 2;
        imported.quiz_results.clear();
        imported.quiz_results.insert(
            2,
            crate::types::QuizResult {
                score: 90,
                passed: true,
                attempts: 1,
            },
        );

        let merged = merge_users(vec![existing], vec![imported]);
        assert_eq!(merged.len(), 1);
        let user = &merged[0];
        assert_eq!(user.username, "Maya");
        assert_eq!(
            user.progress.completed_levels.iter().copied().collect::<Vec<_>>(),
            vec![1, 2]
        );
        assert_eq!(user.progress.current_level, 2);
        assert_eq!(user.quiz_results.len(), 2);
    }

    #[test]
    fn test_merge_words_overwrites_by_id() {
        let old = Word {
            id: "w1".to_string(),
            emoji: "🍎".to_string(),
            english: "Apple".to_string(),
            hebrew: "תפוח".to_string(),
            level: 1,
        };
        let new = Word {
            level: 2,
            ..old.clone()
        };
        let extra = Word {
            id: "w2".to_string(),
            ..old.clone()
        };

        let merged = merge_words(vec![old], vec![new.clone(), extra.clone()]);
        assert_eq!(merged, vec![new, extra]);
    }

    #[test]
    fn test_default_backup_filename() {
        let at = DateTime::parse_from_rfc3339("2026-03-09T10:30:00Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(
            default_backup_filename(at),
            "english-flashcards-backup-2026-03-09.json"
        );
    }

    #[test]
    fn test_summary_message() {
        let summary = ImportSummary { users: 2, words: 5 };
        assert_eq!(
            summary.message(),
            "Import successful! 2 users and 5 words imported."
        );
    }
}
