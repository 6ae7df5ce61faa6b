//! Backup file import

use libflashcards::error::ImportError;
use libflashcards::storage::{KeyValueStore, Persistence};
use libflashcards::transfer::{import_data, read_import_file, validate_import_data};
use libflashcards::{FlashcardsError, ImportOptions, ImportSummary};
use tracing::debug;

/// Read `path` and import it, or only validate it when `dry_run` is set
pub async fn run_import<S: KeyValueStore>(
    persistence: &mut Persistence<S>,
    path: &str,
    options: ImportOptions,
    dry_run: bool,
) -> Result<ImportSummary, FlashcardsError> {
    debug!("Reading backup from {}", path);
    let data = read_import_file(path).await?;

    if dry_run {
        let payload = validate_import_data(&data).map_err(ImportError::Validation)?;
        return Ok(ImportSummary {
            users: payload.users.map_or(0, |u| u.len()),
            words: payload.words.map_or(0, |w| w.len()),
        });
    }

    Ok(import_data(persistence, &data, options)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use libflashcards::storage::MemoryStore;
    use serde_json::json;
    use tempfile::TempDir;

    fn write_backup(dir: &TempDir, content: &str) -> String {
        let path = dir.path().join("backup.json");
        std::fs::write(&path, content).unwrap();
        path.to_string_lossy().to_string()
    }

    fn backup_json() -> String {
        json!({
            "version": "1.0",
            "users": [],
            "words": [
                { "id": "w1", "emoji": "🍎", "english": "Apple", "hebrew": "תפוח", "level": 1 }
            ]
        })
        .to_string()
    }

    #[tokio::test]
    async fn test_dry_run_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let path = write_backup(&dir, &backup_json());
        let mut persistence = Persistence::new(MemoryStore::new());

        let summary = run_import(&mut persistence, &path, ImportOptions::default(), true)
            .await
            .unwrap();

        assert_eq!(summary.words, 1);
        assert!(persistence.store().is_empty());
    }

    #[tokio::test]
    async fn test_import_writes_words() {
        let dir = TempDir::new().unwrap();
        let path = write_backup(&dir, &backup_json());
        let mut persistence = Persistence::new(MemoryStore::new());

        run_import(&mut persistence, &path, ImportOptions::merge(), false)
            .await
            .unwrap();

        assert_eq!(persistence.load_words().len(), 1);
    }

    #[tokio::test]
    async fn test_malformed_json_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = write_backup(&dir, "{ \"users\": [");
        let mut persistence = Persistence::new(MemoryStore::new());

        let error = run_import(&mut persistence, &path, ImportOptions::default(), false)
            .await
            .unwrap_err();

        assert!(matches!(
            error,
            FlashcardsError::Import(ImportError::Parse(_))
        ));
        assert_eq!(error.exit_code(), 3);
    }

    #[tokio::test]
    async fn test_missing_file_is_read_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.json");
        let mut persistence = Persistence::new(MemoryStore::new());

        let error = run_import(
            &mut persistence,
            path.to_str().unwrap(),
            ImportOptions::default(),
            false,
        )
        .await
        .unwrap_err();

        assert!(matches!(error, FlashcardsError::Import(ImportError::Read(_))));
        assert_eq!(error.exit_code(), 1);
    }
}
