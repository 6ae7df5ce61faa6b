//! Configuration management for Flashcards

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};
use crate::quiz::{DEFAULT_PASS_SCORE, MAX_QUESTIONS};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub quiz: QuizConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the persisted records
    pub path: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizConfig {
    /// Upper bound on questions per quiz
    #[serde(default = "default_question_count")]
    pub question_count: usize,
    /// Minimum percentage needed to pass
    #[serde(default = "default_pass_score")]
    pub pass_score: u32,
}

fn default_question_count() -> usize {
    MAX_QUESTIONS
}

fn default_pass_score() -> u32 {
    DEFAULT_PASS_SCORE
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: "~/.local/share/flashcards".to_string(),
        }
    }
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            question_count: MAX_QUESTIONS,
            pass_score: DEFAULT_PASS_SCORE,
        }
    }
}

impl StorageConfig {
    /// Storage directory with `~` expanded
    pub fn resolved_path(&self) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&self.path).to_string())
    }
}

impl Config {
    /// Load configuration from the default location
    ///
    /// A missing config file is not an error; defaults are used instead.
    pub fn load() -> Result<Self> {
        let config_path = resolve_config_path()?;
        if !config_path.exists() {
            tracing::debug!(
                "No config file at {}, using defaults",
                config_path.display()
            );
            return Ok(Self::default_config());
        }
        Self::load_from_path(&config_path)
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        let config: Config = toml::from_str(&content).map_err(ConfigError::ParseError)?;
        Ok(config)
    }

    /// Create a default configuration
    pub fn default_config() -> Self {
        Self::default()
    }
}

/// Resolve the configuration file path following XDG Base Directory spec
pub fn resolve_config_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var("FLASHCARDS_CONFIG") {
        return Ok(PathBuf::from(shellexpand::tilde(&path).to_string()));
    }

    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::MissingField("config directory".to_string()))?;

    Ok(config_dir.join("flashcards").join("config.toml"))
}

/// Resolve the data directory path following XDG Base Directory spec
pub fn resolve_data_path() -> Result<PathBuf> {
    let data_dir = dirs::data_dir()
        .ok_or_else(|| ConfigError::MissingField("data directory".to_string()))?;

    Ok(data_dir.join("flashcards"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;

    #[test]
    fn test_default_config_values() {
        let config = Config::default_config();
        assert_eq!(config.quiz.question_count, 10);
        assert_eq!(config.quiz.pass_score, 70);
        assert_eq!(config.storage.path, "~/.local/share/flashcards");
    }

    #[test]
    fn test_load_from_path_partial_sections() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[quiz]\npass_score = 80").unwrap();

        let config = Config::load_from_path(file.path()).unwrap();
        assert_eq!(config.quiz.pass_score, 80);
        assert_eq!(config.quiz.question_count, 10);
        assert_eq!(config.storage, StorageConfig::default());
    }

    #[test]
    fn test_load_from_path_invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[storage\npath = ").unwrap();

        let result = Config::load_from_path(file.path());
        assert!(matches!(
            result,
            Err(crate::FlashcardsError::Config(ConfigError::ParseError(_)))
        ));
    }

    #[test]
    fn test_resolved_path_expands_tilde() {
        let storage = StorageConfig {
            path: "~/cards".to_string(),
        };
        assert!(!storage.resolved_path().to_string_lossy().starts_with('~'));
    }

    #[test]
    #[serial]
    fn test_config_path_from_env() {
        std::env::set_var("FLASHCARDS_CONFIG", "/tmp/flashcards-test/config.toml");
        let path = resolve_config_path().unwrap();
        std::env::remove_var("FLASHCARDS_CONFIG");

        assert_eq!(path, PathBuf::from("/tmp/flashcards-test/config.toml"));
    }

    #[test]
    #[serial]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::TempDir::new().unwrap();
        let missing = dir.path().join("nope.toml");
        std::env::set_var("FLASHCARDS_CONFIG", missing.to_str().unwrap());
        let config = Config::load().unwrap();
        std::env::remove_var("FLASHCARDS_CONFIG");

        assert_eq!(config, Config::default_config());
    }
}
