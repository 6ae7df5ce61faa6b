//! CLI integration tests for flash-export

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper to escape path for TOML on Windows
fn escape_path_for_toml(path: &str) -> String {
    path.replace('\\', "\\\\")
}

/// Config pointing at an isolated data directory
fn setup_test_env() -> (TempDir, PathBuf, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let data_dir = temp_dir.path().join("data");
    fs::create_dir_all(&data_dir).unwrap();

    let config_path = temp_dir.path().join("config.toml");
    fs::write(
        &config_path,
        format!(
            "[storage]\npath = \"{}\"\n",
            escape_path_for_toml(&data_dir.to_string_lossy())
        ),
    )
    .unwrap();

    (temp_dir, config_path, data_dir)
}

fn seed_words(data_dir: &std::path::Path) {
    let words = r#"[
        {"id":"w1","emoji":"🍎","english":"Apple","hebrew":"תפוח","level":1},
        {"id":"w2","emoji":"🐱","english":"Cat","hebrew":"חתול","level":1}
    ]"#;
    fs::write(data_dir.join("english-flashcards-words.json"), words).unwrap();
}

#[test]
fn test_help_flag_output() {
    let mut cmd = Command::cargo_bin("flash-export").unwrap();

    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("JSON backup"))
        .stdout(predicate::str::contains("--output"))
        .stdout(predicate::str::contains("--verbose"));
}

#[test]
fn test_export_to_stdout() {
    let (_temp_dir, config_path, data_dir) = setup_test_env();
    seed_words(&data_dir);

    let mut cmd = Command::cargo_bin("flash-export").unwrap();
    let output = cmd
        .env("FLASHCARDS_CONFIG", &config_path)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let backup: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(backup["version"], "1.0");
    assert!(backup["exportDate"].is_string());
    assert_eq!(backup["users"].as_array().unwrap().len(), 0);
    assert_eq!(backup["words"].as_array().unwrap().len(), 2);
    assert!(backup["currentUser"].is_null());
}

#[test]
fn test_export_into_directory_uses_dated_name() {
    let (temp_dir, config_path, data_dir) = setup_test_env();
    seed_words(&data_dir);
    let out_dir = temp_dir.path().join("backups");
    fs::create_dir_all(&out_dir).unwrap();

    let mut cmd = Command::cargo_bin("flash-export").unwrap();
    cmd.env("FLASHCARDS_CONFIG", &config_path)
        .arg("--output")
        .arg(&out_dir)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let entries: Vec<_> = fs::read_dir(&out_dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    assert_eq!(entries.len(), 1);
    assert!(entries[0].starts_with("english-flashcards-backup-"));
    assert!(entries[0].ends_with(".json"));
}

#[test]
fn test_export_with_empty_data_dir() {
    let (_temp_dir, config_path, _data_dir) = setup_test_env();

    let mut cmd = Command::cargo_bin("flash-export").unwrap();
    cmd.env("FLASHCARDS_CONFIG", &config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"words\": []"));
}
