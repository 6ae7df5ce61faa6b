//! Backup file writing

use anyhow::{Context, Result};
use libflashcards::transfer::{default_backup_filename, ExportData};
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;

/// Where a backup should go for the `--output` argument
///
/// An existing directory gets a dated file name inside it.
pub fn resolve_output_path(data: &ExportData, output: &str) -> PathBuf {
    let path = PathBuf::from(shellexpand::tilde(output).to_string());
    if path.is_dir() {
        path.join(default_backup_filename(data.export_date))
    } else {
        path
    }
}

/// Write `data` as pretty JSON to `output`, or stdout when `None`
///
/// Returns the file written, if any.
pub fn write_backup(data: &ExportData, output: Option<&str>) -> Result<Option<PathBuf>> {
    let json = serde_json::to_string_pretty(data).context("Failed to serialize backup")?;

    match output {
        Some(output) => {
            let path = resolve_output_path(data, output);
            std::fs::write(&path, format!("{}\n", json))
                .with_context(|| format!("Failed to write backup file: {}", path.display()))?;
            Ok(Some(path))
        }
        None => {
            debug!("Exporting to stdout");
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", json).context("Failed to write backup to stdout")?;
            Ok(None)
        }
    }
}
