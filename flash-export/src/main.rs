//! flash-export - Back up flashcards data
//!
//! Writes every persisted profile and word, plus the selected profile, as a
//! single JSON backup that `flash-import` (or the browser app) can restore.

use anyhow::{Context, Result};
use clap::Parser;
use libflashcards::config::Config;
use libflashcards::storage::{FileStore, Persistence};
use libflashcards::transfer::export_all_data;
use tracing::{error, info};

pub mod backup;

#[derive(Parser)]
#[command(name = "flash-export")]
#[command(about = "Export flashcards profiles and words to a JSON backup", long_about = None)]
struct Cli {
    /// Output file, or directory for a dated backup file (default: stdout)
    #[arg(short, long)]
    output: Option<String>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    libflashcards::logging::init_with_verbosity(cli.verbose);

    let config = Config::load().context("Failed to load configuration")?;
    let data_dir = config.storage.resolved_path();
    info!("Reading flashcards data from {}", data_dir.display());

    let persistence = Persistence::new(FileStore::new(data_dir));
    let data = export_all_data(&persistence);

    match backup::write_backup(&data, cli.output.as_deref()) {
        Ok(Some(path)) => {
            info!(
                "Exported {} users and {} words to {}",
                data.users.len(),
                data.words.len(),
                path.display()
            );
            Ok(())
        }
        Ok(None) => Ok(()),
        Err(e) => {
            error!("Export failed: {:#}", e);
            std::process::exit(1);
        }
    }
}
