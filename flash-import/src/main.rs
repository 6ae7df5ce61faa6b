//! flash-import - Restore or merge a flashcards backup
//!
//! Reads a JSON backup (as written by `flash-export` or the browser app),
//! validates it, and replaces or merges it into the local data directory.

use anyhow::{Context, Result};
use clap::Parser;
use libflashcards::config::Config;
use libflashcards::storage::{FileStore, Persistence};
use libflashcards::{FlashcardsError, ImportOptions};
use tracing::{error, info};

pub mod backup;

#[derive(Parser)]
#[command(name = "flash-import")]
#[command(about = "Import a flashcards JSON backup", long_about = None)]
struct Cli {
    /// Backup file to import
    file: String,

    /// Replace all stored users and words with the backup contents
    #[arg(long, conflicts_with_all = ["merge_users", "merge_words"])]
    replace_all: bool,

    /// Merge users with matching ids instead of appending them
    #[arg(long)]
    merge_users: bool,

    /// Merge words with matching ids instead of appending them
    #[arg(long)]
    merge_words: bool,

    /// Validate the backup without writing anything
    #[arg(long)]
    dry_run: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    libflashcards::logging::init_with_verbosity(cli.verbose);

    let config = Config::load().context("Failed to load configuration")?;
    let data_dir = config.storage.resolved_path();

    let options = ImportOptions {
        merge_users: cli.merge_users,
        merge_words: cli.merge_words,
        replace_all: cli.replace_all,
    };

    let path = shellexpand::tilde(&cli.file).to_string();
    let mut persistence = Persistence::new(FileStore::new(&data_dir));

    match backup::run_import(&mut persistence, &path, options, cli.dry_run).await {
        Ok(summary) => {
            info!("Import into {} completed", data_dir.display());
            if cli.dry_run {
                println!(
                    "Backup is valid: {} users and {} words would be imported.",
                    summary.users, summary.words
                );
            } else {
                println!("{}", summary.message());
            }
            Ok(())
        }
        Err(e) => {
            error!("Import failed: {}", e);
            report(&e);
            std::process::exit(e.exit_code());
        }
    }
}

fn report(error: &FlashcardsError) {
    match error {
        FlashcardsError::Import(import_error) if !import_error.field_errors().is_empty() => {
            eprintln!("Import failed:");
            for field_error in import_error.field_errors() {
                eprintln!("  - {}", field_error);
            }
        }
        other => eprintln!("Error: {}", other),
    }
}
