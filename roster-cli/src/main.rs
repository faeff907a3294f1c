//! Roster CLI - command-line front end for the student roster.
//!
//! Each invocation opens the database, builds a fresh [`RecordCache`] over
//! it, runs exactly one operation and exits. Mutations go through the cache
//! so they get the same normalization and derived-metric handling as any
//! other caller; `list` queries storage directly.
//!
//! Configuration comes from the environment (see [`config`]); `--db`
//! overrides the database path for a single run.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use roster::persistence::sqlite::{Database, SqliteStudentGateway};
use roster::{PersistenceError, RecordCache, Scores, SortKey, StudentRecord};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod config;
mod output;

/// Top-level CLI arguments.
#[derive(Parser)]
#[command(name = "roster", about = "Manage student score records")]
struct Cli {
    /// Database file; overrides ROSTER_DATABASE_PATH.
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Print listings as JSON instead of a tab-separated table.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Scores and name shared by `add` and `update`.
#[derive(clap::Args)]
struct StudentArgs {
    /// Student ID (primary key).
    id: String,
    name: String,
    #[arg(allow_negative_numbers = true)]
    korean: i64,
    #[arg(allow_negative_numbers = true)]
    english: i64,
    #[arg(allow_negative_numbers = true)]
    math: i64,
    #[arg(allow_negative_numbers = true)]
    science: i64,
}

impl StudentArgs {
    /// Scores outside 0..=100 are clamped here, before anything is stored.
    fn into_record(self) -> StudentRecord {
        StudentRecord::new(
            self.id,
            self.name,
            Scores::new(self.korean, self.english, self.math, self.science),
        )
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new student.
    Add(StudentArgs),
    /// Replace the name and scores of an existing student.
    Update(StudentArgs),
    /// Delete a student by ID.
    Delete {
        id: String,
    },
    /// Show one student by ID.
    Find {
        id: String,
    },
    /// Load all students and print them sorted in memory.
    Sort {
        /// name, id or total
        key: SortKey,
    },
    /// Print all students sorted by the database.
    List {
        /// name, id or total
        key: SortKey,
    },
}

/// Error type for CLI setup.
#[derive(Debug, thiserror::Error)]
enum CliError {
    /// The database could not be opened or bootstrapped.
    #[error("failed to open database at {path}: {source}")]
    OpenDatabase {
        path: PathBuf,
        #[source]
        source: PersistenceError,
    },
}

/// Install the tracing subscriber. Logs go to a daily rolling file when
/// `ROSTER_LOG_DIR` is set and to stderr otherwise. The returned guard must
/// live until exit so buffered file output is flushed.
fn init_tracing() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    match config::get_log_dir() {
        Some(log_dir) => {
            std::fs::create_dir_all(&log_dir).ok();
            let file_appender = tracing_appender::rolling::daily(log_dir, "roster");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(non_blocking)
                        .with_ansi(false)
                        .with_target(true)
                        .with_line_number(true),
                )
                .with(filter)
                .init();
            Some(guard)
        }
        None => {
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(std::io::stderr))
                .with(filter)
                .init();
            None
        }
    }
}

async fn open_database(path: PathBuf) -> Result<Database, CliError> {
    Database::open(&path, config::get_max_connections())
        .await
        .map_err(|source| CliError::OpenDatabase { path, source })
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let db_path = cli.db.unwrap_or_else(config::get_database_path);
    tracing::debug!(path = %db_path.display(), "Using database");

    let db = open_database(db_path).await?;
    let mut cache = RecordCache::new(SqliteStudentGateway::new(db.pool().clone()));

    match cli.command {
        Commands::Add(args) => {
            let record = args.into_record();
            let summary = summary(&record);
            cache.add(record).await.context("add failed")?;
            println!("Added {summary}");
        }
        Commands::Update(args) => {
            let record = args.into_record();
            cache.apply_update(&record).await.context("update failed")?;
            println!("Updated {}", summary(&record));
        }
        Commands::Delete { id } => {
            cache.remove(&id).await.context("delete failed")?;
            println!("Deleted {id}");
        }
        Commands::Find { id } => match cache.find_by_id(&id).await? {
            Some(record) => output::print_rows(&[record.to_listing()], cli.json)?,
            None => println!("No student found with ID {id}"),
        },
        Commands::Sort { key } => {
            cache.ensure_loaded().await?;
            cache.sort(key);
            output::print_rows(&cache.listing(), cli.json)?;
        }
        Commands::List { key } => {
            let rows = cache
                .list_all_sorted(key)
                .await
                .context("storage listing failed")?;
            output::print_rows(&rows, cli.json)?;
        }
    }

    db.close().await;
    Ok(())
}

fn summary(record: &StudentRecord) -> String {
    format!(
        "{} {} (total {}, average {:.2}, grade {})",
        record.id(),
        record.name(),
        record.total(),
        record.average(),
        record.grade()
    )
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _guard = init_tracing();

    run(cli).await
}
