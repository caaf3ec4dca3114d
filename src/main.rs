use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::{info, Level};

mod error;
mod importer;
mod types;

use importer::{import, ImportConfig, DEFAULT_BATCH_SIZE, DEFAULT_DATABASE, DEFAULT_INPUT};

#[derive(Parser)]
#[command(name = "electionload")]
#[command(about = "Batch importer for county-level election results CSV files into SQLite")]
#[command(version = "0.1.0")]
#[command(
    long_about = "Electionload reads a comma-separated election results file (header row \
required) and loads it into the election_results table of a local SQLite database, \
replacing any prior contents. Rows are written in bounded-memory batches, so input \
size does not affect peak memory."
)]
#[command(after_help = "EXAMPLES:
    # Import with the default paths
    electionload

    # Import a specific file into a specific database
    electionload -i countypres_2000-2024.csv -d election_data.db

    # Smaller batches, verbose progress
    electionload --batch-size 1000 --verbose")]
struct Cli {
    /// Path to the CSV input file
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Path to the SQLite database file (created if missing)
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_DATABASE)]
    database: PathBuf,

    /// Batch size for bulk inserts
    #[arg(long, default_value_t = DEFAULT_BATCH_SIZE)]
    batch_size: usize,

    /// Enable verbose logging (debug level)
    #[arg(short, long)]
    verbose: bool,

    /// Set log level explicitly
    #[arg(long, value_enum)]
    log_level: Option<LogLevel>,

    /// Output logs in JSON format
    #[arg(long)]
    json_logs: bool,
}

#[derive(ValueEnum, Clone, Debug)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => Level::ERROR,
            LogLevel::Warn => Level::WARN,
            LogLevel::Info => Level::INFO,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Trace => Level::TRACE,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    initialize_logging(&cli);

    info!("Starting electionload v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Configuration: input={:?}, database={:?}, batch_size={}",
        cli.input, cli.database, cli.batch_size
    );

    let config = ImportConfig {
        input: cli.input,
        database: cli.database,
        batch_size: cli.batch_size,
    };

    match import(&config) {
        Ok(result) => {
            info!("Import completed successfully!");
            info!("Summary: {}", result.summary());
        }
        Err(e) => {
            eprintln!("Import failed: {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}

/// Initialize logging based on CLI configuration
fn initialize_logging(cli: &Cli) {
    let log_level = if let Some(level) = &cli.log_level {
        level.clone().into()
    } else if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    if cli.json_logs {
        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_target(false)
            .with_thread_ids(cli.verbose)
            .with_file(cli.verbose)
            .with_line_number(cli.verbose)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_target(false)
            .with_thread_ids(cli.verbose)
            .with_file(cli.verbose)
            .with_line_number(cli.verbose)
            .init();
    }
}
