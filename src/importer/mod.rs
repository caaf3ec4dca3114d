// SQLite import pipeline: CSV in, batched bulk inserts out
pub mod schema;


use std::path::{Path, PathBuf};

use rusqlite::{params, Connection};
use tracing::info;

use crate::error::ImportError;
use crate::types::ElectionRecord;

pub use schema::{reset_schema, TABLE_NAME};

/// Default input path, matching the published 2000-2024 county returns layout
pub const DEFAULT_INPUT: &str = "2000-2024/countypres_2000-2024.csv";
/// Default destination database path
pub const DEFAULT_DATABASE: &str = "2000-2024/election_data.db";
/// Rows buffered in memory before a bulk insert
pub const DEFAULT_BATCH_SIZE: usize = 10_000;

/// Configuration for a single import run
#[derive(Debug, Clone)]
pub struct ImportConfig {
    /// Path to the CSV input file
    pub input: PathBuf,
    /// Path to the SQLite database file (created if missing)
    pub database: PathBuf,
    /// Batch threshold for bulk inserts
    pub batch_size: usize,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            database: PathBuf::from(DEFAULT_DATABASE),
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

/// Outcome of a completed import run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportResult {
    /// Total data rows read from the input and written to the table
    pub rows_imported: usize,
    /// Number of bulk inserts performed (empty final batches are not counted)
    pub batches_flushed: usize,
}

impl ImportResult {
    pub fn summary(&self) -> String {
        format!(
            "{} rows imported in {} batch(es)",
            self.rows_imported, self.batches_flushed
        )
    }
}

/// Run the full import: reset the destination table, stream the CSV, and write
/// rows in batches.
///
/// The input file is checked before the database is opened, so a missing input
/// never creates or mutates the destination. Each batch commits in its own
/// transaction; batches flushed before a failure stay persisted. Any CSV or
/// database error aborts the run, a row missing a required column included.
pub fn import(config: &ImportConfig) -> Result<ImportResult, ImportError> {
    if !config.input.exists() {
        return Err(ImportError::input_not_found(&config.input));
    }

    info!("Processing '{}'", config.input.display());

    let mut conn = Connection::open(&config.database)?;
    reset_schema(&conn)?;

    let mut reader = csv::Reader::from_path(&config.input)?;
    let mut batch: Vec<ElectionRecord> = Vec::with_capacity(config.batch_size);
    let mut rows_imported = 0usize;
    let mut batches_flushed = 0usize;

    for record in reader.deserialize() {
        let record: ElectionRecord = record?;
        batch.push(record);
        rows_imported += 1;

        if batch.len() >= config.batch_size {
            flush_batch(&mut conn, &batch)?;
            batch.clear();
            batches_flushed += 1;
            info!("Processed {} rows...", rows_imported);
        }
    }

    // Remaining partial batch; a clean multiple of batch_size leaves nothing here
    if !batch.is_empty() {
        flush_batch(&mut conn, &batch)?;
        batches_flushed += 1;
    }

    conn.close().map_err(|(_, e)| ImportError::Database(e))?;

    info!(
        "Success! Converted {} rows to '{}'",
        rows_imported,
        config.database.display()
    );

    Ok(ImportResult {
        rows_imported,
        batches_flushed,
    })
}

/// Write one batch as a single transaction using a prepared statement per row.
fn flush_batch(conn: &mut Connection, batch: &[ElectionRecord]) -> Result<(), ImportError> {
    let tx = conn.transaction()?;
    {
        let mut stmt = tx.prepare_cached(schema::INSERT_SQL)?;
        for record in batch {
            stmt.execute(params![
                record.state,
                record.county_name,
                record.year,
                record.state_po,
                record.county_fips,
                record.office,
                record.candidate,
                record.party,
                record.candidatevotes,
                record.totalvotes,
                record.version,
                record.mode,
            ])?;
        }
    }
    tx.commit()?;
    Ok(())
}

/// Count the rows currently in the destination table.
pub fn count_rows(database: &Path) -> Result<i64, ImportError> {
    let conn = Connection::open(database)?;
    let count = conn.query_row(
        &format!("SELECT COUNT(*) FROM {}", TABLE_NAME),
        [],
        |row| row.get(0),
    )?;
    Ok(count)
}
