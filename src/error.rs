use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the electionload importer
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("the file '{}' was not found", path.display())]
    InputNotFound { path: PathBuf },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ImportError {
    pub fn input_not_found(path: impl Into<PathBuf>) -> Self {
        Self::InputNotFound { path: path.into() }
    }
}
