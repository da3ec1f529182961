//! Error handling for name ranking operations.
//!
//! Distinguishes batch-level setup failures (missing input directory,
//! unusable output directory, bad configuration) from errors raised while
//! processing a single year, which the driver contains at the year boundary.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RankingError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV rendering error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON rendering error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Input directory not found at path: {path}")]
    InputDirectoryNotFound { path: PathBuf },

    #[error("Could not create output directory {path}: {source}")]
    OutputDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed record on line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    #[error("Failed to write {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl RankingError {
    /// True for errors that stop the whole batch rather than a single year
    pub fn is_setup_failure(&self) -> bool {
        matches!(
            self,
            RankingError::InputDirectoryNotFound { .. }
                | RankingError::OutputDirectory { .. }
                | RankingError::Configuration { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, RankingError>;
