//! Dataset error types
//!
//! Defines all errors that can occur while loading the dataset or resolving
//! column names against it.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur in the dataset layer
#[derive(Error, Debug)]
pub enum DatasetError {
    /// I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Dataset file does not exist
    #[error("Dataset file not found: {0:?}")]
    NotFound(PathBuf),

    /// CSV reader failed (bad quoting, invalid UTF-8, ...)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Required column missing from the header row
    #[error("Missing required column: {0}")]
    MissingColumn(&'static str),

    /// A required cell could not be parsed
    #[error("Line {line}: invalid {column} value {value:?}")]
    InvalidValue {
        line: u64,
        column: &'static str,
        value: String,
    },

    /// Column name is not one of the known numeric columns
    #[error("Unknown metric: {0}")]
    UnknownMetric(String),
}

/// Result type alias for dataset operations
pub type DatasetResult<T> = Result<T, DatasetError>;
