//! Error types for the data-loader crate.

use thiserror::Error;

/// Errors that can occur during data loading and parsing.
///
/// Every variant is fatal for the run: without a clean ratings table there
/// is nothing sensible to recommend from.
#[derive(Error, Debug)]
pub enum DataError {
    /// File could not be found or opened
    #[error("failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading a file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// A record in a CSV file couldn't be deserialized
    ///
    /// This variant stores context about where the error occurred
    #[error("malformed record at line {line} in {file}: {reason}")]
    MalformedRecord {
        file: String,
        line: u64,
        reason: String,
    },

    /// The CSV reader failed outside of any single record (e.g. bad header)
    #[error("CSV error in {file}: {reason}")]
    CsvError { file: String, reason: String },

    /// Data validation failed
    #[error("validation failed: {0}")]
    ValidationError(String),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataError>;
