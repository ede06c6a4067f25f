//! Error handling for diagnosis data correction.
//!
//! Every error originates in the loading and writing collaborators. The
//! correction passes are total over their input domain and never fail.

use std::path::PathBuf;

pub mod util;

/// Errors raised while loading, validating or persisting diagnosis data
#[derive(Debug, thiserror::Error)]
pub enum DxCorrectionError {
    /// The source file does not exist
    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// Neither supported diagnosis column naming convention is present
    #[error("Unrecognized column naming convention: {0}")]
    UnrecognizedSchema(String),

    /// A column required by the slot layout is absent
    #[error("Missing required column: {column}")]
    MissingColumn {
        /// Full column name that was expected
        column: String,
    },

    /// A tri-state column holds a value other than 0, 1 or empty
    #[error("Invalid value {value:?} in column {column} (data row {row})")]
    InvalidValue {
        /// Column the value was read from
        column: String,
        /// Zero-based data row index (header excluded)
        row: usize,
        /// The offending cell after trimming
        value: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Delimited-text parsing or serialization error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for diagnosis correction operations
pub type Result<T> = std::result::Result<T, DxCorrectionError>;
