//! Error types for the Scour library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Scour operations.
#[derive(Debug, Error)]
pub enum ScourError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error decoding the byte stream as delimited tabular data.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Cleaning configuration error (e.g. unrecognized fill strategy).
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for Scour operations.
pub type Result<T> = std::result::Result<T, ScourError>;
