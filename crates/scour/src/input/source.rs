//! Raw table representation and source metadata.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::cell::Cell;

/// Metadata about the source data file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceMetadata {
    /// File name without path.
    pub file: String,
    /// Full path to the file.
    pub path: PathBuf,
    /// SHA-256 hash of the file contents.
    pub hash: String,
    /// File size in bytes.
    pub size_bytes: u64,
    /// Detected format (csv, tsv, etc.).
    pub format: String,
    /// Detected encoding.
    pub encoding: String,
    /// When the file was ingested.
    pub ingested_at: DateTime<Utc>,
}

impl SourceMetadata {
    /// Create metadata for a file that has been decoded.
    pub fn new(path: PathBuf, hash: String, size_bytes: u64, format: String) -> Self {
        let file = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            file,
            path,
            hash,
            size_bytes,
            format,
            encoding: "utf-8".to_string(),
            ingested_at: Utc::now(),
        }
    }
}

/// A decoded 2-D cell array, header row included, before normalization.
///
/// This is the hand-off point between the byte decoder and the engine: the
/// ingestor assumes it already holds a well-formed grid and never touches
/// bytes itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawTable {
    /// All rows, first row expected to be the header row.
    pub cells: Vec<Vec<Cell>>,
}

impl RawTable {
    /// Wrap a decoded cell grid.
    pub fn new(cells: Vec<Vec<Cell>>) -> Self {
        Self { cells }
    }

    /// Total number of rows including the header row.
    pub fn row_count(&self) -> usize {
        self.cells.len()
    }

    /// True when the source held no rows at all.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
