//! The Dataset: a normalized table plus its derived metadata.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::cell::Cell;
use crate::classify::ColumnType;
use crate::error::Result;
use crate::stats::Stats;

/// A normalized table with its inferred types, quality statistics,
/// confidence score and issue log.
///
/// A Dataset is immutable once a stage produces it: ingestion creates one,
/// cleaning creates an independent second one and never touches the first.
/// Callers that want to revert simply go back to the original value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    /// Ordered column headers.
    pub headers: Vec<String>,
    /// Row-major cell data. Rows may be shorter than the header list;
    /// missing trailing cells count as empty.
    pub rows: Vec<Vec<Cell>>,
    /// Provenance: where the data came from.
    pub source_name: String,
    /// Provenance: what kind of source it was.
    pub source_type: String,
    /// Parsing confidence, an integer in [0, 100].
    pub confidence: u8,
    /// Append-only log of everything detected or done to the data.
    pub issues: Vec<String>,
    /// Semantic type per header, fixed at ingestion time and reused by
    /// cleaning without reclassification.
    pub column_types: IndexMap<String, ColumnType>,
    /// Quality statistics for the current headers/rows.
    pub stats: Stats,
}

impl Dataset {
    /// Number of data rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Position of a header, if present.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// A specific cell, if the row holds one at that position.
    pub fn get(&self, row: usize, col: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Serialize the Dataset to pretty JSON for hand-off or persistence.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Restore a Dataset from its JSON form.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_round_trip() {
        let dataset = Dataset {
            headers: vec!["a".to_string()],
            rows: vec![vec![Cell::Number(1.0)], vec![Cell::Text("x".to_string())]],
            source_name: "t.csv".to_string(),
            source_type: "csv".to_string(),
            confidence: 95,
            issues: vec!["1 missing values detected".to_string()],
            column_types: [("a".to_string(), ColumnType::Numeric)]
                .into_iter()
                .collect(),
            stats: Stats {
                total_rows: 2,
                total_columns: 1,
                missing_values: IndexMap::new(),
                duplicate_rows: 0,
            },
        };

        let json = dataset.to_json().unwrap();
        let restored = Dataset::from_json(&json).unwrap();

        assert_eq!(restored.headers, dataset.headers);
        assert_eq!(restored.confidence, 95);
        assert_eq!(restored.column_types["a"], ColumnType::Numeric);
        assert_eq!(restored.stats, dataset.stats);
    }
}
