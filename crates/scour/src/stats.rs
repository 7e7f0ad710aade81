//! Per-column and table-level data-quality statistics.

use std::collections::HashSet;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::cell::{canonical_key, Cell};

/// Data-quality statistics for a table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    /// Number of data rows.
    pub total_rows: usize,
    /// Number of columns.
    pub total_columns: usize,
    /// Missing-cell count per header; headers with zero missing cells are
    /// omitted (sparse representation).
    pub missing_values: IndexMap<String, usize>,
    /// Rows beyond the first occurrence of each distinct value sequence.
    pub duplicate_rows: usize,
}

impl Stats {
    /// Sum of missing cells across all columns.
    pub fn total_missing(&self) -> usize {
        self.missing_values.values().sum()
    }
}

/// Compute missing-value counts, totals, and the duplicate-row count.
///
/// Missing counting walks rows × columns; duplicate detection keys a hash
/// set by canonical row encoding, one pass, no pairwise comparison. A row
/// whose content appears N times contributes N−1 duplicates.
pub fn compute_stats(headers: &[String], rows: &[Vec<Cell>]) -> Stats {
    let mut missing_values = IndexMap::new();

    for (col_idx, header) in headers.iter().enumerate() {
        let missing = rows
            .iter()
            .filter(|row| row.get(col_idx).map_or(true, |cell| cell.is_empty()))
            .count();

        if missing > 0 {
            missing_values.insert(header.clone(), missing);
        }
    }

    let mut seen: HashSet<String> = HashSet::with_capacity(rows.len());
    let mut duplicate_rows = 0;
    for row in rows {
        if !seen.insert(canonical_key(row)) {
            duplicate_rows += 1;
        }
    }

    Stats {
        total_rows: rows.len(),
        total_columns: headers.len(),
        missing_values,
        duplicate_rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Cell {
        Cell::Text(s.to_string())
    }

    fn num(n: f64) -> Cell {
        Cell::Number(n)
    }

    #[test]
    fn test_duplicate_counting_counts_extras_only() {
        let headers = vec!["a".to_string(), "b".to_string()];
        let rows = vec![
            vec![num(1.0), text("a")],
            vec![num(1.0), text("a")],
            vec![num(2.0), text("b")],
            vec![num(1.0), text("a")],
        ];
        let stats = compute_stats(&headers, &rows);
        assert_eq!(stats.duplicate_rows, 2);
    }

    #[test]
    fn test_missing_values_sparse() {
        let headers = vec!["a".to_string(), "b".to_string()];
        let rows = vec![
            vec![num(1.0), text("")],
            vec![num(2.0), text("x")],
            vec![num(1.0), Cell::Null],
        ];
        let stats = compute_stats(&headers, &rows);

        assert!(!stats.missing_values.contains_key("a"));
        assert_eq!(stats.missing_values["b"], 2);
        assert_eq!(stats.total_missing(), 2);
    }

    #[test]
    fn test_totals_match_dimensions() {
        let headers = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let rows = vec![vec![num(1.0), num(2.0), num(3.0)]];
        let stats = compute_stats(&headers, &rows);

        assert_eq!(stats.total_rows, 1);
        assert_eq!(stats.total_columns, 3);
    }

    #[test]
    fn test_short_rows_count_missing_trailing_cells() {
        let headers = vec!["a".to_string(), "b".to_string()];
        let rows = vec![vec![num(1.0)]];
        let stats = compute_stats(&headers, &rows);

        assert_eq!(stats.missing_values["b"], 1);
    }

    #[test]
    fn test_type_sensitive_duplicates() {
        // Number 1 and string "1" are distinct rows
        let headers = vec!["a".to_string()];
        let rows = vec![vec![num(1.0)], vec![text("1")]];
        let stats = compute_stats(&headers, &rows);

        assert_eq!(stats.duplicate_rows, 0);
    }

    #[test]
    fn test_empty_table() {
        let stats = compute_stats(&[], &[]);
        assert_eq!(stats.total_rows, 0);
        assert_eq!(stats.total_columns, 0);
        assert!(stats.missing_values.is_empty());
        assert_eq!(stats.duplicate_rows, 0);
    }
}
