//! Column type classification.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::cell::Cell;

/// Semantic type assigned to a column at ingestion time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    /// Predominantly numeric values.
    Numeric,
    /// Predominantly calendar dates.
    Date,
    /// Everything else.
    Text,
    /// No non-empty values at all.
    Empty,
}

/// Fraction of non-empty values that must match before a column commits to
/// `numeric` or `date`. Strictly greater-than: exactly 80% does not qualify.
const TYPE_THRESHOLD: f64 = 0.8;

// Date shape patterns compiled once on first use. Each pattern is paired
// with the chrono format that validates the shape against a real calendar.
static DATE_PATTERNS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    vec![
        (Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap(), "%Y-%m-%d"), // ISO date
        (Regex::new(r"^\d{2}/\d{2}/\d{4}$").unwrap(), "%m/%d/%Y"), // US date
        (Regex::new(r"^\d{2}-\d{2}-\d{4}$").unwrap(), "%d-%m-%Y"), // European date
        (Regex::new(r"^\d{4}/\d{2}/\d{2}$").unwrap(), "%Y/%m/%d"), // Alt ISO
        (
            Regex::new(r"^\d{4}-\d{2}-\d{2}[T ]\d{2}:\d{2}(:\d{2})?$").unwrap(),
            "%Y-%m-%d",
        ), // ISO datetime, date part validated
    ]
});

/// Check whether a value is a recognizable calendar date.
///
/// The regex picks the shape; chrono rejects impossible dates such as
/// 2023-02-31 that the shape alone would admit.
pub fn is_date_value(value: &str) -> bool {
    let trimmed = value.trim();
    for (pattern, format) in DATE_PATTERNS.iter() {
        if pattern.is_match(trimmed) {
            let date_part = &trimmed[..10.min(trimmed.len())];
            return chrono::NaiveDate::parse_from_str(date_part, format).is_ok();
        }
    }
    false
}

/// Assign one semantic type per column.
///
/// Per column: filter out missing cells; an all-missing column is `empty`
/// outright. Otherwise the numeric test runs before the date test, both
/// against the strict 80% threshold, falling back to `text`. The margin
/// tolerates a minority of malformed values without misclassifying noisy
/// real-world columns.
pub fn classify_columns(headers: &[String], rows: &[Vec<Cell>]) -> IndexMap<String, ColumnType> {
    let mut types = IndexMap::with_capacity(headers.len());

    for (col_idx, header) in headers.iter().enumerate() {
        let values: Vec<&Cell> = rows
            .iter()
            .filter_map(|row| row.get(col_idx))
            .filter(|cell| !cell.is_empty())
            .collect();

        let column_type = if values.is_empty() {
            ColumnType::Empty
        } else {
            let total = values.len() as f64;
            let numeric_count = values
                .iter()
                .filter(|cell| cell.numeric_value().is_some())
                .count();

            if numeric_count as f64 / total > TYPE_THRESHOLD {
                ColumnType::Numeric
            } else {
                let date_count = values
                    .iter()
                    .filter(|cell| cell.as_text().is_some_and(is_date_value))
                    .count();

                if date_count as f64 / total > TYPE_THRESHOLD {
                    ColumnType::Date
                } else {
                    ColumnType::Text
                }
            }
        };

        types.insert(header.clone(), column_type);
    }

    types
}
