//! The cleaning pipeline: trim, dedupe, fill, drop empty columns.

use std::collections::HashSet;

use indexmap::IndexMap;

use crate::cell::{canonical_key, Cell};
use crate::classify::ColumnType;
use crate::dataset::Dataset;
use crate::stats::compute_stats;

use super::config::{CleanConfig, FillStrategy};

/// Apply the enabled cleaning steps to a Dataset, producing a new one.
///
/// Steps run in a fixed order because later steps observe the output of
/// earlier ones. The issue log is appended to, never rewritten; column
/// types come from ingestion and are not recomputed; confidence is carried
/// over unchanged. The input Dataset is never mutated, so a caller can
/// revert to it at any time.
pub fn clean(dataset: &Dataset, config: &CleanConfig) -> Dataset {
    let mut headers = dataset.headers.clone();
    let mut rows = dataset.rows.clone();
    let mut issues = dataset.issues.clone();
    let mut column_types = dataset.column_types.clone();

    if config.trim_whitespace {
        rows = trim_rows(rows);
        // Logged whenever the step runs, even if nothing changed
        issues.push("Whitespace trimmed".to_string());
    }

    if config.remove_duplicates {
        let before = rows.len();
        rows = dedupe_rows(rows);
        let removed = before - rows.len();
        if removed > 0 {
            issues.push(format!("Removed {} duplicate rows", removed));
        }
    }

    if let Some(strategy) = config.fill_missing {
        // `remove` is accepted by the config surface but fills nothing
        if strategy != FillStrategy::Remove {
            rows = fill_missing(&headers, rows, &column_types, strategy);
            issues.push(format!("Filled missing values using {}", strategy));
        }
    }

    if config.drop_empty_columns {
        (headers, rows) = drop_empty_columns(headers, rows, &mut column_types);
    }

    let stats = compute_stats(&headers, &rows);

    Dataset {
        headers,
        rows,
        source_name: dataset.source_name.clone(),
        source_type: dataset.source_type.clone(),
        confidence: dataset.confidence,
        issues,
        column_types,
        stats,
    }
}

/// Strip leading/trailing whitespace from every text cell.
fn trim_rows(rows: Vec<Vec<Cell>>) -> Vec<Vec<Cell>> {
    rows.into_iter()
        .map(|row| {
            row.into_iter()
                .map(|cell| match cell {
                    Cell::Text(s) => Cell::Text(s.trim().to_string()),
                    other => other,
                })
                .collect()
        })
        .collect()
}

/// Keep the first occurrence of each distinct row, preserving order.
fn dedupe_rows(rows: Vec<Vec<Cell>>) -> Vec<Vec<Cell>> {
    let mut seen: HashSet<String> = HashSet::with_capacity(rows.len());
    rows.into_iter()
        .filter(|row| seen.insert(canonical_key(row)))
        .collect()
}

/// Fill missing cells in numeric columns with a single per-column value.
///
/// Builds replacement rows rather than writing through shared references,
/// so a Dataset can feed several cleaning configurations without aliasing
/// surprises.
fn fill_missing(
    headers: &[String],
    rows: Vec<Vec<Cell>>,
    column_types: &IndexMap<String, ColumnType>,
    strategy: FillStrategy,
) -> Vec<Vec<Cell>> {
    let mut rows = rows;

    for (col_idx, header) in headers.iter().enumerate() {
        if column_types.get(header) != Some(&ColumnType::Numeric) {
            continue;
        }

        let numbers: Vec<f64> = rows
            .iter()
            .filter_map(|row| row.get(col_idx))
            .filter(|cell| !cell.is_empty())
            .filter_map(|cell| cell.numeric_value())
            .collect();

        if numbers.is_empty() {
            continue;
        }

        let fill_value = compute_fill_value(numbers, strategy);

        rows = rows
            .into_iter()
            .map(|row| {
                let needs_fill = row.get(col_idx).map_or(false, |cell| cell.is_empty());
                if !needs_fill {
                    return row;
                }
                row.into_iter()
                    .enumerate()
                    .map(|(i, cell)| {
                        if i == col_idx {
                            Cell::Number(fill_value)
                        } else {
                            cell
                        }
                    })
                    .collect()
            })
            .collect();
    }

    rows
}

/// The single fill value for a numeric column's present values.
fn compute_fill_value(mut numbers: Vec<f64>, strategy: FillStrategy) -> f64 {
    match strategy {
        FillStrategy::Mean => numbers.iter().sum::<f64>() / numbers.len() as f64,
        FillStrategy::Median => {
            // Upper median: index floor(n/2) of the sorted values, so an
            // even-length column yields the higher middle value, not the
            // averaged-two-middle convention.
            numbers.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
            numbers[numbers.len() / 2]
        }
        // Mode falls back to zero; see DESIGN.md
        FillStrategy::Mode | FillStrategy::Remove => 0.0,
    }
}

/// Remove columns classified `empty`, from headers and rows in lockstep.
///
/// Entries for dropped headers leave the type map too, keeping it at
/// exactly one entry per surviving header. Surviving entries are untouched.
fn drop_empty_columns(
    headers: Vec<String>,
    rows: Vec<Vec<Cell>>,
    column_types: &mut IndexMap<String, ColumnType>,
) -> (Vec<String>, Vec<Vec<Cell>>) {
    let kept: Vec<usize> = headers
        .iter()
        .enumerate()
        .filter(|(_, h)| column_types.get(h.as_str()) != Some(&ColumnType::Empty))
        .map(|(i, _)| i)
        .collect();

    if kept.len() == headers.len() {
        return (headers, rows);
    }

    let new_headers: Vec<String> = kept.iter().map(|&i| headers[i].clone()).collect();
    let new_rows: Vec<Vec<Cell>> = rows
        .into_iter()
        .map(|row| {
            kept.iter()
                .filter_map(|&i| row.get(i).cloned())
                .collect()
        })
        .collect();

    column_types.retain(|h, _| new_headers.iter().any(|nh| nh == h));

    (new_headers, new_rows)
}
