//! Table normalization: header extraction and the ingest accumulator.

use crate::cell::Cell;
use crate::input::RawTable;

/// Running confidence/issue accumulator threaded through ingestion.
///
/// Each ingestion sub-step receives the log, records what it found, and
/// passes it forward; the scorer consumes it at the end. Kept as an explicit
/// value so stages stay pure functions over their inputs.
#[derive(Debug, Clone)]
pub struct IngestLog {
    confidence: f64,
    issues: Vec<String>,
}

impl IngestLog {
    /// Start a fresh log at full confidence.
    pub fn new() -> Self {
        Self {
            confidence: 100.0,
            issues: Vec::new(),
        }
    }

    /// Record a human-readable issue.
    pub fn note(&mut self, issue: impl Into<String>) {
        self.issues.push(issue.into());
    }

    /// Reduce the running confidence.
    pub fn penalize(&mut self, amount: f64) {
        self.confidence -= amount;
    }

    /// Current (unrounded) confidence.
    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    /// Finalize into the clamped integer score and the issue list.
    pub fn finish(self) -> (u8, Vec<String>) {
        let score = self.confidence.round().clamp(0.0, 100.0) as u8;
        (score, self.issues)
    }
}

impl Default for IngestLog {
    fn default() -> Self {
        Self::new()
    }
}

/// Split a raw cell grid into `(headers, rows)`.
///
/// The first raw row is the header row; header cells that are missing get a
/// synthesized `Column_{i+1}` name. Data cells pass through unchanged, type
/// coercion happens downstream. An entirely empty grid is a degradation, not
/// an error: it is noted on the log and yields an empty table.
pub fn normalize_table(raw: &RawTable, log: &mut IngestLog) -> (Vec<String>, Vec<Vec<Cell>>) {
    if raw.is_empty() {
        log.note("File appears to be empty");
        log.penalize(50.0);
        return (Vec::new(), Vec::new());
    }

    let headers: Vec<String> = raw.cells[0]
        .iter()
        .enumerate()
        .map(|(i, cell)| {
            if cell.is_empty() {
                format!("Column_{}", i + 1)
            } else {
                cell.render()
            }
        })
        .collect();

    let rows: Vec<Vec<Cell>> = raw.cells[1..].to_vec();

    (headers, rows)
}
