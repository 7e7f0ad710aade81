//! Parsing-confidence scoring.

use serde::{Deserialize, Serialize};

use crate::ingest::IngestLog;
use crate::stats::Stats;

/// Fold missing-value and duplicate findings into the ingest log and
/// finalize the confidence score.
///
/// The log arrives carrying whatever ingestion already recorded (an empty
/// file drops it to 50 before this runs). Missing values cost up to 20
/// points, duplicates up to 10, both scaled by their share of the row count
/// and guarded against zero-row division.
pub fn score(mut log: IngestLog, stats: &Stats) -> (u8, Vec<String>) {
    let total_missing = stats.total_missing();
    if total_missing > 0 {
        log.note(format!("{} missing values detected", total_missing));
        if stats.total_rows > 0 {
            let penalty = (total_missing as f64 / stats.total_rows as f64 * 100.0).min(20.0);
            log.penalize(penalty);
        }
    }

    if stats.duplicate_rows > 0 {
        log.note(format!("{} duplicate rows found", stats.duplicate_rows));
        if stats.total_rows > 0 {
            let penalty = (stats.duplicate_rows as f64 / stats.total_rows as f64 * 50.0).min(10.0);
            log.penalize(penalty);
        }
    }

    log.finish()
}

/// Presentation band for a confidence score. Informative only; nothing in
/// the engine branches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Band {
    High,
    Medium,
    Low,
}

/// Map a confidence score to its presentation band.
pub fn confidence_band(confidence: u8) -> Band {
    if confidence >= 90 {
        Band::High
    } else if confidence >= 70 {
        Band::Medium
    } else {
        Band::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;

    fn stats(total_rows: usize, missing: &[(&str, usize)], duplicate_rows: usize) -> Stats {
        Stats {
            total_rows,
            total_columns: 2,
            missing_values: missing
                .iter()
                .map(|(h, n)| (h.to_string(), *n))
                .collect::<IndexMap<_, _>>(),
            duplicate_rows,
        }
    }

    #[test]
    fn test_clean_input_scores_100() {
        let (confidence, issues) = score(IngestLog::new(), &stats(10, &[], 0));
        assert_eq!(confidence, 100);
        assert!(issues.is_empty());
    }

    #[test]
    fn test_missing_penalty_capped_at_20() {
        // 10 missing across 10 rows: raw penalty 100, capped to 20
        let (confidence, issues) = score(IngestLog::new(), &stats(10, &[("a", 10)], 0));
        assert_eq!(confidence, 80);
        assert_eq!(issues, vec!["10 missing values detected"]);
    }

    #[test]
    fn test_duplicate_penalty_capped_at_10() {
        let (confidence, issues) = score(IngestLog::new(), &stats(10, &[], 9));
        assert_eq!(confidence, 90);
        assert_eq!(issues, vec!["9 duplicate rows found"]);
    }

    #[test]
    fn test_small_penalties_scale_with_row_share() {
        // 1 missing of 100 rows: penalty 1
        let (confidence, _) = score(IngestLog::new(), &stats(100, &[("a", 1)], 0));
        assert_eq!(confidence, 99);
    }

    #[test]
    fn test_zero_row_division_guard() {
        let (confidence, _) = score(IngestLog::new(), &stats(0, &[], 0));
        assert_eq!(confidence, 100);
    }

    #[test]
    fn test_carries_ingest_penalty() {
        let mut log = IngestLog::new();
        log.note("File appears to be empty");
        log.penalize(50.0);
        let (confidence, issues) = score(log, &stats(0, &[], 0));
        assert_eq!(confidence, 50);
        assert_eq!(issues, vec!["File appears to be empty"]);
    }

    #[test]
    fn test_bands() {
        assert_eq!(confidence_band(100), Band::High);
        assert_eq!(confidence_band(90), Band::High);
        assert_eq!(confidence_band(89), Band::Medium);
        assert_eq!(confidence_band(70), Band::Medium);
        assert_eq!(confidence_band(69), Band::Low);
        assert_eq!(confidence_band(0), Band::Low);
    }
}
