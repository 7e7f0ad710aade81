//! Cleaning configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ScourError;

/// Strategy for filling missing values in numeric columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FillStrategy {
    /// Arithmetic average of the column's present values.
    Mean,
    /// Upper median: value at index floor(n/2) of the ascending-sorted
    /// values, also for even-length columns.
    Median,
    /// Accepted for compatibility; falls back to a zero fill.
    Mode,
    /// Accepted but performs no fill.
    Remove,
}

impl fmt::Display for FillStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FillStrategy::Mean => "mean",
            FillStrategy::Median => "median",
            FillStrategy::Mode => "mode",
            FillStrategy::Remove => "remove",
        };
        f.write_str(name)
    }
}

impl FromStr for FillStrategy {
    type Err = ScourError;

    /// Fail-fast boundary for string-typed front-ends: anything outside the
    /// recognized enumeration is a configuration error, never a silent no-op.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mean" => Ok(FillStrategy::Mean),
            "median" => Ok(FillStrategy::Median),
            "mode" => Ok(FillStrategy::Mode),
            "remove" => Ok(FillStrategy::Remove),
            other => Err(ScourError::Config(format!(
                "unrecognized fill strategy '{}' (expected mean, median, mode, or remove)",
                other
            ))),
        }
    }
}

/// Which cleaning steps to apply. Steps run in a fixed order: trim, then
/// dedupe, then fill, then drop-empty-columns.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CleanConfig {
    /// Strip leading/trailing whitespace from every text cell.
    pub trim_whitespace: bool,
    /// Keep only the first occurrence of each distinct row.
    pub remove_duplicates: bool,
    /// Fill missing cells in numeric columns.
    pub fill_missing: Option<FillStrategy>,
    /// Remove columns classified as empty at ingestion.
    pub drop_empty_columns: bool,
}

impl CleanConfig {
    /// Configuration with every step disabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable whitespace trimming.
    pub fn with_trim(mut self) -> Self {
        self.trim_whitespace = true;
        self
    }

    /// Enable duplicate removal.
    pub fn with_dedupe(mut self) -> Self {
        self.remove_duplicates = true;
        self
    }

    /// Enable missing-value filling with the given strategy.
    pub fn with_fill(mut self, strategy: FillStrategy) -> Self {
        self.fill_missing = Some(strategy);
        self
    }

    /// Enable dropping of empty columns.
    pub fn with_drop_empty(mut self) -> Self {
        self.drop_empty_columns = true;
        self
    }
}
