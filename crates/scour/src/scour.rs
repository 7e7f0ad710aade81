//! Main Scour struct and public API.

use std::path::Path;

use crate::clean::{clean, CleanConfig};
use crate::classify::classify_columns;
use crate::dataset::Dataset;
use crate::error::Result;
use crate::ingest::{normalize_table, IngestLog};
use crate::input::{Parser, ParserConfig, RawTable, SourceMetadata};
use crate::score::score;
use crate::stats::compute_stats;

/// Configuration for the Scour engine.
#[derive(Debug, Clone, Default)]
pub struct ScourConfig {
    /// Byte-decoder configuration.
    pub parser: ParserConfig,
}

/// The Scour ingestion and cleaning engine.
///
/// `ingest_file` is the file front door: decode, normalize, classify,
/// compute statistics and score in one call. Collaborators that already
/// hold a decoded cell grid go through `ingest_table`; those that hold a
/// finished Dataset apply `clean` with whichever configuration they want,
/// as many times as they want, without disturbing the original.
pub struct Scour {
    parser: Parser,
}

impl Scour {
    /// Create an engine with default configuration.
    pub fn new() -> Self {
        Self::with_config(ScourConfig::default())
    }

    /// Create an engine with custom configuration.
    pub fn with_config(config: ScourConfig) -> Self {
        Self {
            parser: Parser::with_config(config.parser),
        }
    }

    /// Decode a delimited file and ingest it.
    pub fn ingest_file(&self, path: impl AsRef<Path>) -> Result<(Dataset, SourceMetadata)> {
        let (raw, meta) = self.parser.parse_file(path)?;
        let dataset = self.ingest_table(&raw, meta.file.clone(), meta.format.clone());
        Ok((dataset, meta))
    }

    /// Ingest an already-decoded cell grid.
    ///
    /// Runs the full ingestion pipeline: header normalization, column type
    /// classification, statistics, and confidence scoring. The confidence
    /// accumulator starts at 100 and is threaded through every sub-step, so
    /// an empty grid surfaces as a degraded Dataset rather than an error.
    pub fn ingest_table(
        &self,
        raw: &RawTable,
        source_name: impl Into<String>,
        source_type: impl Into<String>,
    ) -> Dataset {
        let mut log = IngestLog::new();

        let (headers, rows) = normalize_table(raw, &mut log);
        let column_types = classify_columns(&headers, &rows);
        let stats = compute_stats(&headers, &rows);
        let (confidence, issues) = score(log, &stats);

        Dataset {
            headers,
            rows,
            source_name: source_name.into(),
            source_type: source_type.into(),
            confidence,
            issues,
            column_types,
            stats,
        }
    }

    /// Apply a cleaning configuration to a Dataset, producing a new one.
    pub fn clean(&self, dataset: &Dataset, config: &CleanConfig) -> Dataset {
        clean(dataset, config)
    }
}

impl Default for Scour {
    fn default() -> Self {
        Self::new()
    }
}
