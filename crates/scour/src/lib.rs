//! Scour: type-inference, statistics, and cleaning engine for tabular datasets.
//!
//! Scour ingests a tabular source, infers a semantic type per column, computes
//! data-quality statistics, and applies configurable cleaning transforms while
//! logging every change.
//!
//! # Core Principles
//!
//! - **One-way data flow**: raw table → ingestion → typed, scored `Dataset`;
//!   cleaning consumes a `Dataset` and emits a new one
//! - **Non-destructive**: a `Dataset` is never mutated once produced, so the
//!   original survives any number of cleaning passes
//! - **Full traceability**: the issue log records everything detected during
//!   ingestion and everything cleaning did
//!
//! # Example
//!
//! ```no_run
//! use scour::{CleanConfig, FillStrategy, Scour};
//!
//! let scour = Scour::new();
//! let (dataset, _meta) = scour.ingest_file("data.csv").unwrap();
//!
//! println!("Confidence: {}", dataset.confidence);
//!
//! let cleaned = scour.clean(
//!     &dataset,
//!     &CleanConfig::new().with_trim().with_fill(FillStrategy::Median),
//! );
//! println!("Issues: {:?}", cleaned.issues);
//! ```

pub mod cell;
pub mod classify;
pub mod clean;
pub mod dataset;
pub mod error;
pub mod ingest;
pub mod input;
pub mod score;
pub mod stats;

mod scour;

pub use crate::scour::{Scour, ScourConfig};
pub use cell::{canonical_key, Cell};
pub use classify::{classify_columns, ColumnType};
pub use clean::{clean, CleanConfig, FillStrategy};
pub use dataset::Dataset;
pub use error::{Result, ScourError};
pub use ingest::IngestLog;
pub use input::{Parser, ParserConfig, RawTable, SourceMetadata};
pub use score::{confidence_band, score, Band};
pub use stats::{compute_stats, Stats};
