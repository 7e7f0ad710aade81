//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Scour: data quality and cleaning tool for tabular datasets
#[derive(Parser)]
#[command(name = "scour")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Ingest a data file and report types, statistics, and confidence
    Analyze {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output the full dataset as JSON
        #[arg(long)]
        json: bool,
    },

    /// Ingest a data file, apply cleaning steps, and export the result
    Clean {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Strip leading/trailing whitespace from text cells
        #[arg(long)]
        trim: bool,

        /// Remove duplicate rows, keeping the first occurrence
        #[arg(long)]
        dedupe: bool,

        /// Fill missing values in numeric columns (mean, median, mode, remove)
        #[arg(long, value_name = "STRATEGY")]
        fill: Option<String>,

        /// Drop columns that contain no values at all
        #[arg(long)]
        drop_empty: bool,

        /// Output path for cleaned data (default: <file>.cleaned.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
