//! Analyze command - ingest a file and report its quality profile.

use std::path::PathBuf;

use colored::Colorize;
use scour::{confidence_band, Band, Scour};

pub fn run(file: PathBuf, json: bool, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    let scour = Scour::new();
    let (dataset, meta) = scour.ingest_file(&file)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&dataset)?);
        return Ok(());
    }

    println!(
        "{} {}",
        "Analyzed".cyan().bold(),
        file.display().to_string().white()
    );
    println!(
        "Format: {}  Rows: {}  Columns: {}",
        meta.format,
        dataset.stats.total_rows.to_string().white().bold(),
        dataset.stats.total_columns.to_string().white().bold()
    );

    println!();
    println!("{}", "Column types:".yellow().bold());
    for (header, column_type) in &dataset.column_types {
        println!("  {:24} {:?}", header, column_type);
    }

    if !dataset.stats.missing_values.is_empty() {
        println!();
        println!("{}", "Missing values:".yellow().bold());
        for (header, count) in &dataset.stats.missing_values {
            println!("  {:24} {}", header, count.to_string().red());
        }
    }

    if dataset.stats.duplicate_rows > 0 {
        println!();
        println!(
            "Duplicate rows: {}",
            dataset.stats.duplicate_rows.to_string().red()
        );
    }

    println!();
    let confidence = format!("{}%", dataset.confidence);
    let banded = match confidence_band(dataset.confidence) {
        Band::High => confidence.green().bold(),
        Band::Medium => confidence.yellow().bold(),
        Band::Low => confidence.red().bold(),
    };
    println!("Parsing confidence: {}", banded);

    if dataset.issues.is_empty() {
        println!("{}", "No issues found - data looks clean!".green());
    } else {
        println!();
        println!("{}", "Issues:".yellow().bold());
        for issue in &dataset.issues {
            println!("  - {}", issue);
        }
    }

    if verbose {
        println!();
        println!("Source hash: {}", meta.hash);
        println!("Size: {} bytes", meta.size_bytes);
    }

    Ok(())
}
