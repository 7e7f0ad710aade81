//! Clean command - apply cleaning steps and export the result.

use std::path::{Path, PathBuf};

use colored::Colorize;
use scour::{CleanConfig, Dataset, FillStrategy, Scour};

#[allow(clippy::too_many_arguments)]
pub fn run(
    file: PathBuf,
    trim: bool,
    dedupe: bool,
    fill: Option<String>,
    drop_empty: bool,
    output: Option<PathBuf>,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    // Parse the fill strategy up front so a typo fails before any work
    let fill_strategy: Option<FillStrategy> = match fill {
        Some(s) => Some(s.parse()?),
        None => None,
    };

    let mut config = CleanConfig::new();
    config.trim_whitespace = trim;
    config.remove_duplicates = dedupe;
    config.fill_missing = fill_strategy;
    config.drop_empty_columns = drop_empty;

    println!(
        "{} {}",
        "Cleaning".cyan().bold(),
        file.display().to_string().white()
    );

    let scour = Scour::new();
    let (dataset, _meta) = scour.ingest_file(&file)?;
    let cleaned = scour.clean(&dataset, &config);

    let rows_removed = dataset.row_count().saturating_sub(cleaned.row_count());
    let columns_removed = dataset.column_count().saturating_sub(cleaned.column_count());
    println!(
        "Rows: {} → {}  Columns: {} → {}",
        dataset.row_count(),
        cleaned.row_count().to_string().white().bold(),
        dataset.column_count(),
        cleaned.column_count().to_string().white().bold()
    );
    if verbose && (rows_removed > 0 || columns_removed > 0) {
        println!(
            "Removed {} rows, {} columns",
            rows_removed, columns_removed
        );
    }

    // Issues appended by this cleaning pass
    for issue in cleaned.issues.iter().skip(dataset.issues.len()) {
        println!("  {} {}", "·".cyan(), issue);
    }

    let output_path = output.unwrap_or_else(|| {
        let mut p = file.clone();
        let stem = p.file_stem().unwrap_or_default().to_string_lossy().into_owned();
        p.set_file_name(format!("{}.cleaned.csv", stem));
        p
    });

    write_csv(&cleaned, &output_path)?;

    println!();
    println!(
        "{} {}",
        "Saved to".green().bold(),
        output_path.display().to_string().white()
    );

    Ok(())
}

/// Write the cleaned table out as CSV.
fn write_csv(dataset: &Dataset, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record(&dataset.headers)?;
    for row in &dataset.rows {
        let mut record: Vec<String> = row.iter().map(|cell| cell.render()).collect();
        // Pad short rows so every record matches the header width
        while record.len() < dataset.headers.len() {
            record.push(String::new());
        }
        writer.write_record(&record)?;
    }
    writer.flush()?;

    Ok(())
}
