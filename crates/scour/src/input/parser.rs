//! CSV/TSV decoding with delimiter detection.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use sha2::{Digest, Sha256};

use super::source::{RawTable, SourceMetadata};
use crate::cell::Cell;
use crate::error::{Result, ScourError};

/// Delimiters to try when auto-detecting.
const DELIMITERS: &[u8] = &[b'\t', b',', b';', b'|'];

/// Decoder configuration.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Delimiter to use (None = auto-detect).
    pub delimiter: Option<u8>,
    /// Maximum rows to read, header row included (None = all).
    pub max_rows: Option<usize>,
    /// Quote character.
    pub quote: u8,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            delimiter: None,
            max_rows: None,
            quote: b'"',
        }
    }
}

/// Decodes delimited byte streams into raw cell grids.
///
/// The parser stops at the 2-D array boundary: header synthesis, type
/// classification and everything downstream belong to the engine, which
/// receives the grid exactly as decoded.
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    /// Create a new parser with default configuration.
    pub fn new() -> Self {
        Self {
            config: ParserConfig::default(),
        }
    }

    /// Create a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Decode a file and return the raw table and source metadata.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<(RawTable, SourceMetadata)> {
        let path = path.as_ref();

        let mut file = File::open(path).map_err(|e| ScourError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let metadata = file.metadata().map_err(|e| ScourError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let size_bytes = metadata.len();

        let mut contents = Vec::new();
        file.read_to_end(&mut contents).map_err(|e| ScourError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut hasher = Sha256::new();
        hasher.update(&contents);
        let hash = format!("sha256:{:x}", hasher.finalize());

        let delimiter = match self.config.delimiter {
            Some(d) => d,
            None => detect_delimiter(&contents),
        };

        let raw = self.parse_bytes(&contents, delimiter)?;

        let format = match delimiter {
            b'\t' => "tsv",
            b',' => "csv",
            b';' => "csv-semicolon",
            b'|' => "psv",
            _ => "delimited",
        }
        .to_string();

        let source_metadata = SourceMetadata::new(path.to_path_buf(), hash, size_bytes, format);

        Ok((raw, source_metadata))
    }

    /// Decode bytes directly.
    ///
    /// A blank stream decodes to an empty grid; the ingestor downgrades that
    /// to an issue rather than an error.
    pub fn parse_bytes(&self, bytes: &[u8], delimiter: u8) -> Result<RawTable> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(false)
            .quote(self.config.quote)
            .flexible(true)
            .from_reader(bytes);

        let mut cells = Vec::new();
        let mut expected_cols: Option<usize> = None;
        for (row_idx, result) in reader.records().enumerate() {
            if let Some(max) = self.config.max_rows {
                if row_idx >= max {
                    break;
                }
            }

            let record = result?;
            let mut row: Vec<Cell> = record
                .iter()
                .map(|s| Cell::Text(s.to_string()))
                .collect();

            // The first row (the header row) fixes the table width; data
            // rows are padded or truncated to match it
            let width = *expected_cols.get_or_insert(row.len());
            while row.len() < width {
                row.push(Cell::Text(String::new()));
            }
            row.truncate(width);

            cells.push(row);
        }

        Ok(RawTable::new(cells))
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

/// Detect the delimiter by analyzing the first few lines.
///
/// Falls back to comma when nothing can be inferred, so blank input still
/// decodes (to an empty grid) instead of failing.
fn detect_delimiter(bytes: &[u8]) -> u8 {
    let reader = BufReader::new(bytes);
    let lines: Vec<String> = reader
        .lines()
        .take(10)
        .filter_map(|l| l.ok())
        .filter(|l| !l.trim().is_empty())
        .collect();

    if lines.is_empty() {
        return b',';
    }

    let mut best = (0usize, b',');
    for &delim in DELIMITERS {
        let score = delimiter_score(&lines, delim);
        if score > best.0 {
            best = (score, delim);
        }
    }

    best.1
}

/// Score a candidate delimiter across the sampled lines.
///
/// A candidate that splits every line into the same nonzero number of
/// fields is almost certainly the real one; near-uniform counts still
/// score, just lower. Tab gets a nudge because literal tabs rarely occur
/// inside field content.
fn delimiter_score(lines: &[String], delim: u8) -> usize {
    let counts: Vec<usize> = lines
        .iter()
        .map(|line| quote_aware_count(line, delim))
        .collect();

    let per_line = counts[0];
    if per_line == 0 {
        return 0;
    }

    if counts.iter().all(|&c| c == per_line) {
        return per_line * 1000 + if delim == b'\t' { 100 } else { 0 };
    }

    let mean = counts.iter().sum::<usize>() as f64 / counts.len() as f64;
    let variance =
        counts.iter().map(|&c| (c as f64 - mean).powi(2)).sum::<f64>() / counts.len() as f64;

    if variance < 1.0 {
        per_line * 100
    } else {
        per_line
    }
}

/// Count delimiter occurrences in a line, skipping quoted stretches.
fn quote_aware_count(line: &str, delim: u8) -> usize {
    let target = delim as char;
    let mut in_quotes = false;
    let mut count = 0;

    for ch in line.chars() {
        if ch == '"' {
            in_quotes = !in_quotes;
        } else if ch == target && !in_quotes {
            count += 1;
        }
    }

    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_delimiter_csv() {
        let data = b"a,b,c\n1,2,3\n4,5,6";
        assert_eq!(detect_delimiter(data), b',');
    }

    #[test]
    fn test_detect_delimiter_tsv() {
        let data = b"a\tb\tc\n1\t2\t3\n4\t5\t6";
        assert_eq!(detect_delimiter(data), b'\t');
    }

    #[test]
    fn test_detect_delimiter_blank_input_defaults_to_comma() {
        assert_eq!(detect_delimiter(b""), b',');
    }

    #[test]
    fn test_parse_keeps_header_row_in_grid() {
        let parser = Parser::new();
        let data = b"name,age\nAlice,30\nBob,25";
        let raw = parser.parse_bytes(data, b',').unwrap();

        assert_eq!(raw.row_count(), 3);
        assert_eq!(raw.cells[0][0], Cell::Text("name".to_string()));
        assert_eq!(raw.cells[2][1], Cell::Text("25".to_string()));
    }

    #[test]
    fn test_parse_pads_short_rows_to_header_width() {
        let parser = Parser::new();
        let data = b"a,b,c\n1\n2,3\n";
        let raw = parser.parse_bytes(data, b',').unwrap();

        assert_eq!(raw.cells[1].len(), 3);
        assert_eq!(raw.cells[1][1], Cell::Text(String::new()));
        assert_eq!(raw.cells[2].len(), 3);
    }

    #[test]
    fn test_parse_truncates_over_wide_rows_to_header_width() {
        let parser = Parser::new();
        let data = b"a,b\n1,2,3\n";
        let raw = parser.parse_bytes(data, b',').unwrap();

        assert_eq!(raw.cells[1].len(), 2);
        assert_eq!(raw.cells[1][1], Cell::Text("2".to_string()));
    }

    #[test]
    fn test_parse_blank_input_yields_empty_grid() {
        let parser = Parser::new();
        let raw = parser.parse_bytes(b"", b',').unwrap();
        assert!(raw.is_empty());
    }

    #[test]
    fn test_quoted_delimiters_ignored_in_detection() {
        let line = "a,\"x,y\",b";
        assert_eq!(quote_aware_count(line, b','), 2);
    }

    #[test]
    fn test_uniform_candidate_outscores_noisy_one() {
        let lines: Vec<String> = ["a,b;x", "c,d", "e,f"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert!(delimiter_score(&lines, b',') > delimiter_score(&lines, b';'));
    }
}
