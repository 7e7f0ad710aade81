//! Cell values and their canonical encoding.

use serde::{Deserialize, Serialize};

/// A single cell value in a table.
///
/// Tabular sources carry heterogeneous primitives; everything downstream
/// (classification, statistics, cleaning) operates on this enum rather than
/// on raw strings so that numeric and boolean cells survive a round trip
/// through the engine untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    /// Missing value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Numeric value.
    Number(f64),
    /// Text value.
    Text(String),
}

impl Cell {
    /// True if this cell counts as missing: null or the empty string.
    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Null => true,
            Cell::Text(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Interpret the cell as a number, if the entire value is numeric.
    ///
    /// Text is trimmed first and must parse in full; partial parses do not
    /// count. Booleans coerce to 0/1 the way loosely typed sources do.
    pub fn numeric_value(&self) -> Option<f64> {
        match self {
            Cell::Number(n) => Some(*n),
            Cell::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            Cell::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    trimmed.parse::<f64>().ok()
                }
            }
            Cell::Null => None,
        }
    }

    /// The cell's text content, if it is a text cell.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Render the cell for display or CSV export.
    pub fn render(&self) -> String {
        match self {
            Cell::Null => String::new(),
            Cell::Bool(b) => b.to_string(),
            Cell::Number(n) => format_number(*n),
            Cell::Text(s) => s.clone(),
        }
    }

    /// Append this cell's type-tagged canonical form to `out`.
    ///
    /// The tag keeps the encoding type-sensitive: the number 1 and the
    /// string "1" must not collide. Text is escaped so the field delimiter
    /// cannot be forged by cell content.
    fn encode_canonical(&self, out: &mut String) {
        match self {
            Cell::Null => out.push_str("z:"),
            Cell::Bool(b) => {
                out.push_str("b:");
                out.push(if *b { '1' } else { '0' });
            }
            Cell::Number(n) => {
                out.push_str("n:");
                out.push_str(&format_number(*n));
            }
            Cell::Text(s) => {
                out.push_str("t:");
                for ch in s.chars() {
                    match ch {
                        '\\' => out.push_str("\\\\"),
                        '|' => out.push_str("\\|"),
                        c => out.push(c),
                    }
                }
            }
        }
    }
}

/// Format a number without a trailing `.0` for whole values.
///
/// Keeps the canonical encoding stable between integer-looking and
/// float-looking representations of the same value.
fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.is_finite() && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

/// Deterministic serialization of a row, used as the equality key for
/// duplicate detection. Value-equal rows encode identically regardless of
/// where they came from.
pub fn canonical_key(row: &[Cell]) -> String {
    let mut out = String::with_capacity(row.len() * 8);
    for (i, cell) in row.iter().enumerate() {
        if i > 0 {
            out.push('|');
        }
        cell.encode_canonical(&mut out);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_empty() {
        assert!(Cell::Null.is_empty());
        assert!(Cell::Text(String::new()).is_empty());
        assert!(!Cell::Text(" ".to_string()).is_empty());
        assert!(!Cell::Number(0.0).is_empty());
        assert!(!Cell::Bool(false).is_empty());
    }

    #[test]
    fn test_numeric_value_trims_but_requires_full_parse() {
        assert_eq!(Cell::Text("  42 ".to_string()).numeric_value(), Some(42.0));
        assert_eq!(Cell::Text("42abc".to_string()).numeric_value(), None);
        assert_eq!(Cell::Text("3.5".to_string()).numeric_value(), Some(3.5));
        assert_eq!(Cell::Bool(true).numeric_value(), Some(1.0));
        assert_eq!(Cell::Null.numeric_value(), None);
    }

    #[test]
    fn test_canonical_key_is_type_sensitive() {
        let numeric = canonical_key(&[Cell::Number(1.0)]);
        let text = canonical_key(&[Cell::Text("1".to_string())]);
        assert_ne!(numeric, text);
    }

    #[test]
    fn test_canonical_key_equal_rows() {
        let a = vec![Cell::Number(1.0), Cell::Text("a".to_string())];
        let b = vec![Cell::Number(1.0), Cell::Text("a".to_string())];
        assert_eq!(canonical_key(&a), canonical_key(&b));
    }

    #[test]
    fn test_canonical_key_escapes_delimiter() {
        let tricky = canonical_key(&[Cell::Text("a|b".to_string())]);
        let split = canonical_key(&[Cell::Text("a".to_string()), Cell::Text("b".to_string())]);
        assert_ne!(tricky, split);
    }

    #[test]
    fn test_format_number_whole_values() {
        assert_eq!(Cell::Number(3.0).render(), "3");
        assert_eq!(Cell::Number(2.5).render(), "2.5");
    }
}
