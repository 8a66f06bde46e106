//! Cell values for loaded stock sheets.
//!
//! A spreadsheet cell can hold text, a number, a boolean, or nothing at all.
//! Only [`CellValue::Text`] is treated as a string by the classification
//! pipeline; every other variant is a "non-string" value.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A single cell of a stock sheet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum CellValue {
    /// Missing value (blank cell).
    #[default]
    Empty,
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl CellValue {
    /// Creates a text cell.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Builds a cell from delimited-text input.
    ///
    /// Blank input is [`CellValue::Empty`]; anything else is kept verbatim
    /// as text so passthrough columns round-trip unchanged.
    pub fn from_raw(raw: &str) -> Self {
        if raw.trim().is_empty() {
            Self::Empty
        } else {
            Self::Text(raw.to_string())
        }
    }

    /// Returns the string payload for text cells.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value.as_str()),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns the rendered value used for category membership, or `None`
    /// for missing cells.
    pub fn as_key(&self) -> Option<String> {
        if self.is_empty() {
            None
        } else {
            Some(self.to_string())
        }
    }

    /// Total ordering used when sorting by derived values.
    ///
    /// Numbers sort numerically and come before text, text compares by
    /// default string ordering, then booleans, and missing values sort last.
    pub fn sort_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Text(left), Self::Text(right)) => left.cmp(right),
            (Self::Bool(left), Self::Bool(right)) => left.cmp(right),
            (Self::Empty, Self::Empty) => Ordering::Equal,
            _ => match (self.as_f64(), other.as_f64()) {
                (Some(left), Some(right)) => left.total_cmp(&right),
                _ => self.group_rank().cmp(&other.group_rank()),
            },
        }
    }

    fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(value) => Some(*value as f64),
            Self::Float(value) => Some(*value),
            _ => None,
        }
    }

    fn group_rank(&self) -> u8 {
        match self {
            Self::Int(_) | Self::Float(_) => 0,
            Self::Text(_) => 1,
            Self::Bool(_) => 2,
            Self::Empty => 3,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Text(value) => f.write_str(value),
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => f.write_str(&format_numeric(*value)),
            Self::Bool(true) => f.write_str("TRUE"),
            Self::Bool(false) => f.write_str("FALSE"),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

/// Formats a floating-point number without trailing fractional zeros.
///
/// # Examples
///
/// ```
/// use stock_model::format_numeric;
///
/// assert_eq!(format_numeric(1.0), "1");
/// assert_eq!(format_numeric(1.50), "1.5");
/// assert_eq!(format_numeric(100.0), "100");
/// ```
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if !s.contains('.') {
        return s;
    }
    let trimmed = s.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() || trimmed == "-" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_blank_is_empty() {
        assert_eq!(CellValue::from_raw(""), CellValue::Empty);
        assert_eq!(CellValue::from_raw("   "), CellValue::Empty);
    }

    #[test]
    fn test_from_raw_keeps_text_verbatim() {
        assert_eq!(CellValue::from_raw("000123"), CellValue::text("000123"));
        assert_eq!(CellValue::from_raw("1.50"), CellValue::text("1.50"));
        assert_eq!(CellValue::from_raw("true"), CellValue::text("true"));
        assert_eq!(
            CellValue::from_raw(" RETAIL Oat Latte"),
            CellValue::text(" RETAIL Oat Latte")
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(CellValue::Empty.to_string(), "");
        assert_eq!(CellValue::Int(7).to_string(), "7");
        assert_eq!(CellValue::Float(12.0).to_string(), "12");
        assert_eq!(CellValue::Float(0.25).to_string(), "0.25");
        assert_eq!(CellValue::Bool(true).to_string(), "TRUE");
        assert_eq!(CellValue::text("Tea").to_string(), "Tea");
    }

    #[test]
    fn test_as_key() {
        assert_eq!(CellValue::Empty.as_key(), None);
        assert_eq!(CellValue::text("").as_key(), Some(String::new()));
        assert_eq!(CellValue::Int(5).as_key(), Some("5".to_string()));
        assert_eq!(CellValue::Float(5.0).as_key(), Some("5".to_string()));
    }

    #[test]
    fn test_sort_cmp_groups() {
        let mut values = vec![
            CellValue::Empty,
            CellValue::text("b"),
            CellValue::Bool(false),
            CellValue::Float(2.5),
            CellValue::text("a"),
            CellValue::Int(1),
        ];
        values.sort_by(CellValue::sort_cmp);
        assert_eq!(
            values,
            vec![
                CellValue::Int(1),
                CellValue::Float(2.5),
                CellValue::text("a"),
                CellValue::text("b"),
                CellValue::Bool(false),
                CellValue::Empty,
            ]
        );
    }

    #[test]
    fn test_sort_cmp_text_is_case_sensitive() {
        assert_eq!(
            CellValue::text("Zebra").sort_cmp(&CellValue::text("apple")),
            Ordering::Less
        );
    }

    #[test]
    fn test_format_numeric() {
        assert_eq!(format_numeric(1.0), "1");
        assert_eq!(format_numeric(1.5), "1.5");
        assert_eq!(format_numeric(0.0), "0");
        assert_eq!(format_numeric(100.0), "100");
        assert_eq!(format_numeric(-0.5), "-0.5");
    }
}
