//! Header normalization.
//!
//! Raw spreadsheet headers often carry stray padding, mixed case, and
//! invisible characters pasted in from other tools. Normalized keys make
//! column lookups case- and whitespace-insensitive.

use std::collections::BTreeMap;

use crate::error::SchemaError;

/// Characters removed from headers wherever they occur.
const INVISIBLE_CHARS: [char; 3] = ['\u{a0}', '\n', '\r'];

/// Normalizes a raw header: trim, lowercase, strip invisible characters.
///
/// ```
/// use stock_ingest::normalize_header;
///
/// assert_eq!(normalize_header(" Category\n"), "category");
/// ```
pub fn normalize_header(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .chars()
        .filter(|ch| !INVISIBLE_CHARS.contains(ch))
        .collect()
}

/// Normalizes every header, keeping length and order. No deduplication.
pub fn normalize_headers<S: AsRef<str>>(raws: &[S]) -> Vec<String> {
    raws.iter()
        .map(|raw| normalize_header(raw.as_ref()))
        .collect()
}

/// Diagnostic variant of [`normalize_header`] that also turns spaces into `_`.
pub fn snake_case_header(raw: &str) -> String {
    normalize_header(raw).replace(' ', "_")
}

/// Placeholder name for a blank header at `index`.
pub fn placeholder_header(index: usize) -> String {
    format!("unnamed_{index}")
}

/// Returns the first pair of raw headers that normalize to the same key.
pub fn find_duplicate<S: AsRef<str>>(raws: &[S]) -> Option<SchemaError> {
    let mut seen: BTreeMap<String, &str> = BTreeMap::new();
    for raw in raws {
        let raw = raw.as_ref();
        let key = normalize_header(raw);
        if let Some(first) = seen.get(&key) {
            return Some(SchemaError::DuplicateColumn {
                key,
                first: (*first).to_string(),
                second: raw.to_string(),
            });
        }
        seen.insert(key, raw);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_header_trims_and_lowercases() {
        assert_eq!(normalize_header("  Item  "), "item");
        assert_eq!(normalize_header("CATEGORY"), "category");
        assert_eq!(normalize_header(" Category\n"), "category");
    }

    #[test]
    fn test_normalize_header_strips_invisible_characters() {
        assert_eq!(normalize_header("Cat\u{a0}egory"), "category");
        assert_eq!(normalize_header("Item\r\n"), "item");
        assert_eq!(normalize_header("Unit\nCost"), "unitcost");
        assert_eq!(normalize_header("\u{a0}Item\u{a0}"), "item");
    }

    #[test]
    fn test_normalize_header_keeps_inner_spaces() {
        assert_eq!(normalize_header("Unit Cost"), "unit cost");
    }

    #[test]
    fn test_normalize_headers_preserves_order_and_duplicates() {
        let raws = ["Item", "ITEM", " Qty "];
        assert_eq!(normalize_headers(&raws), vec!["item", "item", "qty"]);
    }

    #[test]
    fn test_snake_case_header() {
        assert_eq!(snake_case_header(" Unit Cost\r"), "unit_cost");
        assert_eq!(snake_case_header("Category"), "category");
    }

    #[test]
    fn test_find_duplicate() {
        assert_eq!(find_duplicate(&["Category", "Item"]), None);
        assert_eq!(
            find_duplicate(&["Category ", "Item", "CATEGORY"]),
            Some(SchemaError::DuplicateColumn {
                key: "category".to_string(),
                first: "Category ".to_string(),
                second: "CATEGORY".to_string(),
            })
        );
    }
}
