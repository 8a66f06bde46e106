//! Shared utilities for output generation.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// File name of the flat CSV download.
pub const FLAT_CSV_FILE_NAME: &str = "filtered_stock.csv";

/// File name of the per-category spreadsheet download.
pub const PARTITIONED_XLSX_FILE_NAME: &str = "filtered_stock_by_category.xlsx";

/// Ensure a parent directory exists for a file path.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    Ok(())
}

/// Title-cases a column name for display.
///
/// Every letter that follows a non-letter is uppercased and every other
/// letter is lowercased, so `base_item` becomes `Base_Item`.
pub fn title_case_header(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut previous_is_letter = false;
    for ch in name.chars() {
        if ch.is_alphabetic() {
            if previous_is_letter {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            previous_is_letter = true;
        } else {
            out.push(ch);
            previous_is_letter = false;
        }
    }
    out
}

/// Writes `bytes` to `path`, creating parent directories as needed.
pub fn write_bytes(path: &Path, bytes: &[u8]) -> Result<()> {
    ensure_parent_dir(path)?;
    fs::write(path, bytes).with_context(|| format!("write {}", path.display()))
}
