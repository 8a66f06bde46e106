//! Input dispatch: picks a reader by file extension.

use std::path::Path;

use stock_model::StockTable;

use crate::delimited::read_csv_table;
use crate::error::{IngestError, Result};
use crate::schema::build_stock_table;
use crate::table::RawTable;
use crate::workbook::read_workbook_table;

/// Supported input families.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// Sheet-based spreadsheet read with calamine.
    Workbook,
    /// Delimited text (CSV).
    Delimited,
}

impl InputFormat {
    /// Determines the format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(std::ffi::OsStr::to_str)
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match extension.as_str() {
            "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => Ok(Self::Workbook),
            "csv" | "txt" => Ok(Self::Delimited),
            _ => Err(IngestError::UnsupportedFormat {
                path: path.to_path_buf(),
                extension,
            }),
        }
    }
}

/// Reads headers and rows without schema checks.
pub fn read_raw_table(path: &Path) -> Result<RawTable> {
    match InputFormat::from_path(path)? {
        InputFormat::Workbook => read_workbook_table(path),
        InputFormat::Delimited => read_csv_table(path),
    }
}

/// Loads a stock sheet and validates its schema.
///
/// Either the whole file loads into a [`StockTable`] or an error is
/// returned; no partial table is ever produced.
pub fn load_stock_table(path: &Path) -> Result<StockTable> {
    let raw = read_raw_table(path)?;
    let table = build_stock_table(raw)?;
    tracing::info!(
        path = %path.display(),
        rows = table.len(),
        columns = table.columns.len(),
        "file parsed"
    );
    Ok(table)
}
