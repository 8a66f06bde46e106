//! Spreadsheet reading via `calamine`.

use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};
use stock_model::CellValue;

use crate::error::{IngestError, Result};
use crate::table::{RawTable, is_blank_row};

/// Reads the first worksheet of a spreadsheet file.
///
/// The first non-blank row is the header row.
pub fn read_workbook_table(path: &Path) -> Result<RawTable> {
    if !path.exists() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let mut workbook = open_workbook_auto(path).map_err(|e| IngestError::Workbook {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let sheet_names = workbook.sheet_names();
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| IngestError::NoWorksheet {
            path: path.to_path_buf(),
        })?
        .map_err(|e| IngestError::Workbook {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    tracing::debug!(
        path = %path.display(),
        sheet = sheet_names.first().map(String::as_str).unwrap_or(""),
        sheet_count = sheet_names.len(),
        "reading first worksheet"
    );

    let mut rows = range
        .rows()
        .map(|row| row.iter().map(cell_from_data).collect::<Vec<_>>())
        .skip_while(|row| is_blank_row(row));
    let headers = rows
        .next()
        .ok_or_else(|| IngestError::EmptyFile {
            path: path.to_path_buf(),
        })?
        .iter()
        .map(CellValue::to_string)
        .collect();
    Ok(RawTable::from_rows(headers, rows.collect()))
}

/// Converts a calamine cell into a [`CellValue`].
pub fn cell_from_data(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::String(value) => CellValue::Text(value.clone()),
        Data::Int(value) => CellValue::Int(*value),
        Data::Float(value) => CellValue::Float(*value),
        Data::Bool(value) => CellValue::Bool(*value),
        other => CellValue::Text(other.to_string()),
    }
}
