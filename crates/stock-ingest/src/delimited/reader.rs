//! Delimited text reading with encoding detection.

use std::path::Path;

use csv::ReaderBuilder;
use stock_model::CellValue;

use crate::encoding::decode_detected;
use crate::error::{IngestError, Result};
use crate::table::{RawTable, is_blank_row};

/// Reads the whole file into memory.
pub(crate) fn read_file_bytes(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })
}

/// Reads a CSV file, detecting its encoding first.
///
/// The first non-blank row is the header row.
pub fn read_csv_table(path: &Path) -> Result<RawTable> {
    let bytes = read_file_bytes(path)?;
    let (_, text) = decode_detected(&bytes, path)?;
    parse_csv_text(&text, path)
}

/// Parses decoded CSV text. `path` is used for error messages only.
pub fn parse_csv_text(text: &str, path: &Path) -> Result<RawTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut headers: Option<Vec<String>> = None;
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        if headers.is_none() {
            let row: Vec<String> = record.iter().map(str::to_string).collect();
            if row.iter().all(|value| value.trim().is_empty()) {
                continue;
            }
            headers = Some(row);
            continue;
        }
        let row: Vec<CellValue> = record.iter().map(CellValue::from_raw).collect();
        if is_blank_row(&row) {
            continue;
        }
        rows.push(row);
    }

    let headers = headers.ok_or_else(|| IngestError::EmptyFile {
        path: path.to_path_buf(),
    })?;
    Ok(RawTable::from_rows(headers, rows))
}
