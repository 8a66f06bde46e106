//! Diagnostic inspection of delimited files.
//!
//! Loads a CSV into a Polars `DataFrame` after encoding detection and
//! collects what is needed to debug a file that fails to load: the detected
//! encoding, raw and cleaned headers, and sample values per column.

use std::io::Cursor;
use std::path::{Path, PathBuf};

use polars::prelude::{CsvReadOptions, DataFrame, SerReader, Series};
use stock_model::REQUIRED_COLUMNS;

use crate::columns::snake_case_header;
use crate::delimited::read_file_bytes;
use crate::encoding::decode_detected;
use crate::error::Result;

/// Rows shown in the table preview.
pub const HEAD_ROWS: usize = 5;
/// Values shown per column.
pub const COLUMN_SAMPLE_ROWS: usize = 10;

/// Findings for one inspected file.
#[derive(Debug, Clone)]
pub struct InspectionReport {
    pub path: PathBuf,
    /// Name of the detected encoding (e.g. "UTF-8", "windows-1252").
    pub encoding: &'static str,
    /// Column names exactly as loaded.
    pub raw_columns: Vec<String>,
    /// Column names after trimming, lowercasing, stripping, and snake-casing.
    pub cleaned_columns: Vec<String>,
    /// First rows of the loaded table.
    pub head: DataFrame,
    /// First values of each column, named by the cleaned column name.
    pub column_samples: Vec<Series>,
}

impl InspectionReport {
    /// Required columns absent from the cleaned column names.
    pub fn missing_required(&self) -> Vec<&'static str> {
        REQUIRED_COLUMNS
            .iter()
            .copied()
            .filter(|required| !self.cleaned_columns.iter().any(|c| c == required))
            .collect()
    }

    pub fn has_required_columns(&self) -> bool {
        self.missing_required().is_empty()
    }
}

/// Detects the encoding of a CSV file and loads it for inspection.
pub fn inspect_csv(path: &Path) -> Result<InspectionReport> {
    let bytes = read_file_bytes(path)?;
    let (encoding, text) = decode_detected(&bytes, path)?;
    let df = read_dataframe(text.into_owned())?;

    let raw_columns: Vec<String> = df
        .get_column_names()
        .iter()
        .map(ToString::to_string)
        .collect();
    let cleaned_columns: Vec<String> = raw_columns
        .iter()
        .map(|name| snake_case_header(name))
        .collect();

    let mut column_samples = Vec::with_capacity(cleaned_columns.len());
    for (column, cleaned) in df.get_columns().iter().zip(&cleaned_columns) {
        let mut sample = column
            .as_materialized_series()
            .head(Some(COLUMN_SAMPLE_ROWS));
        sample.rename(cleaned.as_str().into());
        column_samples.push(sample);
    }

    tracing::debug!(
        path = %path.display(),
        encoding = encoding.name(),
        rows = df.height(),
        columns = df.width(),
        "loaded file for inspection"
    );

    Ok(InspectionReport {
        path: path.to_path_buf(),
        encoding: encoding.name(),
        raw_columns,
        cleaned_columns,
        head: df.head(Some(HEAD_ROWS)),
        column_samples,
    })
}

fn read_dataframe(text: String) -> Result<DataFrame> {
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .into_reader_with_file_handle(Cursor::new(text.into_bytes()))
        .finish()?;
    Ok(df)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IngestError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content).unwrap();
        file
    }

    #[test]
    fn test_inspect_csv_reports_columns() {
        let file = create_temp_csv(b" Category ,Item,Unit Cost\nCoffee,RETAIL Oat Latte,3.5\n");
        let report = inspect_csv(file.path()).unwrap();

        assert_eq!(report.encoding, "UTF-8");
        assert_eq!(report.raw_columns, vec![" Category ", "Item", "Unit Cost"]);
        assert_eq!(report.cleaned_columns, vec!["category", "item", "unit_cost"]);
        assert!(report.has_required_columns());
        assert_eq!(report.head.height(), 1);
        assert_eq!(report.column_samples.len(), 3);
        assert_eq!(report.column_samples[2].name().as_str(), "unit_cost");
    }

    #[test]
    fn test_inspect_csv_reports_missing_columns() {
        let file = create_temp_csv(b"Name,Qty\nLatte,4\n");
        let report = inspect_csv(file.path()).unwrap();
        assert_eq!(report.missing_required(), vec!["category", "item"]);
        assert!(!report.has_required_columns());
    }

    #[test]
    fn test_inspect_csv_limits_samples() {
        let mut content = String::from("Category,Item\n");
        for idx in 0..25 {
            content.push_str(&format!("Tea,Item {idx}\n"));
        }
        let file = create_temp_csv(content.as_bytes());
        let report = inspect_csv(file.path()).unwrap();
        assert_eq!(report.head.height(), HEAD_ROWS);
        assert_eq!(report.column_samples[0].len(), COLUMN_SAMPLE_ROWS);
    }

    #[test]
    fn test_inspect_csv_legacy_encoding() {
        let file = create_temp_csv(b"Category,Item\nCaf\xE9,Cr\xE8me\n");
        let report = inspect_csv(file.path()).unwrap();
        assert_eq!(report.encoding, "windows-1252");
    }

    #[test]
    fn test_inspect_csv_ragged_rows_fail_as_dataframe_error() {
        let file = create_temp_csv(b"Category,Item\nTea,Chai,extra\n");
        let result = inspect_csv(file.path());
        assert!(matches!(result, Err(IngestError::DataFrame { .. })));
    }
}
