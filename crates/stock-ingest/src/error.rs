//! Error types for stock sheet ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a stock sheet.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Input file not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File extension is not a supported spreadsheet or delimited format.
    #[error("unsupported file format '{extension}' for {path}")]
    UnsupportedFormat { path: PathBuf, extension: String },

    // === Load Errors ===
    /// Spreadsheet could not be opened or parsed.
    #[error("error reading the spreadsheet {path}: {message}")]
    Workbook { path: PathBuf, message: String },

    /// Spreadsheet has no worksheet to read.
    #[error("no worksheet found in {path}")]
    NoWorksheet { path: PathBuf },

    /// File has no header row.
    #[error("file is empty: {path}")]
    EmptyFile { path: PathBuf },

    /// Delimited text could not be parsed.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// Detected encoding failed to decode the file.
    #[error("failed to decode {path} as {encoding}")]
    Encoding {
        path: PathBuf,
        encoding: &'static str,
    },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },

    // === Schema Errors ===
    #[error(transparent)]
    Schema(#[from] SchemaError),
}

/// Problems with the normalized column set of an input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// Required columns are absent after normalization.
    #[error("input must include 'category' and 'item' columns (missing: {})", .missing.join(", "))]
    MissingColumns { missing: Vec<String> },

    /// Two raw headers normalize to the same key.
    #[error("columns '{first}' and '{second}' both normalize to '{key}'")]
    DuplicateColumn {
        key: String,
        first: String,
        second: String,
    },
}

impl From<polars::prelude::PolarsError> for IngestError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/path/to/stock.xlsx"),
        };
        assert_eq!(err.to_string(), "file not found: /path/to/stock.xlsx");
    }

    #[test]
    fn test_schema_error_display() {
        let err = IngestError::from(SchemaError::MissingColumns {
            missing: vec!["item".to_string()],
        });
        assert_eq!(
            err.to_string(),
            "input must include 'category' and 'item' columns (missing: item)"
        );

        let err = SchemaError::DuplicateColumn {
            key: "category".to_string(),
            first: "Category ".to_string(),
            second: "CATEGORY".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "columns 'Category ' and 'CATEGORY' both normalize to 'category'"
        );
    }

    #[test]
    fn test_error_from_polars() {
        let polars_err = polars::prelude::PolarsError::ColumnNotFound("test".into());
        let ingest_err: IngestError = polars_err.into();
        assert!(matches!(ingest_err, IngestError::DataFrame { .. }));
    }
}
