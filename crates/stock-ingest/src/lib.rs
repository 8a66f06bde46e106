//! Stock sheet ingestion.
//!
//! Loads a monthly stock spreadsheet (or CSV export) into a typed
//! [`stock_model::StockTable`].
//!
//! # Features
//!
//! - **Header normalization**: trim, lowercase, strip invisible characters
//! - **Spreadsheet loading**: first worksheet via `calamine`
//! - **CSV loading**: encoding detection, then `csv` parsing
//! - **Schema checks**: required `category`/`item` columns, no collisions
//! - **Inspection**: diagnostic report for malformed CSV files
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use stock_ingest::load_stock_table;
//!
//! let table = load_stock_table(Path::new("stock-2025-04.xlsx"))?;
//! println!("{} rows", table.len());
//! ```

mod columns;
mod delimited;
mod encoding;
mod error;
mod inspect;
mod loader;
mod schema;
mod table;
mod workbook;

// === Error Types ===
pub use error::{IngestError, Result, SchemaError};

// === Header Normalization ===
pub use columns::{
    find_duplicate, normalize_header, normalize_headers, placeholder_header, snake_case_header,
};

// === Reading ===
pub use delimited::{parse_csv_text, read_csv_table};
pub use encoding::{decode_bytes, decode_detected, detect_encoding};
pub use loader::{InputFormat, load_stock_table, read_raw_table};
pub use schema::build_stock_table;
pub use table::RawTable;
pub use workbook::{cell_from_data, read_workbook_table};

// === Inspection ===
pub use inspect::{COLUMN_SAMPLE_ROWS, HEAD_ROWS, InspectionReport, inspect_csv};
