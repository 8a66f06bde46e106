//! Stock sheet data model.
//!
//! Typed cells, records and tables shared by the ingest, transform and
//! output crates, plus the processing options that configure a run.

pub mod cell;
pub mod options;
pub mod prefix;
pub mod record;

pub use cell::{CellValue, format_numeric};
pub use options::{NullCategoryMode, ProcessingOptions, SortMode};
pub use prefix::PrefixTag;
pub use record::{
    AnnotatedRecord, AnnotatedTable, BASE_ITEM_COLUMN, CATEGORY_COLUMN, ITEM_COLUMN,
    PREFIX_COLUMN, REQUIRED_COLUMNS, Record, StockTable,
};
