//! Output generation for processed stock sheets.
//!
//! Two downloads are produced from one processed table: a flat CSV with
//! title-cased headers and a workbook with one sheet per category.

pub mod common;
pub mod flat_csv;
pub mod outputs;
pub mod sheet_name;
pub mod types;
pub mod workbook;

pub use common::{FLAT_CSV_FILE_NAME, PARTITIONED_XLSX_FILE_NAME, title_case_header};
pub use flat_csv::render_flat_csv;
pub use outputs::{RenderedOutputs, planned_outputs, render_outputs, write_outputs};
pub use sheet_name::{MAX_SHEET_NAME_CHARS, sanitize_sheet_name, unique_sheet_names};
pub use types::{OutputFormat, OutputPaths};
pub use workbook::{
    SheetData, build_sheets, column_letters, render_partitioned_xlsx, render_workbook,
};
