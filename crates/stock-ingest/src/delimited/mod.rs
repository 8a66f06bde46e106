//! Delimited text (CSV) reading.

mod reader;

pub(crate) use reader::read_file_bytes;
pub use reader::{parse_csv_text, read_csv_table};
