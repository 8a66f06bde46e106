use std::path::PathBuf;

use stock_model::{AnnotatedTable, PrefixTag, ProcessingOptions};
use stock_output::OutputPaths;

#[derive(Debug)]
pub struct ProcessResult {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub options: ProcessingOptions,
    /// Rows after filtering and sorting.
    pub table: AnnotatedTable,
    /// Rows per partition, in sheet order.
    pub partitions: Vec<PartitionSummary>,
    pub prefix_counts: Vec<(PrefixTag, usize)>,
    pub outputs: OutputPaths,
    pub dry_run: bool,
    pub preview_rows: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionSummary {
    pub category: String,
    /// Worksheet name in the category workbook.
    pub sheet: String,
    pub records: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryListing {
    pub input: PathBuf,
    /// Categories in first-seen order with row counts.
    pub categories: Vec<(String, usize)>,
    /// Rows with no category value.
    pub missing: usize,
}
