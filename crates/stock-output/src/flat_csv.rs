//! Flat CSV output.

use anyhow::{Context, Result, anyhow};
use csv::Writer;
use stock_model::AnnotatedTable;

use crate::common::title_case_header;

/// Renders the processed table as UTF-8 CSV with title-cased headers.
pub fn render_flat_csv(table: &AnnotatedTable) -> Result<Vec<u8>> {
    let columns = table.output_columns();
    let mut writer = Writer::from_writer(Vec::new());
    writer
        .write_record(columns.iter().map(|column| title_case_header(column)))
        .context("write csv header")?;
    for record in &table.records {
        writer
            .write_record(
                columns
                    .iter()
                    .map(|column| record.output_value(column).to_string()),
            )
            .context("write csv row")?;
    }
    writer
        .into_inner()
        .map_err(|e| anyhow!("finish csv output: {}", e.error()))
}
