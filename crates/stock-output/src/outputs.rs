//! Combined output writing.

use std::path::Path;

use anyhow::Result;
use stock_model::AnnotatedTable;
use stock_transform::Partition;

use crate::common::{FLAT_CSV_FILE_NAME, PARTITIONED_XLSX_FILE_NAME, write_bytes};
use crate::flat_csv::render_flat_csv;
use crate::types::{OutputFormat, OutputPaths};
use crate::workbook::render_partitioned_xlsx;

/// Paths the requested formats would be written to under `output_dir`.
pub fn planned_outputs(output_dir: &Path, format: OutputFormat) -> OutputPaths {
    OutputPaths {
        csv: format
            .wants_csv()
            .then(|| output_dir.join(FLAT_CSV_FILE_NAME)),
        xlsx: format
            .wants_xlsx()
            .then(|| output_dir.join(PARTITIONED_XLSX_FILE_NAME)),
    }
}

/// Output files rendered in memory, one entry per requested format.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedOutputs {
    pub csv: Option<Vec<u8>>,
    pub xlsx: Option<Vec<u8>>,
}

/// Renders every requested output without touching the filesystem.
pub fn render_outputs(
    table: &AnnotatedTable,
    partitions: &[Partition<'_>],
    format: OutputFormat,
) -> Result<RenderedOutputs> {
    let csv = if format.wants_csv() {
        Some(render_flat_csv(table)?)
    } else {
        None
    };
    let xlsx = if format.wants_xlsx() {
        Some(render_partitioned_xlsx(&table.output_columns(), partitions)?)
    } else {
        None
    };
    Ok(RenderedOutputs { csv, xlsx })
}

/// Writes every requested output into `output_dir`.
///
/// All outputs are rendered in memory first; nothing is written when any
/// rendering step fails.
pub fn write_outputs(
    output_dir: &Path,
    table: &AnnotatedTable,
    partitions: &[Partition<'_>],
    format: OutputFormat,
) -> Result<OutputPaths> {
    let rendered = render_outputs(table, partitions, format)?;
    let planned = planned_outputs(output_dir, format);
    if let (Some(path), Some(bytes)) = (&planned.csv, &rendered.csv) {
        write_bytes(path, bytes)?;
        tracing::info!(path = %path.display(), rows = table.len(), "wrote flat csv");
    }
    if let (Some(path), Some(bytes)) = (&planned.xlsx, &rendered.xlsx) {
        write_bytes(path, bytes)?;
        tracing::info!(
            path = %path.display(),
            sheets = partitions.len(),
            "wrote category workbook"
        );
    }
    Ok(planned)
}
