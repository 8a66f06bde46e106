use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use tracing::{info, info_span};

use stock_ingest::{InspectionReport, inspect_csv, load_stock_table};
use stock_model::StockTable;
use stock_output::{
    OutputFormat, planned_outputs, render_outputs, unique_sheet_names, write_outputs,
};
use stock_transform::{
    CategorySelection, category_counts, observed_categories, partition_by_category,
    prefix_counts, run_pipeline,
};

use crate::cli::{CategoriesArgs, InspectArgs, ProcessArgs};
use crate::config::resolve_options;
use crate::types::{CategoryListing, PartitionSummary, ProcessResult};

pub fn run_process(args: &ProcessArgs) -> Result<ProcessResult> {
    let span = info_span!("process", path = %args.file.display());
    let _guard = span.enter();

    let options = resolve_options(args)?;
    let table = load_stock_table(&args.file)?;
    let selection = select_categories(&table, &args.categories)?;

    let processed = run_pipeline(&table, &selection, &options);
    let partitions = partition_by_category(&processed, &selection, options.null_category);
    let names: Vec<&str> = partitions.iter().map(|p| p.name.as_str()).collect();
    let partition_summaries = partitions
        .iter()
        .zip(unique_sheet_names(&names))
        .map(|(partition, sheet)| PartitionSummary {
            category: partition.name.clone(),
            sheet,
            records: partition.records.len(),
        })
        .collect();

    let output_dir = resolve_output_dir(&args.file, args.output_dir.as_deref());
    let format = OutputFormat::from(args.format);
    let outputs = if args.dry_run {
        render_outputs(&processed, &partitions, format)?;
        info!(output_dir = %output_dir.display(), "dry run, skipping output files");
        planned_outputs(&output_dir, format)
    } else {
        write_outputs(&output_dir, &processed, &partitions, format)?
    };

    info!(
        rows = processed.len(),
        source_rows = table.len(),
        category_count = selection.len(),
        "processed stock sheet"
    );

    Ok(ProcessResult {
        input: args.file.clone(),
        output_dir,
        options,
        prefix_counts: prefix_counts(&processed),
        table: processed,
        partitions: partition_summaries,
        outputs,
        dry_run: args.dry_run,
        preview_rows: args.preview_rows,
    })
}

pub fn run_categories(args: &CategoriesArgs) -> Result<CategoryListing> {
    let table = load_stock_table(&args.file)?;
    let counts = category_counts(&table);
    let categories = observed_categories(&table)
        .into_iter()
        .map(|category| {
            let count = counts.get(&Some(category.clone())).copied().unwrap_or(0);
            (category, count)
        })
        .collect();
    Ok(CategoryListing {
        input: args.file.clone(),
        categories,
        missing: counts.get(&None).copied().unwrap_or(0),
    })
}

pub fn run_inspect(args: &InspectArgs) -> Result<InspectionReport> {
    Ok(inspect_csv(&args.file)?)
}

/// Builds the category selection, rejecting values absent from the sheet.
///
/// An empty request selects every observed category.
pub fn select_categories(table: &StockTable, requested: &[String]) -> Result<CategorySelection> {
    if requested.is_empty() {
        return Ok(CategorySelection::all(table));
    }
    let selection = CategorySelection::new(requested.iter().cloned());
    let unknown = selection.unknown_in(table);
    if !unknown.is_empty() {
        let available = observed_categories(table);
        bail!(
            "unknown category: {} (available: {})",
            unknown.join(", "),
            if available.is_empty() {
                "none".to_string()
            } else {
                available.join(", ")
            }
        );
    }
    Ok(selection)
}

/// Output directory: the explicit one, else the input file's directory.
pub fn resolve_output_dir(input: &Path, output_dir: Option<&Path>) -> PathBuf {
    if let Some(dir) = output_dir {
        return dir.to_path_buf();
    }
    match input.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stock_model::Record;

    fn table() -> StockTable {
        StockTable::new(
            vec!["category".to_string(), "item".to_string()],
            vec![
                Record::new("Wine", "GLASS Merlot"),
                Record::new("Bakery", "SIT IN Scone"),
            ],
        )
    }

    #[test]
    fn test_select_categories_defaults_to_all() {
        let selection = select_categories(&table(), &[]).unwrap();
        assert_eq!(selection.values(), ["Wine", "Bakery"]);
    }

    #[test]
    fn test_select_categories_rejects_unknown() {
        let err = select_categories(&table(), &["Wine".to_string(), "Cider".to_string()])
            .unwrap_err()
            .to_string();
        assert!(err.contains("unknown category: Cider"));
        assert!(err.contains("available: Wine, Bakery"));
    }

    #[test]
    fn test_resolve_output_dir() {
        assert_eq!(
            resolve_output_dir(Path::new("/data/stock.xlsx"), None),
            PathBuf::from("/data")
        );
        assert_eq!(
            resolve_output_dir(Path::new("stock.xlsx"), None),
            PathBuf::from(".")
        );
        assert_eq!(
            resolve_output_dir(Path::new("/data/stock.xlsx"), Some(Path::new("/out"))),
            PathBuf::from("/out")
        );
    }
}
