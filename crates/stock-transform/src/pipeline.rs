//! Classification pipeline: filter, annotate, sort, partition.
//!
//! Each stage takes a table by reference and returns a new one, so stages
//! compose freely and can be tested on their own.

use stock_model::{
    AnnotatedRecord, AnnotatedTable, NullCategoryMode, ProcessingOptions, PrefixTag, StockTable,
};

use crate::filter::{CategorySelection, filter_by_category};
use crate::prefix::{base_name, classify};
use crate::sort::sort_records;

/// Partition name used for rows with a missing category.
pub const UNCATEGORIZED_PARTITION: &str = "uncategorized";

/// Rows of one category, in pipeline order.
#[derive(Debug, Clone, PartialEq)]
pub struct Partition<'a> {
    pub name: String,
    pub records: Vec<&'a AnnotatedRecord>,
}

/// Attaches the prefix tag and base item name to every record.
pub fn annotate(table: &StockTable) -> AnnotatedTable {
    let records = table
        .records
        .iter()
        .map(|record| AnnotatedRecord {
            prefix: classify(&record.item),
            base_item: base_name(&record.item),
            record: record.clone(),
        })
        .collect();
    AnnotatedTable {
        source_columns: table.columns.clone(),
        records,
    }
}

/// Runs filter, annotate and sort in that order.
pub fn run_pipeline(
    table: &StockTable,
    selection: &CategorySelection,
    options: &ProcessingOptions,
) -> AnnotatedTable {
    let filtered = filter_by_category(table, selection, options.null_category);
    let annotated = annotate(&filtered);
    let records = sort_records(&annotated.records, options.sort_mode);
    tracing::debug!(
        rows = records.len(),
        sort_mode = ?options.sort_mode,
        "classified and sorted rows"
    );
    AnnotatedTable {
        source_columns: annotated.source_columns,
        records,
    }
}

/// Splits a processed table into one partition per selected category.
///
/// Partitions follow selection order and are emitted even when empty.
/// Under [`NullCategoryMode::Include`], rows with a missing category form a
/// trailing [`UNCATEGORIZED_PARTITION`] when any exist.
pub fn partition_by_category<'a>(
    table: &'a AnnotatedTable,
    selection: &CategorySelection,
    null_mode: NullCategoryMode,
) -> Vec<Partition<'a>> {
    let mut partitions: Vec<Partition<'a>> = selection
        .values()
        .iter()
        .map(|category| Partition {
            name: category.clone(),
            records: table
                .records
                .iter()
                .filter(|record| record.record.category_key().as_deref() == Some(category.as_str()))
                .collect(),
        })
        .collect();

    if null_mode == NullCategoryMode::Include {
        let uncategorized: Vec<&AnnotatedRecord> = table
            .records
            .iter()
            .filter(|record| record.record.category.is_empty())
            .collect();
        if !uncategorized.is_empty() {
            partitions.push(Partition {
                name: UNCATEGORIZED_PARTITION.to_string(),
                records: uncategorized,
            });
        }
    }
    partitions
}

/// Row counts per prefix tag in rank order.
pub fn prefix_counts(table: &AnnotatedTable) -> Vec<(PrefixTag, usize)> {
    PrefixTag::ALL
        .into_iter()
        .map(|tag| {
            let count = table.records.iter().filter(|r| r.prefix == tag).count();
            (tag, count)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use stock_model::{CellValue, Record, SortMode};

    fn table() -> StockTable {
        StockTable::new(
            vec!["category".to_string(), "item".to_string(), "qty".to_string()],
            vec![
                Record::new("Coffee", "Mystery Box").with_field("qty", CellValue::Int(1)),
                Record::new("Tea", "RETAIL Chai").with_field("qty", CellValue::Int(2)),
                Record::new("Coffee", "RETAIL Oat Latte").with_field("qty", CellValue::Int(3)),
                Record::new("Coffee", "GLASS Cold Brew").with_field("qty", CellValue::Int(4)),
                Record::new(CellValue::Empty, "SIT IN Scone").with_field("qty", CellValue::Int(5)),
            ],
        )
    }

    #[test]
    fn test_annotate() {
        let annotated = annotate(&table());
        assert_eq!(annotated.len(), 5);
        assert_eq!(annotated.records[2].prefix, PrefixTag::Retail);
        assert_eq!(annotated.records[2].base_item, CellValue::text("Oat Latte"));
        assert_eq!(annotated.records[0].prefix, PrefixTag::Other);
        assert_eq!(annotated.records[0].base_item, CellValue::text("Mystery Box"));
        assert_eq!(annotated.source_columns, vec!["category", "item", "qty"]);
    }

    #[test]
    fn test_run_pipeline_filters_and_sorts() {
        let source = table();
        let processed = run_pipeline(
            &source,
            &CategorySelection::new(["Coffee"]),
            &ProcessingOptions::default(),
        );
        let items: Vec<String> = processed
            .records
            .iter()
            .map(|r| r.record.item.to_string())
            .collect();
        assert_eq!(items, vec!["GLASS Cold Brew", "RETAIL Oat Latte", "Mystery Box"]);
        // Input table is untouched.
        assert_eq!(source.len(), 5);
    }

    #[test]
    fn test_run_pipeline_base_item_tiebreak() {
        let source = StockTable::new(
            vec!["category".to_string(), "item".to_string()],
            vec![
                Record::new("Coffee", "RETAIL Zest"),
                Record::new("Coffee", "RETAIL Apple"),
            ],
        );
        let selection = CategorySelection::all(&source);

        let by_prefix = run_pipeline(
            &source,
            &selection,
            &ProcessingOptions::new().with_sort_mode(SortMode::Prefix),
        );
        assert_eq!(by_prefix.records[0].base_item, CellValue::text("Zest"));

        let by_base = run_pipeline(&source, &selection, &ProcessingOptions::new());
        assert_eq!(by_base.records[0].base_item, CellValue::text("Apple"));
    }

    #[test]
    fn test_partition_by_category() {
        let source = table();
        let selection = CategorySelection::new(["Tea", "Coffee", "Cocoa"]);
        let options = ProcessingOptions::new().with_null_category(NullCategoryMode::Include);
        let processed = run_pipeline(&source, &selection, &options);
        let partitions = partition_by_category(&processed, &selection, options.null_category);

        let names: Vec<&str> = partitions.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Tea", "Coffee", "Cocoa", UNCATEGORIZED_PARTITION]);
        assert_eq!(partitions[0].records.len(), 1);
        assert_eq!(partitions[1].records.len(), 3);
        assert!(partitions[2].records.is_empty());
        assert_eq!(partitions[3].records.len(), 1);
        assert_eq!(
            partitions[1].records[0].record.item,
            CellValue::text("GLASS Cold Brew")
        );
    }

    #[test]
    fn test_partition_excludes_uncategorized_by_default() {
        let source = table();
        let selection = CategorySelection::all(&source);
        let processed = run_pipeline(&source, &selection, &ProcessingOptions::default());
        let partitions = partition_by_category(&processed, &selection, NullCategoryMode::Exclude);
        assert_eq!(partitions.len(), 2);
    }

    #[test]
    fn test_prefix_counts() {
        let annotated = annotate(&table());
        assert_eq!(
            prefix_counts(&annotated),
            vec![
                (PrefixTag::Glass, 1),
                (PrefixTag::Retail, 2),
                (PrefixTag::SitIn, 1),
                (PrefixTag::Other, 1),
            ]
        );
    }
}
