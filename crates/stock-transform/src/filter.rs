//! Category selection and filtering.

use std::collections::{BTreeMap, BTreeSet};

use stock_model::{NullCategoryMode, Record, StockTable};

/// Ordered set of selected category values.
///
/// Order is kept because it decides the sheet order of partitioned output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategorySelection {
    values: Vec<String>,
    lookup: BTreeSet<String>,
}

impl CategorySelection {
    /// Builds a selection, collapsing duplicates to their first position.
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut selection = Self::default();
        for value in values {
            let value = value.into();
            if selection.lookup.insert(value.clone()) {
                selection.values.push(value);
            }
        }
        selection
    }

    /// Selects every category observed in `table`.
    pub fn all(table: &StockTable) -> Self {
        Self::new(observed_categories(table))
    }

    pub fn contains(&self, category: &str) -> bool {
        self.lookup.contains(category)
    }

    /// Selected values in selection order.
    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Selected values that are not observed in `table`.
    pub fn unknown_in(&self, table: &StockTable) -> Vec<String> {
        let observed: BTreeSet<String> = observed_categories(table).into_iter().collect();
        self.values
            .iter()
            .filter(|value| !observed.contains(*value))
            .cloned()
            .collect()
    }
}

/// Distinct non-missing categories in first-seen order.
pub fn observed_categories(table: &StockTable) -> Vec<String> {
    let mut seen = BTreeSet::new();
    let mut categories = Vec::new();
    for key in table.records.iter().filter_map(Record::category_key) {
        if seen.insert(key.clone()) {
            categories.push(key);
        }
    }
    categories
}

/// Row counts per category; missing categories are counted under `None`.
pub fn category_counts(table: &StockTable) -> BTreeMap<Option<String>, usize> {
    let mut counts = BTreeMap::new();
    for record in &table.records {
        *counts.entry(record.category_key()).or_insert(0) += 1;
    }
    counts
}

/// Keeps records whose category is selected.
///
/// Records with a missing category are kept only under
/// [`NullCategoryMode::Include`]. Surviving records keep their relative
/// order and are not modified.
pub fn filter_by_category(
    table: &StockTable,
    selection: &CategorySelection,
    null_mode: NullCategoryMode,
) -> StockTable {
    let records: Vec<Record> = table
        .records
        .iter()
        .filter(|record| match record.category_key() {
            Some(key) => selection.contains(&key),
            None => null_mode == NullCategoryMode::Include,
        })
        .cloned()
        .collect();
    tracing::debug!(
        input_rows = table.len(),
        kept_rows = records.len(),
        selected = selection.len(),
        "filtered by category"
    );
    table.with_records(records)
}
