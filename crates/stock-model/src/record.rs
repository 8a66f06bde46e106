//! Records and tables of a loaded stock sheet.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::cell::CellValue;
use crate::prefix::PrefixTag;

/// Normalized name of the category column.
pub const CATEGORY_COLUMN: &str = "category";
/// Normalized name of the item column.
pub const ITEM_COLUMN: &str = "item";
/// Derived column holding the prefix tag.
pub const PREFIX_COLUMN: &str = "prefix";
/// Derived column holding the base item name.
pub const BASE_ITEM_COLUMN: &str = "base_item";

/// Columns every stock sheet must provide after header normalization.
pub const REQUIRED_COLUMNS: [&str; 2] = [CATEGORY_COLUMN, ITEM_COLUMN];

/// One row of a stock sheet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub category: CellValue,
    pub item: CellValue,
    /// Passthrough columns keyed by normalized column name.
    pub extra: BTreeMap<String, CellValue>,
}

impl Record {
    pub fn new(category: impl Into<CellValue>, item: impl Into<CellValue>) -> Self {
        Self {
            category: category.into(),
            item: item.into(),
            extra: BTreeMap::new(),
        }
    }

    /// Adds a passthrough column value.
    #[must_use]
    pub fn with_field(mut self, column: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.extra.insert(column.into(), value.into());
        self
    }

    /// Looks up a value by normalized column name.
    pub fn get(&self, column: &str) -> Option<&CellValue> {
        match column {
            CATEGORY_COLUMN => Some(&self.category),
            ITEM_COLUMN => Some(&self.item),
            other => self.extra.get(other),
        }
    }

    /// Category rendered for selection, `None` when missing.
    pub fn category_key(&self) -> Option<String> {
        self.category.as_key()
    }
}

/// Ordered records sharing one set of normalized column names.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StockTable {
    /// Normalized column names in source order.
    pub columns: Vec<String>,
    pub records: Vec<Record>,
}

impl StockTable {
    pub fn new(columns: Vec<String>, records: Vec<Record>) -> Self {
        Self { columns, records }
    }

    /// Returns a new table with the same columns and the given records.
    pub fn with_records(&self, records: Vec<Record>) -> Self {
        Self {
            columns: self.columns.clone(),
            records,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// A record with its derived prefix tag and base item name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedRecord {
    pub record: Record,
    pub prefix: PrefixTag,
    pub base_item: CellValue,
}

impl AnnotatedRecord {
    /// Value of a column in output form, including the derived columns.
    pub fn output_value(&self, column: &str) -> CellValue {
        match column {
            PREFIX_COLUMN => CellValue::text(self.prefix.token()),
            BASE_ITEM_COLUMN => self.base_item.clone(),
            other => self.record.get(other).cloned().unwrap_or_default(),
        }
    }
}

/// Records annotated by the classification pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedTable {
    /// Normalized source column names in source order.
    pub source_columns: Vec<String>,
    pub records: Vec<AnnotatedRecord>,
}

impl AnnotatedTable {
    /// Output column order: source columns, then `prefix` and `base_item`.
    ///
    /// A source column sharing a derived column's name is replaced by it.
    pub fn output_columns(&self) -> Vec<String> {
        let mut columns: Vec<String> = self
            .source_columns
            .iter()
            .filter(|name| !is_derived_column(name))
            .cloned()
            .collect();
        columns.push(PREFIX_COLUMN.to_string());
        columns.push(BASE_ITEM_COLUMN.to_string());
        columns
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn is_derived_column(name: &str) -> bool {
    name == PREFIX_COLUMN || name == BASE_ITEM_COLUMN
}
