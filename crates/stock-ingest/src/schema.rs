//! Schema validation: raw headers to a typed [`StockTable`].

use std::collections::BTreeMap;

use stock_model::{CATEGORY_COLUMN, ITEM_COLUMN, REQUIRED_COLUMNS, Record, StockTable};

use crate::columns::{find_duplicate, normalize_headers};
use crate::error::SchemaError;
use crate::table::RawTable;

/// Normalizes headers, checks required and duplicate columns, and builds
/// typed records.
pub fn build_stock_table(raw: RawTable) -> Result<StockTable, SchemaError> {
    if let Some(duplicate) = find_duplicate(&raw.headers) {
        return Err(duplicate);
    }
    let columns = normalize_headers(&raw.headers);
    tracing::debug!(raw = ?raw.headers, normalized = ?columns, "normalized column names");

    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|required| !columns.iter().any(|column| column == *required))
        .map(|required| (*required).to_string())
        .collect();
    if !missing.is_empty() {
        return Err(SchemaError::MissingColumns { missing });
    }

    let records = raw
        .rows
        .into_iter()
        .map(|row| {
            let mut record = Record::default();
            let mut extra = BTreeMap::new();
            for (column, value) in columns.iter().zip(row) {
                match column.as_str() {
                    CATEGORY_COLUMN => record.category = value,
                    ITEM_COLUMN => record.item = value,
                    _ => {
                        extra.insert(column.clone(), value);
                    }
                }
            }
            record.extra = extra;
            record
        })
        .collect();
    Ok(StockTable::new(columns, records))
}
