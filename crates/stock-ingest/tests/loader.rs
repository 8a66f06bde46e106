use std::fs;
use std::path::PathBuf;

use stock_ingest::{IngestError, SchemaError, load_stock_table};
use stock_model::CellValue;

fn temp_file(dir: &tempfile::TempDir, name: &str, contents: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write file");
    path
}

#[test]
fn loads_csv_into_records() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = temp_file(
        &dir,
        "stock.csv",
        b" Category\xC2\xA0,ITEM,Qty\nCoffee,RETAIL Oat Latte,4\nTea,GLASS Chai,\n,Mystery Box,1\n",
    );

    let table = load_stock_table(&path).expect("load table");

    assert_eq!(table.columns, vec!["category", "item", "qty"]);
    assert_eq!(table.len(), 3);
    assert_eq!(table.records[0].category, CellValue::text("Coffee"));
    assert_eq!(table.records[0].get("qty"), Some(&CellValue::text("4")));
    assert_eq!(table.records[1].get("qty"), Some(&CellValue::Empty));
    assert_eq!(table.records[2].category, CellValue::Empty);
    assert_eq!(table.records[2].item, CellValue::text("Mystery Box"));
}

#[test]
fn csv_passthrough_values_are_kept_verbatim() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = temp_file(
        &dir,
        "stock.csv",
        b"Category,Item,SKU,Active,Price\n001,RETAIL Beans,000123,true,1.50\n",
    );

    let table = load_stock_table(&path).expect("load table");

    let record = &table.records[0];
    assert_eq!(record.category_key().as_deref(), Some("001"));
    assert_eq!(record.get("sku"), Some(&CellValue::text("000123")));
    assert_eq!(record.get("active"), Some(&CellValue::text("true")));
    assert_eq!(record.get("price"), Some(&CellValue::text("1.50")));
}

#[test]
fn rejects_missing_required_columns() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = temp_file(&dir, "stock.csv", b"Category,Name\nTea,Chai\n");

    let err = load_stock_table(&path).unwrap_err();
    assert!(matches!(
        err,
        IngestError::Schema(SchemaError::MissingColumns { ref missing }) if missing == &vec!["item".to_string()]
    ));
}

#[test]
fn rejects_colliding_headers() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = temp_file(&dir, "stock.csv", b"Category ,Item,CATEGORY\nTea,Chai,Tea\n");

    let err = load_stock_table(&path).unwrap_err();
    assert!(matches!(
        err,
        IngestError::Schema(SchemaError::DuplicateColumn { .. })
    ));
}

#[test]
fn rejects_unsupported_extension() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = temp_file(&dir, "stock.json", b"{}");

    let err = load_stock_table(&path).unwrap_err();
    assert!(matches!(err, IngestError::UnsupportedFormat { .. }));
}

#[test]
fn corrupt_workbook_is_a_load_failure() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = temp_file(&dir, "stock.xlsx", b"PK\x03\x04 definitely not a workbook");

    let err = load_stock_table(&path).unwrap_err();
    assert!(matches!(err, IngestError::Workbook { .. }));
}
