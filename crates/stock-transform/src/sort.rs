//! Deterministic ordering of annotated records.

use std::cmp::Ordering;

use stock_model::{AnnotatedRecord, SortMode};

/// Stable sort by prefix rank, optionally breaking ties by base item.
///
/// Records with equal keys keep their input order.
pub fn sort_records(records: &[AnnotatedRecord], mode: SortMode) -> Vec<AnnotatedRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|left, right| compare(left, right, mode));
    sorted
}

fn compare(left: &AnnotatedRecord, right: &AnnotatedRecord, mode: SortMode) -> Ordering {
    let by_prefix = left.prefix.cmp(&right.prefix);
    match mode {
        SortMode::Prefix => by_prefix,
        SortMode::PrefixThenBaseItem => {
            by_prefix.then_with(|| left.base_item.sort_cmp(&right.base_item))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stock_model::{CellValue, PrefixTag, Record};

    fn annotated(item: &str, prefix: PrefixTag, base: &str) -> AnnotatedRecord {
        AnnotatedRecord {
            record: Record::new("Coffee", item),
            prefix,
            base_item: CellValue::text(base),
        }
    }

    fn items(records: &[AnnotatedRecord]) -> Vec<String> {
        records.iter().map(|r| r.record.item.to_string()).collect()
    }

    #[test]
    fn test_sort_by_prefix_rank() {
        let records = vec![
            annotated("Mystery Box", PrefixTag::Other, "Mystery Box"),
            annotated("SIT IN Scone", PrefixTag::SitIn, "Scone"),
            annotated("RETAIL Beans", PrefixTag::Retail, "Beans"),
            annotated("GLASS Merlot", PrefixTag::Glass, "Merlot"),
        ];
        let sorted = sort_records(&records, SortMode::Prefix);
        assert_eq!(
            items(&sorted),
            vec!["GLASS Merlot", "RETAIL Beans", "SIT IN Scone", "Mystery Box"]
        );
    }

    #[test]
    fn test_prefix_only_sort_is_stable() {
        let records = vec![
            annotated("RETAIL Zest", PrefixTag::Retail, "Zest"),
            annotated("RETAIL Apple", PrefixTag::Retail, "Apple"),
            annotated("GLASS Rose", PrefixTag::Glass, "Rose"),
        ];
        let sorted = sort_records(&records, SortMode::Prefix);
        assert_eq!(
            items(&sorted),
            vec!["GLASS Rose", "RETAIL Zest", "RETAIL Apple"]
        );
    }

    #[test]
    fn test_sort_with_base_item_tiebreak() {
        let records = vec![
            annotated("RETAIL Zest", PrefixTag::Retail, "Zest"),
            annotated("RETAIL Apple", PrefixTag::Retail, "Apple"),
            annotated("RETAIL Apple", PrefixTag::Retail, "Apple"),
            annotated("Banana", PrefixTag::Other, "Banana"),
        ];
        let mut first_apple = records[1].clone();
        first_apple.record = first_apple.record.with_field("row", CellValue::Int(1));
        let mut second_apple = records[2].clone();
        second_apple.record = second_apple.record.with_field("row", CellValue::Int(2));
        let records = vec![records[0].clone(), first_apple, second_apple, records[3].clone()];

        let sorted = sort_records(&records, SortMode::PrefixThenBaseItem);
        assert_eq!(
            items(&sorted),
            vec!["RETAIL Apple", "RETAIL Apple", "RETAIL Zest", "Banana"]
        );
        assert_eq!(sorted[0].record.get("row"), Some(&CellValue::Int(1)));
        assert_eq!(sorted[1].record.get("row"), Some(&CellValue::Int(2)));
    }

    #[test]
    fn test_sort_does_not_touch_input() {
        let records = vec![
            annotated("Mystery Box", PrefixTag::Other, "Mystery Box"),
            annotated("GLASS Merlot", PrefixTag::Glass, "Merlot"),
        ];
        let _ = sort_records(&records, SortMode::Prefix);
        assert_eq!(items(&records), vec!["Mystery Box", "GLASS Merlot"]);
    }
}
