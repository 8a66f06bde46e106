//! Stock sheet transformation.
//!
//! This crate holds the row classification pipeline:
//!
//! - **prefix**: prefix tag classification and base item extraction
//! - **filter**: category selection and filtering
//! - **sort**: stable ordering by prefix rank and base item
//! - **pipeline**: stage composition and per-category partitions

pub mod filter;
pub mod pipeline;
pub mod prefix;
pub mod sort;

pub use filter::{CategorySelection, category_counts, filter_by_category, observed_categories};
pub use pipeline::{
    Partition, UNCATEGORIZED_PARTITION, annotate, partition_by_category, prefix_counts,
    run_pipeline,
};
pub use prefix::{BASE_NAME_TOKENS, base_name, base_name_str, classify, classify_str};
pub use sort::sort_records;
