//! Configuration options for stock sheet processing.

use serde::{Deserialize, Serialize};

/// Ordering applied after classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortMode {
    /// Sort by prefix rank only.
    Prefix,
    /// Sort by prefix rank, then by base item name.
    #[default]
    PrefixThenBaseItem,
}

/// How rows with a missing category behave during filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NullCategoryMode {
    /// Rows with a missing category never match a selection.
    #[default]
    Exclude,
    /// Rows with a missing category are always kept.
    Include,
}

/// Options controlling stock sheet processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessingOptions {
    pub sort_mode: SortMode,
    pub null_category: NullCategoryMode,
}

impl ProcessingOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_sort_mode(mut self, sort_mode: SortMode) -> Self {
        self.sort_mode = sort_mode;
        self
    }

    #[must_use]
    pub fn with_null_category(mut self, null_category: NullCategoryMode) -> Self {
        self.null_category = null_category;
        self
    }
}
