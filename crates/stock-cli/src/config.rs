//! Processing options from a JSON file and CLI overrides.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use stock_model::{NullCategoryMode, ProcessingOptions, SortMode};

use crate::cli::ProcessArgs;

/// Reads [`ProcessingOptions`] from a JSON file. Missing fields take defaults.
pub fn load_options_file(path: &Path) -> Result<ProcessingOptions> {
    let text = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parse config {}", path.display()))
}

/// Merges file options with explicit flags; flags win.
pub fn merge_options(
    base: ProcessingOptions,
    sort: Option<SortMode>,
    null_category: Option<NullCategoryMode>,
) -> ProcessingOptions {
    ProcessingOptions {
        sort_mode: sort.unwrap_or(base.sort_mode),
        null_category: null_category.unwrap_or(base.null_category),
    }
}

/// Resolves the options for a `process` run.
pub fn resolve_options(args: &ProcessArgs) -> Result<ProcessingOptions> {
    let base = match &args.config {
        Some(path) => load_options_file(path)?,
        None => ProcessingOptions::default(),
    };
    let options = merge_options(
        base,
        args.sort.map(SortMode::from),
        args.null_category.map(NullCategoryMode::from),
    );
    tracing::debug!(?options, "resolved processing options");
    Ok(options)
}
