//! Prefix classification and base item extraction.

use stock_model::{CellValue, PrefixTag};

/// Tokens removed by [`base_name`], applied in this order.
pub const BASE_NAME_TOKENS: [&str; 3] = ["RETAIL ", "GLASS ", "SIT IN "];

/// Classifies an item cell by its leading token.
///
/// Non-text and missing values are always [`PrefixTag::Other`].
pub fn classify(item: &CellValue) -> PrefixTag {
    item.as_str().map_or(PrefixTag::Other, classify_str)
}

/// Classifies an item name, case-insensitively.
///
/// Tokens are tried in [`PrefixTag::MATCH_ORDER`]; the first match wins.
pub fn classify_str(item: &str) -> PrefixTag {
    let upper = item.to_uppercase();
    PrefixTag::MATCH_ORDER
        .into_iter()
        .find(|tag| upper.starts_with(tag.token()))
        .unwrap_or(PrefixTag::Other)
}

/// Removes the prefix tokens from an item cell. Non-text values pass through.
pub fn base_name(item: &CellValue) -> CellValue {
    match item {
        CellValue::Text(value) => CellValue::Text(base_name_str(value)),
        other => other.clone(),
    }
}

/// Removes every literal `"RETAIL "`, `"GLASS "` and `"SIT IN "` from `item`.
///
/// Matching is case-sensitive and not anchored to the start of the string.
pub fn base_name_str(item: &str) -> String {
    BASE_NAME_TOKENS
        .iter()
        .fold(item.to_string(), |name, token| name.replace(token, ""))
}
