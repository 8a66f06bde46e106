//! Worksheet name sanitization.

use std::collections::BTreeSet;

/// Longest worksheet name a spreadsheet accepts.
pub const MAX_SHEET_NAME_CHARS: usize = 31;

const INVALID_SHEET_CHARS: [char; 7] = ['[', ']', ':', '*', '?', '/', '\\'];

/// Makes a single category name usable as a worksheet name.
///
/// Invalid characters become `_`, leading and trailing apostrophes and
/// whitespace are dropped, and the result is cut to 31 characters. Returns
/// `None` when nothing usable remains.
pub fn sanitize_sheet_name(name: &str) -> Option<String> {
    let replaced: String = name
        .chars()
        .map(|ch| {
            if INVALID_SHEET_CHARS.contains(&ch) || ch.is_control() {
                '_'
            } else {
                ch
            }
        })
        .collect();
    let trimmed = replaced.trim().trim_matches('\'').trim();
    let truncated: String = trimmed.chars().take(MAX_SHEET_NAME_CHARS).collect();
    let truncated = truncated.trim_end().to_string();
    (!truncated.is_empty()).then_some(truncated)
}

/// Assigns a unique worksheet name to each partition name, in order.
///
/// Empty names fall back to `Sheet<N>` (1-based position). Names that
/// collide case-insensitively get a ` (2)`, ` (3)`, ... suffix.
pub fn unique_sheet_names<S: AsRef<str>>(names: &[S]) -> Vec<String> {
    let mut taken: BTreeSet<String> = BTreeSet::new();
    let mut out = Vec::with_capacity(names.len());
    for (idx, name) in names.iter().enumerate() {
        let base = sanitize_sheet_name(name.as_ref()).unwrap_or_else(|| format!("Sheet{}", idx + 1));
        let mut candidate = base.clone();
        let mut counter = 2usize;
        while taken.contains(&candidate.to_lowercase()) {
            let suffix = format!(" ({counter})");
            let keep = MAX_SHEET_NAME_CHARS - suffix.chars().count();
            let stem: String = base.chars().take(keep).collect();
            candidate = format!("{}{suffix}", stem.trim_end());
            counter += 1;
        }
        taken.insert(candidate.to_lowercase());
        out.push(candidate);
    }
    out
}
