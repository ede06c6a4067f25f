//! Cell normalization applied while loading
//!
//! Text exports of the table contain padded labels, several spellings of
//! "missing" and identifiers with trailing visit tokens. Everything is
//! normalized here so the correction passes only see typed values.

use rustc_hash::FxHashMap;

use crate::config::CorrectionConfig;

/// Trim a cell and collapse configured null tokens to `None`
#[must_use]
pub fn clean_cell(raw: &str, config: &CorrectionConfig) -> Option<String> {
    let trimmed = raw.trim();
    if config.is_null_token(trimmed) {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Keep the first comma-separated token of an identifier cell
#[must_use]
pub fn identifier_token(raw: &str) -> Option<String> {
    raw.split(',')
        .next()
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(ToString::to_string)
}

/// Replace a diagnosis label by its canonical spelling when aliased
#[must_use]
pub fn canonical_label(label: String, aliases: &FxHashMap<String, String>) -> String {
    match aliases.get(&label) {
        Some(canonical) => canonical.clone(),
        None => label,
    }
}
