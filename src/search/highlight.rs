//! Match highlighting for result text

use regex::{Captures, RegexBuilder};
use tracing::warn;

pub const MARK_OPEN: &str = "<mark>";
pub const MARK_CLOSE: &str = "</mark>";

/// Wrap every case-insensitive occurrence of any term in `<mark>` tags
pub fn highlight_matches(text: &str, matched_terms: &[String]) -> String {
    highlight_with(text, matched_terms, MARK_OPEN, MARK_CLOSE)
}

/// Wrap every case-insensitive occurrence of any term in `open`/`close`
///
/// All terms are matched in a single left-to-right pass, longest term first
/// at each position, so inserted markup is never matched again and
/// overlapping terms do not nest.
pub fn highlight_with(text: &str, matched_terms: &[String], open: &str, close: &str) -> String {
    let mut terms: Vec<&str> = matched_terms
        .iter()
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .collect();

    if terms.is_empty() {
        return text.to_string();
    }

    terms.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    terms.dedup();

    let pattern = terms
        .iter()
        .map(|t| regex::escape(t))
        .collect::<Vec<_>>()
        .join("|");

    let re = match RegexBuilder::new(&pattern).case_insensitive(true).build() {
        Ok(re) => re,
        Err(e) => {
            warn!("Failed to build highlight pattern: {}", e);
            return text.to_string();
        }
    };

    re.replace_all(text, |caps: &Captures| format!("{}{}{}", open, &caps[0], close))
        .into_owned()
}
