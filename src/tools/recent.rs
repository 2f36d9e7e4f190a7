//! Recent searches commands (CLI only)

use crate::error::AppError;
use crate::recent::{RecentSearches, RecentStore};

/// Render the remembered queries as a markdown list, newest first
pub fn format_recent(recent: &RecentSearches) -> String {
    if recent.is_empty() {
        return "No recent searches.".to_string();
    }

    let mut out = String::from("# Recent searches\n");
    for item in recent.items() {
        out.push_str(&format!(
            "\n- {} ({})",
            item.query,
            item.searched_at.format("%Y-%m-%d %H:%M UTC")
        ));
    }
    out
}

pub fn execute_recent_list(store: &RecentStore) -> Result<String, AppError> {
    Ok(format_recent(&store.load()))
}

pub fn execute_recent_clear(store: &RecentStore) -> Result<String, AppError> {
    store.clear()?;
    Ok("Recent searches cleared.".to_string())
}
