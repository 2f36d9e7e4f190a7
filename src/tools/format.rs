//! Presentation of search results
//!
//! Category labels and colours live here and never feed into scoring.

use crate::catalog::Category;
use crate::search::{highlight_with, SearchResult};
use std::collections::BTreeMap;

/// Human-readable label for a category heading
pub fn category_label(category: Category) -> &'static str {
    match category {
        Category::Page => "Pages",
        Category::Program => "Programmes",
        Category::Admission => "Admissions",
        Category::Facility => "Facilities",
        Category::Activity => "Activities",
        Category::Document => "Documents",
        Category::Club => "Clubs",
        Category::Service => "Services",
        Category::Faq => "FAQs",
    }
}

/// Badge colour for a category, as a hex RGB string
pub fn category_color(category: Category) -> &'static str {
    match category {
        Category::Page => "#3b82f6",
        Category::Program => "#8b5cf6",
        Category::Admission => "#10b981",
        Category::Facility => "#f59e0b",
        Category::Activity => "#ec4899",
        Category::Document => "#64748b",
        Category::Club => "#14b8a6",
        Category::Service => "#0ea5e9",
        Category::Faq => "#ef4444",
    }
}

/// Render one result as a markdown block, matched terms in bold
pub fn format_result(index: usize, result: &SearchResult) -> String {
    let entry = &result.entry;
    let title = highlight_with(&entry.title, &result.matched_terms, "**", "**");
    let description = highlight_with(&entry.description, &result.matched_terms, "**", "**");

    let mut out = format!("## {}. {}\n", index, title);
    out.push_str(&format!(
        "**{}** · [{}]({}) · score {:.1}\n",
        category_label(entry.category),
        entry.target(),
        entry.target(),
        result.score
    ));
    if !description.is_empty() {
        out.push_str(&format!("\n{}\n", description));
    }
    out
}

/// Render a ranked result list as markdown
pub fn format_search_results(results: &[SearchResult], query: &str) -> String {
    if results.is_empty() {
        return format!("# Search results for \"{}\"\n\nNo matches found.\n", query);
    }

    let mut out = format!(
        "# Search results for \"{}\"\n\nFound {} {}.\n",
        query,
        results.len(),
        if results.len() == 1 { "match" } else { "matches" }
    );
    for (i, result) in results.iter().enumerate() {
        out.push('\n');
        out.push_str(&format_result(i + 1, result));
    }
    out
}

/// Render results grouped under category headings
pub fn format_grouped_results(
    groups: &BTreeMap<Category, Vec<SearchResult>>,
    query: &str,
) -> String {
    let total: usize = groups.values().map(Vec::len).sum();
    if total == 0 {
        return format_search_results(&[], query);
    }

    let mut out = format!("# Search results for \"{}\"\n", query);
    for (category, bucket) in groups {
        out.push_str(&format!(
            "\n# {} ({})\n",
            category_label(*category),
            bucket.len()
        ));
        for (i, result) in bucket.iter().enumerate() {
            out.push('\n');
            out.push_str(&format_result(i + 1, result));
        }
    }
    out
}
