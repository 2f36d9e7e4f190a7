//! Catalog records and the closed set of content categories

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Content category of a catalog entry
///
/// The declaration order is the display order used when results are grouped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Page,
    Program,
    Admission,
    Facility,
    Activity,
    Document,
    Club,
    Service,
    Faq,
}

impl Category {
    /// Every category, in display order
    pub const ALL: [Category; 9] = [
        Category::Page,
        Category::Program,
        Category::Admission,
        Category::Facility,
        Category::Activity,
        Category::Document,
        Category::Club,
        Category::Service,
        Category::Faq,
    ];

    /// Wire name used in catalog files and tool arguments
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Page => "page",
            Category::Program => "program",
            Category::Admission => "admission",
            Category::Facility => "facility",
            Category::Activity => "activity",
            Category::Document => "document",
            Category::Club => "club",
            Category::Service => "service",
            Category::Faq => "faq",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown category: {0}")]
pub struct ParseCategoryError(pub String);

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}

/// A searchable record describing one page or section of the site
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchEntry {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Navigation path, opaque to the scorer
    pub path: String,
    /// In-page anchor
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    pub category: Category,
    #[serde(default)]
    pub icon: String,
    /// Higher is more important; applied as a multiplicative boost
    #[serde(default)]
    pub priority: u32,
}

impl SearchEntry {
    /// Navigation target: `path`, or `path#section` when a section is set
    pub fn target(&self) -> String {
        match self.section.as_deref() {
            Some(section) if !section.is_empty() => format!("{}#{}", self.path, section),
            _ => self.path.clone(),
        }
    }
}
