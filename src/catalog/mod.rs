//! Static catalog of searchable site content
//!
//! The catalog is an ordered, read-only list of [`SearchEntry`] records.
//! It is either the built-in site catalog or loaded once from a JSON array
//! and validated on the way in, so a constructed [`Catalog`] always has
//! unique non-empty ids, non-empty titles and known categories.

mod builtin;
pub mod entry;
pub mod error;

pub use builtin::DEFAULT_SUGGESTIONS;
pub use entry::{Category, ParseCategoryError, SearchEntry};
pub use error::CatalogError;

use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;
use tracing::info;

/// Ordered, immutable collection of search entries
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    entries: Vec<SearchEntry>,
}

/// Entry as it appears in a catalog file, before validation
#[derive(Debug, Deserialize)]
struct RawEntry {
    id: String,
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    path: String,
    #[serde(default)]
    section: Option<String>,
    #[serde(default)]
    keywords: Vec<String>,
    category: String,
    #[serde(default)]
    icon: String,
    #[serde(default)]
    priority: i64,
}

impl RawEntry {
    fn into_entry(self) -> Result<SearchEntry, CatalogError> {
        let category = self
            .category
            .parse::<Category>()
            .map_err(|_| CatalogError::UnknownCategory {
                id: self.id.clone(),
                category: self.category.clone(),
            })?;

        if self.priority < 0 {
            return Err(CatalogError::NegativePriority {
                id: self.id,
                priority: self.priority,
            });
        }
        // Oversized weights saturate
        let priority = u32::try_from(self.priority).unwrap_or(u32::MAX);

        let keywords = self
            .keywords
            .into_iter()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .collect();

        Ok(SearchEntry {
            id: self.id.trim().to_string(),
            title: self.title.trim().to_string(),
            description: self.description,
            path: self.path,
            section: self.section.filter(|s| !s.trim().is_empty()),
            keywords,
            category,
            icon: self.icon,
            priority,
        })
    }
}

impl Catalog {
    /// Build a catalog from entries, validating ids and titles
    pub fn new(entries: Vec<SearchEntry>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(entries.len());

        for (position, entry) in entries.iter().enumerate() {
            if entry.id.trim().is_empty() {
                return Err(CatalogError::EmptyId(position));
            }
            if entry.title.trim().is_empty() {
                return Err(CatalogError::EmptyTitle(entry.id.clone()));
            }
            if !seen.insert(entry.id.as_str()) {
                return Err(CatalogError::DuplicateId(entry.id.clone()));
            }
        }

        Ok(Self { entries })
    }

    /// An empty catalog; every query against it yields no results
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in site catalog, materialized once per process
    pub fn builtin() -> &'static Catalog {
        static BUILTIN: OnceLock<Catalog> = OnceLock::new();
        BUILTIN.get_or_init(|| Catalog {
            entries: builtin::entries(),
        })
    }

    /// Parse a catalog from a JSON array of entries
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let raw: Vec<RawEntry> = serde_json::from_str(json)?;
        let entries = raw
            .into_iter()
            .map(RawEntry::into_entry)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(entries)
    }

    /// Load a catalog file from disk
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let data = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json_str(&data)?;
        info!(
            "Loaded catalog with {} entries from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    pub fn entries(&self) -> &[SearchEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SearchEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up an entry by id
    pub fn get(&self, id: &str) -> Option<&SearchEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Distinct categories present, in first-appearance order
    pub fn categories(&self) -> Vec<Category> {
        let mut found = Vec::new();
        for entry in &self.entries {
            if !found.contains(&entry.category) {
                found.push(entry.category);
            }
        }
        found
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a SearchEntry;
    type IntoIter = std::slice::Iter<'a, SearchEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn entry(id: &str, title: &str) -> SearchEntry {
        SearchEntry {
            id: id.to_string(),
            title: title.to_string(),
            description: String::new(),
            path: "/".to_string(),
            section: None,
            keywords: Vec::new(),
            category: Category::Page,
            icon: String::new(),
            priority: 0,
        }
    }

    #[test]
    fn test_builtin_catalog_is_valid() {
        let builtin = Catalog::builtin();
        assert!(!builtin.is_empty());
        let revalidated = Catalog::new(builtin.entries().to_vec()).unwrap();
        assert_eq!(revalidated.len(), builtin.len());
    }

    #[test]
    fn test_builtin_contains_bed_programme() {
        let entry = Catalog::builtin().get("prog-bed").expect("prog-bed present");
        assert_eq!(entry.category, Category::Program);
        assert!(entry.keywords.iter().any(|k| k == "bed"));
    }

    #[test]
    fn test_new_rejects_duplicate_ids() {
        let err = Catalog::new(vec![entry("a", "One"), entry("a", "Two")]).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(id) if id == "a"));
    }

    #[test]
    fn test_new_rejects_empty_id_and_title() {
        let err = Catalog::new(vec![entry(" ", "One")]).unwrap_err();
        assert!(matches!(err, CatalogError::EmptyId(0)));

        let err = Catalog::new(vec![entry("a", "")]).unwrap_err();
        assert!(matches!(err, CatalogError::EmptyTitle(id) if id == "a"));
    }

    #[test]
    fn test_from_json_str() {
        let json = r#"[
            {"id": "home", "title": "Home", "description": "Welcome", "path": "/",
             "keywords": ["main", " ", "landing"], "category": "page", "icon": "home", "priority": 10},
            {"id": "faq-fees", "title": "Can fees be paid online?", "path": "/faq",
             "section": "fees", "category": "FAQ"}
        ]"#;
        let catalog = Catalog::from_json_str(json).unwrap();
        assert_eq!(catalog.len(), 2);

        let home = catalog.get("home").unwrap();
        assert_eq!(home.keywords, vec!["main", "landing"]);
        assert_eq!(home.priority, 10);

        let faq = catalog.get("faq-fees").unwrap();
        assert_eq!(faq.category, Category::Faq);
        assert_eq!(faq.target(), "/faq#fees");
        assert_eq!(faq.priority, 0);
    }

    #[test]
    fn test_from_json_str_unknown_category() {
        let json = r#"[{"id": "x", "title": "X", "category": "blog"}]"#;
        let err = Catalog::from_json_str(json).unwrap_err();
        assert!(matches!(err, CatalogError::UnknownCategory { ref category, .. } if category == "blog"));
    }

    #[test]
    fn test_from_json_str_negative_priority() {
        let json = r#"[{"id": "x", "title": "X", "category": "page", "priority": -1}]"#;
        let err = Catalog::from_json_str(json).unwrap_err();
        assert!(matches!(err, CatalogError::NegativePriority { priority: -1, .. }));
    }

    #[test]
    fn test_from_json_str_empty_array() {
        let catalog = Catalog::from_json_str("[]").unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id": "library", "title": "Library", "category": "facility"}}]"#
        )
        .unwrap();

        let catalog = Catalog::from_path(file.path()).unwrap();
        assert_eq!(catalog.categories(), vec![Category::Facility]);
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = Catalog::from_path("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }

    #[test]
    fn test_categories_first_appearance_order() {
        let mut a = entry("a", "A");
        a.category = Category::Faq;
        let b = entry("b", "B");
        let mut c = entry("c", "C");
        c.category = Category::Faq;
        let catalog = Catalog::new(vec![a, b, c]).unwrap();
        assert_eq!(catalog.categories(), vec![Category::Faq, Category::Page]);
    }
}
