//! Data-source configuration for the CLI and tool server
//!
//! The built-in catalog and synonym table are used unless a JSON file is
//! given on the command line or through the environment.

use crate::catalog::Catalog;
use crate::error::AppError;
use crate::recent::RecentStore;
use crate::search::{SearchEngine, SynonymTable};
use std::borrow::Cow;
use std::path::PathBuf;
use tracing::info;

pub const CATALOG_ENV: &str = "SITE_SEARCH_CATALOG";
pub const SYNONYMS_ENV: &str = "SITE_SEARCH_SYNONYMS";
pub const RECENT_ENV: &str = "SITE_SEARCH_RECENT";

/// Where catalog, synonyms and recent searches come from
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EngineConfig {
    pub catalog_path: Option<PathBuf>,
    pub synonyms_path: Option<PathBuf>,
    pub recent_path: Option<PathBuf>,
}

impl EngineConfig {
    /// Read overrides from the environment
    pub fn from_env() -> Self {
        let path_var = |name: &str| {
            std::env::var_os(name)
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
        };

        Self {
            catalog_path: path_var(CATALOG_ENV),
            synonyms_path: path_var(SYNONYMS_ENV),
            recent_path: path_var(RECENT_ENV),
        }
    }

    /// Load the catalog and synonym table this configuration names
    pub fn load(&self) -> Result<SiteData, AppError> {
        let catalog = match &self.catalog_path {
            Some(path) => Cow::Owned(Catalog::from_path(path)?),
            None => Cow::Borrowed(Catalog::builtin()),
        };

        let synonyms = match &self.synonyms_path {
            Some(path) => Cow::Owned(SynonymTable::from_path(path)?),
            None => Cow::Borrowed(SynonymTable::builtin()),
        };

        info!(
            "Search data ready: {} entries, {} synonym groups",
            catalog.len(),
            synonyms.len()
        );

        Ok(SiteData { catalog, synonyms })
    }

    /// Recent-searches store at the configured or default location
    pub fn recent_store(&self) -> Result<RecentStore, AppError> {
        match &self.recent_path {
            Some(path) => Ok(RecentStore::new(path.clone())),
            None => RecentStore::at_default_location()
                .map_err(|e| AppError::ConfigError(e.to_string())),
        }
    }
}

/// Catalog and synonym table loaded for the lifetime of the process
#[derive(Debug, Clone)]
pub struct SiteData {
    catalog: Cow<'static, Catalog>,
    synonyms: Cow<'static, SynonymTable>,
}

impl SiteData {
    /// The built-in data
    pub fn builtin() -> Self {
        Self {
            catalog: Cow::Borrowed(Catalog::builtin()),
            synonyms: Cow::Borrowed(SynonymTable::builtin()),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// A search engine borrowing this data
    pub fn engine(&self) -> SearchEngine<'_> {
        SearchEngine::new(&self.catalog, &self.synonyms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_uses_builtin_data() {
        let data = EngineConfig::default().load().unwrap();
        assert_eq!(data.catalog().len(), Catalog::builtin().len());
        assert_eq!(
            SiteData::builtin().engine().search("hostel", &Default::default()),
            data.engine().search("hostel", &Default::default())
        );
    }

    #[test]
    fn test_load_from_files() {
        let dir = TempDir::new().unwrap();
        let catalog_path = dir.path().join("catalog.json");
        let synonyms_path = dir.path().join("synonyms.json");
        fs::write(
            &catalog_path,
            r#"[{"id": "canteen", "title": "Canteen", "description": "Meals and snacks",
                "category": "facility", "keywords": ["food"]}]"#,
        )
        .unwrap();
        fs::write(&synonyms_path, r#"{"food": ["lunch", "meals"]}"#).unwrap();

        let config = EngineConfig {
            catalog_path: Some(catalog_path),
            synonyms_path: Some(synonyms_path),
            recent_path: None,
        };
        let data = config.load().unwrap();
        let engine = data.engine();

        let results = engine.search("lunch", &Default::default());
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].entry.id, "canteen");
    }

    #[test]
    fn test_load_reports_bad_catalog() {
        let dir = TempDir::new().unwrap();
        let catalog_path = dir.path().join("catalog.json");
        fs::write(&catalog_path, "[{\"id\": \"a\"}]").unwrap();

        let config = EngineConfig {
            catalog_path: Some(catalog_path),
            ..Default::default()
        };
        let err = config.load().unwrap_err();
        assert_eq!(err.error_code(), "catalog_load_failed");
    }

    #[test]
    fn test_recent_store_uses_configured_path() {
        let config = EngineConfig {
            recent_path: Some(PathBuf::from("/tmp/site-search-test/recent.json")),
            ..Default::default()
        };
        let store = config.recent_store().unwrap();
        assert_eq!(store.path(), PathBuf::from("/tmp/site-search-test/recent.json"));
    }
}
