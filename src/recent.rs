//! Recent searches kept on behalf of the caller
//!
//! A short most-recent-first list stored as JSON under the platform data
//! directory: {data_dir}/site-search/recent.json

use crate::error::AppError;
use crate::search::parser::MIN_QUERY_CHARS;
use anyhow::Result;
use chrono::{DateTime, Utc};
use fs2::FileExt;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Default number of queries remembered
pub const DEFAULT_CAPACITY: usize = 10;

const APP_DIR: &str = "site-search";
const RECENT_FILE: &str = "recent.json";

/// One remembered query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentSearch {
    pub query: String,
    pub searched_at: DateTime<Utc>,
}

/// Bounded, de-duplicated, most-recent-first list of queries
#[derive(Debug, Clone, PartialEq)]
pub struct RecentSearches {
    items: Vec<RecentSearch>,
    capacity: usize,
}

impl Default for RecentSearches {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl RecentSearches {
    pub fn new(capacity: usize) -> Self {
        Self {
            items: Vec::new(),
            capacity,
        }
    }

    fn from_items(mut items: Vec<RecentSearch>, capacity: usize) -> Self {
        items.truncate(capacity);
        Self { items, capacity }
    }

    /// Remember a query now; see [`record_at`](Self::record_at)
    pub fn record(&mut self, query: &str) -> bool {
        self.record_at(query, Utc::now())
    }

    /// Move `query` to the front, dropping the oldest entry past capacity
    ///
    /// Queries shorter than two trimmed characters are ignored. Matching an
    /// earlier query is case-insensitive and replaces it.
    pub fn record_at(&mut self, query: &str, at: DateTime<Utc>) -> bool {
        let query = query.trim();
        if query.chars().count() < MIN_QUERY_CHARS || self.capacity == 0 {
            return false;
        }

        let key = query.to_lowercase();
        self.items.retain(|item| item.query.to_lowercase() != key);
        self.items.insert(
            0,
            RecentSearch {
                query: query.to_string(),
                searched_at: at,
            },
        );
        self.items.truncate(self.capacity);
        true
    }

    pub fn items(&self) -> &[RecentSearch] {
        &self.items
    }

    pub fn queries(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.query.as_str()).collect()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// On-disk home of the recent-searches list
pub struct RecentStore {
    path: PathBuf,
    capacity: usize,
}

impl RecentStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            capacity: DEFAULT_CAPACITY,
        }
    }

    /// Store at the platform default location
    pub fn at_default_location() -> Result<Self> {
        Ok(Self::new(default_path()?))
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the list; a missing or unreadable file yields an empty list
    pub fn load(&self) -> RecentSearches {
        if !self.path.exists() {
            return RecentSearches::new(self.capacity);
        }

        let parsed = fs::read_to_string(&self.path)
            .map_err(AppError::from)
            .and_then(|data| {
                serde_json::from_str::<Vec<RecentSearch>>(&data).map_err(AppError::from)
            });

        match parsed {
            Ok(items) => RecentSearches::from_items(items, self.capacity),
            Err(e) => {
                warn!(
                    "Ignoring unreadable recent searches at {}: {}",
                    self.path.display(),
                    e
                );
                RecentSearches::new(self.capacity)
            }
        }
    }

    /// Exclusive lock on the sibling `.lock` file, held until the file is dropped
    ///
    /// The lock file is never removed, so every process locks the same inode.
    fn lock(&self) -> Result<fs::File, AppError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let lock_file = fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(self.lock_path())?;
        FileExt::lock_exclusive(&lock_file)?;
        Ok(lock_file)
    }

    fn lock_path(&self) -> PathBuf {
        self.path.with_extension("lock")
    }

    /// Replace the file atomically; the caller holds the lock
    fn save_locked(&self, recent: &RecentSearches) -> Result<(), AppError> {
        let tmp_path = self.path.with_extension("json.tmp");
        let data = serde_json::to_string_pretty(recent.items())
            .map_err(|e| AppError::StorageError(e.to_string()))?;
        fs::write(&tmp_path, data)?;
        fs::rename(&tmp_path, &self.path)?;

        debug!(
            "Saved {} recent searches to {}",
            recent.len(),
            self.path.display()
        );
        Ok(())
    }

    /// Write the list under the exclusive lock
    pub fn save(&self, recent: &RecentSearches) -> Result<(), AppError> {
        let lock_file = self.lock()?;
        self.save_locked(recent)?;
        FileExt::unlock(&lock_file)?;
        Ok(())
    }

    /// Record a query and persist the updated list
    ///
    /// Load, update and write all happen under one lock.
    pub fn record(&self, query: &str) -> Result<RecentSearches, AppError> {
        let lock_file = self.lock()?;
        let mut recent = self.load();
        if recent.record(query) {
            self.save_locked(&recent)?;
        }
        FileExt::unlock(&lock_file)?;
        Ok(recent)
    }

    /// Forget every remembered query
    pub fn clear(&self) -> Result<(), AppError> {
        self.save(&RecentSearches::new(self.capacity))
    }
}

/// Platform-specific location of the recent-searches file
fn default_path() -> Result<PathBuf> {
    let base = if let Some(xdg_data) = std::env::var_os("XDG_DATA_HOME") {
        PathBuf::from(xdg_data)
    } else if let Some(data_dir) = dirs::data_dir() {
        data_dir
    } else {
        // Fallback to current directory
        PathBuf::from(".local").join("share")
    };

    Ok(base.join(APP_DIR).join(RECENT_FILE))
}
