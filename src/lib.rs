//! site-search: fuzzy, synonym-aware navigational search over a static site catalog
//!
//! The core (`catalog`, `search`) is synchronous and pure. The remaining
//! modules are the caller side: configuration, recent searches, CLI
//! arguments and the stdio tool server.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod mcp;
pub mod recent;
pub mod search;
pub mod tools;

pub use catalog::{Catalog, CatalogError, Category, SearchEntry};
pub use error::AppError;
pub use search::{
    group_by_category, highlight_matches, SearchEngine, SearchOptions, SearchResult,
    SynonymTable,
};
