use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Entry at position {0} has an empty id")]
    EmptyId(usize),
    #[error("Duplicate entry id: {0}")]
    DuplicateId(String),
    #[error("Entry {0} has an empty title")]
    EmptyTitle(String),
    #[error("Entry {id} has unknown category {category:?}")]
    UnknownCategory { id: String, category: String },
    #[error("Entry {id} has negative priority {priority}")]
    NegativePriority { id: String, priority: i64 },
    #[error("Synonym table contains an empty canonical term")]
    EmptyCanonical,
}
