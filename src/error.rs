//! Error types and handling for the CLI and tool server

use crate::catalog::{CatalogError, Category};
use serde::Serialize;
use std::fmt;

/// Longest query accepted at the tool boundary
pub const MAX_QUERY_LEN: usize = 500;

/// Application error types
#[derive(Debug, Serialize)]
pub enum AppError {
    InvalidInput(String),
    CatalogLoadFailed(String),
    NotFound(String),
    StorageError(String),
    ConfigError(String),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            AppError::CatalogLoadFailed(msg) => write!(f, "Catalog load failed: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::StorageError(msg) => write!(f, "Storage error: {}", msg),
            AppError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl AppError {
    /// Get the error code for tool responses
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::InvalidInput(_) => "invalid_input",
            AppError::CatalogLoadFailed(_) => "catalog_load_failed",
            AppError::NotFound(_) => "not_found",
            AppError::StorageError(_) => "storage_error",
            AppError::ConfigError(_) => "config_error",
            AppError::Internal(_) => "internal_error",
        }
    }

    /// Get the error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Process exit code for CLI mode
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::InvalidInput(_) => 1,
            AppError::NotFound(_) => 3,
            _ => 5,
        }
    }
}

/// Convert anyhow::Error to AppError
impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        AppError::CatalogLoadFailed(err.to_string())
    }
}

/// Convert serde_json::Error to AppError
impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InvalidInput(err.to_string())
    }
}

/// Convert std::io::Error to AppError
impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::StorageError(err.to_string())
    }
}

/// Validation functions
pub fn validate_query(query: &str) -> Result<(), AppError> {
    if query.chars().count() > MAX_QUERY_LEN {
        return Err(AppError::InvalidInput(format!(
            "Query too long, maximum {} characters",
            MAX_QUERY_LEN
        )));
    }

    Ok(())
}

/// Parse category names, rejecting unknown ones
pub fn parse_categories(names: &[String]) -> Result<Vec<Category>, AppError> {
    names
        .iter()
        .map(|name| {
            name.parse::<Category>().map_err(|_| {
                let known: Vec<&str> = Category::ALL.iter().map(Category::as_str).collect();
                AppError::InvalidInput(format!(
                    "Unknown category '{}', expected one of: {}",
                    name,
                    known.join(", ")
                ))
            })
        })
        .collect()
}

/// Validate a minimum score, clamping negatives to zero
pub fn validate_min_score(min_score: f64) -> Result<f64, AppError> {
    if !min_score.is_finite() {
        return Err(AppError::InvalidInput(
            "Minimum score must be a finite number".to_string(),
        ));
    }

    Ok(min_score.max(0.0))
}
