//! Search tool implementation
//!
//! Implements the `search(query, limit?, minScore?, categories?)` tool

use crate::cli::SearchArgs;
use crate::error::{parse_categories, validate_min_score, validate_query, AppError};
use crate::mcp::{ContentItem, McpResponse, ToolResult};
use crate::search::{group_by_category, SearchEngine, SearchOptions, DEFAULT_MAX_RESULTS};
use crate::tools::format::{format_grouped_results, format_search_results};
use serde_json::Value;
use tracing::debug;

/// Upper bound on `limit` at the tool boundary
pub const MAX_LIMIT: usize = 100;

pub fn handle_search(id: Option<Value>, args: Value, engine: &SearchEngine<'_>) -> McpResponse {
    let result = serde_json::from_value::<SearchArgs>(args)
        .map_err(|e| AppError::InvalidInput(format!("Invalid arguments: {}", e)))
        .and_then(|search_args| execute_search(&search_args, engine))
        .and_then(|content| serde_json::to_value(content).map_err(AppError::from));

    match result {
        Ok(value) => McpResponse::success(id, value),
        Err(e) => McpResponse::error(id, e.error_code(), &e.message()),
    }
}

/// Validate tool arguments into engine options
pub fn search_options(args: &SearchArgs) -> Result<SearchOptions, AppError> {
    let mut options = SearchOptions::default()
        .with_max_results(args.limit.unwrap_or(DEFAULT_MAX_RESULTS).clamp(1, MAX_LIMIT))
        .with_categories(parse_categories(&args.categories)?);

    if let Some(min_score) = args.min_score {
        options = options.with_min_score(validate_min_score(min_score)?);
    }

    Ok(options)
}

/// Shared implementation for search (used by the tool server and CLI)
pub fn execute_search(args: &SearchArgs, engine: &SearchEngine<'_>) -> Result<ToolResult, AppError> {
    validate_query(&args.query)?;
    let options = search_options(args)?;

    debug!(
        "Search request: '{}', limit {}, min score {}, {} categories",
        args.query,
        options.max_results,
        options.min_score,
        options.categories.len()
    );

    let results = engine.search(&args.query, &options);

    if args.json {
        let json = if args.grouped {
            serde_json::to_string_pretty(&group_by_category(results))
        } else {
            serde_json::to_string_pretty(&results)
        }
        .map_err(|e| AppError::Internal(e.to_string()))?;
        return Ok(ToolResult::text(json));
    }

    let markdown = if args.grouped {
        format_grouped_results(&group_by_category(results.clone()), &args.query)
    } else {
        format_search_results(&results, &args.query)
    };

    let metadata = serde_json::to_value(&results).map_err(|e| AppError::Internal(e.to_string()))?;
    Ok(ToolResult::from_items(vec![
        ContentItem::text(markdown).with_metadata(metadata),
    ]))
}
