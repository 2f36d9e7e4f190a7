//! Suggest tool implementation
//!
//! Implements the `suggest(query)` tool

use crate::cli::SuggestArgs;
use crate::error::{validate_query, AppError};
use crate::mcp::{ContentItem, McpResponse, ToolResult};
use crate::search::SearchEngine;
use serde_json::Value;

pub fn handle_suggest(id: Option<Value>, args: Value, engine: &SearchEngine<'_>) -> McpResponse {
    let result = serde_json::from_value::<SuggestArgs>(args)
        .map_err(|e| AppError::InvalidInput(format!("Invalid arguments: {}", e)))
        .and_then(|suggest_args| execute_suggest(&suggest_args, engine))
        .and_then(|content| serde_json::to_value(content).map_err(AppError::from));

    match result {
        Ok(value) => McpResponse::success(id, value),
        Err(e) => McpResponse::error(id, e.error_code(), &e.message()),
    }
}

/// Shared implementation for suggestions (used by the tool server and CLI)
pub fn execute_suggest(args: &SuggestArgs, engine: &SearchEngine<'_>) -> Result<ToolResult, AppError> {
    validate_query(&args.query)?;

    let suggestions = engine.suggestions(&args.query);
    let text = if suggestions.is_empty() {
        "No suggestions.".to_string()
    } else {
        suggestions
            .iter()
            .map(|s| format!("- {}", s))
            .collect::<Vec<_>>()
            .join("\n")
    };

    Ok(ToolResult::from_items(vec![
        ContentItem::text(text).with_metadata(serde_json::json!(suggestions)),
    ]))
}
