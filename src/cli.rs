//! CLI mode implementation
//!
//! Provides command-line interface for the site search tools

use clap::{Parser, Subcommand};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config::{EngineConfig, CATALOG_ENV, RECENT_ENV, SYNONYMS_ENV};

/// Site search CLI
#[derive(Parser)]
#[command(name = "site-search")]
#[command(about = "Fuzzy, synonym-aware search over the site catalog", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output (no short flag to avoid conflicts)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Catalog JSON file (defaults to the built-in catalog)
    #[arg(long, global = true, env = CATALOG_ENV)]
    pub catalog: Option<PathBuf>,

    /// Synonym table JSON file (defaults to the built-in table)
    #[arg(long, global = true, env = SYNONYMS_ENV)]
    pub synonyms: Option<PathBuf>,

    /// Recent searches file
    #[arg(long = "recent-file", global = true, env = RECENT_ENV)]
    pub recent_file: Option<PathBuf>,
}

impl Cli {
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            catalog_path: self.catalog.clone(),
            synonyms_path: self.synonyms.clone(),
            recent_path: self.recent_file.clone(),
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search the site catalog
    Search(SearchArgs),
    /// Suggest titles for partially typed input
    Suggest(SuggestArgs),
    /// List the categories present in the catalog
    Categories,
    /// Show or clear recent searches
    Recent(RecentArgs),
}

/// Search tool arguments
#[derive(Parser, JsonSchema, Deserialize, Serialize, Clone, Debug)]
pub struct SearchArgs {
    /// Search terms (case-insensitive, typos tolerated)
    #[arg(short = 'q', long)]
    #[schemars(description = "Search terms (case-insensitive, typos tolerated)")]
    pub query: String,

    /// Maximum number of results (default 15, max 100)
    #[arg(short = 'l', long)]
    #[schemars(description = "Maximum number of results (default 15, max 100)")]
    pub limit: Option<usize>,

    /// Minimum score a result must reach (default 20)
    #[arg(long)]
    #[serde(rename = "minScore")]
    #[schemars(description = "Minimum score a result must reach (default 20)")]
    pub min_score: Option<f64>,

    /// Only search these categories (repeatable or comma-separated)
    #[arg(short = 'c', long = "category", value_delimiter = ',')]
    #[serde(default)]
    #[schemars(
        description = "Only search these categories: page, program, admission, facility, activity, document, club, service, faq"
    )]
    pub categories: Vec<String>,

    /// Group results by category
    #[arg(short = 'g', long)]
    #[serde(default)]
    #[schemars(description = "Group results by category")]
    pub grouped: bool,

    /// Print results as JSON
    #[arg(long)]
    #[serde(default)]
    #[schemars(description = "Return results as JSON instead of markdown")]
    pub json: bool,

    /// Do not remember this query in recent searches
    #[arg(long)]
    #[serde(skip)]
    #[schemars(skip)]
    pub no_record: bool,
}

/// Suggest tool arguments
#[derive(Parser, JsonSchema, Deserialize, Serialize, Clone, Debug)]
pub struct SuggestArgs {
    /// Partially typed query; short input yields the default suggestions
    #[arg(short = 'q', long, default_value = "")]
    #[serde(default)]
    #[schemars(description = "Partially typed query; short input yields the default suggestions")]
    pub query: String,
}

/// Recent searches arguments
#[derive(Parser, Debug)]
pub struct RecentArgs {
    #[command(subcommand)]
    pub command: RecentCommands,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum RecentCommands {
    /// List recent searches, newest first
    List,
    /// Forget all recent searches
    Clear,
}
