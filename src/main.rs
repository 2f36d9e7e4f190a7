//! site-search tool server & CLI
//!
//! Dual-mode application:
//! - Tool Server Mode (default): JSON-RPC 2.0 over stdio
//! - CLI Mode: Command-line utility for direct tool execution
//!
//! Implements two tools:
//! - `search(query)` - Ranked catalog entries for a free-text query
//! - `suggest(query)` - Title suggestions for partially typed input

use anyhow::Result;
use clap::Parser;
use site_search::cli::{self, Cli, Commands, RecentCommands};
use site_search::config::EngineConfig;
use site_search::error::AppError;
use site_search::{mcp, tools};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Detect mode: CLI if args present, tool server otherwise
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        // CLI mode - parse arguments and execute
        run_cli_mode()
    } else {
        // Tool server mode - default behavior
        run_mcp_mode().await
    }
}

/// Log to stderr so stdout carries only results or JSON-RPC frames
fn init_logging(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Run in CLI mode
fn run_cli_mode() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity flags
    let log_level = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };
    init_logging(log_level);

    let config = cli.engine_config();

    // Execute command
    let result = match cli.command {
        Some(Commands::Search(args)) => execute_search_cli(args, &config),
        Some(Commands::Suggest(args)) => execute_suggest_cli(args, &config),
        Some(Commands::Categories) => execute_categories_cli(&config),
        Some(Commands::Recent(args)) => execute_recent_cli(args.command, &config),
        None => {
            eprintln!("Error: No command specified. Use --help for usage information.");
            std::process::exit(1);
        }
    };

    // Handle result and exit with appropriate code
    match result {
        Ok(output) => {
            println!("{}", output);
            Ok(())
        }
        Err(e) => {
            eprintln!("Error: {}", e.message());
            std::process::exit(e.exit_code());
        }
    }
}

/// Execute search command in CLI mode
fn execute_search_cli(args: cli::SearchArgs, config: &EngineConfig) -> Result<String, AppError> {
    let data = config.load()?;
    let tool_result = tools::search::execute_search(&args, &data.engine())?;

    if !args.no_record {
        if let Err(e) = config.recent_store().and_then(|store| store.record(&args.query)) {
            warn!("Could not record recent search: {}", e);
        }
    }

    Ok(tool_result.first_text())
}

/// Execute suggest command in CLI mode
fn execute_suggest_cli(args: cli::SuggestArgs, config: &EngineConfig) -> Result<String, AppError> {
    let data = config.load()?;
    let tool_result = tools::suggest::execute_suggest(&args, &data.engine())?;
    Ok(tool_result.first_text())
}

/// List the categories present in the catalog
fn execute_categories_cli(config: &EngineConfig) -> Result<String, AppError> {
    let data = config.load()?;
    let catalog = data.catalog();

    let lines: Vec<String> = catalog
        .categories()
        .into_iter()
        .map(|category| {
            let count = catalog.iter().filter(|e| e.category == category).count();
            format!(
                "{:<10} {:<12} {} ({} entries)",
                category.as_str(),
                tools::format::category_label(category),
                tools::format::category_color(category),
                count
            )
        })
        .collect();

    if lines.is_empty() {
        return Err(AppError::NotFound("Catalog has no entries".to_string()));
    }
    Ok(lines.join("\n"))
}

/// Execute recent command in CLI mode
fn execute_recent_cli(command: RecentCommands, config: &EngineConfig) -> Result<String, AppError> {
    let store = config.recent_store()?;
    match command {
        RecentCommands::List => tools::recent::execute_recent_list(&store),
        RecentCommands::Clear => tools::recent::execute_recent_clear(&store),
    }
}

/// Run in tool server mode
async fn run_mcp_mode() -> Result<()> {
    init_logging("info");

    info!("Starting site-search tool server");
    let data = EngineConfig::from_env().load()?;

    mcp::handle_stdio(&data.engine()).await
}
