//! Binary entry point for docshelf.
//!
//! `docshelf serve` runs the MCP server on stdio. The other subcommands run
//! the same tools once and print their text, which is handy for checking a
//! content tree by hand.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(missing_docs)]
// Allow print_stderr in main binary for CLI output
#![allow(clippy::print_stderr)]
#![allow(clippy::print_stdout)]
// Allow needless_pass_by_value for command functions
#![allow(clippy::needless_pass_by_value)]
// Allow multiple crate versions from transitive dependencies
#![allow(clippy::multiple_crate_versions)]

use clap::{Parser, Subcommand};
use docshelf::config::DocshelfConfig;
use docshelf::mcp::{McpServer, ToolRegistry, ToolRequest};
use docshelf::observability::{self, InitOptions};
use docshelf::services::ServiceContainer;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Docshelf - serve topic-organized documents to AI agents over MCP.
#[derive(Parser)]
#[command(name = "docshelf")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file.
    #[arg(short, long, global = true, env = "DOCSHELF_CONFIG")]
    config: Option<PathBuf>,

    /// Root of the content tree (overrides the config file).
    #[arg(long, global = true, env = "DOCSHELF_CONTENT_ROOT")]
    content_root: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand)]
enum Commands {
    /// Run the MCP server over stdio.
    Serve,

    /// List topics and their documents.
    Topics,

    /// Show a whole topic, or one document of it.
    Show {
        /// Topic name.
        topic: String,

        /// Document name, without extension.
        document: Option<String>,
    },

    /// Search document names and bodies.
    Search {
        /// The search query.
        query: String,
    },

    /// Show the index overview.
    Index,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            return ExitCode::FAILURE;
        },
    };
    let config = match cli.content_root.clone() {
        Some(root) => config.with_content_root(root),
        None => config,
    };

    if let Err(e) = observability::init_from_config(
        &config.logging,
        InitOptions {
            verbose: cli.verbose,
        },
    ) {
        eprintln!("Failed to initialize observability: {e}");
        return ExitCode::FAILURE;
    }

    let services = ServiceContainer::from_config(&config);

    match cli.command {
        Commands::Serve => cmd_serve(services),
        Commands::Topics => run_tool(services, &ToolRequest::ListTopics),
        Commands::Show { topic, document } => {
            let request = match document {
                Some(document) => ToolRequest::GetDocument { topic, document },
                None => ToolRequest::GetTopic { topic },
            };
            run_tool(services, &request)
        },
        Commands::Search { query } => run_tool(services, &ToolRequest::Search { query }),
        Commands::Index => run_tool(services, &ToolRequest::GetIndex),
    }
}

/// Loads configuration from an explicit path or the default location.
fn load_config(path: Option<&Path>) -> docshelf::Result<DocshelfConfig> {
    match path {
        Some(path) => DocshelfConfig::load_from_file(path),
        None => Ok(DocshelfConfig::load_default().unwrap_or_else(|e| {
            eprintln!("Ignoring invalid config file: {e}");
            DocshelfConfig::default()
        })),
    }
}

/// Serve command.
fn cmd_serve(services: ServiceContainer) -> ExitCode {
    match McpServer::new(services).start() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        },
    }
}

/// Runs one tool and prints its text.
fn run_tool(services: ServiceContainer, request: &ToolRequest) -> ExitCode {
    let registry = ToolRegistry::new(services);

    match registry.execute_request(request) {
        Ok(result) => {
            if let Some(text) = result.first_text() {
                print!("{text}");
                if !text.ends_with('\n') {
                    println!();
                }
            }
            ExitCode::SUCCESS
        },
        Err(e) => {
            tracing::debug!(tool = request.tool_name(), error = %e, "Tool failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        },
    }
}
