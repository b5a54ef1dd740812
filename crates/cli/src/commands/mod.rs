//! CLI command definitions and handlers.
//!
//! This module defines all available CLI commands using clap's derive
//! macros. Each subcommand has its own module with implementation
//! details.

pub mod api;
pub mod mosaic;

use clap::{Parser, Subcommand};

use crate::connection::NetworkOpts;
use crate::utils::{CliResult, OutputFormat};

/// nem-cli - Command-line client for the NEM NIS API
#[derive(Parser, Debug)]
#[command(name = "nem-cli")]
#[command(version)]
#[command(about = "NEM NIS API command-line tools", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Global output format for command results
    #[arg(global = true, long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Enable verbose logging (repeat for more detail)
    #[arg(global = true, short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(global = true, short, long)]
    pub quiet: bool,

    /// Connection flags shared by every subcommand
    #[command(flatten)]
    pub net: NetworkOpts,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Execute a raw NIS API request
    Api(api::ApiArgs),

    /// Look up mosaic definitions by slug
    Mosaic(mosaic::MosaicArgs),

    /// Show version information
    Version,
}

/// Execute the CLI with parsed arguments
pub async fn run_cli(cli: Cli) -> CliResult<()> {
    // Set up logging based on verbosity
    let log_level = match (cli.quiet, cli.verbose) {
        (true, _) => tracing::Level::ERROR,
        (_, 0) => tracing::Level::INFO,
        (_, 1) => tracing::Level::DEBUG,
        (_, _) => tracing::Level::TRACE,
    };

    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(cli.verbose >= 2)
        .init();

    match cli.command {
        Commands::Api(args) => api::execute(args, &cli.net, cli.output, cli.quiet).await,
        Commands::Mosaic(args) => mosaic::execute(args, &cli.net, cli.output, cli.quiet).await,
        Commands::Version => execute_version(cli.output),
    }
}

/// Execute the version command
fn execute_version(output_format: OutputFormat) -> CliResult<()> {
    let version_info = VersionInfo::new();

    match output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&version_info)?);
        }
        OutputFormat::Text => {
            println!("NEM NIS CLI");
            println!("  Version:     {}", version_info.version);
            println!("  Git Commit:  {}", version_info.git_commit);
            println!("  Target:      {}", version_info.target);
        }
    }

    Ok(())
}

/// Version information structure
#[derive(Debug, serde::Serialize)]
struct VersionInfo {
    version: String,
    git_commit: String,
    target: String,
}

impl VersionInfo {
    fn new() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            git_commit: option_env!("GIT_COMMIT").unwrap_or("unknown").to_string(),
            target: std::env::consts::ARCH.to_string() + "-" + std::env::consts::OS,
        }
    }
}
