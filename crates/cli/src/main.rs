//! NEM NIS CLI - Main entry point
//!
//! This is the main binary for the NEM NIS command-line interface.

use clap::Parser;
use nem_cli::utils::print_error;
use nem_cli::{run_cli, Cli};
use std::process;

#[tokio::main]
async fn main() {
    // Parse command-line arguments
    let cli = Cli::parse();

    // Run the CLI
    if let Err(e) = run_cli(cli).await {
        print_error(&e.to_string());
        process::exit(1);
    }
}
