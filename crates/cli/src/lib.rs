//! # NEM NIS CLI
//!
//! Command-line client for the NEM NIS HTTP API.
//!
//! This crate lets you issue raw NIS API requests against any NEM node,
//! resolve nodes from well-known network aliases, and look up mosaic
//! definitions by slug.
//!
//! ## Available Commands
//!
//! - `api` - Execute a raw NIS API request (GET or POST)
//! - `mosaic` - Look up mosaic definitions by `namespace:mosaic` slug
//! - `version` - Display version information
//!
//! ## Example Usage
//!
//! ```bash
//! # Query the chain height on testnet (the default network)
//! nem-cli api --url /chain/height
//!
//! # Same query against mainnet
//! nem-cli api --url /chain/height --network mainnet
//!
//! # POST a block request with a JSON body
//! nem-cli api --url /block/at/public --post --json '{"height": 1149971}'
//!
//! # Resolve the XEM mosaic definition
//! nem-cli mosaic nem:xem
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod client;
pub mod commands;
pub mod connection;
pub mod utils;

// Re-export the main CLI types for convenience
pub use commands::{run_cli, Cli, Commands};
pub use utils::{CliError, CliResult, OutputFormat};

/// Version information for the CLI
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// CLI application name
pub const APP_NAME: &str = "nem-cli";

/// Default NIS HTTP port
pub const DEFAULT_NIS_PORT: u16 = 7890;

/// Well-known mainnet node
pub const MAINNET_NODE: &str = "hugealice.nem.ninja";

/// Well-known testnet node
pub const TESTNET_NODE: &str = "bigalice2.nem.ninja";

/// Divisibility assumed for mosaics whose definition cannot be found
pub const DEFAULT_MOSAIC_DIVISIBILITY: u32 = 6;
