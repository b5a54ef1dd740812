//! Network endpoint resolution.
//!
//! This module turns the global `--network`, `--node`, `--port` and
//! `--force-ssl` flags into a concrete `scheme://host:port` connection
//! target. Two well-known network aliases are supported; anything else
//! falls back to testnet. A NEM address found in a request's query
//! string can also select the network, since the address prefix encodes
//! the network it belongs to.

use clap::Parser;

use crate::{DEFAULT_NIS_PORT, MAINNET_NODE, TESTNET_NODE};

/// Global connection flags shared by every subcommand
#[derive(Parser, Debug, Clone, Default)]
pub struct NetworkOpts {
    /// Network alias (mainnet, testnet); takes precedence over --node
    #[arg(global = true, long, value_name = "ALIAS")]
    pub network: Option<String>,

    /// NIS node hostname, optionally with an http:// or https:// prefix
    #[arg(global = true, long, env = "NEM_NODE", value_name = "HOST")]
    pub node: Option<String>,

    /// NIS port
    #[arg(global = true, long, value_name = "PORT")]
    pub port: Option<u16>,

    /// Force the https scheme regardless of the node prefix
    #[arg(global = true, long)]
    pub force_ssl: bool,
}

/// Well-known NEM networks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Network {
    /// The NEM main network
    Mainnet,
    /// The NEM test network
    Testnet,
}

impl Network {
    /// Resolve a network alias, case-insensitively.
    ///
    /// Unrecognized aliases fall back to testnet.
    pub fn from_alias(alias: &str) -> Self {
        match alias.to_lowercase().as_str() {
            "mainnet" => Network::Mainnet,
            _ => Network::Testnet,
        }
    }

    /// The well-known default node for this network
    pub fn default_host(&self) -> &'static str {
        match self {
            Network::Mainnet => MAINNET_NODE,
            Network::Testnet => TESTNET_NODE,
        }
    }
}

/// URL scheme for the NIS connection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    /// Plain HTTP
    Http,
    /// HTTP over TLS
    Https,
}

impl Scheme {
    /// The scheme as it appears in a URL
    pub fn as_str(&self) -> &'static str {
        match self {
            Scheme::Http => "http",
            Scheme::Https => "https",
        }
    }
}

/// A fully resolved NIS connection target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeEndpoint {
    /// URL scheme
    pub scheme: Scheme,
    /// Node hostname, without scheme prefix
    pub host: String,
    /// NIS port
    pub port: u16,
}

impl NodeEndpoint {
    /// Resolve the connection target from the global flags.
    ///
    /// `--network` has precedence over `--node`. When neither is given
    /// the testnet default node is used. A scheme prefix on the node
    /// value selects the scheme unless `--force-ssl` overrides it.
    pub fn resolve(opts: &NetworkOpts) -> Self {
        let port = opts.port.unwrap_or(DEFAULT_NIS_PORT);

        let mut host = opts
            .node
            .clone()
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| Network::Testnet.default_host().to_string());

        if let Some(alias) = opts.network.as_deref() {
            host = Network::from_alias(alias).default_host().to_string();
        }

        let (scheme_hint, host) = split_scheme(&host);
        let scheme = if opts.force_ssl {
            Scheme::Https
        } else {
            scheme_hint.unwrap_or(Scheme::Http)
        };

        Self { scheme, host, port }
    }

    /// Resolve the connection target for a specific request URL.
    ///
    /// When no explicit `--network`/`--node` was supplied and the URL's
    /// query string carries a NEM address, the address selects the
    /// network.
    pub fn resolve_for_url(opts: &NetworkOpts, url: &str) -> Self {
        let mut endpoint = Self::resolve(opts);

        if opts.network.is_none() && opts.node.is_none() {
            if let Some(network) = network_from_query(url) {
                endpoint.host = network.default_host().to_string();
            }
        }

        endpoint
    }

    /// The `scheme://host:port` base URL for this endpoint
    pub fn base_url(&self) -> String {
        format!("{}://{}:{}", self.scheme.as_str(), self.host, self.port)
    }
}

/// Split an explicit scheme prefix off a node value
fn split_scheme(host: &str) -> (Option<Scheme>, String) {
    if let Some(rest) = host.strip_prefix("https://") {
        (Some(Scheme::Https), rest.to_string())
    } else if let Some(rest) = host.strip_prefix("http://") {
        (Some(Scheme::Http), rest.to_string())
    } else {
        (None, host.to_string())
    }
}

/// Scan a request URL's query string for a NEM address and return the
/// network it belongs to.
pub fn network_from_query(url: &str) -> Option<Network> {
    let (_, query) = url.split_once('?')?;

    for pair in query.split('&') {
        let value = pair.split_once('=').map(|(_, v)| v).unwrap_or(pair);
        if let Some(network) = address_network(value) {
            return Some(network);
        }
    }

    None
}

/// Determine the network a NEM address belongs to.
///
/// Addresses are 40 base32 characters (dashes ignored); the leading
/// letter encodes the network: `N` for mainnet, `T` for testnet.
pub fn address_network(candidate: &str) -> Option<Network> {
    let compact: String = candidate
        .chars()
        .filter(|c| *c != '-')
        .collect::<String>()
        .to_uppercase();

    if compact.len() != 40 {
        return None;
    }
    if !compact.chars().all(|c| matches!(c, 'A'..='Z' | '2'..='7')) {
        return None;
    }

    match compact.chars().next()? {
        'N' => Some(Network::Mainnet),
        'T' => Some(Network::Testnet),
        _ => None,
    }
}
