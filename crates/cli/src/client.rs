//! NIS HTTP client.
//!
//! This module wraps reqwest into a small client issuing one NIS API
//! request per call. Requests are first assembled into a [`RequestPlan`]
//! so they can be dumped for inspection before anything goes on the
//! wire. The client also resolves mosaic definitions by slug, memoizing
//! the definition page fetched for each namespace.

use std::collections::HashMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::connection::NodeEndpoint;
use crate::utils::{CliError, CliResult};
use crate::{APP_NAME, DEFAULT_MOSAIC_DIVISIBILITY, VERSION};

// ============================================================================
// Request Planning
// ============================================================================

/// HTTP methods supported by the NIS API wrapper
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET
    Get,
    /// HTTP POST
    Post,
}

impl HttpMethod {
    /// The method name as it appears on the request line
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

/// A fully prepared NIS API request, before it goes on the wire
#[derive(Debug, Clone)]
pub struct RequestPlan {
    /// HTTP method
    pub method: HttpMethod,
    /// NIS endpoint path (e.g. `/chain/height`), leading slash included
    pub path: String,
    /// Content headers derived from the body flags
    pub headers: Vec<(&'static str, String)>,
    /// Raw request body, unvalidated
    pub body: Option<String>,
}

impl RequestPlan {
    /// Build a request plan from the `api` command's flags.
    ///
    /// Returns `None` when no URL was supplied; the caller is expected
    /// to print help and stop without issuing a request. A `--json`
    /// body carries `Content-Type: application/json`, a `--params` body
    /// `application/x-www-form-urlencoded`; both carry a
    /// `Content-Length` equal to the body's byte length.
    pub fn build(
        url: Option<&str>,
        post: bool,
        json: Option<&str>,
        params: Option<&str>,
    ) -> Option<Self> {
        let url = url.filter(|u| !u.is_empty())?;
        let path = if url.starts_with('/') {
            url.to_string()
        } else {
            format!("/{}", url)
        };

        let method = if post { HttpMethod::Post } else { HttpMethod::Get };

        let mut headers = Vec::new();
        let body = if let Some(json) = json {
            headers.push(("Content-Type", "application/json".to_string()));
            headers.push(("Content-Length", json.len().to_string()));
            Some(json.to_string())
        } else if let Some(params) = params {
            headers.push((
                "Content-Type",
                "application/x-www-form-urlencoded".to_string(),
            ));
            headers.push(("Content-Length", params.len().to_string()));
            Some(params.to_string())
        } else {
            None
        };

        Some(Self {
            method,
            path,
            headers,
            body,
        })
    }

    /// Render the request the way it will be sent, for `--verbose`
    /// inspection: request line, User-Agent and Host headers, content
    /// headers, blank separator, body.
    pub fn dump(&self, endpoint: &NodeEndpoint) -> String {
        let mut out = format!("{} {} HTTP/1.1\n", self.method.as_str(), self.path);
        out.push_str(&format!("User-Agent: {}/{}\n", APP_NAME, VERSION));
        out.push_str(&format!("Host: {}\n", endpoint.host));
        for (name, value) in &self.headers {
            out.push_str(&format!("{}: {}\n", name, value));
        }
        out.push('\n');
        if let Some(body) = &self.body {
            out.push_str(body);
        }
        out
    }
}

// ============================================================================
// NIS Client
// ============================================================================

/// HTTP client bound to a resolved NIS endpoint
pub struct NisClient {
    http: reqwest::Client,
    endpoint: NodeEndpoint,
    // Definition pages already fetched, keyed by normalized namespace.
    // Read-then-written within a single command invocation only.
    ns_cache: HashMap<String, MosaicDefinitionPage>,
}

impl NisClient {
    /// Create a client for the given endpoint
    pub fn new(endpoint: NodeEndpoint) -> CliResult<Self> {
        let http = reqwest::Client::builder()
            .user_agent(format!("{}/{}", APP_NAME, VERSION))
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            http,
            endpoint,
            ns_cache: HashMap::new(),
        })
    }

    /// The endpoint this client talks to
    pub fn endpoint(&self) -> &NodeEndpoint {
        &self.endpoint
    }

    /// Issue the planned request and return the raw response body.
    ///
    /// The body comes back whatever the status code was; NIS reports
    /// errors as JSON payloads with non-2xx codes and the caller prints
    /// them like any other response.
    pub async fn send(&self, plan: &RequestPlan) -> CliResult<String> {
        let url = format!("{}{}", self.endpoint.base_url(), plan.path);
        tracing::debug!("{} {}", plan.method.as_str(), url);

        let mut request = match plan.method {
            HttpMethod::Get => self.http.get(&url),
            HttpMethod::Post => self.http.post(&url),
        };
        for (name, value) in &plan.headers {
            request = request.header(*name, value);
        }
        if let Some(body) = &plan.body {
            request = request.body(body.clone());
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::warn!("node answered {}", status);
        }

        Ok(body)
    }

    /// Convenience GET against a NIS path
    pub async fn get(&self, path: &str) -> CliResult<String> {
        let plan = RequestPlan {
            method: HttpMethod::Get,
            path: path.to_string(),
            headers: Vec::new(),
            body: None,
        };
        self.send(&plan).await
    }

    /// Resolve a mosaic definition by slug (`namespace:mosaic`).
    ///
    /// The definition page for each namespace is fetched at most once
    /// per invocation. When the mosaic is not listed, a synthetic
    /// definition with the default divisibility is returned.
    pub async fn mosaic_definition(&mut self, slug: &str) -> CliResult<MosaicDefinition> {
        let (namespace, name) = split_slug(slug)?;
        let key = normalize_namespace(&namespace);

        if !self.ns_cache.contains_key(&key) {
            let body = self
                .get(&format!(
                    "/namespace/mosaic/definition/page?namespace={}",
                    namespace
                ))
                .await?;
            let page: MosaicDefinitionPage = serde_json::from_str(&body)
                .map_err(|e| CliError::Node(format!("unexpected definition page: {}", e)))?;
            self.ns_cache.insert(key.clone(), page);
        }

        let page = &self.ns_cache[&key];
        Ok(page
            .find(&name)
            .cloned()
            .unwrap_or_else(|| MosaicDefinition::unknown(&namespace, &name)))
    }
}

/// Split a mosaic slug (`namespace:mosaic`, e.g. `nem:xem`) into its parts
pub fn split_slug(slug: &str) -> CliResult<(String, String)> {
    match slug.split_once(':') {
        Some((ns, name)) if !ns.is_empty() && !name.is_empty() => {
            Ok((ns.to_string(), name.to_string()))
        }
        _ => Err(CliError::InvalidArgument(format!(
            "invalid mosaic slug '{}' (expected namespace:mosaic)",
            slug
        ))),
    }
}

/// Normalize a namespace for use as a cache key (dots become dashes)
pub fn normalize_namespace(namespace: &str) -> String {
    namespace.replace('.', "-")
}

// ============================================================================
// Response types (for deserialization from NIS)
// ============================================================================

/// One page of mosaic definitions for a namespace
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MosaicDefinitionPage {
    /// Definition rows, newest first
    pub data: Vec<MosaicDefinitionRow>,
}

impl MosaicDefinitionPage {
    /// Find the definition for a mosaic name on this page
    pub fn find(&self, name: &str) -> Option<&MosaicDefinition> {
        self.data
            .iter()
            .map(|row| &row.mosaic)
            .find(|mosaic| mosaic.id.name == name)
    }
}

/// One definition row as served by NIS
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MosaicDefinitionRow {
    /// Row metadata (database id), passed through untouched
    #[serde(default)]
    pub meta: serde_json::Value,
    /// The mosaic definition proper
    pub mosaic: MosaicDefinition,
}

/// A mosaic definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MosaicDefinition {
    /// Public key of the definition's creator
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,
    /// Fully qualified mosaic id
    pub id: MosaicId,
    /// Free-text description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Definition properties (divisibility, initialSupply, ...)
    #[serde(default)]
    pub properties: Vec<MosaicProperty>,
}

impl MosaicDefinition {
    /// The mosaic's divisibility, defaulting when absent or unparsable
    pub fn divisibility(&self) -> u32 {
        self.properties
            .iter()
            .find(|p| p.name == "divisibility")
            .and_then(|p| p.value.parse().ok())
            .unwrap_or(DEFAULT_MOSAIC_DIVISIBILITY)
    }

    /// Synthetic definition for a mosaic NIS does not list
    pub fn unknown(namespace: &str, name: &str) -> Self {
        Self {
            creator: None,
            id: MosaicId {
                namespace_id: namespace.to_string(),
                name: name.to_string(),
            },
            description: None,
            properties: vec![MosaicProperty {
                name: "divisibility".to_string(),
                value: DEFAULT_MOSAIC_DIVISIBILITY.to_string(),
            }],
        }
    }
}

/// Fully qualified mosaic id
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MosaicId {
    /// Namespace the mosaic lives in
    #[serde(rename = "namespaceId")]
    pub namespace_id: String,
    /// Mosaic name within the namespace
    pub name: String,
}

/// A name/value definition property
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MosaicProperty {
    /// Property name
    pub name: String,
    /// Property value, as served (a string even for numbers)
    pub value: String,
}
