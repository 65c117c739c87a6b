//! Webhook configuration and the ordered resolution cascade.
//!
//! Endpoint, API key, and timeout come from explicit constructor fields
//! with fallback to named environment variables. Each adapter states its
//! cascade as an ordered [`ConfigSource`] list, so precedence is visible
//! at the construction site and testable without touching the process
//! environment.

use serde::Deserialize;
use std::time::Duration;

/// Generic webhook endpoint variable.
pub const ENV_WEBHOOK_URL: &str = "N8N_WEBHOOK_URL";
/// Job-search-specific endpoint variable, consulted first by the
/// free-text adapter.
pub const ENV_JOB_SEARCH_WEBHOOK_URL: &str = "N8N_JOB_SEARCH_WEBHOOK_URL";
/// API key variable.
pub const ENV_API_KEY: &str = "N8N_API_KEY";
/// Request timeout variable, in milliseconds.
pub const ENV_TIMEOUT: &str = "N8N_TIMEOUT";

/// Default request timeout when nothing else is configured.
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// One entry in a resolution cascade.
#[derive(Debug)]
pub enum ConfigSource<'a> {
    /// A value passed explicitly at construction.
    Explicit(Option<&'a str>),
    /// A named process environment variable.
    Env(&'static str),
}

impl ConfigSource<'_> {
    fn get(&self) -> Option<String> {
        match self {
            ConfigSource::Explicit(value) => (*value).map(str::to_owned),
            ConfigSource::Env(name) => std::env::var(name).ok(),
        }
    }
}

/// Scan sources in order; the first non-empty value wins.
pub fn resolve(sources: &[ConfigSource<'_>]) -> Option<String> {
    sources
        .iter()
        .filter_map(ConfigSource::get)
        .find(|value| !value.trim().is_empty())
}

/// Resolve the request timeout, falling back to [`DEFAULT_TIMEOUT_MS`].
///
/// Values are integer milliseconds. An unparseable value falls back to
/// the default rather than failing construction.
pub fn resolve_timeout(sources: &[ConfigSource<'_>]) -> Duration {
    let millis = match resolve(sources) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("ignoring unparseable timeout {raw:?}, using default");
            DEFAULT_TIMEOUT_MS
        }),
        None => DEFAULT_TIMEOUT_MS,
    };
    Duration::from_millis(millis)
}

/// Constructor input for the webhook adapters.
///
/// Every field is optional; anything unset falls back to its environment
/// variable when the adapter is constructed. The resolved configuration
/// is immutable afterwards.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WebhookConfig {
    /// Webhook endpoint URL.
    pub endpoint_url: Option<String>,
    /// API key sent as a bearer token.
    pub api_key: Option<String>,
    /// Request timeout in milliseconds.
    pub timeout_ms: Option<u64>,
    /// Workflow name reported in request bodies and response envelopes.
    pub workflow: Option<String>,
    /// Allow construction without an endpoint (mock/test scenarios).
    pub allow_missing_endpoint: bool,
}

impl WebhookConfig {
    /// Create an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the endpoint URL.
    pub fn endpoint_url(mut self, url: impl Into<String>) -> Self {
        self.endpoint_url = Some(url.into());
        self
    }

    /// Set the API key.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the request timeout in milliseconds.
    pub fn timeout_ms(mut self, millis: u64) -> Self {
        self.timeout_ms = Some(millis);
        self
    }

    /// Set the workflow name.
    pub fn workflow(mut self, name: impl Into<String>) -> Self {
        self.workflow = Some(name.into());
        self
    }

    /// Suppress the mandatory-endpoint check.
    pub fn allow_missing_endpoint(mut self) -> Self {
        self.allow_missing_endpoint = true;
        self
    }
}
