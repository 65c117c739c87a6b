//! Shared HTTP transport for the webhook adapters.
//!
//! [`WebhookTransport`] wraps a `reqwest::Client` with pre-built headers
//! (auth + content-type), the endpoint URL, and the request timeout. One
//! outbound POST per call, bound by the timeout, no retries.

use rcore::{
    ConfigSource, Failure, ToolError, WebhookConfig,
    config::{ENV_API_KEY, ENV_TIMEOUT, ENV_WEBHOOK_URL},
    resolve, resolve_timeout,
};
use reqwest::{
    Client, Method, StatusCode,
    header::{self, HeaderMap, HeaderValue},
};
use serde::Serialize;
use std::time::Duration;

/// Shared HTTP transport: client, pre-built headers, endpoint, timeout.
#[derive(Clone, Debug)]
pub struct WebhookTransport {
    client: Client,
    headers: HeaderMap,
    endpoint: String,
    timeout: Duration,
}

impl WebhookTransport {
    /// Create a transport with Bearer token authentication.
    pub fn bearer(
        client: Client,
        key: &str,
        endpoint: &str,
        timeout: Duration,
    ) -> Result<Self, ToolError> {
        let mut headers = base_headers();
        let value = format!("Bearer {key}")
            .parse()
            .map_err(|e| ToolError::Config(format!("invalid api key: {e}")))?;
        headers.insert(header::AUTHORIZATION, value);
        Ok(Self {
            client,
            headers,
            endpoint: endpoint.to_owned(),
            timeout,
        })
    }

    /// Create a transport without authentication.
    pub fn no_auth(client: Client, endpoint: &str, timeout: Duration) -> Self {
        Self {
            client,
            headers: base_headers(),
            endpoint: endpoint.to_owned(),
            timeout,
        }
    }

    /// Build a transport from a resolved endpoint plus the shared
    /// key/timeout cascade.
    ///
    /// `endpoint` is the outcome of the adapter-specific endpoint cascade;
    /// key and timeout resolution are identical for both adapters.
    pub(crate) fn from_config(
        config: &WebhookConfig,
        client: Client,
        endpoint: Option<String>,
    ) -> Result<Self, ToolError> {
        let endpoint = match endpoint {
            Some(url) => url,
            None if config.allow_missing_endpoint => String::new(),
            None => {
                return Err(ToolError::Config(format!(
                    "no webhook endpoint configured: set {ENV_WEBHOOK_URL} or pass endpointUrl"
                )));
            }
        };
        let api_key = resolve(&[
            ConfigSource::Explicit(config.api_key.as_deref()),
            ConfigSource::Env(ENV_API_KEY),
        ]);
        let timeout = match config.timeout_ms {
            Some(millis) => Duration::from_millis(millis),
            None => resolve_timeout(&[ConfigSource::Env(ENV_TIMEOUT)]),
        };

        match api_key {
            Some(key) => Self::bearer(client, &key, &endpoint, timeout),
            None => Ok(Self::no_auth(client, &endpoint, timeout)),
        }
    }

    /// Send the request body, returning the status and raw body text.
    ///
    /// A single attempt bound by the configured timeout. Transport errors
    /// are returned for the adapter to map into a failure envelope.
    pub async fn post(
        &self,
        body: &impl Serialize,
    ) -> Result<(StatusCode, String), reqwest::Error> {
        let response = self
            .client
            .request(Method::POST, &self.endpoint)
            .headers(self.headers.clone())
            .timeout(self.timeout)
            .json(body)
            .send()
            .await?;
        let status = response.status();
        let text = response.text().await?;
        Ok((status, text))
    }

    /// Map a transport error into the failure taxonomy.
    pub fn failure(&self, err: &reqwest::Error) -> Failure {
        if err.is_timeout() {
            Failure::timeout(self.timeout)
        } else if err.is_connect() {
            Failure::Unreachable {
                message: err.to_string(),
                endpoint: self.endpoint.clone(),
            }
        } else {
            Failure::Unknown {
                message: err.to_string(),
                kind: classify(err).to_owned(),
            }
        }
    }

    /// Get the endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Get the configured timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Get a reference to the headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }
}

fn base_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
    headers
}

/// Upstream failure for a non-2xx response.
pub(crate) fn upstream_failure(status: StatusCode, body: &str) -> Failure {
    Failure::Upstream {
        status: status.as_u16(),
        status_text: status.canonical_reason().unwrap_or("").to_owned(),
        body: parse_body(body),
    }
}

/// Parse an upstream body as JSON, falling back to a string value.
pub(crate) fn parse_body(text: &str) -> serde_json::Value {
    serde_json::from_str(text).unwrap_or_else(|_| serde_json::Value::String(text.to_owned()))
}

/// Error category name for the unknown-failure envelope.
fn classify(err: &reqwest::Error) -> &'static str {
    if err.is_builder() {
        "builder"
    } else if err.is_body() {
        "body"
    } else if err.is_decode() {
        "decode"
    } else if err.is_request() {
        "request"
    } else {
        "unknown"
    }
}
