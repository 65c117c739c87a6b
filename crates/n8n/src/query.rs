//! Free-text job-search webhook adapter.
//!
//! Forwards a natural-language query as `{ "query": ... }` and relays
//! the upstream response verbatim. Unlike
//! [`JobSearchTool`](crate::JobSearchTool) there is no envelope on
//! success; callers must not assume a `success` field is present.

use crate::{
    SearchQuery,
    jobsearch::parse_args,
    transport::{self, WebhookTransport},
};
use rcore::{
    ConfigSource, Tool, ToolError, WebhookConfig,
    config::{ENV_JOB_SEARCH_WEBHOOK_URL, ENV_WEBHOOK_URL},
    resolve,
};
use reqwest::Client;
use std::{future::Future, pin::Pin, sync::Arc};

/// The free-text webhook adapter.
///
/// Stateless across calls beyond its immutable configuration; safe to
/// invoke concurrently.
#[derive(Debug)]
pub struct JobQueryTool {
    transport: WebhookTransport,
}

impl JobQueryTool {
    /// Create an adapter, resolving configuration once.
    ///
    /// Endpoint precedence: `N8N_JOB_SEARCH_WEBHOOK_URL`, then
    /// `N8N_WEBHOOK_URL`, then the explicit `endpoint_url`; the first
    /// non-empty source wins. Fails with a configuration error when no
    /// endpoint is resolvable and `allow_missing_endpoint` is unset.
    pub fn new(config: WebhookConfig) -> Result<Self, ToolError> {
        Self::with_client(config, Client::new())
    }

    /// Create an adapter reusing an existing HTTP client.
    pub fn with_client(config: WebhookConfig, client: Client) -> Result<Self, ToolError> {
        let endpoint = resolve(&[
            ConfigSource::Env(ENV_JOB_SEARCH_WEBHOOK_URL),
            ConfigSource::Env(ENV_WEBHOOK_URL),
            ConfigSource::Explicit(config.endpoint_url.as_deref()),
        ]);
        let transport = WebhookTransport::from_config(&config, client, endpoint)?;
        tracing::debug!(endpoint = %transport.endpoint(), "job_search_query tool ready");
        Ok(Self { transport })
    }

    /// Forward a free-text query to the webhook.
    ///
    /// The body is `{ "query": ... }` with no metadata wrapping. On 2xx
    /// the upstream body is returned unmodified (pretty-printed when it
    /// parses as JSON); failures use the same envelope taxonomy as the
    /// structured adapter. An empty query raises a validation error
    /// before any network call.
    pub async fn invoke(&self, query: &str) -> Result<String, ToolError> {
        if query.trim().is_empty() {
            return Err(ToolError::Validation(
                "query: must be a non-empty string".to_owned(),
            ));
        }

        let body = serde_json::json!({ "query": query });
        tracing::trace!("request: {body}");

        Ok(match self.transport.post(&body).await {
            Ok((status, text)) if status.is_success() => {
                tracing::trace!("response: {text}");
                match serde_json::from_str::<serde_json::Value>(&text) {
                    Ok(value) => serde_json::to_string_pretty(&value).unwrap_or(text),
                    Err(_) => text,
                }
            }
            Ok((status, text)) => {
                tracing::warn!(status = status.as_u16(), "webhook returned an error status");
                transport::upstream_failure(status, &text).to_json()
            }
            Err(err) => {
                tracing::warn!("webhook request failed: {err}");
                self.transport.failure(&err).to_json()
            }
        })
    }

    /// Parse and validate raw argument JSON, then invoke.
    pub async fn invoke_json(&self, args: &str) -> Result<String, ToolError> {
        let value = parse_args(args, "query")?;
        let query = SearchQuery::from_value(value)?;
        self.invoke(&query.query).await
    }

    /// Adapt the tool to a runtime handler over JSON argument strings.
    ///
    /// Runtimes give handlers no error channel, so validation errors are
    /// reported in-band as the returned string.
    pub fn into_handler(
        self,
    ) -> impl Fn(String) -> Pin<Box<dyn Future<Output = String> + Send>> + Send + Sync {
        let tool = Arc::new(self);
        move |args: String| {
            let tool = tool.clone();
            Box::pin(async move {
                match tool.invoke_json(&args).await {
                    Ok(output) => output,
                    Err(err) => err.to_string(),
                }
            })
        }
    }

    /// Tool schema for runtime registration.
    pub fn tool() -> Tool {
        Tool {
            name: "job_search_query".into(),
            description: "Send a natural-language job-search request to the \
                 n8n workflow and relay its answer."
                .into(),
            parameters: schemars::schema_for!(SearchQuery),
            strict: false,
        }
    }

    /// The resolved endpoint URL.
    pub fn endpoint(&self) -> &str {
        self.transport.endpoint()
    }

    /// The resolved request timeout.
    pub fn timeout(&self) -> std::time::Duration {
        self.transport.timeout()
    }
}
