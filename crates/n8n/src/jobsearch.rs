//! Structured job-search webhook adapter.
//!
//! Wraps validated criteria with request metadata, POSTs them to the
//! configured n8n webhook, and returns a pretty-printed envelope string.
//! Transport and upstream failures are returned as failure envelopes,
//! never raised; only construction and validation fail fast.

use crate::{
    SOURCE, SearchCriteria,
    transport::{self, WebhookTransport},
};
use chrono::{SecondsFormat, Utc};
use compact_str::CompactString;
use rcore::{
    ConfigSource, SuccessEnvelope, Tool, ToolError, WebhookConfig,
    config::ENV_WEBHOOK_URL, resolve,
};
use reqwest::Client;
use serde::Serialize;
use std::{future::Future, pin::Pin, sync::Arc};

/// Outbound request body: criteria plus request metadata.
#[derive(Serialize)]
struct RequestBody<'a> {
    data: &'a SearchCriteria,
    #[serde(skip_serializing_if = "Option::is_none")]
    workflow: Option<&'a str>,
    timestamp: String,
    source: &'static str,
}

/// The structured webhook adapter.
///
/// Stateless across calls beyond its immutable configuration; safe to
/// invoke concurrently.
#[derive(Debug)]
pub struct JobSearchTool {
    transport: WebhookTransport,
    workflow: Option<CompactString>,
}

impl JobSearchTool {
    /// Create an adapter, resolving configuration once.
    ///
    /// Endpoint precedence: explicit `endpoint_url`, then
    /// `N8N_WEBHOOK_URL`. Fails with a configuration error when no
    /// endpoint is resolvable and `allow_missing_endpoint` is unset.
    pub fn new(config: WebhookConfig) -> Result<Self, ToolError> {
        Self::with_client(config, Client::new())
    }

    /// Create an adapter reusing an existing HTTP client.
    pub fn with_client(config: WebhookConfig, client: Client) -> Result<Self, ToolError> {
        let endpoint = resolve(&[
            ConfigSource::Explicit(config.endpoint_url.as_deref()),
            ConfigSource::Env(ENV_WEBHOOK_URL),
        ]);
        let transport = WebhookTransport::from_config(&config, client, endpoint)?;
        tracing::debug!(endpoint = %transport.endpoint(), "job_search tool ready");
        Ok(Self {
            transport,
            workflow: config.workflow.map(Into::into),
        })
    }

    /// Forward criteria to the webhook.
    ///
    /// Returns a pretty-printed JSON string: a success envelope on 2xx,
    /// a failure envelope for every transport or upstream problem.
    pub async fn invoke(&self, criteria: &SearchCriteria) -> String {
        let body = RequestBody {
            data: criteria,
            workflow: self.workflow.as_deref(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            source: SOURCE,
        };
        if let Ok(json) = serde_json::to_string(&body) {
            tracing::trace!("request: {json}");
        }

        match self.transport.post(&body).await {
            Ok((status, text)) if status.is_success() => {
                tracing::trace!("response: {text}");
                let result = transport::parse_body(&text);
                SuccessEnvelope::new(self.workflow.as_deref(), result, status.as_u16()).to_json()
            }
            Ok((status, text)) => {
                tracing::warn!(status = status.as_u16(), "webhook returned an error status");
                transport::upstream_failure(status, &text).to_json()
            }
            Err(err) => {
                tracing::warn!("webhook request failed: {err}");
                self.transport.failure(&err).to_json()
            }
        }
    }

    /// Parse and validate raw argument JSON, then invoke.
    ///
    /// This is the entry point for agent runtimes, which hand tool
    /// arguments over as a JSON string. Validation failures are raised
    /// before any network call, with every offending field path in the
    /// message.
    pub async fn invoke_json(&self, args: &str) -> Result<String, ToolError> {
        let value = parse_args(args, "criteria")?;
        let criteria = SearchCriteria::from_value(value)?;
        Ok(self.invoke(&criteria).await)
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
            name: "job_search".into(),
            description: "Search for jobs through the n8n workflow. \
                 All criteria fields (position, location, skills, salary \
                 bounds, remote) are optional."
                .into(),
            parameters: schemars::schema_for!(SearchCriteria),
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

/// Parse a tool-argument string as JSON. Empty input means "no criteria".
pub(crate) fn parse_args(args: &str, path: &str) -> Result<serde_json::Value, ToolError> {
    if args.trim().is_empty() {
        return Ok(serde_json::Value::Object(serde_json::Map::new()));
    }
    serde_json::from_str(args)
        .map_err(|e| ToolError::Validation(format!("{path}: invalid JSON ({e})")))
}
