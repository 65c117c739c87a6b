//! Error taxonomy: raised programmer errors vs returned runtime failures.
//!
//! Construction and validation problems surface as [`ToolError`] and fail
//! fast, before any network call. Network-layer outcomes are data: they
//! map into a [`Failure`] envelope the adapter returns as a JSON string,
//! so an agent-style caller can always relay a message to the end user
//! without its own error handling.

use std::time::Duration;

/// Programmer-facing errors, raised synchronously.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    /// Adapter construction failed.
    #[error("configuration: {0}")]
    Config(String),
    /// Input failed the shape contract.
    #[error("validation: {0}")]
    Validation(String),
}

impl ToolError {
    /// Build a validation error from per-field violations, comma-joined.
    pub fn validation(violations: impl IntoIterator<Item = String>) -> Self {
        Self::Validation(violations.into_iter().collect::<Vec<_>>().join(", "))
    }
}

/// Caller-facing runtime failure, returned (never raised) as a pretty
/// JSON envelope.
#[derive(Debug, Clone, PartialEq)]
pub enum Failure {
    /// The request exceeded the configured timeout.
    Timeout {
        /// Human-readable description.
        message: String,
        /// The configured timeout, in milliseconds.
        timeout_ms: u64,
    },
    /// DNS or connection-level failure before any response arrived.
    Unreachable {
        /// Human-readable description.
        message: String,
        /// The endpoint that could not be reached.
        endpoint: String,
    },
    /// The webhook answered with a non-2xx status.
    Upstream {
        /// Upstream HTTP status code.
        status: u16,
        /// Upstream reason phrase.
        status_text: String,
        /// Upstream response body, parsed when it was JSON.
        body: serde_json::Value,
    },
    /// Anything else.
    Unknown {
        /// Human-readable description.
        message: String,
        /// Error category name.
        kind: String,
    },
}

impl Failure {
    /// Timeout failure for the given configured duration.
    pub fn timeout(timeout: Duration) -> Self {
        let timeout_ms = timeout.as_millis() as u64;
        Self::Timeout {
            message: format!("webhook did not answer within {timeout_ms}ms"),
            timeout_ms,
        }
    }

    /// Serialize as the pretty-printed failure envelope.
    pub fn to_json(&self) -> String {
        let value = match self {
            Self::Timeout {
                message,
                timeout_ms,
            } => serde_json::json!({
                "success": false,
                "error": "Request timeout",
                "message": message,
                "timeout": timeout_ms,
            }),
            Self::Unreachable { message, endpoint } => serde_json::json!({
                "success": false,
                "error": "Webhook unreachable",
                "message": message,
                "endpoint": endpoint,
            }),
            Self::Upstream {
                status,
                status_text,
                body,
            } => serde_json::json!({
                "success": false,
                "error": "Webhook request failed",
                "status": status,
                "statusText": status_text,
                "response": body,
            }),
            Self::Unknown { message, kind } => serde_json::json!({
                "success": false,
                "error": message,
                "errorType": kind,
            }),
        };
        serde_json::to_string_pretty(&value).unwrap_or_default()
    }
}
