//! Success envelope wrapping upstream webhook payloads.

use chrono::{SecondsFormat, Utc};
use compact_str::CompactString;
use serde::Serialize;

/// Wrapping object returned by the structured adapter on HTTP 2xx.
///
/// The free-text adapter deliberately does not use this: it relays the
/// upstream body unmodified, so callers must not assume a `success`
/// field is always present.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuccessEnvelope {
    /// Always `true`; failures use the [`Failure`](crate::Failure) shapes.
    pub success: bool,
    /// Workflow name, `"default"` when none was configured.
    pub workflow: CompactString,
    /// Upstream response body, parsed when it was JSON.
    pub result: serde_json::Value,
    /// RFC 3339 completion timestamp.
    pub executed_at: String,
    /// Upstream HTTP status code.
    pub status: u16,
}

impl SuccessEnvelope {
    /// Wrap an upstream payload, stamping `executedAt` with the current
    /// time.
    pub fn new(workflow: Option<&str>, result: serde_json::Value, status: u16) -> Self {
        Self {
            success: true,
            workflow: workflow.unwrap_or("default").into(),
            result,
            executed_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            status,
        }
    }

    /// Pretty-printed JSON string.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}
