//! n8n webhook tool adapters for job-search requests.
//!
//! Two independent leaf adapters forward agent tool calls to an n8n
//! workflow webhook:
//!
//! - [`JobSearchTool`]: structured criteria, response wrapped in a
//!   success envelope with metadata.
//! - [`JobQueryTool`]: free-text query, upstream response relayed
//!   verbatim.
//!
//! Control flow is strictly linear: validate input, build the request,
//! send it once (no retries), map the response or error, return a JSON
//! string. Both adapters are immutable after construction and safe to
//! invoke concurrently.

pub use {
    criteria::{SearchCriteria, SearchQuery},
    jobsearch::JobSearchTool,
    query::JobQueryTool,
    transport::WebhookTransport,
};

#[cfg(feature = "cli")]
pub mod cli;
mod criteria;
mod jobsearch;
mod query;
mod transport;

/// Fixed platform identifier sent in the outbound `source` field.
pub const SOURCE: &str = "remora";
