//! Shared vocabulary for remora webhook tools.
//!
//! - [`WebhookConfig`] / [`config`]: constructor input and the ordered
//!   resolution cascade over explicit fields and environment variables.
//! - [`ToolError`] / [`Failure`]: the two error channels. Programmer
//!   errors are raised before any network call; runtime failures are
//!   returned as envelope data.
//! - [`SuccessEnvelope`]: the wrapping object for successful webhook calls.
//! - [`Tool`]: the schema an agent runtime registers next to a handler.

pub use {
    config::{ConfigSource, WebhookConfig, resolve, resolve_timeout},
    envelope::SuccessEnvelope,
    error::{Failure, ToolError},
    tool::Tool,
};

pub mod config;
mod envelope;
mod error;
mod tool;
