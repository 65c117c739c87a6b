//! Tool schema for agent-runtime registration.

use schemars::Schema;
use serde::{Deserialize, Serialize};

/// A tool definition an agent runtime can register.
///
/// The runtime pairs this schema with a type-erased async handler taking
/// the call arguments as a JSON string and returning the tool output as
/// a string.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Tool {
    /// The name of the tool.
    pub name: String,

    /// The description of the tool.
    pub description: String,

    /// JSON schema of the tool arguments.
    pub parameters: Schema,

    /// Whether to strictly validate the parameters.
    pub strict: bool,
}
