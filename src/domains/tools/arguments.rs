//! Argument normalization.
//!
//! MCP clients do not all send bare JSON scalars. Some wrap each argument in
//! a one-field envelope such as `{"value": "IN"}`. Everything that reads tool
//! arguments goes through [`normalize`] so executors only ever see plain
//! strings.

use rmcp::model::JsonObject;
use serde_json::Value;

use super::error::{ToolError, ToolResult};

/// Name of the field unwrapped from an enveloped argument.
const WRAPPED_VALUE_FIELD: &str = "value";

/// Coerce a raw argument into its canonical string form.
///
/// - absent or `null` -> `None`
/// - `{"value": x}` -> `x`, one level only
/// - strings pass through; other JSON values use their JSON text
pub fn normalize(raw: Option<&Value>) -> Option<String> {
    let raw = raw?;

    let scalar = match raw {
        Value::Object(envelope) => envelope.get(WRAPPED_VALUE_FIELD).unwrap_or(raw),
        _ => raw,
    };

    match scalar {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Read an optional argument. Empty strings count as absent.
pub fn optional_arg(arguments: &JsonObject, field: &str) -> Option<String> {
    normalize(arguments.get(field)).filter(|s| !s.is_empty())
}

/// Read a required argument, failing with [`ToolError::MissingArgument`].
pub fn required_arg(arguments: &JsonObject, field: &str) -> ToolResult<String> {
    optional_arg(arguments, field).ok_or_else(|| ToolError::missing_argument(field))
}
