//! Tool-specific error types.

use thiserror::Error;

/// A specialized Result type for tool execution.
pub type ToolResult<T> = std::result::Result<T, ToolError>;

/// Errors that can occur while registering or executing tools.
///
/// None of these cross the protocol boundary as a transport error: the
/// dispatcher renders each one as a text content block.
#[derive(Debug, Error)]
pub enum ToolError {
    /// No tool is registered under the requested name.
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// A field the tool declares as required was absent, null, or empty.
    #[error("Missing required argument: {0}")]
    MissingArgument(String),

    /// A tool with the same name is already registered.
    #[error("Tool already registered: {0}")]
    DuplicateTool(String),

    /// The tool result could not be serialized.
    #[error("Failed to serialize tool result: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The executor panicked.
    #[error("Internal error while executing tool {0}")]
    Panicked(String),

    /// An internal error occurred.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ToolError {
    /// Create a new "unknown tool" error.
    pub fn unknown_tool(name: impl Into<String>) -> Self {
        Self::UnknownTool(name.into())
    }

    /// Create a new "missing argument" error.
    pub fn missing_argument(field: impl Into<String>) -> Self {
        Self::MissingArgument(field.into())
    }

    /// Create a new "internal" error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ToolError::unknown_tool("nope").to_string(),
            "Unknown tool: nope"
        );
        assert_eq!(
            ToolError::missing_argument("bpId").to_string(),
            "Missing required argument: bpId"
        );
        assert_eq!(
            ToolError::Panicked("say_hello".into()).to_string(),
            "Internal error while executing tool say_hello"
        );
    }
}
