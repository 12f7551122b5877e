//! Greeting tool definition.
//!
//! A connectivity check: echoes a greeting back to the caller.

use rmcp::model::JsonObject;
use tracing::debug;

use super::super::ToolExecutor;
use crate::domains::tools::arguments::required_arg;
use crate::domains::tools::error::ToolResult;
use crate::domains::tools::schema::{ObjectSchema, SchemaNode};

/// Greeting tool - says hello to a named person.
#[derive(Debug, Clone, Default)]
pub struct SayHelloTool;

impl SayHelloTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "say_hello";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Say hello to person";

    pub fn new() -> Self {
        Self
    }

    /// Build the greeting text.
    pub fn greet(name: &str) -> String {
        format!("Hello {}, MCP server is working!", name)
    }
}

impl ToolExecutor for SayHelloTool {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn description(&self) -> &'static str {
        Self::DESCRIPTION
    }

    fn input_contract(&self) -> ObjectSchema {
        ObjectSchema::new().required("name", SchemaNode::string("Name of the person to greet"))
    }

    fn execute(&self, arguments: &JsonObject) -> ToolResult<String> {
        let name = required_arg(arguments, "name")?;
        debug!("Greeting {}", name);
        Ok(Self::greet(&name))
    }
}
