//! Tool definitions module.
//!
//! One file per tool. Every tool implements [`ToolExecutor`], which carries
//! both its advertised contract and its execution logic.
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` implementing `ToolExecutor`
//! 2. Export it here
//! 3. Register it in `ToolRegistry::standard()`

pub mod bp;
pub mod system;

pub use bp::{GetBusinessPartnerTool, SearchBusinessPartnersTool};
pub use system::{SayHelloTool, SystemTimeTool};

use rmcp::model::JsonObject;

use super::error::ToolResult;
use super::schema::{ObjectSchema, ToolDefinition};

/// A tool that can be listed and executed.
///
/// Executors are synchronous and side-effect free apart from logging.
/// A returned error becomes a text fault block in the dispatcher.
pub trait ToolExecutor: Send + Sync {
    /// Tool name as registered in MCP.
    fn name(&self) -> &'static str;

    /// Tool description shown to clients.
    fn description(&self) -> &'static str;

    /// Advertised input contract.
    fn input_contract(&self) -> ObjectSchema;

    /// Run the tool and produce its result text.
    fn execute(&self, arguments: &JsonObject) -> ToolResult<String>;

    /// The full advertised definition.
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: self.name(),
            description: self.description(),
            input_contract: self.input_contract(),
        }
    }
}
