//! Tools domain module.
//!
//! This module handles all tool-related functionality for the MCP server.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `arguments.rs` - Normalization of loosely shaped arguments
//! - `schema.rs` - Advertised tool contracts
//! - `registry.rs` - Ordered, immutable tool catalog
//! - `dispatcher.rs` - Name -> executor routing and result wrapping
//! - `error.rs` - Tool-specific error types

pub mod arguments;
pub mod definitions;
mod dispatcher;
mod error;
mod registry;
pub mod schema;

pub use arguments::normalize;
pub use definitions::ToolExecutor;
pub use dispatcher::{ToolCall, ToolDispatcher};
pub use error::{ToolError, ToolResult};
pub use registry::ToolRegistry;
pub use schema::{ObjectSchema, SchemaNode, ToolDefinition};
