//! SAP MCP Server Library
//!
//! A Model Context Protocol server advertising four tools to a calling agent:
//! a greeting, the server time, and lookup/search over a small in-memory set
//! of SAP Business Partners.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the rmcp server handler and transports
//! - **domains**: business logic organized by bounded contexts
//!   - **partners**: the read-only business partner dataset
//!   - **tools**: tool contracts, argument normalization, registry and dispatcher
//!
//! # Example
//!
//! ```rust,no_run
//! use sap_mcp_server::core::{Config, McpServer};
//! use serde_json::json;
//!
//! let server = McpServer::new(Config::default())?;
//! let arguments = json!({ "country": "IN" }).as_object().cloned().unwrap_or_default();
//! let result = server.dispatch("search_business_partners", arguments);
//! assert_eq!(result.content.len(), 1);
//! # Ok::<(), sap_mcp_server::Error>(())
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
