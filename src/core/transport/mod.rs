//! Transport layer for the MCP server.
//!
//! The transports only move JSON-RPC messages. Every `tools/list` and
//! `tools/call` ends up in [`McpServer`](crate::core::McpServer).
//!
//! - **STDIO** (feature `stdio`, default): rmcp over stdin/stdout
//! - **TCP** (feature `tcp`): rmcp over a line-delimited TCP stream
//! - **HTTP** (feature `http`): hand-rolled JSON-RPC over axum POST

mod config;
mod error;
mod service;

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "tcp")]
pub mod tcp;

#[cfg(feature = "stdio")]
pub mod stdio;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use service::TransportService;

#[cfg(feature = "tcp")]
pub use config::TcpConfig;

#[cfg(feature = "http")]
pub use config::HttpConfig;
