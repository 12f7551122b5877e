//! MCP Server implementation and lifecycle management.
//!
//! [`McpServer`] owns the tool registry and dispatcher and implements the
//! rmcp `ServerHandler` trait on top of them. Tool calls are routed by the
//! dispatcher rather than rmcp's `ToolRouter`, so an unknown tool name comes
//! back as a text result instead of a protocol error.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, model::*, service::RequestContext,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::Config;
use super::error::Result;
use crate::domains::{
    partners::Dataset,
    tools::{ToolCall, ToolDispatcher, ToolRegistry},
};

/// The main MCP server handler.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Advertised tool catalog.
    registry: Arc<ToolRegistry>,

    /// Routes tool calls to executors.
    dispatcher: Arc<ToolDispatcher>,
}

impl McpServer {
    /// Create a new MCP server serving the seeded business partner dataset.
    pub fn new(config: Config) -> Result<Self> {
        let dataset = Arc::new(Dataset::seeded());
        let registry = ToolRegistry::standard(dataset)?;
        Ok(Self::with_registry(config, registry))
    }

    /// Create a server around an already built registry.
    pub fn with_registry(config: Config, registry: ToolRegistry) -> Self {
        let dispatcher = ToolDispatcher::new(&registry);

        Self {
            config: Arc::new(config),
            registry: Arc::new(registry),
            dispatcher: Arc::new(dispatcher),
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// The tool catalog as rmcp models, in registration order.
    pub fn tools(&self) -> Vec<Tool> {
        self.registry
            .list_tools()
            .iter()
            .map(|definition| definition.to_tool())
            .collect()
    }

    /// The tool catalog as JSON (for HTTP transport).
    pub fn tools_json(&self) -> Vec<serde_json::Value> {
        self.registry
            .list_tools()
            .iter()
            .map(|definition| {
                serde_json::json!({
                    "name": definition.name,
                    "description": definition.description,
                    "inputSchema": definition.input_contract.to_json_object()
                })
            })
            .collect()
    }

    /// Call a tool by name. Always yields a result.
    pub fn dispatch(&self, name: &str, arguments: JsonObject) -> CallToolResult {
        self.dispatcher.dispatch(&ToolCall::new(name, arguments))
    }
}

impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Demo SAP server. Use say_hello to check connectivity, get_system_time for the \
                 server clock, and get_business_partner / search_business_partners to query \
                 business partners."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListToolsResult, McpError> {
        info!("Listing tools");
        Ok(ListToolsResult {
            tools: self.tools(),
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip_all, fields(tool = %request.name))]
    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<CallToolResult, McpError> {
        let arguments = request.arguments.unwrap_or_default();
        Ok(self.dispatch(&request.name, arguments))
    }
}
