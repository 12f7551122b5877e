//! Tool Registry - the immutable catalog of advertised tools.
//!
//! Built once at startup, then shared read-only. Registration order is the
//! order clients see in `tools/list`.

use std::sync::Arc;

use tracing::debug;

use super::definitions::{
    GetBusinessPartnerTool, SayHelloTool, SearchBusinessPartnersTool, SystemTimeTool,
    ToolExecutor,
};
use super::error::{ToolError, ToolResult};
use super::schema::ToolDefinition;
use crate::domains::partners::Dataset;

/// Ordered set of uniquely named tools.
#[derive(Clone, Default)]
pub struct ToolRegistry {
    tools: Vec<Arc<dyn ToolExecutor>>,
}

impl ToolRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard catalog: greeting, time, single lookup, search.
    pub fn standard(dataset: Arc<Dataset>) -> ToolResult<Self> {
        let mut registry = Self::new();
        registry.register(Arc::new(SayHelloTool::new()))?;
        registry.register(Arc::new(SystemTimeTool::new()))?;
        registry.register(Arc::new(GetBusinessPartnerTool::new(dataset.clone())))?;
        registry.register(Arc::new(SearchBusinessPartnersTool::new(dataset)))?;
        Ok(registry)
    }

    /// Append a tool. Names must be unique.
    pub fn register(&mut self, tool: Arc<dyn ToolExecutor>) -> ToolResult<()> {
        let name = tool.name();
        if self.contains(name) {
            return Err(ToolError::DuplicateTool(name.to_string()));
        }

        debug!("Registered tool: {}", name);
        self.tools.push(tool);
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tools.iter().any(|t| t.name() == name)
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// All tool names, in registration order.
    pub fn tool_names(&self) -> Vec<&'static str> {
        self.tools.iter().map(|t| t.name()).collect()
    }

    /// All tool definitions, in registration order.
    pub fn list_tools(&self) -> Vec<ToolDefinition> {
        self.tools.iter().map(|t| t.definition()).collect()
    }

    /// The registered executors, in registration order.
    pub fn executors(&self) -> impl Iterator<Item = &Arc<dyn ToolExecutor>> {
        self.tools.iter()
    }
}

impl std::fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolRegistry")
            .field("tools", &self.tool_names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standard() -> ToolRegistry {
        ToolRegistry::standard(Arc::new(Dataset::seeded())).unwrap()
    }

    #[test]
    fn test_registry_tool_names() {
        let registry = standard();
        assert_eq!(registry.len(), 4);
        assert_eq!(
            registry.tool_names(),
            vec![
                "say_hello",
                "get_system_time",
                "get_business_partner",
                "search_business_partners"
            ]
        );
    }

    #[test]
    fn test_list_tools_is_stable() {
        let registry = standard();
        let first = registry.list_tools();
        let second = registry.list_tools();
        assert_eq!(first, second);
    }

    #[test]
    fn test_list_tools_contracts() {
        let tools = standard().list_tools();

        assert!(tools[0].input_contract.is_required("name"));
        assert!(tools[1].input_contract.properties().is_empty());
        assert!(tools[2].input_contract.is_required("bpId"));
        assert!(tools[3].input_contract.required_fields().is_empty());
        assert_eq!(tools[3].input_contract.property_names(), vec!["country", "city"]);
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let mut registry = standard();
        let err = registry.register(Arc::new(SayHelloTool::new())).unwrap_err();
        assert!(matches!(err, ToolError::DuplicateTool(ref n) if n == "say_hello"));
        assert_eq!(registry.len(), 4);
    }

    #[test]
    fn test_empty_registry() {
        let registry = ToolRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.list_tools().is_empty());
        assert!(!registry.contains("say_hello"));
    }
}
