//! Tool Dispatcher - routes a tool call to its executor.
//!
//! The dispatcher is the last line of defense: whatever happens inside an
//! executor, the caller gets exactly one `CallToolResult` with a single text
//! block. Faults are not flagged in the envelope; they only show up in the
//! text and in the logs.

use std::collections::HashMap;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use rmcp::model::{CallToolResult, Content, JsonObject};
use tracing::{error, info, instrument, warn};

use super::definitions::ToolExecutor;
use super::error::ToolError;
use super::registry::ToolRegistry;

/// An incoming tool invocation.
#[derive(Debug, Clone, Default)]
pub struct ToolCall {
    /// Name of the tool to invoke.
    pub name: String,

    /// Raw, not yet normalized arguments.
    pub arguments: JsonObject,
}

impl ToolCall {
    pub fn new(name: impl Into<String>, arguments: JsonObject) -> Self {
        Self {
            name: name.into(),
            arguments,
        }
    }

    /// Build a call from a JSON value. Non-object arguments count as none.
    pub fn from_value(name: impl Into<String>, arguments: serde_json::Value) -> Self {
        let arguments = match arguments {
            serde_json::Value::Object(map) => map,
            _ => JsonObject::new(),
        };
        Self::new(name, arguments)
    }
}

/// Flat name -> executor map built from a [`ToolRegistry`].
#[derive(Clone)]
pub struct ToolDispatcher {
    routes: HashMap<&'static str, Arc<dyn ToolExecutor>>,
}

impl ToolDispatcher {
    /// Build the routing table from the registry.
    pub fn new(registry: &ToolRegistry) -> Self {
        let routes = registry
            .executors()
            .map(|tool| (tool.name(), tool.clone()))
            .collect();

        Self { routes }
    }

    /// Whether a tool with this name can be dispatched.
    pub fn has_route(&self, name: &str) -> bool {
        self.routes.contains_key(name)
    }

    /// Execute a tool call. Never fails outward.
    #[instrument(skip_all, fields(tool = %call.name))]
    pub fn dispatch(&self, call: &ToolCall) -> CallToolResult {
        info!(
            "Tool call: {} {}",
            call.name,
            serde_json::to_string(&call.arguments).unwrap_or_default()
        );

        let Some(executor) = self.routes.get(call.name.as_str()) else {
            warn!("Unknown tool requested: {}", call.name);
            return fault(ToolError::unknown_tool(&call.name));
        };

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| executor.execute(&call.arguments)));

        match outcome {
            Ok(Ok(text)) => text_result(text),
            Ok(Err(e)) => {
                warn!("Tool {} failed: {}", call.name, e);
                fault(e)
            }
            Err(_) => {
                error!("Tool {} panicked", call.name);
                fault(ToolError::Panicked(call.name.clone()))
            }
        }
    }
}

impl std::fmt::Debug for ToolDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<_> = self.routes.keys().collect();
        names.sort();
        f.debug_struct("ToolDispatcher")
            .field("routes", &names)
            .finish()
    }
}

/// Wrap text as the single content block of a result.
fn text_result(text: impl Into<String>) -> CallToolResult {
    CallToolResult::success(vec![Content::text(text)])
}

/// Render an error with the same envelope as any other result.
fn fault(err: ToolError) -> CallToolResult {
    text_result(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::partners::{BusinessPartner, Dataset};
    use crate::domains::tools::error::ToolResult;
    use crate::domains::tools::schema::ObjectSchema;
    use rmcp::model::RawContent;
    use serde_json::json;
    use std::io::Write;
    use std::sync::Mutex;

    /// Log sink shared between the subscriber and the test.
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn capture_logs(f: impl FnOnce()) -> String {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, f);

        let bytes = logs.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    struct PanickingTool;

    impl ToolExecutor for PanickingTool {
        fn name(&self) -> &'static str {
            "explode"
        }

        fn description(&self) -> &'static str {
            "Always panics"
        }

        fn input_contract(&self) -> ObjectSchema {
            ObjectSchema::new()
        }

        fn execute(&self, _arguments: &JsonObject) -> ToolResult<String> {
            panic!("boom")
        }
    }

    fn dispatcher() -> ToolDispatcher {
        let registry = ToolRegistry::standard(Arc::new(Dataset::seeded())).unwrap();
        ToolDispatcher::new(&registry)
    }

    fn call(name: &str, arguments: serde_json::Value) -> ToolCall {
        ToolCall::from_value(name, arguments)
    }

    fn text_of(result: &CallToolResult) -> &str {
        assert_eq!(result.content.len(), 1);
        match &result.content[0].raw {
            RawContent::Text(text) => &text.text,
            _ => panic!("Expected text content"),
        }
    }

    #[test]
    fn test_routes_match_registry() {
        let dispatcher = dispatcher();
        for name in [
            "say_hello",
            "get_system_time",
            "get_business_partner",
            "search_business_partners",
        ] {
            assert!(dispatcher.has_route(name));
        }
        assert!(!dispatcher.has_route("unknown"));
    }

    #[test]
    fn test_unknown_tool() {
        for name in ["unknown", "", "SAY_HELLO"] {
            let result = dispatcher().dispatch(&call(name, json!({})));
            assert_eq!(text_of(&result), format!("Unknown tool: {}", name));
            assert_ne!(result.is_error, Some(true));
        }
    }

    #[test]
    fn test_dispatch_say_hello() {
        let result = dispatcher().dispatch(&call("say_hello", json!({ "name": "Ada" })));
        assert_eq!(text_of(&result), "Hello Ada, MCP server is working!");
        assert_ne!(result.is_error, Some(true));
    }

    #[test]
    fn test_dispatch_missing_required_argument() {
        let result = dispatcher().dispatch(&call("say_hello", json!({})));
        assert_eq!(text_of(&result), "Missing required argument: name");
        assert_ne!(result.is_error, Some(true));

        let result = dispatcher().dispatch(&call("get_business_partner", json!({ "bpId": null })));
        assert_eq!(text_of(&result), "Missing required argument: bpId");
    }

    #[test]
    fn test_dispatch_system_time() {
        let result = dispatcher().dispatch(&call("get_system_time", json!({})));
        assert!(text_of(&result).starts_with("Server time is "));
    }

    #[test]
    fn test_dispatch_lookup() {
        let result = dispatcher().dispatch(&call("get_business_partner", json!({ "bpId": "1000001" })));
        let bp: BusinessPartner = serde_json::from_str(text_of(&result)).unwrap();
        assert_eq!(bp.country, "IN");
        assert_eq!(bp.city, "Bengaluru");

        let result = dispatcher().dispatch(&call("get_business_partner", json!({ "bpId": "9999999" })));
        assert_eq!(text_of(&result), "Business Partner with ID 9999999 not found");
        assert_ne!(result.is_error, Some(true));
    }

    #[test]
    fn test_dispatch_search() {
        let result = dispatcher().dispatch(&call("search_business_partners", json!({ "country": "US" })));
        assert_eq!(text_of(&result), "[]");
        assert_ne!(result.is_error, Some(true));

        let result = dispatcher().dispatch(&call(
            "search_business_partners",
            json!({ "country": { "value": "IN" }, "city": "Mumbai" }),
        ));
        let found: Vec<BusinessPartner> = serde_json::from_str(text_of(&result)).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Globex India Ltd");
    }

    #[test]
    fn test_panicking_tool_is_contained() {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(PanickingTool)).unwrap();
        let dispatcher = ToolDispatcher::new(&registry);

        let result = dispatcher.dispatch(&call("explode", json!({})));
        assert_eq!(text_of(&result), "Internal error while executing tool explode");
        assert_ne!(result.is_error, Some(true));
    }

    #[test]
    fn test_non_object_arguments_are_ignored() {
        let result = dispatcher().dispatch(&call("search_business_partners", json!("IN")));
        let found: Vec<BusinessPartner> = serde_json::from_str(text_of(&result)).unwrap();
        assert_eq!(found.len(), 3);
    }

    #[test]
    fn test_faults_share_the_success_envelope() {
        let unknown = dispatcher().dispatch(&call("nope", json!({})));
        let empty = dispatcher().dispatch(&call("search_business_partners", json!({ "country": "US" })));

        let unknown = serde_json::to_value(&unknown).unwrap();
        let empty = serde_json::to_value(&empty).unwrap();

        assert_eq!(unknown["content"][0]["text"], "Unknown tool: nope");
        assert_eq!(unknown.get("isError"), empty.get("isError"));
        assert_ne!(unknown.get("isError"), Some(&json!(true)));
    }

    #[test]
    fn test_lookup_miss_is_logged() {
        let logs = capture_logs(|| {
            dispatcher().dispatch(&call("get_business_partner", json!({ "bpId": "9999999" })));
        });

        let request_line = logs
            .lines()
            .find(|line| line.contains("Tool call:"))
            .expect("request line should be logged");
        assert!(request_line.contains("get_business_partner"));
        assert!(request_line.contains("9999999"));

        assert!(logs.lines().any(|line| line.contains("WARN") && line.contains("BP not found: 9999999")));
    }

    #[test]
    fn test_unknown_tool_request_is_logged() {
        let logs = capture_logs(|| {
            dispatcher().dispatch(&call("nope", json!({ "x": 1 })));
        });

        let request_line = logs
            .lines()
            .find(|line| line.contains("Tool call:"))
            .expect("request line should be logged");
        assert!(request_line.contains("nope"));
        assert!(request_line.contains(r#"{"x":1}"#));
        assert!(logs.contains("Unknown tool requested: nope"));
    }
}
