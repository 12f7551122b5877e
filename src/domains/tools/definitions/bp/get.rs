//! Business partner lookup tool definition.

use std::sync::Arc;

use rmcp::model::JsonObject;
use tracing::{instrument, warn};

use super::super::ToolExecutor;
use crate::domains::partners::Dataset;
use crate::domains::tools::arguments::required_arg;
use crate::domains::tools::error::ToolResult;
use crate::domains::tools::schema::{ObjectSchema, SchemaNode};

/// Lookup tool - fetches one business partner by ID.
///
/// A miss is not an error: the result text says the partner was not found.
#[derive(Debug, Clone)]
pub struct GetBusinessPartnerTool {
    dataset: Arc<Dataset>,
}

impl GetBusinessPartnerTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_business_partner";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get SAP Business Partner details by ID";

    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self { dataset }
    }

    /// Text returned when no partner matches.
    pub fn not_found_message(bp_id: &str) -> String {
        format!("Business Partner with ID {} not found", bp_id)
    }
}

impl ToolExecutor for GetBusinessPartnerTool {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn description(&self) -> &'static str {
        Self::DESCRIPTION
    }

    fn input_contract(&self) -> ObjectSchema {
        ObjectSchema::new().required("bpId", SchemaNode::string("Business Partner ID"))
    }

    #[instrument(skip_all)]
    fn execute(&self, arguments: &JsonObject) -> ToolResult<String> {
        let bp_id = required_arg(arguments, "bpId")?;

        match self.dataset.find(&bp_id) {
            Some(bp) => Ok(serde_json::to_string_pretty(bp)?),
            None => {
                warn!("BP not found: {}", bp_id);
                Ok(Self::not_found_message(&bp_id))
            }
        }
    }
}
