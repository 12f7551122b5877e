//! Business partner search tool definition.

use std::sync::Arc;

use rmcp::model::JsonObject;
use tracing::{debug, instrument};

use super::super::ToolExecutor;
use crate::domains::partners::{Dataset, PartnerFilter};
use crate::domains::tools::arguments::optional_arg;
use crate::domains::tools::error::ToolResult;
use crate::domains::tools::schema::{ObjectSchema, SchemaNode};

/// Search tool - lists business partners matching optional filters.
///
/// An empty match set is a normal result, serialized as `[]`.
#[derive(Debug, Clone)]
pub struct SearchBusinessPartnersTool {
    dataset: Arc<Dataset>,
}

impl SearchBusinessPartnersTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "search_business_partners";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Search SAP Business Partners with optional filters";

    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self { dataset }
    }

    /// Build the dataset filter from raw arguments.
    pub fn filter_from(arguments: &JsonObject) -> PartnerFilter {
        PartnerFilter {
            country: optional_arg(arguments, "country"),
            city: optional_arg(arguments, "city"),
        }
    }
}

impl ToolExecutor for SearchBusinessPartnersTool {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn description(&self) -> &'static str {
        Self::DESCRIPTION
    }

    fn input_contract(&self) -> ObjectSchema {
        ObjectSchema::new()
            .optional("country", SchemaNode::string("Filter by country (optional)"))
            .optional("city", SchemaNode::string("Filter by city (optional)"))
    }

    #[instrument(skip_all)]
    fn execute(&self, arguments: &JsonObject) -> ToolResult<String> {
        let filter = Self::filter_from(arguments);
        let results = self.dataset.search(&filter);

        debug!(?filter, matches = results.len(), "Business partner search");

        Ok(serde_json::to_string_pretty(&results)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::partners::BusinessPartner;
    use serde_json::json;

    fn search(value: serde_json::Value) -> Vec<BusinessPartner> {
        let tool = SearchBusinessPartnersTool::new(Arc::new(Dataset::seeded()));
        let arguments = value.as_object().cloned().unwrap_or_default();
        let text = tool.execute(&arguments).unwrap();
        serde_json::from_str(&text).unwrap()
    }

    #[test]
    fn test_search_by_country() {
        let results = search(json!({ "country": "IN" }));
        assert_eq!(results.len(), 3);
    }

    #[test]
    fn test_search_by_country_and_city() {
        let results = search(json!({ "country": "IN", "city": "Mumbai" }));
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Globex India Ltd");
    }

    #[test]
    fn test_search_wrapped_filters() {
        let results = search(json!({ "country": { "value": "IN" }, "city": { "value": "Pune" } }));
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "1000003");
    }

    #[test]
    fn test_search_without_filters() {
        assert_eq!(search(json!({})).len(), 3);
        assert_eq!(search(json!({ "country": "", "city": null })).len(), 3);
    }

    #[test]
    fn test_search_no_match_is_empty_list() {
        let tool = SearchBusinessPartnersTool::new(Arc::new(Dataset::seeded()));
        let arguments = json!({ "country": "US" }).as_object().cloned().unwrap();
        assert_eq!(tool.execute(&arguments).unwrap(), "[]");
    }

    #[test]
    fn test_filter_from_arguments() {
        let arguments = json!({ "country": "IN" }).as_object().cloned().unwrap();
        let filter = SearchBusinessPartnersTool::filter_from(&arguments);
        assert_eq!(filter.country.as_deref(), Some("IN"));
        assert_eq!(filter.city, None);
    }
}
