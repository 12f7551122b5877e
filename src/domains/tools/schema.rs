//! Declarative tool contracts.
//!
//! A [`ToolDefinition`] is what clients see in `tools/list`: a name, a
//! description and a JSON-Schema shaped input contract. The contract is
//! advertised only. Executors extract their own arguments.

use std::sync::Arc;

use rmcp::model::{JsonObject, Tool};
use serde_json::{Value, json};

/// A node in an input contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaNode {
    /// A nested object.
    Object(ObjectSchema),

    /// A string leaf, with an optional description for clients.
    String { description: Option<String> },
}

impl SchemaNode {
    /// A described string leaf.
    pub fn string(description: impl Into<String>) -> Self {
        Self::String {
            description: Some(description.into()),
        }
    }

    /// Render as a JSON Schema fragment.
    pub fn to_json(&self) -> Value {
        match self {
            Self::Object(object) => Value::Object(object.to_json_object()),
            Self::String { description: None } => json!({ "type": "string" }),
            Self::String {
                description: Some(description),
            } => json!({ "type": "string", "description": description }),
        }
    }
}

/// An object schema: named properties plus the set of required ones.
///
/// Properties keep declaration order, which is the order clients see.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjectSchema {
    properties: Vec<(String, SchemaNode)>,
    required: Vec<String>,
}

impl ObjectSchema {
    /// An object with no properties.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a required property.
    pub fn required(mut self, name: impl Into<String>, node: SchemaNode) -> Self {
        let name = name.into();
        if !self.required.contains(&name) {
            self.required.push(name.clone());
        }
        self.insert(name, node);
        self
    }

    /// Add an optional property.
    pub fn optional(mut self, name: impl Into<String>, node: SchemaNode) -> Self {
        self.insert(name.into(), node);
        self
    }

    /// Redeclaring a property replaces it in place.
    fn insert(&mut self, name: String, node: SchemaNode) {
        match self.properties.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = node,
            None => self.properties.push((name, node)),
        }
    }

    pub fn properties(&self) -> &[(String, SchemaNode)] {
        &self.properties
    }

    /// Property names in declaration order.
    pub fn property_names(&self) -> Vec<&str> {
        self.properties.iter().map(|(name, _)| name.as_str()).collect()
    }

    pub fn required_fields(&self) -> &[String] {
        &self.required
    }

    pub fn is_required(&self, name: &str) -> bool {
        self.required.iter().any(|r| r == name)
    }

    /// Render as `{type, properties, required}`.
    ///
    /// `required` is omitted when nothing is required.
    pub fn to_json_object(&self) -> JsonObject {
        let properties: JsonObject = self
            .properties
            .iter()
            .map(|(name, node)| (name.clone(), node.to_json()))
            .collect();

        let mut object = JsonObject::new();
        object.insert("type".to_string(), json!("object"));
        object.insert("properties".to_string(), Value::Object(properties));
        if !self.required.is_empty() {
            object.insert("required".to_string(), json!(self.required));
        }
        object
    }
}

/// The advertised contract of one tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolDefinition {
    /// Unique tool name, the key clients call by.
    pub name: &'static str,

    /// Human-readable description shown to clients.
    pub description: &'static str,

    /// Shape of the accepted arguments.
    pub input_contract: ObjectSchema,
}

impl ToolDefinition {
    /// Convert to the rmcp `Tool` model.
    pub fn to_tool(&self) -> Tool {
        Tool::new(
            self.name,
            self.description,
            Arc::new(self.input_contract.to_json_object()),
        )
    }
}
