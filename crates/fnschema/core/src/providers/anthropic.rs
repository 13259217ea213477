//! Anthropic tool schema renderer.

use super::SchemaProvider;
use crate::error::Result;
use crate::schema::IntermediateSchema;
use serde_json::{Value, json};

/// Renders tools as Anthropic tool definitions.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnthropicProvider;

/// Render a schema as an Anthropic tool definition.
///
/// Output format:
/// ```json
/// {
///   "name": "...",
///   "description": "...",
///   "input_schema": { "type": "object", "properties": {...}, "required": [...] }
/// }
/// ```
pub fn render_tool(schema: &IntermediateSchema) -> Value {
    json!({
        "name": schema.name,
        "description": schema.description,
        "input_schema": schema.parameters_object()
    })
}

impl SchemaProvider for AnthropicProvider {
    fn render(&self, schema: &IntermediateSchema) -> Value {
        render_tool(schema)
    }

    fn invocation_parameters(&self, wire: &Value) -> Result<Value> {
        Ok(json!({ "tools": [wire] }))
    }
}
