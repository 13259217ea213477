//! OpenAI function calling schema renderer.

use super::SchemaProvider;
use crate::error::{Result, SchemaError};
use crate::schema::IntermediateSchema;
use serde_json::{Value, json};

/// Renders tools as OpenAI function definitions.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenAiProvider;

/// Render a schema as an OpenAI function definition.
///
/// Output format:
/// ```json
/// {
///   "type": "function",
///   "function": {
///     "name": "...",
///     "description": "...",
///     "parameters": { "type": "object", "properties": {...}, "required": [...] }
///   }
/// }
/// ```
pub fn render_function(schema: &IntermediateSchema) -> Value {
    json!({
        "type": "function",
        "function": {
            "name": schema.name,
            "description": schema.description,
            "parameters": schema.parameters_object()
        }
    })
}

/// Request parameters that force the model to call the rendered function.
pub fn tool_choice(wire: &Value) -> Result<Value> {
    let name = wire
        .pointer("/function/name")
        .and_then(Value::as_str)
        .ok_or_else(|| SchemaError::invalid_wire("OpenAI tool definition has no function.name"))?;

    Ok(json!({
        "tools": [wire],
        "tool_choice": {
            "type": "function",
            "function": {"name": name}
        }
    }))
}

impl SchemaProvider for OpenAiProvider {
    fn render(&self, schema: &IntermediateSchema) -> Value {
        render_function(schema)
    }

    fn invocation_parameters(&self, wire: &Value) -> Result<Value> {
        tool_choice(wire)
    }
}
