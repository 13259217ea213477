//! Schema fragments and the provider-agnostic intermediate schema.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A JSON Schema primitive type name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonType {
    Integer,
    Number,
    String,
    Boolean,
    Null,
    Array,
    Object,
}

/// The `type` keyword: a single type, or the flattened member types of a union.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SchemaType {
    Single(JsonType),
    Union(Vec<JsonType>),
}

impl SchemaType {
    /// Member types in order; a single type yields one entry.
    pub fn types(&self) -> &[JsonType] {
        match self {
            Self::Single(t) => std::slice::from_ref(t),
            Self::Union(ts) => ts,
        }
    }
}

/// The `additionalProperties` keyword.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AdditionalProperties {
    Allowed(bool),
    Schema(Box<ParameterSchema>),
}

/// A JSON Schema fragment describing one parameter (or a nested value).
///
/// The default value is the unconstrained fragment `{}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParameterSchema {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<SchemaType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<ParameterSchema>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<IndexMap<String, ParameterSchema>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,

    #[serde(
        rename = "additionalProperties",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub additional_properties: Option<AdditionalProperties>,

    #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<Value>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
}

impl ParameterSchema {
    /// The unconstrained fragment `{}`.
    pub fn any() -> Self {
        Self::default()
    }

    /// A fragment carrying only a single `type`.
    pub fn of(ty: JsonType) -> Self {
        Self {
            kind: Some(SchemaType::Single(ty)),
            ..Self::default()
        }
    }

    /// `{type: array, items}`
    pub fn array(items: Self) -> Self {
        Self {
            items: Some(Box::new(items)),
            ..Self::of(JsonType::Array)
        }
    }

    /// `{type: object, additionalProperties: values}`
    pub fn map(values: Self) -> Self {
        Self {
            additional_properties: Some(AdditionalProperties::Schema(Box::new(values))),
            ..Self::of(JsonType::Object)
        }
    }

    /// True for the unconstrained fragment `{}`.
    pub fn is_any(&self) -> bool {
        *self == Self::default()
    }

    /// Serialize into a JSON value.
    pub fn to_value(&self) -> Value {
        // Every field is a plain JSON value or a string-keyed map, so this cannot fail.
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

/// Provider-agnostic representation of a compiled callable.
///
/// Built once per compilation and never mutated by renderers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntermediateSchema {
    /// The callable's declared name.
    pub name: String,
    /// Trimmed description text, or empty.
    pub description: String,
    /// Parameter fragments keyed by name, in signature order.
    pub parameters: IndexMap<String, ParameterSchema>,
    /// Parameters without defaults, in signature order.
    pub required: Vec<String>,
}

impl IntermediateSchema {
    /// The `{type: object, properties, required}` body shared by the built-in providers.
    pub fn parameters_object(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": self.properties_value(),
            "required": self.required,
        })
    }

    /// The parameter fragments as a JSON object, in signature order.
    pub fn properties_value(&self) -> Value {
        Value::Object(
            self.parameters
                .iter()
                .map(|(name, schema)| (name.clone(), schema.to_value()))
                .collect(),
        )
    }
}
