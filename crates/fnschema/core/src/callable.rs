//! Callable signatures: name, parameters and documentation.

use crate::descriptor::TypeDescriptor;
use crate::docs::Documentation;
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A declared parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Parameter {
    pub name: String,

    /// Declared type; `None` when the parameter is unannotated.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub ty: Option<TypeDescriptor>,

    /// Declared default value.
    ///
    /// `Some(Value::Null)` is a default of "no value": the parameter is not
    /// required, but no `default` keyword is emitted for it.
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<Value>")]
    pub default: Option<Value>,
}

// An explicit `null` is a declared default, not a missing one.
fn present<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Value>, D::Error> {
    Value::deserialize(d).map(Some)
}

impl Parameter {
    /// A required parameter of the given type.
    pub fn new(name: impl Into<String>, ty: TypeDescriptor) -> Self {
        Self {
            name: name.into(),
            ty: Some(ty),
            default: None,
        }
    }

    /// A parameter without a type annotation.
    pub fn untyped(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: None,
            default: None,
        }
    }

    /// Set the default value.
    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Whether the parameter declares any default, including "no value".
    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }
}

/// A callable as seen by the compiler.
#[derive(Debug, Clone, PartialEq)]
pub struct Callable {
    pub name: String,
    /// Parameters in declaration order.
    pub parameters: Vec<Parameter>,
    /// `None` when the callable has no documentation.
    pub documentation: Option<Documentation>,
}

impl Callable {
    /// A callable with no parameters and no documentation.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: Vec::new(),
            documentation: None,
        }
    }

    /// Append a required parameter.
    pub fn param(self, name: impl Into<String>, ty: TypeDescriptor) -> Self {
        self.parameter(Parameter::new(name, ty))
    }

    /// Append a parameter with a default value.
    pub fn param_with_default(
        self,
        name: impl Into<String>,
        ty: TypeDescriptor,
        default: impl Into<Value>,
    ) -> Self {
        self.parameter(Parameter::new(name, ty).with_default(default))
    }

    /// Append a parameter.
    pub fn parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Parse raw doc text. Blank text leaves the callable undocumented.
    pub fn doc(mut self, text: &str) -> Self {
        self.documentation = Documentation::parse(text);
        self
    }

    /// Attach already structured documentation.
    pub fn documentation(mut self, documentation: Documentation) -> Self {
        self.documentation = Some(documentation);
        self
    }
}
