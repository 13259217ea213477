use crate::descriptor::TypeDescriptor;
use crate::error::{Result, SchemaError};
use crate::schema::{JsonType, ParameterSchema};
use serde_json::Value;

pub(super) fn matches(descriptor: &TypeDescriptor) -> bool {
    matches!(descriptor, TypeDescriptor::Literal { .. })
}

fn is_scalar(value: &Value) -> bool {
    matches!(
        value,
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_)
    )
}

/// Always a string-typed enum, whatever the literal values are.
pub(super) fn resolve(descriptor: &TypeDescriptor) -> Result<ParameterSchema> {
    let TypeDescriptor::Literal { values } = descriptor else {
        return Err(SchemaError::unsupported(descriptor));
    };

    if !values.iter().all(is_scalar) {
        return Err(SchemaError::UnsupportedLiteralType(descriptor.to_string()));
    }

    Ok(ParameterSchema {
        enum_values: Some(values.clone()),
        ..ParameterSchema::of(JsonType::String)
    })
}
