use crate::descriptor::TypeDescriptor;
use crate::error::{Result, SchemaError};
use crate::schema::{JsonType, ParameterSchema};

/// The fixed primitive table. Both the null type and the absence of a value map to `null`.
pub fn json_type_of(descriptor: &TypeDescriptor) -> Option<JsonType> {
    match descriptor {
        TypeDescriptor::Integer => Some(JsonType::Integer),
        TypeDescriptor::Float => Some(JsonType::Number),
        TypeDescriptor::String => Some(JsonType::String),
        TypeDescriptor::Boolean => Some(JsonType::Boolean),
        TypeDescriptor::Null | TypeDescriptor::NoneValue => Some(JsonType::Null),
        _ => None,
    }
}

pub(super) fn matches(descriptor: &TypeDescriptor) -> bool {
    json_type_of(descriptor).is_some()
}

pub(super) fn resolve(descriptor: &TypeDescriptor) -> Result<ParameterSchema> {
    json_type_of(descriptor)
        .map(ParameterSchema::of)
        .ok_or_else(|| SchemaError::unsupported(descriptor))
}
