use super::ResolveContext;
use crate::descriptor::TypeDescriptor;
use crate::error::{Result, SchemaError};
use crate::schema::{AdditionalProperties, JsonType, ParameterSchema};
use indexmap::IndexMap;

pub(super) fn matches(descriptor: &TypeDescriptor) -> bool {
    matches!(descriptor, TypeDescriptor::Record(_))
}

/// Closed object: every declared field, non-optional ones required, nothing else allowed.
pub(super) fn resolve(
    descriptor: &TypeDescriptor,
    cx: &ResolveContext<'_>,
) -> Result<ParameterSchema> {
    let TypeDescriptor::Record(record) = descriptor else {
        return Err(SchemaError::unsupported(descriptor));
    };

    let mut properties = IndexMap::with_capacity(record.fields.len());
    let mut required = Vec::new();
    for field in &record.fields {
        properties.insert(field.name.clone(), cx.resolve(&field.ty)?);
        if !field.optional {
            required.push(field.name.clone());
        }
    }

    Ok(ParameterSchema {
        properties: Some(properties),
        required: Some(required),
        additional_properties: Some(AdditionalProperties::Allowed(false)),
        ..ParameterSchema::of(JsonType::Object)
    })
}
