use super::ResolveContext;
use crate::descriptor::TypeDescriptor;
use crate::error::{Result, SchemaError};
use crate::schema::ParameterSchema;

pub(super) fn matches(descriptor: &TypeDescriptor) -> bool {
    matches!(descriptor, TypeDescriptor::Mapping { .. })
}

pub(super) fn resolve(
    descriptor: &TypeDescriptor,
    cx: &ResolveContext<'_>,
) -> Result<ParameterSchema> {
    let TypeDescriptor::Mapping { args } = descriptor else {
        return Err(SchemaError::unsupported(descriptor));
    };

    match args.as_slice() {
        [] if cx.options().allow_bare_generic_types => {
            Ok(ParameterSchema::map(ParameterSchema::any()))
        }
        [] => Err(SchemaError::BareGenericType(descriptor.to_string())),
        [TypeDescriptor::String, value] => Ok(ParameterSchema::map(cx.resolve(value)?)),
        [key, _] => Err(SchemaError::unsupported(format!(
            "mapping keys must be strings, not {key}"
        ))),
        _ => Err(SchemaError::unsupported(format!(
            "{descriptor} must declare exactly a key and a value type"
        ))),
    }
}
