use super::ResolveContext;
use crate::descriptor::TypeDescriptor;
use crate::error::{Result, SchemaError};
use crate::schema::ParameterSchema;

/// Sequences and sets. Strings, bytes and mappings are separate descriptors
/// and never land here.
pub(super) fn matches(descriptor: &TypeDescriptor) -> bool {
    matches!(descriptor, TypeDescriptor::Sequence { .. })
}

pub(super) fn resolve(
    descriptor: &TypeDescriptor,
    cx: &ResolveContext<'_>,
) -> Result<ParameterSchema> {
    let TypeDescriptor::Sequence { args, .. } = descriptor else {
        return Err(SchemaError::unsupported(descriptor));
    };

    match args.first() {
        Some(item) => Ok(ParameterSchema::array(cx.resolve(item)?)),
        None if cx.options().allow_bare_generic_types => {
            Ok(ParameterSchema::array(ParameterSchema::any()))
        }
        None => Err(SchemaError::BareGenericType(descriptor.to_string())),
    }
}
