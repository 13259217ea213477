use super::ResolveContext;
use crate::descriptor::TypeDescriptor;
use crate::error::{Result, SchemaError};
use crate::schema::{JsonType, ParameterSchema, SchemaType};

pub(super) fn matches(descriptor: &TypeDescriptor) -> bool {
    matches!(descriptor, TypeDescriptor::Union { .. })
}

/// Flattens members into a list of types.
///
/// Only the item schema of an array member survives. With several array
/// members the last one processed wins; their item types are not merged.
pub(super) fn resolve(
    descriptor: &TypeDescriptor,
    cx: &ResolveContext<'_>,
) -> Result<ParameterSchema> {
    let TypeDescriptor::Union { members } = descriptor else {
        return Err(SchemaError::unsupported(descriptor));
    };
    if members.is_empty() {
        return Err(SchemaError::unsupported("union without members"));
    }

    let mut kinds = Vec::with_capacity(members.len());
    let mut items = None;
    for member in members {
        let resolved = cx.resolve(member)?;
        let Some(kind) = resolved.kind else {
            return Err(SchemaError::unsupported(format!(
                "union member {member} has no concrete type"
            )));
        };
        if kind.types().contains(&JsonType::Array) {
            items = resolved.items;
        }
        kinds.extend_from_slice(kind.types());
    }

    Ok(ParameterSchema {
        kind: Some(SchemaType::Union(kinds)),
        items,
        ..ParameterSchema::default()
    })
}
