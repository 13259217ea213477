//! Schema compilation: documentation gates, parameter processing, assembly.

use crate::callable::Callable;
use crate::error::{Result, SchemaError};
use crate::options::CompileOptions;
use crate::params::{kept_parameters, process_parameters};
use crate::resolver::TypeRegistry;
use crate::schema::IntermediateSchema;
use tracing::debug;

/// Compile a callable into its provider-agnostic schema.
///
/// Gates, in order:
/// 1. documentation must exist if any documentation option is set
/// 2. the short description must be non-empty if required
/// 3. parameter documentation gates, then per-parameter type resolution
///
/// Either the whole schema is produced or an error is returned.
pub fn compile(
    registry: &TypeRegistry,
    callable: &Callable,
    options: &CompileOptions,
) -> Result<IntermediateSchema> {
    debug!(function = %callable.name, "compiling schema");
    let docs = callable.documentation.as_ref();

    if options.requires_documentation() && docs.is_none() {
        return Err(SchemaError::NoDocstring);
    }

    if options.require_short_description
        && docs.is_none_or(|d| d.short_description.trim().is_empty())
    {
        return Err(SchemaError::NoShortDescription);
    }

    let parameters = process_parameters(registry, &callable.parameters, docs, options)?;

    let required: Vec<String> = kept_parameters(&callable.parameters, options)
        .into_iter()
        .filter(|p| !p.has_default())
        .map(|p| p.name.clone())
        .collect();

    let description = docs
        .map(|d| d.description.trim().to_string())
        .unwrap_or_default();

    debug!(
        function = %callable.name,
        parameters = parameters.len(),
        required = required.len(),
        "compiled schema"
    );

    Ok(IntermediateSchema {
        name: callable.name.clone(),
        description,
        parameters,
        required,
    })
}
