//! Per-parameter processing: documentation gates, type resolution, descriptions and defaults.

use crate::callable::Parameter;
use crate::docs::Documentation;
use crate::error::{Result, SchemaError};
use crate::options::CompileOptions;
use crate::resolver::TypeRegistry;
use crate::schema::ParameterSchema;
use indexmap::IndexMap;

/// Build the fragment for every parameter not on the ignore list, in declaration order.
///
/// Documentation gates run first and report every offending parameter at
/// once. Type errors then stop at the first failing parameter.
pub fn process_parameters(
    registry: &TypeRegistry,
    parameters: &[Parameter],
    documentation: Option<&Documentation>,
    options: &CompileOptions,
) -> Result<IndexMap<String, ParameterSchema>> {
    let kept = kept_parameters(parameters, options);
    let entry = |name: &str| documentation.and_then(|d| d.param(name));

    if options.require_all_params_in_doc {
        let missing = names_where(&kept, |p| entry(&p.name).is_none());
        if !missing.is_empty() {
            return Err(SchemaError::ParameterNotDocumented(missing));
        }
    }

    if options.require_descriptions_for_params {
        let missing = names_where(&kept, |p| {
            entry(&p.name).is_some_and(|d| d.description.trim().is_empty())
        });
        if !missing.is_empty() {
            return Err(SchemaError::ParameterMissingDescription(missing));
        }
    }

    let resolve_options = options.resolve_options();
    let mut out = IndexMap::with_capacity(kept.len());
    for param in kept {
        let ty = param
            .ty
            .as_ref()
            .ok_or_else(|| SchemaError::MissingTypeAnnotation(param.name.clone()))?;

        let mut schema = match registry.resolve(ty, resolve_options) {
            // Handlers that do not look at the options still report bare generics.
            Err(SchemaError::BareGenericType(_)) if options.allow_bare_generic_types => {
                ParameterSchema::array(ParameterSchema::any())
            }
            other => other?,
        };

        if let Some(doc) = entry(&param.name)
            && !doc.description.trim().is_empty()
        {
            schema.description = Some(doc.description.clone());
        }

        if let Some(default) = &param.default
            && !default.is_null()
        {
            schema.default = Some(default.clone());
        }

        out.insert(param.name.clone(), schema);
    }

    Ok(out)
}

/// Parameters not on the ignore list, one per name.
///
/// A repeated name keeps the position of its first declaration and the
/// contents of its last.
pub(crate) fn kept_parameters<'a>(
    parameters: &'a [Parameter],
    options: &CompileOptions,
) -> Vec<&'a Parameter> {
    let mut kept: IndexMap<&str, &Parameter> = IndexMap::with_capacity(parameters.len());
    for param in parameters.iter().filter(|p| !options.is_ignored(&p.name)) {
        kept.insert(param.name.as_str(), param);
    }
    kept.into_values().collect()
}

fn names_where(params: &[&Parameter], pred: impl Fn(&Parameter) -> bool) -> Vec<String> {
    params
        .iter()
        .filter(|p| pred(p))
        .map(|p| p.name.clone())
        .collect()
}
