//! `fnschema compile`: print rendered schemas as pretty JSON.

use crate::manifest::Manifest;
use anyhow::{Context, Result};
use fnschema_core::{ProviderRegistry, TypeRegistry};
use serde_json::Value;
use std::path::Path;
use tracing::info;

/// What to print for each function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    /// The provider's tool definition.
    Wire,
    /// Request parameters wrapping the tool definition.
    Invocation,
    /// The provider-agnostic schema.
    Intermediate,
}

pub fn execute(path: &Path, provider: &str, output: Output) -> Result<()> {
    let manifest = Manifest::load(path)?;
    let rendered = render_all(&manifest, provider, output)?;
    println!("{}", serde_json::to_string_pretty(&rendered)?);
    Ok(())
}

/// Compile and render every function, stopping at the first failure.
pub fn render_all(manifest: &Manifest, provider: &str, output: Output) -> Result<Value> {
    let types = TypeRegistry::new();
    let providers = ProviderRegistry::new();

    let mut out = Vec::with_capacity(manifest.functions.len());
    for entry in &manifest.functions {
        let schema = entry
            .compile(&types, &manifest.options)
            .with_context(|| format!("Failed to compile {}", entry.name))?;

        let value = match output {
            Output::Intermediate => serde_json::to_value(&schema)?,
            Output::Wire => providers.render(provider, &schema)?,
            Output::Invocation => {
                let wire = providers.render(provider, &schema)?;
                providers.invocation_parameters(provider, &wire)?
            }
        };
        out.push(value);
    }

    info!(functions = out.len(), provider, "rendered manifest");
    Ok(Value::Array(out))
}
