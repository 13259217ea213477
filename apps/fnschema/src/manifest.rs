//! Function manifests: callables described in a JSON or TOML file.
//!
//! ```toml
//! [options]
//! ignore_args = ["ctx"]
//!
//! [[functions]]
//! name = "get_current_weather"
//! doc = """
//! Get the current weather
//!
//! :param location: The city and state
//! """
//! parameters = [{ name = "location", type = { kind = "string" } }]
//! options = { require_short_description = false }
//! ```

use anyhow::{Context, Result};
use fnschema_core::{Callable, CompileOptions, IntermediateSchema, Parameter, TypeRegistry};
use schemars::{JsonSchema, Schema, generate::SchemaSettings};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;
use tracing::debug;

/// A set of functions compiled with shared options.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Manifest {
    /// Options applied to every function.
    pub options: CompileOptions,

    /// Functions in output order.
    pub functions: Vec<FunctionEntry>,
}

/// One callable in a manifest.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct FunctionEntry {
    pub name: String,

    /// Raw doc text in reST, Google or NumPy style.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,

    #[serde(default)]
    pub parameters: Vec<Parameter>,

    /// Partial options merged over the manifest options (RFC 7396 merge patch).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Value>,
}

impl Manifest {
    /// Load a manifest, choosing the format by file extension.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read manifest {}", path.display()))?;

        let is_toml = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

        let manifest = if is_toml {
            Self::from_toml(&raw)
        } else {
            Self::from_json(&raw)
        }
        .with_context(|| format!("Invalid manifest {}", path.display()))?;

        debug!(
            path = %path.display(),
            functions = manifest.functions.len(),
            "loaded manifest"
        );
        Ok(manifest)
    }

    /// Parse JSON; errors name the offending field path.
    pub fn from_json(raw: &str) -> Result<Self> {
        let mut de = serde_json::Deserializer::from_str(raw);
        let manifest = serde_path_to_error::deserialize(&mut de)?;
        de.end()?;
        Ok(manifest)
    }

    /// Parse TOML; errors name the offending field path.
    pub fn from_toml(raw: &str) -> Result<Self> {
        let de = toml::Deserializer::new(raw);
        Ok(serde_path_to_error::deserialize(de)?)
    }
}

impl FunctionEntry {
    /// The callable this entry describes.
    pub fn callable(&self) -> Callable {
        let callable = self
            .parameters
            .iter()
            .cloned()
            .fold(Callable::new(&self.name), Callable::parameter);
        match &self.doc {
            Some(text) => callable.doc(text),
            None => callable,
        }
    }

    /// Manifest options with this entry's overrides applied.
    pub fn options(&self, base: &CompileOptions) -> Result<CompileOptions> {
        let Some(patch) = &self.options else {
            return Ok(base.clone());
        };

        let mut merged = serde_json::to_value(base)?;
        json_patch::merge(&mut merged, patch);
        serde_path_to_error::deserialize(merged)
            .with_context(|| format!("Invalid options for function {}", self.name))
    }

    /// Compile this entry.
    pub fn compile(
        &self,
        registry: &TypeRegistry,
        base: &CompileOptions,
    ) -> Result<IntermediateSchema> {
        let options = self.options(base)?;
        Ok(fnschema_core::compile(registry, &self.callable(), &options)?)
    }
}

/// JSON Schema for the manifest format.
pub fn schema() -> Schema {
    SchemaSettings::default()
        .into_generator()
        .into_root_schema_for::<Manifest>()
}

/// The manifest JSON Schema as a pretty-printed string.
pub fn schema_json_pretty() -> Result<String> {
    Ok(serde_json::to_string_pretty(&schema())?)
}
