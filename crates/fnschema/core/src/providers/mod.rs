//! Provider-specific schema renderers.
//!
//! Each provider has slightly different requirements for tool schemas:
//! - OpenAI: `{"type": "function", "function": {...}}`
//! - Anthropic: Direct object with `input_schema` field
//!
//! More providers can be registered by name on a [`ProviderRegistry`].

pub mod anthropic;
pub mod openai;

pub use anthropic::AnthropicProvider;
pub use openai::OpenAiProvider;

use crate::error::{Result, SchemaError};
use crate::schema::IntermediateSchema;
use indexmap::IndexMap;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

/// A wire format for one LLM provider.
pub trait SchemaProvider: Send + Sync {
    /// Render the intermediate schema into the provider's tool definition.
    fn render(&self, schema: &IntermediateSchema) -> Value;

    /// Wrap a rendered tool definition into request parameters for a call.
    fn invocation_parameters(&self, wire: &Value) -> Result<Value>;
}

/// Providers keyed by lowercase name, in registration order.
#[derive(Clone)]
pub struct ProviderRegistry {
    providers: IndexMap<String, Arc<dyn SchemaProvider>>,
}

impl Default for ProviderRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry
            .register("openai", OpenAiProvider)
            .register("anthropic", AnthropicProvider);
        registry
    }
}

impl ProviderRegistry {
    /// A registry with the built-in providers.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with no providers.
    pub fn empty() -> Self {
        Self {
            providers: IndexMap::new(),
        }
    }

    /// Register a provider. An existing provider with the same name is replaced.
    pub fn register(
        &mut self,
        name: impl AsRef<str>,
        provider: impl SchemaProvider + 'static,
    ) -> &mut Self {
        let name = name.as_ref().to_lowercase();
        if self.providers.contains_key(&name) {
            warn!(provider = %name, "replacing registered provider");
        }
        self.providers.insert(name, Arc::new(provider));
        self
    }

    /// Look up a provider by name, ignoring case.
    pub fn get(&self, name: &str) -> Option<&Arc<dyn SchemaProvider>> {
        self.providers.get(&name.to_lowercase())
    }

    /// Registered names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.providers.keys().map(String::as_str)
    }

    /// Render a schema for the named provider.
    pub fn render(&self, name: &str, schema: &IntermediateSchema) -> Result<Value> {
        let provider = self.lookup(name)?;
        debug!(provider = %name, function = %schema.name, "rendering schema");
        Ok(provider.render(schema))
    }

    /// Invocation parameters for an already rendered tool definition.
    pub fn invocation_parameters(&self, name: &str, wire: &Value) -> Result<Value> {
        self.lookup(name)?.invocation_parameters(wire)
    }

    fn lookup(&self, name: &str) -> Result<&Arc<dyn SchemaProvider>> {
        self.get(name)
            .ok_or_else(|| SchemaError::UnknownProvider(name.to_string()))
    }
}

impl std::fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderRegistry")
            .field("providers", &self.providers.keys().collect::<Vec<_>>())
            .finish()
    }
}
