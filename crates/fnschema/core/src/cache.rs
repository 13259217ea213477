//! Memoized schemas, keyed by the callable's type.
//!
//! Instead of attaching metadata to a function, a marker type implements
//! [`SchemaFunction`] and the compiled schema lives in a [`SchemaCache`]
//! side table keyed by its `TypeId`. The first outcome, success or error, is
//! kept and replayed on every later lookup.

use crate::callable::Callable;
use crate::compiler::compile;
use crate::error::Result;
use crate::options::CompileOptions;
use crate::providers::ProviderRegistry;
use crate::resolver::TypeRegistry;
use crate::schema::IntermediateSchema;
use serde_json::Value;
use std::any::TypeId;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::debug;

/// A callable whose schema can be compiled on demand.
pub trait SchemaFunction: 'static {
    /// Signature and documentation.
    fn callable() -> Callable;

    /// Options used when compiling this callable.
    fn options() -> CompileOptions {
        CompileOptions::default()
    }
}

type Outcome = Result<Arc<IntermediateSchema>>;

/// Side table of compiled schemas.
#[derive(Debug, Default)]
pub struct SchemaCache {
    entries: RwLock<HashMap<TypeId, Outcome>>,
}

impl SchemaCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile `F` now so documentation errors surface at registration time.
    pub fn register<F: SchemaFunction>(&self, registry: &TypeRegistry) -> Result<()> {
        self.schema_for::<F>(registry).map(|_| ())
    }

    /// The schema for `F`, compiling it on first request.
    pub fn schema_for<F: SchemaFunction>(&self, registry: &TypeRegistry) -> Outcome {
        let key = TypeId::of::<F>();
        if let Some(hit) = self.lookup(key) {
            return hit;
        }

        let callable = F::callable();
        debug!(function = %callable.name, "schema cache miss");
        let outcome = compile(registry, &callable, &F::options()).map(Arc::new);

        // Another thread may have finished first; keep whichever outcome landed first.
        let mut entries = self
            .entries
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        entries.entry(key).or_insert(outcome).clone()
    }

    /// The cached outcome for `F`, if it was compiled already.
    pub fn get<F: SchemaFunction>(&self) -> Option<Outcome> {
        self.lookup(TypeId::of::<F>())
    }

    /// Render `F`'s schema for a provider.
    pub fn render<F: SchemaFunction>(
        &self,
        registry: &TypeRegistry,
        providers: &ProviderRegistry,
        provider: &str,
    ) -> Result<Value> {
        let schema = self.schema_for::<F>(registry)?;
        providers.render(provider, &schema)
    }

    /// Invocation parameters for `F` with a provider.
    pub fn invocation_parameters<F: SchemaFunction>(
        &self,
        registry: &TypeRegistry,
        providers: &ProviderRegistry,
        provider: &str,
    ) -> Result<Value> {
        let wire = self.render::<F>(registry, providers, provider)?;
        providers.invocation_parameters(provider, &wire)
    }

    /// Number of cached outcomes.
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether nothing has been compiled yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lookup(&self, key: TypeId) -> Option<Outcome> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::TypeDescriptor;
    use crate::error::SchemaError;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    static BUILDS: AtomicUsize = AtomicUsize::new(0);

    struct SampleFunction;

    impl SchemaFunction for SampleFunction {
        fn callable() -> Callable {
            BUILDS.fetch_add(1, Ordering::SeqCst);
            Callable::new("sample_function")
                .param("a", TypeDescriptor::Integer)
                .param_with_default("b", TypeDescriptor::String, "default")
                .doc(
                    "A sample function for testing.

                    :param a: The first parameter.
                    :param b: The second parameter, optional.
                    :return: Nothing.",
                )
        }
    }

    struct Undocumented;

    impl SchemaFunction for Undocumented {
        fn callable() -> Callable {
            Callable::new("error_function").param("a", TypeDescriptor::Integer)
        }
    }

    struct Lenient;

    impl SchemaFunction for Lenient {
        fn callable() -> Callable {
            Callable::new("lenient").param("a", TypeDescriptor::Integer)
        }

        fn options() -> CompileOptions {
            CompileOptions::lenient()
        }
    }

    #[test]
    fn test_compiles_once() {
        let cache = SchemaCache::new();
        let registry = TypeRegistry::new();

        let first = cache.schema_for::<SampleFunction>(&registry).unwrap();
        let second = cache.schema_for::<SampleFunction>(&registry).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(BUILDS.load(Ordering::SeqCst), 1);
        assert_eq!(first.required, ["a"]);
    }

    #[test]
    fn test_errors_are_cached_and_replayed() {
        let cache = SchemaCache::new();
        let registry = TypeRegistry::new();

        assert!(cache.get::<Undocumented>().is_none());
        assert_eq!(
            cache.register::<Undocumented>(&registry),
            Err(SchemaError::NoDocstring)
        );
        assert_eq!(
            cache.get::<Undocumented>().map(|o| o.map(|_| ())),
            Some(Err(SchemaError::NoDocstring))
        );
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_per_function_options() {
        let cache = SchemaCache::new();
        let schema = cache.schema_for::<Lenient>(&TypeRegistry::new()).unwrap();
        assert_eq!(schema.description, "");
    }

    #[test]
    fn test_render_and_invocation_parameters() {
        let cache = SchemaCache::new();
        let registry = TypeRegistry::new();
        let providers = ProviderRegistry::new();

        let wire = cache
            .render::<SampleFunction>(&registry, &providers, "openai")
            .unwrap();
        let kwargs = cache
            .invocation_parameters::<SampleFunction>(&registry, &providers, "openai")
            .unwrap();

        assert_eq!(
            kwargs,
            json!({
                "tools": [wire],
                "tool_choice": {"type": "function", "function": {"name": "sample_function"}}
            })
        );
    }
}
