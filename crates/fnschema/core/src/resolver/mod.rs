//! Type resolution: turns [`TypeDescriptor`]s into schema fragments.
//!
//! A [`TypeRegistry`] is an ordered list of [`Handler`]s. Resolution asks each
//! handler in turn whether it claims the descriptor and the first one that
//! does produces the fragment. Order matters: no handler ever sees a
//! descriptor claimed by an earlier one.
//!
//! Built-ins, in precedence order: record, literal, union, sequence, mapping,
//! primitive. Custom handlers can be placed ahead of or behind them.

mod array;
mod literal;
mod mapping;
mod primitive;
mod record;
mod union;

use crate::descriptor::TypeDescriptor;
use crate::error::{Result, SchemaError};
use crate::schema::ParameterSchema;
use std::fmt;
use std::sync::Arc;
use tracing::trace;

pub use primitive::json_type_of;

/// Options that change how descriptors resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Resolve collections without element types to unconstrained items
    /// instead of failing with [`SchemaError::BareGenericType`].
    pub allow_bare_generic_types: bool,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            allow_bare_generic_types: true,
        }
    }
}

/// Handle passed to handlers so they can resolve nested descriptors.
#[derive(Clone, Copy)]
pub struct ResolveContext<'a> {
    registry: &'a TypeRegistry,
    options: ResolveOptions,
}

impl ResolveContext<'_> {
    /// Resolve a nested descriptor through the full registry.
    pub fn resolve(&self, descriptor: &TypeDescriptor) -> Result<ParameterSchema> {
        self.registry.resolve(descriptor, self.options)
    }

    /// Options for this resolution.
    pub fn options(&self) -> ResolveOptions {
        self.options
    }
}

/// A type handler supplied at run time.
pub trait TypeHandler: Send + Sync {
    /// Name used in logs and [`TypeRegistry::handler_names`].
    fn name(&self) -> &str;

    /// Whether this handler claims the descriptor.
    fn matches(&self, descriptor: &TypeDescriptor) -> bool;

    /// Produce the fragment for a descriptor this handler claimed.
    fn resolve(
        &self,
        descriptor: &TypeDescriptor,
        cx: &ResolveContext<'_>,
    ) -> Result<ParameterSchema>;
}

type MatchFn = dyn Fn(&TypeDescriptor) -> bool + Send + Sync;
type ResolveFn =
    dyn Fn(&TypeDescriptor, &ResolveContext<'_>) -> Result<ParameterSchema> + Send + Sync;

/// A [`TypeHandler`] built from a pair of closures.
pub struct FnHandler {
    name: String,
    matches: Box<MatchFn>,
    resolve: Box<ResolveFn>,
}

impl FnHandler {
    /// Wrap a match predicate and a resolver.
    pub fn new<M, R>(name: impl Into<String>, matches: M, resolve: R) -> Self
    where
        M: Fn(&TypeDescriptor) -> bool + Send + Sync + 'static,
        R: Fn(&TypeDescriptor, &ResolveContext<'_>) -> Result<ParameterSchema>
            + Send
            + Sync
            + 'static,
    {
        Self {
            name: name.into(),
            matches: Box::new(matches),
            resolve: Box::new(resolve),
        }
    }
}

impl TypeHandler for FnHandler {
    fn name(&self) -> &str {
        &self.name
    }

    fn matches(&self, descriptor: &TypeDescriptor) -> bool {
        (self.matches)(descriptor)
    }

    fn resolve(
        &self,
        descriptor: &TypeDescriptor,
        cx: &ResolveContext<'_>,
    ) -> Result<ParameterSchema> {
        (self.resolve)(descriptor, cx)
    }
}

/// One entry of the registry: a built-in case or a custom handler.
#[derive(Clone)]
pub enum Handler {
    Record,
    Literal,
    Union,
    Sequence,
    Mapping,
    Primitive,
    Custom(Arc<dyn TypeHandler>),
}

impl Handler {
    /// Built-in handlers in precedence order.
    pub fn builtins() -> Vec<Self> {
        vec![
            Self::Record,
            Self::Literal,
            Self::Union,
            Self::Sequence,
            Self::Mapping,
            Self::Primitive,
        ]
    }

    /// Handler name.
    pub fn name(&self) -> &str {
        match self {
            Self::Record => "record",
            Self::Literal => "literal",
            Self::Union => "union",
            Self::Sequence => "sequence",
            Self::Mapping => "mapping",
            Self::Primitive => "primitive",
            Self::Custom(h) => h.name(),
        }
    }

    /// Whether this handler claims the descriptor.
    pub fn matches(&self, descriptor: &TypeDescriptor) -> bool {
        match self {
            Self::Record => record::matches(descriptor),
            Self::Literal => literal::matches(descriptor),
            Self::Union => union::matches(descriptor),
            Self::Sequence => array::matches(descriptor),
            Self::Mapping => mapping::matches(descriptor),
            Self::Primitive => primitive::matches(descriptor),
            Self::Custom(h) => h.matches(descriptor),
        }
    }

    /// Resolve a descriptor this handler claimed.
    pub fn resolve(
        &self,
        descriptor: &TypeDescriptor,
        cx: &ResolveContext<'_>,
    ) -> Result<ParameterSchema> {
        match self {
            Self::Record => record::resolve(descriptor, cx),
            Self::Literal => literal::resolve(descriptor),
            Self::Union => union::resolve(descriptor, cx),
            Self::Sequence => array::resolve(descriptor, cx),
            Self::Mapping => mapping::resolve(descriptor, cx),
            Self::Primitive => primitive::resolve(descriptor),
            Self::Custom(h) => h.resolve(descriptor, cx),
        }
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Custom(h) => f.debug_tuple("Custom").field(&h.name()).finish(),
            other => f.write_str(other.name()),
        }
    }
}

/// Ordered handler registry. First match wins.
///
/// Construct one at startup and pass it by reference; there is no global
/// instance. Registration takes `&mut self`, so sharing a registry across
/// threads while registering needs an external lock.
#[derive(Clone, Debug)]
pub struct TypeRegistry {
    handlers: Vec<Handler>,
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self {
            handlers: Handler::builtins(),
        }
    }
}

impl TypeRegistry {
    /// Registry with the built-in handlers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with no handlers at all.
    pub fn empty() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Append a handler; it only sees descriptors no earlier handler claims.
    pub fn register<H: TypeHandler + 'static>(&mut self, handler: H) -> &mut Self {
        self.handlers.push(Handler::Custom(Arc::new(handler)));
        self
    }

    /// Put a handler ahead of every registered one, built-ins included.
    pub fn register_first<H: TypeHandler + 'static>(&mut self, handler: H) -> &mut Self {
        self.handlers
            .insert(0, Handler::Custom(Arc::new(handler)));
        self
    }

    /// Append a handler built from a match predicate and a resolver.
    pub fn register_fn<M, R>(&mut self, name: impl Into<String>, matches: M, resolve: R) -> &mut Self
    where
        M: Fn(&TypeDescriptor) -> bool + Send + Sync + 'static,
        R: Fn(&TypeDescriptor, &ResolveContext<'_>) -> Result<ParameterSchema>
            + Send
            + Sync
            + 'static,
    {
        self.register(FnHandler::new(name, matches, resolve))
    }

    /// Handler names in consultation order.
    pub fn handler_names(&self) -> Vec<&str> {
        self.handlers.iter().map(Handler::name).collect()
    }

    /// Resolve a descriptor into a schema fragment.
    ///
    /// [`TypeDescriptor::Any`] is `{}` regardless of handlers.
    pub fn resolve(
        &self,
        descriptor: &TypeDescriptor,
        options: ResolveOptions,
    ) -> Result<ParameterSchema> {
        if matches!(descriptor, TypeDescriptor::Any) {
            return Ok(ParameterSchema::any());
        }

        let handler = self
            .handlers
            .iter()
            .find(|h| h.matches(descriptor))
            .ok_or_else(|| SchemaError::unsupported(descriptor))?;

        trace!(handler = handler.name(), descriptor = %descriptor, "resolving type");
        let cx = ResolveContext {
            registry: self,
            options,
        };
        handler.resolve(descriptor, &cx)
    }
}
