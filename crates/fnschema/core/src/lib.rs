//! Compile callable signatures and their documentation into LLM tool-calling schemas.
//!
//! This crate provides:
//! - [`TypeDescriptor`]: Language-neutral description of a declared parameter type
//! - [`TypeRegistry`]: Ordered, extensible type handlers producing JSON Schema fragments
//! - [`process_parameters`]: Per-parameter documentation gates, types, descriptions, defaults
//! - [`compile`]: Validated, provider-agnostic [`IntermediateSchema`]
//! - [`ProviderRegistry`]: OpenAI and Anthropic renderers, plus registered ones
//! - [`SchemaCache`]: Memoized schemas keyed by a [`SchemaFunction`] type
//! - [`Documentation`]: reST, Google and NumPy style docstring parsing

pub mod cache;
pub mod callable;
pub mod compiler;
pub mod descriptor;
pub mod docs;
pub mod error;
pub mod options;
pub mod params;
pub mod providers;
pub mod resolver;
pub mod schema;

pub use cache::{SchemaCache, SchemaFunction};
pub use callable::{Callable, Parameter};
pub use compiler::compile;
pub use descriptor::{Collection, RecordField, RecordType, TypeDescriptor};
pub use docs::{Documentation, ParamDoc};
pub use error::{Result, SchemaError};
pub use options::CompileOptions;
pub use params::process_parameters;
pub use providers::{AnthropicProvider, OpenAiProvider, ProviderRegistry, SchemaProvider};
pub use resolver::{
    FnHandler, Handler, ResolveContext, ResolveOptions, TypeHandler, TypeRegistry,
};
pub use schema::{AdditionalProperties, IntermediateSchema, JsonType, ParameterSchema, SchemaType};
