//! Unified error type for schema compilation and rendering.

use thiserror::Error;

/// Error type returned by compilation, type resolution and provider rendering.
///
/// Errors are `Clone` so a memoized outcome can be replayed to every caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// Documentation was required but the callable has none.
    #[error("the function must have a docstring")]
    NoDocstring,

    /// A short description was required but the documentation has none.
    #[error("the function must have a short description in the docstring")]
    NoShortDescription,

    /// Parameters without a documentation entry.
    #[error(
        "the following parameters are not documented in the docstring: {}",
        .0.join(", ")
    )]
    ParameterNotDocumented(Vec<String>),

    /// Documented parameters whose entry has no description text.
    #[error(
        "the following parameters are missing descriptions in the docstring: {}",
        .0.join(", ")
    )]
    ParameterMissingDescription(Vec<String>),

    /// A parameter declared without a type descriptor.
    #[error("parameter {0} must have a type annotation")]
    MissingTypeAnnotation(String),

    /// A collection descriptor without element types while bare generics are disallowed.
    #[error("bare generic type {0} is not allowed")]
    BareGenericType(String),

    /// No handler accepts the descriptor, or the descriptor is malformed.
    #[error("unsupported type: {0}")]
    UnsupportedType(String),

    /// A literal set containing a non-scalar value.
    #[error("unsupported literal values: {0}")]
    UnsupportedLiteralType(String),

    /// Rendering was requested for a provider that is not registered.
    #[error("unknown provider: {0}")]
    UnknownProvider(String),

    /// A wire schema that does not have the shape its provider renders.
    #[error("invalid wire schema: {0}")]
    InvalidWireSchema(String),
}

impl SchemaError {
    /// Create an unsupported type error.
    pub fn unsupported<S: ToString>(s: S) -> Self {
        Self::UnsupportedType(s.to_string())
    }

    /// Create an invalid wire schema error.
    pub fn invalid_wire<S: ToString>(s: S) -> Self {
        Self::InvalidWireSchema(s.to_string())
    }
}

/// Result alias used throughout the crate.
pub type Result<T, E = SchemaError> = std::result::Result<T, E>;
