//! Compile options.

use crate::resolver::ResolveOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Options for [`compile`](crate::compile).
///
/// All fields use `#[serde(default)]` so partial option tables work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct CompileOptions {
    /// Parameters left out of the schema entirely.
    pub ignore_args: BTreeSet<String>,

    /// Every kept parameter must have a documentation entry.
    pub require_all_params_in_doc: bool,

    /// Every documented parameter must have description text.
    pub require_descriptions_for_params: bool,

    /// Collections without element types resolve to unconstrained items.
    pub allow_bare_generic_types: bool,

    /// The documentation must have a short description.
    pub require_short_description: bool,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            ignore_args: BTreeSet::new(),
            require_all_params_in_doc: true,
            require_descriptions_for_params: true,
            allow_bare_generic_types: true,
            require_short_description: true,
        }
    }
}

impl CompileOptions {
    /// Defaults with every documentation requirement switched off.
    pub fn lenient() -> Self {
        Self {
            require_all_params_in_doc: false,
            require_descriptions_for_params: false,
            require_short_description: false,
            ..Self::default()
        }
    }

    /// Add names to the ignore list.
    pub fn ignore<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignore_args.extend(names.into_iter().map(Into::into));
        self
    }

    /// Set whether bare generics are allowed.
    pub fn with_bare_generic_types(mut self, allow: bool) -> Self {
        self.allow_bare_generic_types = allow;
        self
    }

    /// Whether any option needs the callable to be documented.
    pub fn requires_documentation(&self) -> bool {
        self.require_all_params_in_doc
            || self.require_descriptions_for_params
            || self.require_short_description
    }

    /// Whether `name` is on the ignore list.
    pub fn is_ignored(&self, name: &str) -> bool {
        self.ignore_args.contains(name)
    }

    /// The subset of options type resolution cares about.
    pub fn resolve_options(&self) -> ResolveOptions {
        ResolveOptions {
            allow_bare_generic_types: self.allow_bare_generic_types,
        }
    }
}
