//! Error types
//!
//! Normal rendering never fails: these errors come only from the strict
//! `try_*` operations, typed parameter conversion, and registry construction.

use thiserror::Error;

/// A parameter value that could not be turned into a [`ParamBag`](crate::ParamBag)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamError {
    /// The parameter type serialized to something other than a struct or map
    #[error("route parameters must serialize to a map of named values, got {kind}")]
    NotAMap { kind: &'static str },

    /// A field held a nested value that cannot fill a path segment
    #[error("parameter `{key}` has an unsupported {kind} value; expected a string, boolean or number")]
    UnsupportedValue { key: String, kind: &'static str },

    /// The parameter type's `Serialize` implementation reported an error
    #[error("failed to serialize route parameters: {0}")]
    Serialize(String),
}

/// Errors reported by strict path building
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// One or more `:name` tokens had no non-empty string value
    #[error("template `{template}` is missing required parameters: {}", .params.join(", "))]
    MissingParams {
        template: String,
        params: Vec<String>,
    },

    /// No route is registered under the requested name
    #[error("no route named `{name}`")]
    UnknownRoute { name: String },

    #[error(transparent)]
    Params(#[from] ParamError),
}

/// Errors reported while constructing a [`Registry`](crate::Registry)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("route `{name}` is defined more than once")]
    DuplicateRoute { name: String },

    #[error("route names must not be empty")]
    EmptyName,
}

/// Errors reported while loading a [`RouteManifest`](crate::RouteManifest)
#[cfg(feature = "manifest")]
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to read route manifest {}", .path.display())]
    Io {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid route manifest: {0}")]
    Parse(#[from] toml::de::Error),

    #[error(transparent)]
    Registry(#[from] RegistryError),
}
