//! Route manifests
//!
//! Route definitions loaded from TOML instead of code:
//!
//! ```toml
//! [[route]]
//! name = "home"
//! template = "/"
//!
//! [[route]]
//! name = "employee"
//! template = "/employees/:id?/:tab?"
//! ```

use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ManifestError, RegistryError};
use crate::params::ParamBag;
use crate::registry::{build_registry, Registry};

/// A list of named route templates, in file order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteManifest {
    #[serde(default, rename = "route")]
    pub routes: Vec<RouteDefinition>,
}

/// One `[[route]]` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteDefinition {
    pub name: String,
    pub template: String,
}

impl RouteManifest {
    /// Parse a route manifest from a TOML string
    ///
    /// # Examples
    ///
    /// ```
    /// use route_api::RouteManifest;
    ///
    /// let manifest = RouteManifest::from_toml(
    ///     r#"
    ///     [[route]]
    ///     name = "about"
    ///     template = "/about/profile?"
    ///     "#,
    /// )
    /// .unwrap();
    ///
    /// let registry = manifest.into_registry().unwrap();
    /// assert_eq!(registry.template("about"), Some("/about/profile?"));
    /// ```
    pub fn from_toml(content: &str) -> Result<Self, ManifestError> {
        Ok(toml::from_str(content)?)
    }

    /// Load a route manifest from a file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ManifestError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let manifest = Self::from_toml(&content)?;
        debug!(path = %path.display(), routes = manifest.routes.len(), "loaded route manifest");
        Ok(manifest)
    }

    /// Convert the definitions into a registry, keeping file order
    pub fn into_registry(self) -> Result<Registry, RegistryError> {
        build_registry(self.routes.into_iter().map(|RouteDefinition { name, template }| {
            (name, move |_: Option<ParamBag>| template)
        }))
    }
}

impl FromStr for RouteManifest {
    type Err = ManifestError;

    fn from_str(content: &str) -> Result<Self, Self::Err> {
        Self::from_toml(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MANIFEST: &str = r#"
[[route]]
name = "home"
template = "/"

[[route]]
name = "employee"
template = "/employees/:id?/:tab?/:secondaryId?"
"#;

    #[test]
    fn test_parse_manifest() {
        let manifest: RouteManifest = MANIFEST.parse().unwrap();
        assert_eq!(
            manifest.routes,
            vec![
                RouteDefinition {
                    name: "home".to_string(),
                    template: "/".to_string(),
                },
                RouteDefinition {
                    name: "employee".to_string(),
                    template: "/employees/:id?/:tab?/:secondaryId?".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_empty_manifest() {
        let manifest = RouteManifest::from_toml("").unwrap();
        assert!(manifest.routes.is_empty());
        assert!(manifest.into_registry().unwrap().is_empty());
    }

    #[test]
    fn test_missing_template_is_a_parse_error() {
        let result = RouteManifest::from_toml("[[route]]\nname = \"home\"\n");
        assert!(matches!(result, Err(ManifestError::Parse(_))));
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let manifest = RouteManifest::from_toml(
            "[[route]]\nname = \"a\"\ntemplate = \"/a\"\n[[route]]\nname = \"a\"\ntemplate = \"/b\"\n",
        )
        .unwrap();

        assert_eq!(
            manifest.into_registry(),
            Err(RegistryError::DuplicateRoute {
                name: "a".to_string()
            })
        );
    }

    #[test]
    fn test_missing_file() {
        let result = RouteManifest::from_file("does/not/exist/routes.toml");
        assert!(matches!(result, Err(ManifestError::Io { .. })));
    }
}
