//! Route registry
//!
//! The registry is the read-only collection of named [`RouteEntry`] values.
//! It is assembled once through [`RegistryBuilder`] (or [`build_registry`])
//! and never changes afterwards:
//! - Entries are kept in registration order (Vec)
//! - Names are indexed for O(1) lookup (HashMap)

use std::collections::HashMap;
use std::ops::Index;

use tracing::debug;

use crate::error::{BuildError, RegistryError};
use crate::params::ParamBag;
use crate::route::{build_route, RouteEntry};
use crate::template::Template;

/// Ordered, immutable mapping of route name → [`RouteEntry`]
///
/// # Examples
///
/// ```
/// use route_api::{ParamBag, Registry};
///
/// let registry = Registry::builder()
///     .with_route("home", "/")
///     .with_route("profile", "/profile/:id")
///     .build()
///     .unwrap();
///
/// assert_eq!(registry.template("profile"), Some("/profile/:id"));
/// assert_eq!(registry["home"].build(&ParamBag::new()), "/");
///
/// let params = ParamBag::new().with("id", "123");
/// assert_eq!(registry.build("profile", &params), Some("/profile/123".to_string()));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    entries: Vec<(String, RouteEntry)>,
    index: HashMap<String, usize>,
}

impl Registry {
    /// Starts an empty builder
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Gets a route entry by name (O(1) HashMap lookup)
    pub fn get(&self, name: &str) -> Option<&RouteEntry> {
        self.index.get(name).map(|&position| &self.entries[position].1)
    }

    /// Returns `true` if a route with this name exists
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Raw template of the named route
    pub fn template(&self, name: &str) -> Option<&str> {
        self.get(name).map(RouteEntry::template)
    }

    /// Builds the named route's path
    ///
    /// Returns `None` if the route does not exist. Unfilled required
    /// parameters stay in the output, as with [`RouteEntry::build`].
    pub fn build(&self, name: &str, params: &ParamBag) -> Option<String> {
        self.get(name).map(|entry| entry.build(params))
    }

    /// Builds the named route's path, failing on unknown routes and unfilled
    /// required parameters
    pub fn try_build(&self, name: &str, params: &ParamBag) -> Result<String, BuildError> {
        self.get(name)
            .ok_or_else(|| BuildError::UnknownRoute {
                name: name.to_string(),
            })?
            .try_build(params)
    }

    /// Number of routes
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the registry holds no routes
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Route names in registration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Routes in registration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RouteEntry)> {
        self.entries
            .iter()
            .map(|(name, entry)| (name.as_str(), entry))
    }
}

impl Index<&str> for Registry {
    type Output = RouteEntry;

    /// # Panics
    ///
    /// Panics if no route is registered under `name`.
    fn index(&self, name: &str) -> &RouteEntry {
        match self.get(name) {
            Some(entry) => entry,
            None => panic!("no route named `{name}` in registry"),
        }
    }
}

/// Collects named routes before freezing them into a [`Registry`]
///
/// Invalid registrations (an empty name, a name used twice) do not stop the
/// chain; the first one is reported by [`RegistryBuilder::build`].
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    registry: Registry,
    error: Option<RegistryError>,
}

impl RegistryBuilder {
    /// Creates an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a template under `name` (functional builder)
    pub fn with_route(self, name: impl Into<String>, template: impl Into<Template>) -> Self {
        self.with_entry(name, RouteEntry::new(template))
    }

    /// Registers an existing entry under `name` (functional builder)
    pub fn with_entry(mut self, name: impl Into<String>, entry: impl Into<RouteEntry>) -> Self {
        self.add_entry_internal(name.into(), entry.into());
        self
    }

    /// Registers several named templates at once
    pub fn with_routes<I, K, T>(mut self, routes: I) -> Self
    where
        I: IntoIterator<Item = (K, T)>,
        K: Into<String>,
        T: Into<Template>,
    {
        for (name, template) in routes {
            self.add_entry_internal(name.into(), RouteEntry::new(template));
        }
        self
    }

    /// Freezes the collected routes
    pub fn build(self) -> Result<Registry, RegistryError> {
        if let Some(err) = self.error {
            return Err(err);
        }

        debug!(routes = self.registry.len(), "route registry built");
        Ok(self.registry)
    }

    fn add_entry_internal(&mut self, name: String, entry: RouteEntry) {
        if self.error.is_some() {
            return;
        }

        if name.is_empty() {
            self.error = Some(RegistryError::EmptyName);
            return;
        }

        if self.registry.index.contains_key(&name) {
            self.error = Some(RegistryError::DuplicateRoute { name });
            return;
        }

        debug!(route = %name, template = entry.template(), "registered route");

        self.registry
            .index
            .insert(name.clone(), self.registry.entries.len());
        self.registry.entries.push((name, entry));
    }
}

/// Converts a collection of template-producing functions into a registry
///
/// Each function is called once with `None` and must ignore its argument.
/// Names keep their iteration order; an empty or repeated name is an error.
///
/// # Examples
///
/// ```
/// use route_api::{build_registry, ParamBag};
///
/// fn home(_: Option<ParamBag>) -> &'static str {
///     "/"
/// }
///
/// fn card(_: Option<ParamBag>) -> &'static str {
///     "/projects/:projectId/cards/:cardId"
/// }
///
/// let definitions: [(&str, fn(Option<ParamBag>) -> &'static str); 2] =
///     [("HOME", home), ("CARD", card)];
/// let registry = build_registry(definitions).unwrap();
///
/// assert_eq!(registry.names().collect::<Vec<_>>(), vec!["HOME", "CARD"]);
/// assert_eq!(registry.template("CARD"), Some("/projects/:projectId/cards/:cardId"));
/// ```
pub fn build_registry<I, K, F, S>(definitions: I) -> Result<Registry, RegistryError>
where
    I: IntoIterator<Item = (K, F)>,
    K: Into<String>,
    F: FnOnce(Option<ParamBag>) -> S,
    S: Into<String>,
{
    definitions
        .into_iter()
        .fold(Registry::builder(), |builder, (name, template_fn)| {
            builder.with_entry(name, build_route(template_fn))
        })
        .build()
}
