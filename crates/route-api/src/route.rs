//! Route entries
//!
//! A route pairs a parsed [`Template`] with a build operation closed over it.
//! [`RouteEntry`] is the untyped form stored in a [`Registry`](crate::Registry);
//! [`Route<P>`] wraps an entry and fixes the parameter schema `P` its build
//! method accepts.

use std::fmt;
use std::marker::PhantomData;

use serde::Serialize;
use tracing::warn;

use crate::error::BuildError;
use crate::params::ParamBag;
use crate::render::{render_template, try_render_template};
use crate::template::Template;

/// An immutable template with its build operation
///
/// # Examples
///
/// ```
/// use route_api::{ParamBag, RouteEntry};
///
/// let entry = RouteEntry::new("/employees/:id?/:tab?");
/// assert_eq!(entry.template(), "/employees/:id?/:tab?");
/// assert_eq!(entry.build(&ParamBag::new()), "/employees");
/// assert_eq!(entry.build(&ParamBag::new().with("id", "123")), "/employees/123");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    template: Template,
}

impl RouteEntry {
    /// Creates an entry from a template
    pub fn new(template: impl Into<Template>) -> Self {
        Self {
            template: template.into(),
        }
    }

    /// The raw template string
    pub fn template(&self) -> &str {
        self.template.as_str()
    }

    /// The parsed template
    pub fn parsed(&self) -> &Template {
        &self.template
    }

    /// Builds a concrete path; an empty bag yields the base path
    pub fn build(&self, params: &ParamBag) -> String {
        render_template(&self.template, Some(params))
    }

    /// Builds a concrete path, failing if a required parameter is unfilled
    pub fn try_build(&self, params: &ParamBag) -> Result<String, BuildError> {
        try_render_template(&self.template, Some(params))
    }
}

/// A route whose build method takes the parameter schema `P`
///
/// `P` is any `serde::Serialize` type whose fields name the template's
/// parameters, or `()` for routes without parameters.
///
/// # Examples
///
/// ```
/// use route_api::{build_route, Route};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct CardParams {
///     project_id: String,
///     card_id: String,
/// }
///
/// let card = build_route(|_: Option<CardParams>| "/projects/:project_id/cards/:card_id");
/// let path = card.build(&CardParams {
///     project_id: "abc".to_string(),
///     card_id: "123".to_string(),
/// });
/// assert_eq!(path, "/projects/abc/cards/123");
///
/// let about: Route = build_route(|_| "/about");
/// assert_eq!(about.path(), "/about");
/// ```
pub struct Route<P = ()> {
    entry: RouteEntry,
    params: PhantomData<fn(&P)>,
}

impl<P> Route<P> {
    /// Creates a typed route from a template
    pub fn new(template: impl Into<Template>) -> Self {
        Self::from_entry(RouteEntry::new(template))
    }

    /// Wraps an untyped entry
    pub fn from_entry(entry: RouteEntry) -> Self {
        Self {
            entry,
            params: PhantomData,
        }
    }

    /// The raw template string
    pub fn template(&self) -> &str {
        self.entry.template()
    }

    /// The untyped entry behind this route
    pub fn entry(&self) -> &RouteEntry {
        &self.entry
    }

    /// Drops the parameter schema, keeping the entry
    pub fn into_entry(self) -> RouteEntry {
        self.entry
    }
}

impl<P: Serialize> Route<P> {
    /// Builds a concrete path from typed parameters
    ///
    /// Never fails. Parameters that cannot be converted into a bag are logged
    /// and the base path (every optional segment removed) is returned.
    pub fn build(&self, params: &P) -> String {
        match ParamBag::from_serialize(params) {
            Ok(bag) => self.entry.build(&bag),
            Err(err) => {
                warn!(
                    template = self.template(),
                    error = %err,
                    "route parameters could not be converted; building base path"
                );
                self.entry.build(&ParamBag::new())
            }
        }
    }

    /// Builds a concrete path, reporting conversion errors and unfilled
    /// required parameters
    pub fn try_build(&self, params: &P) -> Result<String, BuildError> {
        let bag = ParamBag::from_serialize(params)?;
        self.entry.try_build(&bag)
    }
}

impl Route<()> {
    /// Builds the path of a route that takes no parameters
    pub fn path(&self) -> String {
        self.entry.build(&ParamBag::new())
    }
}

impl<P> Clone for Route<P> {
    fn clone(&self) -> Self {
        Self::from_entry(self.entry.clone())
    }
}

impl<P> PartialEq for Route<P> {
    fn eq(&self, other: &Self) -> bool {
        self.entry == other.entry
    }
}

impl<P> Eq for Route<P> {}

impl<P> fmt::Debug for Route<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("template", &self.template())
            .field("params", &std::any::type_name::<P>())
            .finish()
    }
}

impl<P> From<Route<P>> for RouteEntry {
    fn from(route: Route<P>) -> Self {
        route.into_entry()
    }
}

/// Converts a template-producing function into a typed route
///
/// The function is called once with `None` and must ignore its argument; its
/// return value is the template. The argument type `Option<P>` declares the
/// parameter schema of the resulting route.
///
/// # Examples
///
/// ```
/// use route_api::build_route;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct ProfileParams {
///     id: String,
/// }
///
/// let profile = build_route(|_: Option<ProfileParams>| "/profile/:id");
/// assert_eq!(profile.template(), "/profile/:id");
/// assert_eq!(profile.build(&ProfileParams { id: "123".to_string() }), "/profile/123");
/// ```
pub fn build_route<P, F, S>(template_fn: F) -> Route<P>
where
    F: FnOnce(Option<P>) -> S,
    S: Into<String>,
{
    Route::new(Template::parse(template_fn(None)))
}
