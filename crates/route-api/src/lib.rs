//! # route-api
//!
//! Named route templates with typed path builders. Templates support:
//! - Static segments (`/about`)
//! - Required parameters (`/profile/:id`)
//! - Optional parameters (`/employees/:id?/:tab?`)
//! - Optional static segments (`/profiles/:id?/edit?`)
//!
//! ## Rendering
//!
//! A template is rendered against a [`ParamBag`] of string and boolean
//! values. Strings fill `:name` and `:name?` tokens, `true` keeps an optional
//! static segment, and anything left optional and unfilled is removed:
//! - `/about/profile?` → `/about`
//! - `/employees/:id?/:tab?` with `id = "123"` → `/employees/123`
//! - `/profiles/:id?/edit?` with `id = "123"`, `edit = true` → `/profiles/123/edit`
//!
//! Trailing slashes are stripped and an empty path renders as `/`.
//! Rendering never fails; [`try_render`] and the `try_build` methods report
//! unfilled required parameters instead of leaving `/:name` in the path.
//!
//! ## Routes and registries
//!
//! [`build_route`] turns a template-producing function into a [`Route<P>`],
//! where `P` is the `serde::Serialize` parameter type of that route.
//! [`build_registry`] and [`Registry::builder`] collect untyped entries under
//! names, and the [`routes!`] macro declares a struct of typed routes.
//!
//! ## Example
//!
//! ```
//! use route_api::{build_route, render, ParamBag, Route};
//! use serde::Serialize;
//!
//! assert_eq!(render("/about/:param?/:param2?", None), "/about");
//!
//! #[derive(Serialize)]
//! struct EmployeeParams {
//!     id: String,
//!     tab: Option<String>,
//! }
//!
//! let employee = build_route(|_: Option<EmployeeParams>| "/employees/:id?/:tab?");
//! let path = employee.build(&EmployeeParams {
//!     id: "123".to_string(),
//!     tab: Some("friends".to_string()),
//! });
//! assert_eq!(path, "/employees/123/friends");
//!
//! let home: Route = build_route(|_| "/");
//! assert_eq!(home.path(), "/");
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

mod error;
mod macros;
#[cfg(feature = "manifest")]
mod manifest;
mod params;
mod registry;
mod render;
mod route;
pub mod template;

// ============================================================================
// Public API
// ============================================================================

pub use error::{BuildError, ParamError, RegistryError};
pub use params::{ParamBag, ParamValue};
pub use registry::{build_registry, Registry, RegistryBuilder};
pub use render::{missing_params, render, render_template, sanitise, try_render, try_render_template};
pub use route::{build_route, Route, RouteEntry};
pub use template::{classify_segment, Template, TemplateSegment};

#[cfg(feature = "manifest")]
pub use error::ManifestError;
#[cfg(feature = "manifest")]
pub use manifest::{RouteDefinition, RouteManifest};
