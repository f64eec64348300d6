/// Declares a struct of typed routes
///
/// Each field `name: Params => "template"` becomes a public
/// [`Route<Params>`](crate::Route) built with [`build_route`](crate::build_route).
/// The generated type gets `new()`, `Default` and `registry()`, which returns
/// the same routes as an untyped [`Registry`](crate::Registry) keyed by field
/// name, in declaration order.
///
/// # Examples
///
/// ```
/// use route_api::routes;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// pub struct ProfileParams {
///     pub id: String,
/// }
///
/// routes! {
///     #[derive(Debug, Clone)]
///     pub struct AppRoutes {
///         home: () => "/",
///         about: () => "/about",
///         profile: ProfileParams => "/profile/:id",
///     }
/// }
///
/// let routes = AppRoutes::new();
/// assert_eq!(routes.home.path(), "/");
/// assert_eq!(routes.profile.template(), "/profile/:id");
/// assert_eq!(routes.profile.build(&ProfileParams { id: "123".into() }), "/profile/123");
///
/// let registry = routes.registry().unwrap();
/// assert_eq!(registry.names().collect::<Vec<_>>(), vec!["home", "about", "profile"]);
/// ```
#[macro_export]
macro_rules! routes {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field:ident : $params:ty => $template:expr
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[$field_meta])*
                pub $field: $crate::Route<$params>,
            )*
        }

        impl $name {
            /// Builds every route from its template
            pub fn new() -> Self {
                Self {
                    $(
                        $field: $crate::build_route(
                            |_: ::core::option::Option<$params>| $template,
                        ),
                    )*
                }
            }

            /// The same routes as an untyped registry, keyed by field name
            pub fn registry(
                &self,
            ) -> ::core::result::Result<$crate::Registry, $crate::RegistryError> {
                $crate::Registry::builder()
                    $(
                        .with_entry(
                            ::core::stringify!($field),
                            ::core::clone::Clone::clone(self.$field.entry()),
                        )
                    )*
                    .build()
            }
        }

        impl ::core::default::Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }
    };
}
