//! Template rendering
//!
//! Turns a [`Template`] and a [`ParamBag`] into a concrete path:
//!
//! 1. Each segment is filled by exact name: `:name` and `:name?` take a
//!    non-empty string, `name?` is kept when its flag is `true`.
//! 2. The joined result is sanitised: unfilled optional segments are removed,
//!    trailing slashes are stripped and an empty path becomes `/`.
//!
//! Rendering never fails. A `:name` token without a value stays in the output
//! as `/:name`; use [`try_render`] to have it reported instead.

use std::borrow::Cow;

use tracing::{debug, trace};

use crate::error::BuildError;
use crate::params::{ParamBag, ParamValue};
use crate::template::{Template, TemplateSegment};

/// Renders a template string with optional parameters
///
/// Parses the template on every call; routes built through
/// [`build_route`](crate::build_route) parse once and call
/// [`render_template`] instead.
///
/// # Examples
///
/// ```
/// use route_api::{render, ParamBag};
///
/// assert_eq!(render("/about/profile?", None), "/about");
///
/// let params = ParamBag::new().with("id", "123").with("edit", true);
/// assert_eq!(render("/profiles/:id?/edit?", Some(&params)), "/profiles/123/edit");
/// ```
pub fn render(template: &str, params: Option<&ParamBag>) -> String {
    render_template(&Template::parse(template), params)
}

/// Renders a parsed template with optional parameters
pub fn render_template(template: &Template, params: Option<&ParamBag>) -> String {
    let output = match params.filter(|params| !params.is_empty()) {
        // Nothing to substitute: sanitising alone yields the base path
        None => sanitise(template.as_str()),
        Some(params) => {
            let missing = missing_params(template, params);
            if !missing.is_empty() {
                debug!(
                    template = template.as_str(),
                    ?missing,
                    "rendering with unfilled required parameters"
                );
            }
            sanitise(&substitute(template, params))
        }
    };

    trace!(template = template.as_str(), path = %output, "rendered route");
    output
}

/// Renders a template string, rejecting unfilled `:name` tokens
///
/// # Examples
///
/// ```
/// use route_api::{try_render, BuildError, ParamBag};
///
/// let params = ParamBag::new().with("projectId", "abc");
/// assert_eq!(
///     try_render("/projects/:projectId/cards/:cardId", Some(&params)),
///     Err(BuildError::MissingParams {
///         template: "/projects/:projectId/cards/:cardId".to_string(),
///         params: vec!["cardId".to_string()],
///     })
/// );
/// ```
pub fn try_render(template: &str, params: Option<&ParamBag>) -> Result<String, BuildError> {
    try_render_template(&Template::parse(template), params)
}

/// Renders a parsed template, rejecting unfilled `:name` tokens
pub fn try_render_template(
    template: &Template,
    params: Option<&ParamBag>,
) -> Result<String, BuildError> {
    let empty = ParamBag::new();
    let missing = missing_params(template, params.unwrap_or(&empty));

    if !missing.is_empty() {
        return Err(BuildError::MissingParams {
            template: template.as_str().to_string(),
            params: missing.into_iter().map(str::to_string).collect(),
        });
    }

    Ok(render_template(template, params))
}

/// Names of required parameters that `params` leaves unfilled
///
/// A required parameter is filled only by a non-empty string. Names repeated
/// in the template are reported once.
pub fn missing_params<'t>(template: &'t Template, params: &ParamBag) -> Vec<&'t str> {
    let mut missing: Vec<&str> = Vec::new();

    for name in template.required_params() {
        let filled = params.get(name).and_then(ParamValue::filled_text).is_some();
        if !filled && !missing.contains(&name) {
            missing.push(name);
        }
    }

    missing
}

/// Fills every segment by exact name and joins the result back with `/`
fn substitute(template: &Template, params: &ParamBag) -> String {
    template
        .segments()
        .iter()
        .map(|segment| fill_segment(segment, params))
        .collect::<Vec<_>>()
        .join("/")
}

fn fill_segment<'a>(segment: &'a TemplateSegment, params: &'a ParamBag) -> Cow<'a, str> {
    match segment {
        TemplateSegment::Static(text) => Cow::Borrowed(text.as_str()),
        TemplateSegment::OptionalStatic(name)
            if params.get(name).is_some_and(ParamValue::is_true) =>
        {
            Cow::Borrowed(name.as_str())
        }
        TemplateSegment::Optional(name) | TemplateSegment::Required(name) => {
            match params.get(name).and_then(ParamValue::filled_text) {
                Some(value) => Cow::Borrowed(value),
                None => Cow::Owned(segment.as_template()),
            }
        }
        // Unfilled optional static, removed by `sanitise`
        TemplateSegment::OptionalStatic(_) => Cow::Owned(segment.as_template()),
    }
}

/// Removes unfilled optional segments and normalises the result
///
/// **Pure function**: no side effects, deterministic output.
///
/// # Rules
///
/// - A `/` followed by a run of non-slash, non-whitespace characters ending
///   in `?` is removed; the run ends at the last `?` before the next slash or
///   whitespace. Every occurrence is removed in a single pass.
/// - Trailing slashes are stripped.
/// - An empty result becomes `/`.
///
/// Applying `sanitise` to its own output returns it unchanged.
///
/// # Examples
///
/// ```
/// use route_api::sanitise;
///
/// assert_eq!(sanitise("/about/:param?/:param2?"), "/about");
/// assert_eq!(sanitise("/account/edit?/password?"), "/account");
/// assert_eq!(sanitise("/about?"), "/");
/// assert_eq!(sanitise("/users/"), "/users");
/// ```
pub fn sanitise(path: &str) -> String {
    let mut output = String::with_capacity(path.len());
    let mut pieces = path.split('/');

    // Text before the first slash is never preceded by one, so it always stays
    if let Some(first) = pieces.next() {
        output.push_str(first);
    }

    for piece in pieces {
        let run_end = piece.find(char::is_whitespace).unwrap_or(piece.len());

        match piece[..run_end].rfind('?') {
            // The slash and the run up to its last `?` are dropped
            Some(mark) => output.push_str(&piece[mark + 1..]),
            None => {
                output.push('/');
                output.push_str(piece);
            }
        }
    }

    match output.trim_end_matches('/') {
        "" => "/".to_string(),
        trimmed => trimmed.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitise_root() {
        assert_eq!(sanitise("/"), "/");
        assert_eq!(sanitise(""), "/");
        assert_eq!(sanitise("//"), "/");
    }

    #[test]
    fn test_sanitise_removes_all_optional_segments() {
        assert_eq!(sanitise("/employees/:id?/:tab?/:secondaryId?"), "/employees");
        assert_eq!(sanitise("/a/b?/c/d?"), "/a/c");
    }

    #[test]
    fn test_sanitise_keeps_mandatory_tokens() {
        assert_eq!(sanitise("/profile/:id"), "/profile/:id");
    }

    #[test]
    fn test_sanitise_stops_at_whitespace() {
        // No `?` before the space, so nothing in the segment is removed
        assert_eq!(sanitise("/foo bar?"), "/foo bar?");
        // The run ends at the space; only `/a?` goes
        assert_eq!(sanitise("/x/a? b"), "/x b");
    }

    #[test]
    fn test_sanitise_cuts_at_last_question_mark_in_run() {
        assert_eq!(sanitise("/x/a?b?c"), "/xc");
    }

    #[test]
    fn test_sanitise_leading_piece_untouched() {
        assert_eq!(sanitise("about?"), "about?");
    }

    #[test]
    fn test_sanitise_is_idempotent() {
        for input in [
            "",
            "/",
            "//",
            "/a//",
            "/about/profile?",
            "/x/a? b/c?",
            "/x/a?b?c/",
            "about?/x",
            "/a b?/c",
        ] {
            let once = sanitise(input);
            assert_eq!(sanitise(&once), once, "input: {input:?}");
        }
    }

    #[test]
    fn test_fill_segment_ignores_wrong_value_kinds() {
        let params = ParamBag::new().with("id", true).with("edit", "yes");
        let template = Template::parse("/users/:id?/edit?");
        assert_eq!(substitute(&template, &params), "/users/:id?/edit?");
    }

    #[test]
    fn test_substitute_matches_whole_names_only() {
        let params = ParamBag::new().with("id", "1");
        let template = Template::parse("/users/:identity/:id");
        assert_eq!(substitute(&template, &params), "/users/:identity/1");
    }

    #[test]
    fn test_missing_params_reported_once() {
        let template = Template::parse("/a/:id/b/:id/:other?");
        assert_eq!(missing_params(&template, &ParamBag::new()), vec!["id"]);
    }

    #[test]
    fn test_empty_string_does_not_fill() {
        let params = ParamBag::new().with("id", "");
        assert_eq!(render("/users/:id?", Some(&params)), "/users");
        assert_eq!(render("/users/:id", Some(&params)), "/users/:id");
    }
}
