//! Integration tests for template rendering
//!
//! Covers:
//! - Base paths (no parameters)
//! - Required and optional parameter substitution
//! - Optional static segments
//! - Sanitisation of the rendered output
//! - Strict rendering

use pretty_assertions::assert_eq;
use route_api::*;
use rstest::rstest;

// ============================================================================
// Base paths
// ============================================================================

#[rstest]
#[case("/", "/")]
#[case("/about", "/about")]
#[case("/about?", "/")]
#[case("/about/profile?", "/about")]
#[case("/about/:param?/:param2?", "/about")]
#[case("/employees/:id?/:tab?/:secondaryId?", "/employees")]
#[case("/account/edit?/password?", "/account")]
#[case("/profile/", "/profile")]
fn test_render_without_params(#[case] template: &str, #[case] expected: &str) {
    assert_eq!(render(template, None), expected);
    assert_eq!(render(template, Some(&ParamBag::new())), expected);
}

#[rstest]
#[case("/")]
#[case("/a?")]
#[case("/a?/b?/c?")]
#[case("/:a?/:b?")]
#[case("/users/:id?/edit?")]
fn test_base_path_is_never_empty(#[case] template: &str) {
    let path = render(template, None);
    assert!(!path.is_empty());
    assert!(path.starts_with('/'));
}

// ============================================================================
// Substitution
// ============================================================================

#[rstest]
#[case(
    "/employees/:id?/:tab?/:secondaryId?",
    ParamBag::new().with("id", "123").with("tab", "friends").with("secondaryId", "234"),
    "/employees/123/friends/234"
)]
#[case(
    "/employees/:id?/:tab?/:secondaryId?",
    ParamBag::new().with("id", "123"),
    "/employees/123"
)]
#[case(
    "/account/edit?/password?",
    ParamBag::new().with("edit", false).with("password", false),
    "/account"
)]
#[case(
    "/account/edit?/password?",
    ParamBag::new().with("password", true),
    "/account/password"
)]
#[case(
    "/profiles/:id?/edit?",
    ParamBag::new().with("id", "123").with("edit", true),
    "/profiles/123/edit"
)]
#[case("/profile/:id", ParamBag::new().with("id", "123"), "/profile/123")]
#[case(
    "/projects/:projectId/cards/:cardId",
    ParamBag::new().with("projectId", "abc").with("cardId", "123"),
    "/projects/abc/cards/123"
)]
fn test_render_with_params(
    #[case] template: &str,
    #[case] params: ParamBag,
    #[case] expected: &str,
) {
    assert_eq!(render(template, Some(&params)), expected);
}

#[test]
fn test_param_order_does_not_matter() {
    let template = "/employees/:id?/:tab?/:secondaryId?";
    let forward = ParamBag::new()
        .with("id", "1")
        .with("tab", "notes")
        .with("secondaryId", "2");
    let backward = ParamBag::new()
        .with("secondaryId", "2")
        .with("tab", "notes")
        .with("id", "1");

    assert_eq!(
        render(template, Some(&forward)),
        render(template, Some(&backward))
    );
}

#[test]
fn test_gap_in_optional_params() {
    // A later optional param is kept even when an earlier one is skipped
    let params = ParamBag::new().with("id", "123").with("secondaryId", "234");
    assert_eq!(
        render("/employees/:id?/:tab?/:secondaryId?", Some(&params)),
        "/employees/123/234"
    );
}

#[test]
fn test_unknown_keys_are_ignored() {
    let params = ParamBag::new().with("unused", "x").with("flag", true);
    assert_eq!(render("/about/profile?", Some(&params)), "/about");
}

#[test]
fn test_missing_required_param_left_in_path() {
    let params = ParamBag::new().with("projectId", "abc");
    assert_eq!(
        render("/projects/:projectId/cards/:cardId", Some(&params)),
        "/projects/abc/cards/:cardId"
    );
}

#[test]
fn test_flag_does_not_fill_a_param() {
    let params = ParamBag::new().with("id", true);
    assert_eq!(render("/users/:id?", Some(&params)), "/users");
    assert_eq!(render("/users/:id", Some(&params)), "/users/:id");
}

#[test]
fn test_render_template_matches_render() {
    let template = Template::parse("/profiles/:id?/edit?");
    let params = ParamBag::new().with("id", "9").with("edit", true);

    assert_eq!(
        render_template(&template, Some(&params)),
        render(template.as_str(), Some(&params))
    );
}

// ============================================================================
// Sanitisation
// ============================================================================

#[rstest]
#[case("/")]
#[case("/about")]
#[case("/about/profile?")]
#[case("/employees/:id?/:tab?")]
#[case("/a//")]
#[case("/x/a? b/c?")]
#[case("no-slash?/x?")]
fn test_sanitise_is_idempotent(#[case] input: &str) {
    let once = sanitise(input);
    assert_eq!(sanitise(&once), once);
}

#[test]
fn test_rendered_output_is_already_sanitised() {
    let params = ParamBag::new().with("id", "123").with("edit", true);
    let path = render("/profiles/:id?/edit?/:tab?", Some(&params));
    assert_eq!(sanitise(&path), path);
}

// ============================================================================
// Strict rendering
// ============================================================================

#[test]
fn test_try_render_success() {
    let params = ParamBag::new().with("id", "123");
    assert_eq!(
        try_render("/profile/:id/edit?", Some(&params)),
        Ok("/profile/123".to_string())
    );
}

#[test]
fn test_try_render_reports_all_missing_params() {
    let err = try_render("/projects/:projectId/cards/:cardId", None).unwrap_err();
    assert_eq!(
        err,
        BuildError::MissingParams {
            template: "/projects/:projectId/cards/:cardId".to_string(),
            params: vec!["projectId".to_string(), "cardId".to_string()],
        }
    );
    assert_eq!(
        err.to_string(),
        "template `/projects/:projectId/cards/:cardId` is missing required parameters: projectId, cardId"
    );
}

#[test]
fn test_try_render_optional_only_never_fails() {
    assert_eq!(
        try_render("/employees/:id?/:tab?", None),
        Ok("/employees".to_string())
    );
}
