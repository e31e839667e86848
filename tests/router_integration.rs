//! End-to-end matching, classification, and generation behavior.

mod common;

use std::collections::HashMap;

use common::{any_route, named_route, route, router, substitutions};
use http::{Method, Request};
use signpost::{Route, RouteOptions, RouterError};

#[test]
fn test_disjoint_paths_match_their_own_route() {
    let router = router();
    router.add_route(named_route("foo", "/foo", "foo-handler", &[Method::GET]));
    router.add_route(named_route("bar", "/bar", "bar-handler", &[Method::GET]));

    let result = router.match_route(&Method::GET, "/bar").unwrap();
    assert!(result.is_success());
    assert_eq!(result.matched_name(), Some("bar"));
    assert_eq!(result.middleware(), Some(&"bar-handler"));
}

#[test]
fn test_match_extracts_params() {
    let router = router();
    router.add_route(named_route(
        "user",
        "/users/{id}",
        "user-handler",
        &[Method::GET],
    ));

    let result = router.match_route(&Method::GET, "/users/42").unwrap();
    let params = result.params().unwrap();
    assert_eq!(params.get("id").map(String::as_str), Some("42"));
}

#[test]
fn test_method_mismatch_reports_allowed_methods() {
    let router = router();
    router.add_route(route("/foo", "handler", &[Method::POST]));

    let result = router.match_route(&Method::GET, "/foo").unwrap();
    assert!(result.is_failure());
    assert!(result.is_method_failure());
    assert_eq!(result.allowed_methods(), &[Method::POST]);
}

#[test]
fn test_same_path_routes_report_method_union() {
    let router = router();
    router.add_route(route("/foo", "list", &[Method::GET]));
    router.add_route(route("/foo", "create", &[Method::POST]));

    let result = router.match_route(&Method::PATCH, "/foo").unwrap();
    assert!(result.is_method_failure());
    assert_eq!(result.allowed_methods(), &[Method::GET, Method::POST]);
}

#[test]
fn test_path_miss_is_plain_not_found() {
    let router = router();
    router.add_route(route("/foo", "handler", &[Method::GET]));

    let result = router.match_route(&Method::PUT, "/bar").unwrap();
    assert!(result.is_failure());
    assert!(!result.is_method_failure());
    assert!(result.allowed_methods().is_empty());
}

#[test]
fn test_empty_registry_is_not_found() {
    let router = router();
    let result = router.match_route(&Method::GET, "/foo").unwrap();
    assert!(result.is_failure());
    assert!(!result.is_method_failure());
}

#[test]
fn test_any_route_matches_every_method() {
    let router = router();
    router.add_route(any_route("/foo", "handler"));

    for method in [
        Method::GET,
        Method::POST,
        Method::PUT,
        Method::PATCH,
        Method::DELETE,
        Method::HEAD,
        Method::OPTIONS,
    ] {
        let result = router.match_route(&method, "/foo").unwrap();
        assert!(result.is_success(), "{} should match an any-method route", method);
    }
}

#[test]
fn test_empty_method_set_accepts_nothing() {
    let router = router();
    router.add_route(route("/foo", "handler", &[]));

    for method in [Method::GET, Method::POST, Method::PATCH] {
        let result = router.match_route(&method, "/foo").unwrap();
        assert!(result.is_failure(), "{} should not match", method);
        assert!(!result.is_method_failure());
        assert!(result.allowed_methods().is_empty());
    }
}

#[test]
fn test_constraint_token_miss_is_not_found() {
    let router = router();
    let mut options = RouteOptions::default();
    options.tokens.insert("id".to_string(), "[0-9]+".to_string());
    router.add_route(
        named_route("user", "/users/{id}", "handler", &[Method::GET]).with_options(options),
    );

    assert!(router.match_route(&Method::GET, "/users/42").unwrap().is_success());

    let result = router.match_route(&Method::GET, "/users/abc").unwrap();
    assert!(result.is_failure());
    assert!(!result.is_method_failure());
}

#[test]
fn test_default_values_appear_in_params() {
    let router = router();
    let mut options = RouteOptions::default();
    options
        .values
        .insert("action".to_string(), "list".to_string());
    router.add_route(named_route("foo", "/foo", "handler", &[Method::GET]).with_options(options));

    let result = router.match_route(&Method::GET, "/foo").unwrap();
    let params = result.params().unwrap();
    assert_eq!(params.get("action").map(String::as_str), Some("list"));
}

#[test]
fn test_wildcard_captures_trailing_segments() {
    let router = router();
    let mut options = RouteOptions::default();
    options.wildcard = Some("rest".to_string());
    router.add_route(named_route("files", "/files", "handler", &[Method::GET]).with_options(options));

    let result = router.match_route(&Method::GET, "/files/a/b/c").unwrap();
    assert_eq!(
        result.params().unwrap().get("rest").map(String::as_str),
        Some("a/b/c")
    );

    let result = router.match_route(&Method::GET, "/files").unwrap();
    assert!(result.is_success());
    assert!(!result.params().unwrap().contains_key("rest"));
}

#[test]
fn test_generate_uri_from_routes() {
    let router = router();
    router.add_route(named_route("foo-create", "/foo", "handler", &[Method::POST]));
    router.add_route(named_route("foo-list", "/foo", "handler", &[Method::GET]));
    router.add_route(named_route("foo", "/foo/{id}", "handler", &[Method::GET]));
    router.add_route(Route::named("bar", "/bar/{baz}", "handler", None));

    assert_eq!(router.generate_uri("foo-create", &HashMap::new()).unwrap(), "/foo");
    assert_eq!(router.generate_uri("foo-list", &HashMap::new()).unwrap(), "/foo");
    assert_eq!(
        router.generate_uri("foo", &substitutions(&[("id", "bar")])).unwrap(),
        "/foo/bar"
    );
    assert_eq!(
        router.generate_uri("bar", &substitutions(&[("baz", "BAZ")])).unwrap(),
        "/bar/BAZ"
    );
}

#[test]
fn test_generated_uri_is_not_encoded() {
    let router = router();
    router.add_route(named_route("foo", "/foo/{id}", "handler", &[Method::GET]));

    assert_eq!(
        router
            .generate_uri("foo", &substitutions(&[("id", "bar is not encoded")]))
            .unwrap(),
        "/foo/bar is not encoded"
    );
}

#[test]
fn test_generate_unknown_name_fails() {
    let router = router();
    router.add_route(named_route("foo", "/foo", "handler", &[Method::GET]));

    let err = router.generate_uri("bar", &HashMap::new()).unwrap_err();
    assert!(matches!(err, RouterError::RouteNotFound { .. }));
}

#[test]
fn test_generate_then_match_round_trip() {
    let router = router();
    router.add_route(named_route("r", "/foo/{id}", "handler", &[Method::GET]));

    let uri = router.generate_uri("r", &substitutions(&[("id", "7")])).unwrap();
    assert_eq!(uri, "/foo/7");

    let result = router.match_route(&Method::GET, &uri).unwrap();
    assert!(result.is_success());
    assert_eq!(
        result.params().unwrap().get("id").map(String::as_str),
        Some("7")
    );
}

#[test]
fn test_match_is_idempotent() {
    let router = router();
    router.add_route(route("/foo", "list", &[Method::GET]));
    router.add_route(route("/foo", "create", &[Method::POST]));
    router.add_route(named_route("user", "/users/{id}", "handler", &[Method::GET]));

    let first = router.match_route(&Method::GET, "/users/9").unwrap();
    let second = router.match_route(&Method::GET, "/users/9").unwrap();
    assert_eq!(first.matched_name(), second.matched_name());
    assert_eq!(first.params(), second.params());

    let first = router.match_route(&Method::PATCH, "/foo").unwrap();
    let second = router.match_route(&Method::PATCH, "/foo").unwrap();
    assert_eq!(first.allowed_methods(), second.allowed_methods());
}

#[test]
fn test_duplicate_names_fail_on_first_use() {
    let router = router();
    router.add_route(named_route("foo", "/foo", "handler", &[Method::GET]));
    router.add_route(named_route("foo", "/bar", "handler", &[Method::GET]));

    let err = router.match_route(&Method::GET, "/foo").unwrap_err();
    assert!(matches!(err, RouterError::DuplicateName { .. }));
}

#[test]
fn test_malformed_template_fails_on_first_use() {
    let router = router();
    router.add_route(route("/foo/{id", "handler", &[Method::GET]));

    let err = router.generate_uri("anything", &HashMap::new()).unwrap_err();
    assert!(matches!(err, RouterError::Pattern(_)));
}

#[test]
fn test_same_path_different_names_resolve_in_registration_order() {
    // Two names share a path and a method; the earlier registration wins.
    let router = router();
    router.add_route(named_route("first", "/foo", "first-handler", &[Method::GET]));
    router.add_route(named_route("second", "/foo", "second-handler", &[Method::GET]));

    let result = router.match_route(&Method::GET, "/foo").unwrap();
    assert!(result.is_success());
    assert_eq!(result.matched_name(), Some("first"));
    assert_eq!(result.middleware(), Some(&"first-handler"));
}

#[test]
fn test_match_request_uses_method_and_path() {
    let router = router();
    router.add_route(named_route("user", "/users/{id}", "handler", &[Method::GET]));

    let request = Request::builder()
        .method(Method::GET)
        .uri("http://example.com/users/3?page=2")
        .body(())
        .unwrap();

    let result = router.match_request(&request).unwrap();
    assert!(result.is_success());
    assert_eq!(
        result.params().unwrap().get("id").map(String::as_str),
        Some("3")
    );
}
