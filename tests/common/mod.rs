//! Shared helpers for the router integration tests.

use std::collections::HashMap;

use http::Method;
use signpost::{Route, Router};

/// Handlers in these tests are plain tokens; the router never looks at them.
pub type Handler = &'static str;

pub fn router() -> Router<Handler> {
    Router::new()
}

pub fn route(path: &str, handler: Handler, methods: &[Method]) -> Route<Handler> {
    Route::new(path, handler, Some(methods.to_vec()))
}

pub fn named_route(
    name: &str,
    path: &str,
    handler: Handler,
    methods: &[Method],
) -> Route<Handler> {
    Route::named(name, path, handler, Some(methods.to_vec()))
}

pub fn any_route(path: &str, handler: Handler) -> Route<Handler> {
    Route::new(path, handler, None)
}

pub fn substitutions(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}
