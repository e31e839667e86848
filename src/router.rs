//! The router: matcher engine and result marshalling.
//!
//! # Data Flow
//! ```text
//! add_route() → registry buffer
//! match_route(method, path):
//!     → ensure routes injected (lazy, at most once per route)
//!     → pattern set find(method, path)
//!     → classify: success / not-found / method-not-allowed
//!     → resolve compiled name back to the caller's Route
//! generate_uri(name, substitutions):
//!     → ensure routes injected
//!     → render the named template, raw
//! ```
//!
//! # Design Decisions
//! - HEAD and OPTIONS are honored on every route whose path matches; the
//!   policy lives here because the compiled matcher has no concept of it
//! - The merged path-method index outranks a single failed candidate's
//!   method list, so same-path registrations report their union on a 405
//! - A resolution failure is a bridging inconsistency the caller cannot
//!   act on; it degrades to not-found instead of raising

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use http::{Method, Request};

use crate::error::RouterError;
use crate::generator;
use crate::method;
use crate::pattern::set::MatchOutcome;
use crate::pattern::template::Params;
use crate::registry::RouteRegistry;
use crate::result::RouteResult;
use crate::route::Route;

/// Path-pattern router with method-aware failure classification.
///
/// Routes are buffered by [`add_route`](Router::add_route) and compiled on
/// the first call to [`match_route`](Router::match_route) or
/// [`generate_uri`](Router::generate_uri). The registry sits behind a
/// mutex so lazy injection stays safe when the host serves requests from
/// multiple threads; one match completes before another proceeds.
#[derive(Debug)]
pub struct Router<H> {
    registry: Mutex<RouteRegistry<H>>,
}

impl<H> Router<H> {
    pub fn new() -> Self {
        Self {
            registry: Mutex::new(RouteRegistry::new()),
        }
    }

    /// Buffer a route registration. Routes registered after a match took
    /// place are picked up by the next match.
    pub fn add_route(&self, route: Route<H>) {
        self.lock().add(route);
    }

    /// Match a request method and path against the registered routes.
    ///
    /// Routing misses are not errors: they come back as
    /// [`RouteResult::Failure`]. `Err` is reserved for configuration
    /// problems (malformed templates, duplicate names) surfaced by lazy
    /// injection.
    pub fn match_route(
        &self,
        request_method: &Method,
        path: &str,
    ) -> Result<RouteResult<H>, RouterError> {
        let mut registry = self.lock();
        registry.ensure_injected()?;

        let result = match registry.patterns().find(request_method, path) {
            MatchOutcome::Matched { name, params } => {
                marshal_matched(&registry, &name, request_method, params)
            }
            MatchOutcome::NoCandidate => RouteResult::failure(Vec::new()),
            MatchOutcome::Failed {
                path_matched: false,
                ..
            } => RouteResult::failure(Vec::new()),
            MatchOutcome::Failed {
                path_matched: true,
                name,
                allowed,
            } => marshal_method_failure(&registry, request_method, path, &name, allowed),
        };
        Ok(result)
    }

    /// Match an [`http::Request`] by its method and URI path.
    pub fn match_request<B>(&self, request: &Request<B>) -> Result<RouteResult<H>, RouterError> {
        self.match_route(request.method(), request.uri().path())
    }

    /// Render the path registered under `name`, filling placeholders from
    /// `substitutions` and the route's configured defaults.
    ///
    /// The result is raw: no percent-encoding is applied.
    pub fn generate_uri(
        &self,
        name: &str,
        substitutions: &HashMap<String, String>,
    ) -> Result<String, RouterError> {
        let mut registry = self.lock();
        registry.ensure_injected()?;
        generator::generate(registry.patterns(), name, substitutions)
    }

    fn lock(&self) -> MutexGuard<'_, RouteRegistry<H>> {
        self.registry.lock().expect("route registry mutex poisoned")
    }
}

impl<H> Default for Router<H> {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a success result for a compiled match, resolving back to the
/// caller's route. Resolution failure degrades to not-found.
fn marshal_matched<H>(
    registry: &RouteRegistry<H>,
    name: &str,
    request_method: &Method,
    params: Params,
) -> RouteResult<H> {
    match registry.resolve(name, request_method) {
        Some(route) => RouteResult::success(route.clone(), params),
        None => {
            tracing::warn!(route = %name, "matched pattern did not resolve to a registered route");
            RouteResult::failure(Vec::new())
        }
    }
}

/// Classify a failure whose closest candidate matched the path.
fn marshal_method_failure<H>(
    registry: &RouteRegistry<H>,
    request_method: &Method,
    path: &str,
    name: &str,
    allowed: Vec<Method>,
) -> RouteResult<H> {
    // Implicit methods succeed on any route whose path matched.
    if method::is_implicit(request_method) {
        if let Some(params) = registry.patterns().extract(name, path) {
            return marshal_matched(registry, name, request_method, params);
        }
        tracing::warn!(route = %name, "failed route no longer matches its own path");
        return RouteResult::failure(Vec::new());
    }

    // The union merged across every registration sharing the path
    // outranks the single failed candidate's list.
    let template = strip_method_discriminator(name);
    if let Some(methods) = registry.path_methods().get(template) {
        return RouteResult::failure(methods.to_vec());
    }

    if !allowed.is_empty() && !allowed.contains(request_method) {
        return RouteResult::failure(allowed);
    }

    RouteResult::failure(Vec::new())
}

/// Default route names are `path^METHODS`; the path-method index is keyed
/// by the bare path.
fn strip_method_discriminator(name: &str) -> &str {
    match name.find('^') {
        Some(index) => &name[..index],
        None => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get(path: &str) -> Route<&'static str> {
        Route::new(path, "middleware", Some(vec![Method::GET]))
    }

    #[test]
    fn test_strip_method_discriminator() {
        assert_eq!(strip_method_discriminator("/foo^GET:POST"), "/foo");
        assert_eq!(strip_method_discriminator("/foo"), "/foo");
        assert_eq!(strip_method_discriminator("foo-create"), "foo-create");
    }

    #[test]
    fn test_direct_hit_resolves_to_caller_route() {
        let router = Router::new();
        router.add_route(get("/foo"));

        let result = router.match_route(&Method::GET, "/foo").unwrap();
        assert!(result.is_success());
        assert_eq!(result.matched_name(), Some("/foo^GET"));
        assert_eq!(result.middleware(), Some(&"middleware"));
    }

    #[test]
    fn test_head_promotes_method_failure_to_success() {
        let router = Router::new();
        router.add_route(Route::new("/foo", "middleware", Some(vec![Method::POST])));

        let result = router.match_route(&Method::HEAD, "/foo").unwrap();
        assert!(result.is_success());
    }

    #[test]
    fn test_registration_after_match_is_picked_up() {
        let router = Router::new();
        router.add_route(get("/foo"));
        assert!(router.match_route(&Method::GET, "/bar").unwrap().is_failure());

        router.add_route(get("/bar"));
        assert!(router.match_route(&Method::GET, "/bar").unwrap().is_success());
    }

    #[test]
    fn test_injection_error_surfaces_on_match() {
        let router = Router::new();
        router.add_route(get("/foo/{id"));

        let err = router.match_route(&Method::GET, "/foo").unwrap_err();
        assert!(matches!(err, RouterError::Pattern(_)));
    }
}
