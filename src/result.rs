//! Route match outcomes.

use std::sync::Arc;

use http::Method;

use crate::pattern::template::Params;
use crate::route::Route;

/// The outcome of matching a request against the registered routes.
///
/// Exactly one variant applies. A failure with a non-empty allowed-method
/// list is a method-not-allowed condition (the path exists); an empty list
/// means the path is unknown.
#[derive(Debug, Clone)]
pub enum RouteResult<H> {
    /// A route matched; carries the caller's registration and the
    /// parameters extracted from the path.
    Success {
        route: Arc<Route<H>>,
        params: Params,
    },

    /// No route applies to the request.
    Failure { allowed: Vec<Method> },
}

impl<H> RouteResult<H> {
    pub(crate) fn success(route: Arc<Route<H>>, params: Params) -> Self {
        RouteResult::Success { route, params }
    }

    pub(crate) fn failure(allowed: Vec<Method>) -> Self {
        RouteResult::Failure { allowed }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, RouteResult::Success { .. })
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, RouteResult::Failure { .. })
    }

    /// True only for failures carrying a non-empty allowed-method list.
    pub fn is_method_failure(&self) -> bool {
        matches!(self, RouteResult::Failure { allowed } if !allowed.is_empty())
    }

    /// The matched registration, on success.
    pub fn matched_route(&self) -> Option<&Route<H>> {
        match self {
            RouteResult::Success { route, .. } => Some(route.as_ref()),
            RouteResult::Failure { .. } => None,
        }
    }

    /// The matched route's name, on success.
    pub fn matched_name(&self) -> Option<&str> {
        self.matched_route().map(Route::name)
    }

    /// The handler supplied at registration, passed through untouched.
    pub fn middleware(&self) -> Option<&H> {
        self.matched_route().map(Route::handler)
    }

    /// Parameters extracted from the matched path, on success.
    pub fn params(&self) -> Option<&Params> {
        match self {
            RouteResult::Success { params, .. } => Some(params),
            RouteResult::Failure { .. } => None,
        }
    }

    /// Methods the path would accept; empty for success results and for
    /// failures where no method information exists.
    pub fn allowed_methods(&self) -> &[Method] {
        match self {
            RouteResult::Success { .. } => &[],
            RouteResult::Failure { allowed } => allowed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_failure_requires_allowed_methods() {
        let result: RouteResult<()> = RouteResult::failure(vec![Method::GET]);
        assert!(result.is_failure());
        assert!(result.is_method_failure());

        let result: RouteResult<()> = RouteResult::failure(Vec::new());
        assert!(result.is_failure());
        assert!(!result.is_method_failure());
    }

    #[test]
    fn test_success_exposes_route_fields() {
        let route = Arc::new(Route::named("foo", "/foo", "handler", None));
        let result = RouteResult::success(Arc::clone(&route), Params::new());

        assert!(result.is_success());
        assert_eq!(result.matched_name(), Some("foo"));
        assert_eq!(result.middleware(), Some(&"handler"));
        assert!(result.allowed_methods().is_empty());
    }
}
