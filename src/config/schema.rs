//! Route-definition schema.
//!
//! All types derive Serde traits for deserialization from config files.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::method::{parse_method, InvalidMethod};
use crate::route::{Route, RouteOptions};

/// Root of a routes configuration file.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RoutesConfig {
    /// Route definitions, in registration order.
    pub routes: Vec<RouteDef>,
}

/// One declarative route definition.
///
/// Mirrors [`Route`] minus the handler, which only the host application
/// can supply.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RouteDef {
    /// Explicit name for reverse generation; derived from path and
    /// methods when omitted.
    pub name: Option<String>,

    /// Path template (e.g. `/users/{id}`).
    pub path: String,

    /// Method tokens; omit to accept any method.
    pub allowed_methods: Option<Vec<String>>,

    /// Placeholder constraint patterns.
    #[serde(default)]
    pub tokens: HashMap<String, String>,

    /// Default parameter values.
    #[serde(default)]
    pub values: HashMap<String, String>,

    /// Name under which a trailing wildcard tail is captured.
    pub wildcard: Option<String>,
}

impl RouteDef {
    /// Attach a handler and build the concrete [`Route`].
    pub fn into_route<H>(self, handler: H) -> Result<Route<H>, InvalidMethod> {
        let methods = match self.allowed_methods {
            None => None,
            Some(tokens) => {
                let mut methods = Vec::with_capacity(tokens.len());
                for token in &tokens {
                    methods.push(parse_method(token)?);
                }
                Some(methods)
            }
        };

        let route = match self.name {
            Some(name) => Route::named(name, self.path, handler, methods),
            None => Route::new(self.path, handler, methods),
        };
        Ok(route.with_options(RouteOptions {
            tokens: self.tokens,
            values: self.values,
            wildcard: self.wildcard,
        }))
    }
}

#[cfg(test)]
mod tests {
    use http::Method;

    use super::*;

    #[test]
    fn test_into_route_parses_methods() {
        let def = RouteDef {
            name: Some("users".to_string()),
            path: "/users/{id}".to_string(),
            allowed_methods: Some(vec!["get".to_string(), "POST".to_string()]),
            tokens: HashMap::new(),
            values: HashMap::new(),
            wildcard: None,
        };

        let route = def.into_route(()).unwrap();
        assert_eq!(route.name(), "users");
        assert_eq!(
            route.allowed_methods().as_finite(),
            Some(&[Method::GET, Method::POST][..])
        );
    }

    #[test]
    fn test_into_route_rejects_bad_method_token() {
        let def = RouteDef {
            name: None,
            path: "/foo".to_string(),
            allowed_methods: Some(vec!["not a method".to_string()]),
            tokens: HashMap::new(),
            values: HashMap::new(),
            wildcard: None,
        };

        assert!(def.into_route(()).is_err());
    }

    #[test]
    fn test_omitted_methods_build_an_any_route() {
        let def = RouteDef {
            name: None,
            path: "/foo".to_string(),
            allowed_methods: None,
            tokens: HashMap::new(),
            values: HashMap::new(),
            wildcard: None,
        };

        let route = def.into_route(()).unwrap();
        assert!(route.allowed_methods().is_any());
    }
}
