//! HTTP method sets and the implicit-method policy.

use http::Method;
use thiserror::Error;

/// Methods treated as satisfied by every route whose path matches,
/// regardless of the methods the route declares.
pub const IMPLICIT_METHODS: [Method; 2] = [Method::HEAD, Method::OPTIONS];

/// Returns true when the method is implicitly supported on any matched path.
pub fn is_implicit(method: &Method) -> bool {
    IMPLICIT_METHODS.contains(method)
}

/// The set of HTTP methods a route accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MethodSet {
    /// Every method is permitted.
    Any,

    /// Only the listed methods are permitted. An empty list is a
    /// degenerate route that accepts nothing (implicit methods aside);
    /// it is never conflated with [`MethodSet::Any`].
    Only(Vec<Method>),
}

impl MethodSet {
    /// Normalize an optional method list: omission always means `Any`.
    pub fn from_option(methods: Option<Vec<Method>>) -> Self {
        match methods {
            None => MethodSet::Any,
            Some(methods) => MethodSet::Only(dedup(methods)),
        }
    }

    /// Whether the set permits the given method.
    pub fn allows(&self, method: &Method) -> bool {
        match self {
            MethodSet::Any => true,
            MethodSet::Only(methods) => methods.contains(method),
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self, MethodSet::Any)
    }

    /// The finite method list, or `None` for the `Any` sentinel.
    pub fn as_finite(&self) -> Option<&[Method]> {
        match self {
            MethodSet::Any => None,
            MethodSet::Only(methods) => Some(methods),
        }
    }
}

impl From<Vec<Method>> for MethodSet {
    fn from(methods: Vec<Method>) -> Self {
        MethodSet::Only(dedup(methods))
    }
}

/// A method token that does not name a valid HTTP method.
#[derive(Debug, Clone, Error)]
#[error("invalid HTTP method token {token:?}")]
pub struct InvalidMethod {
    pub token: String,
}

/// Parse a method token, normalizing to uppercase first so that
/// configuration input like `"get"` maps to `GET` rather than an
/// extension method.
pub fn parse_method(token: &str) -> Result<Method, InvalidMethod> {
    let upper = token.to_ascii_uppercase();
    Method::from_bytes(upper.as_bytes()).map_err(|_| InvalidMethod {
        token: token.to_string(),
    })
}

fn dedup(methods: Vec<Method>) -> Vec<Method> {
    let mut out: Vec<Method> = Vec::with_capacity(methods.len());
    for method in methods {
        if !out.contains(&method) {
            out.push(method);
        }
    }
    out
}
