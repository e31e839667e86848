//! Caller-facing route registration records.

use std::collections::HashMap;

use http::Method;

use crate::method::MethodSet;

/// Per-route pattern options.
#[derive(Debug, Clone, Default)]
pub struct RouteOptions {
    /// Constraint patterns applied to named placeholders
    /// (placeholder name → pattern).
    pub tokens: HashMap<String, String>,

    /// Default parameter values, used when a parameter is absent from the
    /// matched path or from the substitutions of a generated URI.
    pub values: HashMap<String, String>,

    /// Name under which any trailing path segments are captured.
    pub wildcard: Option<String>,
}

/// A single route registration.
///
/// The handler type `H` is opaque to the router: it is stored at
/// registration and handed back untouched on a successful match.
#[derive(Debug, Clone)]
pub struct Route<H> {
    name: String,
    path: String,
    handler: H,
    allowed_methods: MethodSet,
    options: RouteOptions,
}

impl<H> Route<H> {
    /// Create a route with a derived name. `None` for `methods` means the
    /// route accepts any method.
    pub fn new(path: impl Into<String>, handler: H, methods: Option<Vec<Method>>) -> Self {
        let path = path.into();
        let allowed_methods = MethodSet::from_option(methods);
        let name = default_name(&path, &allowed_methods);
        Self {
            name,
            path,
            handler,
            allowed_methods,
            options: RouteOptions::default(),
        }
    }

    /// Create a route under an explicit name for reverse generation.
    pub fn named(
        name: impl Into<String>,
        path: impl Into<String>,
        handler: H,
        methods: Option<Vec<Method>>,
    ) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            handler,
            allowed_methods: MethodSet::from_option(methods),
            options: RouteOptions::default(),
        }
    }

    /// Attach pattern options (constraint tokens, defaults, wildcard).
    pub fn with_options(mut self, options: RouteOptions) -> Self {
        self.options = options;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// The handler supplied at registration, never interpreted here.
    pub fn handler(&self) -> &H {
        &self.handler
    }

    pub fn allowed_methods(&self) -> &MethodSet {
        &self.allowed_methods
    }

    pub fn options(&self) -> &RouteOptions {
        &self.options
    }
}

/// Derive a default route name from path and methods.
///
/// Default names must stay unique when the same path is registered once
/// per method, so finite method sets carry a `^`-joined discriminator
/// (`/foo^GET:POST`); any-method routes use the bare path.
fn default_name(path: &str, methods: &MethodSet) -> String {
    match methods.as_finite() {
        None => path.to_string(),
        Some(list) => {
            let joined = list
                .iter()
                .map(Method::as_str)
                .collect::<Vec<_>>()
                .join(":");
            format!("{}^{}", path, joined)
        }
    }
}
