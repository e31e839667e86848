//! Two-phase route registry.
//!
//! # Data Flow
//! ```text
//! add() → pending buffer (registration order preserved)
//!     → ensure_injected() on first match or generate:
//!         compile template → pattern set entry
//!         finite methods → merge into path-method index
//!     → injected list (resolution back to caller routes)
//! ```
//!
//! # Design Decisions
//! - Injection is idempotent and at-most-once per route
//! - Only finite method sets populate the path-method index; an indexed
//!   path never carries an empty method set
//! - Duplicate route names are a fatal configuration error, caught here

use std::collections::HashMap;
use std::sync::Arc;

use http::Method;

use crate::error::RouterError;
use crate::pattern::set::{PatternEntry, PatternSet};
use crate::pattern::template::CompiledPattern;
use crate::route::Route;

/// Maps a path template to the union of finite allowed methods across all
/// routes sharing that exact template.
#[derive(Debug, Default)]
pub struct PathMethodIndex {
    methods: HashMap<String, Vec<Method>>,
}

impl PathMethodIndex {
    /// Merge a route's finite methods into the entry for its path,
    /// preserving first-seen order and dropping duplicates. Empty lists
    /// are ignored entirely.
    fn merge(&mut self, path: &str, methods: &[Method]) {
        if methods.is_empty() {
            return;
        }
        let entry = self.methods.entry(path.to_string()).or_default();
        for method in methods {
            if !entry.contains(method) {
                entry.push(method.clone());
            }
        }
    }

    /// The merged methods for a path template, if any finite-set route
    /// was registered under it.
    pub fn get(&self, path: &str) -> Option<&[Method]> {
        self.methods.get(path).map(Vec::as_slice)
    }
}

/// Buffered route registrations plus the compiled state derived from them.
#[derive(Debug)]
pub struct RouteRegistry<H> {
    pending: Vec<Arc<Route<H>>>,
    injected: Vec<Arc<Route<H>>>,
    patterns: PatternSet,
    path_methods: PathMethodIndex,
}

impl<H> RouteRegistry<H> {
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
            injected: Vec::new(),
            patterns: PatternSet::default(),
            path_methods: PathMethodIndex::default(),
        }
    }

    /// Buffer a route; compilation happens on first use.
    pub fn add(&mut self, route: Route<H>) {
        self.pending.push(Arc::new(route));
    }

    /// Compile and inject every buffered route, in registration order.
    ///
    /// Idempotent: each route is injected at most once, and a call with an
    /// empty buffer is a no-op. A malformed template or duplicate name
    /// aborts injection with a configuration error.
    pub fn ensure_injected(&mut self) -> Result<(), RouterError> {
        if self.pending.is_empty() {
            return Ok(());
        }

        let pending = std::mem::take(&mut self.pending);
        for route in pending {
            if self.injected.iter().any(|r| r.name() == route.name()) {
                return Err(RouterError::DuplicateName {
                    name: route.name().to_string(),
                });
            }

            let options = route.options();
            let pattern = CompiledPattern::compile(
                route.path(),
                &options.tokens,
                &options.values,
                options.wildcard.as_deref(),
            )?;
            self.patterns.add(PatternEntry::new(
                route.name().to_string(),
                pattern,
                route.allowed_methods().clone(),
            ));

            if let Some(methods) = route.allowed_methods().as_finite() {
                self.path_methods.merge(route.path(), methods);
            }

            tracing::debug!(route = %route.name(), path = %route.path(), "injected route");
            self.injected.push(route);
        }
        Ok(())
    }

    pub fn patterns(&self) -> &PatternSet {
        &self.patterns
    }

    pub fn path_methods(&self) -> &PathMethodIndex {
        &self.path_methods
    }

    /// Resolve a compiled-entry name back to the caller's route.
    ///
    /// The first injected route with that name wins; when no name matches,
    /// falls back to path equality plus method acceptance. Registration
    /// order breaks all ties.
    pub fn resolve(&self, name: &str, method: &Method) -> Option<&Arc<Route<H>>> {
        if let Some(route) = self.injected.iter().find(|r| r.name() == name) {
            return Some(route);
        }
        let path = self.patterns.entry(name)?.path();
        self.injected
            .iter()
            .find(|r| r.path() == path && r.allowed_methods().allows(method))
    }
}

impl<H> Default for RouteRegistry<H> {
    fn default() -> Self {
        Self::new()
    }
}
