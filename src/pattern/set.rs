//! Compiled-pattern registry consulted during matching.
//!
//! # Responsibilities
//! - Hold compiled route patterns in registration order
//! - Find a route for a request method and path
//! - Report failures with enough context to classify them downstream
//!
//! # Design Decisions
//! - First match wins; registration order breaks ties
//! - The failure descriptor names the first candidate whose pattern
//!   matched the path, so a method-level miss stays distinguishable from
//!   a path-level miss

use http::Method;

use crate::method::MethodSet;
use crate::pattern::template::{CompiledPattern, Params};

/// One compiled route inside the set.
#[derive(Debug, Clone)]
pub struct PatternEntry {
    name: String,
    pattern: CompiledPattern,
    allows: MethodSet,
}

impl PatternEntry {
    pub fn new(name: String, pattern: CompiledPattern, allows: MethodSet) -> Self {
        Self {
            name,
            pattern,
            allows,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The path template this entry was compiled from.
    pub fn path(&self) -> &str {
        self.pattern.template()
    }

    pub fn pattern(&self) -> &CompiledPattern {
        &self.pattern
    }

    pub fn allows(&self) -> &MethodSet {
        &self.allows
    }
}

/// Outcome of asking the set for a route matching a request.
#[derive(Debug, Clone, PartialEq)]
pub enum MatchOutcome {
    /// A pattern matched the path and its method set allows the request
    /// method.
    Matched { name: String, params: Params },

    /// No candidate satisfied both path and method.
    Failed {
        /// True when at least one pattern matched the path; false when the
        /// failure is purely path-level.
        path_matched: bool,
        /// Name of the closest candidate. Only meaningful when
        /// `path_matched` is true.
        name: String,
        /// The closest candidate's finite method list; empty for a
        /// path-level miss or an accepts-nothing route.
        allowed: Vec<Method>,
    },

    /// The set is empty; there was nothing to try.
    NoCandidate,
}

/// Ordered collection of compiled patterns.
#[derive(Debug, Default)]
pub struct PatternSet {
    entries: Vec<PatternEntry>,
}

impl PatternSet {
    pub fn add(&mut self, entry: PatternEntry) {
        self.entries.push(entry);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Find a route for the request; the first entry that matches both
    /// path and method wins.
    ///
    /// When no entry satisfies both, the first entry that at least matched
    /// the path is reported, so the caller can distinguish a
    /// method-not-allowed condition from a plain miss.
    pub fn find(&self, method: &Method, path: &str) -> MatchOutcome {
        if self.entries.is_empty() {
            return MatchOutcome::NoCandidate;
        }

        let mut path_failure: Option<&PatternEntry> = None;
        for entry in &self.entries {
            let params = match entry.pattern.test(path) {
                Some(params) => params,
                None => continue,
            };
            if entry.allows.allows(method) {
                return MatchOutcome::Matched {
                    name: entry.name.clone(),
                    params,
                };
            }
            if path_failure.is_none() {
                path_failure = Some(entry);
            }
        }

        match path_failure {
            Some(entry) => MatchOutcome::Failed {
                path_matched: true,
                name: entry.name.clone(),
                allowed: entry
                    .allows
                    .as_finite()
                    .map(<[Method]>::to_vec)
                    .unwrap_or_default(),
            },
            None => MatchOutcome::Failed {
                path_matched: false,
                name: self.entries[0].name.clone(),
                allowed: Vec::new(),
            },
        }
    }

    /// Re-extract parameters for a named entry against a path.
    ///
    /// Used when an implicit method promotes a method-level failure back
    /// into a success.
    pub fn extract(&self, name: &str, path: &str) -> Option<Params> {
        self.entry(name).and_then(|entry| entry.pattern.test(path))
    }

    /// Look up an entry by name.
    pub fn entry(&self, name: &str) -> Option<&PatternEntry> {
        self.entries.iter().find(|entry| entry.name() == name)
    }
}
