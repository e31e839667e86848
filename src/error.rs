//! Error definitions shared across the router.

use thiserror::Error;

/// Errors raised while compiling a path template.
///
/// These are configuration errors: they surface when buffered routes are
/// injected, not per request, and the registration must be fixed.
#[derive(Debug, Error)]
pub enum PatternError {
    /// A `{` placeholder was opened but never closed.
    #[error("unterminated placeholder in template {template:?}")]
    UnterminatedPlaceholder { template: String },

    /// A placeholder name is empty or not a valid identifier.
    #[error("invalid placeholder name {name:?} in template {template:?}")]
    InvalidPlaceholder { template: String, name: String },

    /// The same parameter name appears twice in one template.
    #[error("duplicate placeholder {name:?} in template {template:?}")]
    DuplicatePlaceholder { template: String, name: String },

    /// A constraint token (or the assembled template) is not a valid pattern.
    #[error("template {template:?} does not compile: {source}")]
    BadPattern {
        template: String,
        #[source]
        source: regex::Error,
    },
}

/// Errors surfaced by router operations.
///
/// Per-request routing misses are never errors; they are reported as
/// [`RouteResult::Failure`](crate::result::RouteResult). The variants here
/// cover fatal configuration problems raised at injection time and the
/// recoverable failures of reverse URI generation.
#[derive(Debug, Error)]
pub enum RouterError {
    /// A registered route failed to compile at injection time.
    #[error(transparent)]
    Pattern(#[from] PatternError),

    /// Two registered routes share a name, making reverse generation
    /// ambiguous.
    #[error("duplicate route name {name:?}")]
    DuplicateName { name: String },

    /// URI generation was asked for a name no route carries.
    #[error("no route registered under the name {name:?}")]
    RouteNotFound { name: String },

    /// URI generation hit a placeholder with no substitution and no
    /// configured default.
    #[error("no substitution for placeholder {placeholder:?} in route {route:?}")]
    MissingSubstitution { route: String, placeholder: String },
}
