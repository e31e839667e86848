//! Route-definition validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Catch problems that would otherwise surface as injection failures at
//!   request time: bad paths, bad method tokens, bad constraint patterns
//! - Detect explicit names that collide
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: RoutesConfig → Result<(), Vec<ValidationError>>

use thiserror::Error;

use crate::config::schema::RoutesConfig;
use crate::method::parse_method;

/// A single problem found in a routes configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A route definition has an empty path.
    #[error("route #{index}: path is empty")]
    EmptyPath { index: usize },

    /// A route path does not start with a slash.
    #[error("route #{index}: path {path:?} must start with '/'")]
    RelativePath { index: usize, path: String },

    /// A method token does not name a valid HTTP method.
    #[error("route #{index}: invalid method token {token:?}")]
    BadMethod { index: usize, token: String },

    /// A placeholder constraint is not a valid pattern.
    #[error("route #{index}: constraint for {param:?} does not compile: {message}")]
    BadConstraint {
        index: usize,
        param: String,
        message: String,
    },

    /// Two definitions share an explicit name.
    #[error("duplicate route name {name:?}")]
    DuplicateName { name: String },
}

/// Validate a parsed configuration, returning every problem found.
pub fn validate_config(config: &RoutesConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let mut seen_names: Vec<&str> = Vec::new();

    for (index, def) in config.routes.iter().enumerate() {
        if def.path.is_empty() {
            errors.push(ValidationError::EmptyPath { index });
        } else if !def.path.starts_with('/') {
            errors.push(ValidationError::RelativePath {
                index,
                path: def.path.clone(),
            });
        }

        if let Some(methods) = &def.allowed_methods {
            for token in methods {
                if parse_method(token).is_err() {
                    errors.push(ValidationError::BadMethod {
                        index,
                        token: token.clone(),
                    });
                }
            }
        }

        for (param, constraint) in &def.tokens {
            if let Err(err) = regex::Regex::new(constraint) {
                errors.push(ValidationError::BadConstraint {
                    index,
                    param: param.clone(),
                    message: err.to_string(),
                });
            }
        }

        if let Some(name) = &def.name {
            if seen_names.contains(&name.as_str()) {
                errors.push(ValidationError::DuplicateName { name: name.clone() });
            } else {
                seen_names.push(name);
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
