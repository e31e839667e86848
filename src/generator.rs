//! Reverse URI generation.
//!
//! # Responsibilities
//! - Select the compiled template registered under a route name
//! - Substitute placeholder values, falling back to configured defaults
//! - Append a wildcard tail when one is supplied
//!
//! # Design Decisions
//! - Output is raw: values are inserted verbatim, never percent-encoded;
//!   escaping is the caller's concern

use std::collections::HashMap;

use crate::error::RouterError;
use crate::pattern::set::PatternSet;
use crate::pattern::template::TemplateSegment;

/// Render the path for the route registered under `name`.
///
/// Each placeholder takes its value from `substitutions`, then from the
/// route's configured defaults; a placeholder with neither is an error.
pub fn generate(
    patterns: &PatternSet,
    name: &str,
    substitutions: &HashMap<String, String>,
) -> Result<String, RouterError> {
    let entry = patterns.entry(name).ok_or_else(|| RouterError::RouteNotFound {
        name: name.to_string(),
    })?;
    let pattern = entry.pattern();

    let mut out = String::new();
    for segment in pattern.segments() {
        match segment {
            TemplateSegment::Literal(text) => out.push_str(text),
            TemplateSegment::Placeholder(placeholder) => {
                let value = substitutions
                    .get(placeholder)
                    .or_else(|| pattern.defaults().get(placeholder))
                    .ok_or_else(|| RouterError::MissingSubstitution {
                        route: name.to_string(),
                        placeholder: placeholder.clone(),
                    })?;
                out.push_str(value);
            }
        }
    }

    if let Some(wild) = pattern.wildcard() {
        if let Some(value) = substitutions
            .get(wild)
            .or_else(|| pattern.defaults().get(wild))
        {
            out.push('/');
            out.push_str(value);
        }
    }

    Ok(out)
}
