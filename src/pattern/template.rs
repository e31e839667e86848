//! Path-template compilation.
//!
//! # Responsibilities
//! - Tokenize a template like `/users/{id}` into literal and placeholder parts
//! - Compile the template into an anchored regular expression
//! - Test request paths and extract named parameters
//!
//! # Design Decisions
//! - A placeholder matches a single segment unless a constraint token
//!   replaces the default pattern
//! - The wildcard tail is optional and matches zero or more segments
//! - Extraction starts from the configured defaults and overlays whatever
//!   the path supplied

use std::collections::HashMap;

use regex::Regex;

use crate::error::PatternError;

/// Pattern for an unconstrained placeholder: exactly one path segment.
const SEGMENT_PATTERN: &str = "[^/]+";

/// Parameters extracted from a matched path.
pub type Params = HashMap<String, String>;

/// One parsed piece of a template, kept for reverse generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSegment {
    Literal(String),
    Placeholder(String),
}

/// A compiled path template.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    template: String,
    regex: Regex,
    segments: Vec<TemplateSegment>,
    placeholders: Vec<String>,
    defaults: HashMap<String, String>,
    wildcard: Option<String>,
}

impl CompiledPattern {
    /// Compile a template, applying placeholder constraint `tokens`,
    /// default `values`, and an optional wildcard tail name.
    pub fn compile(
        template: &str,
        tokens: &HashMap<String, String>,
        values: &HashMap<String, String>,
        wildcard: Option<&str>,
    ) -> Result<Self, PatternError> {
        let mut pattern = String::from("^");
        let mut segments = Vec::new();
        let mut placeholders: Vec<String> = Vec::new();

        let mut rest = template;
        while let Some(open) = rest.find('{') {
            let (literal, tail) = rest.split_at(open);
            if !literal.is_empty() {
                pattern.push_str(&regex::escape(literal));
                segments.push(TemplateSegment::Literal(literal.to_string()));
            }

            let tail = &tail[1..];
            let close = tail
                .find('}')
                .ok_or_else(|| PatternError::UnterminatedPlaceholder {
                    template: template.to_string(),
                })?;
            let name = &tail[..close];
            if !is_valid_name(name) {
                return Err(PatternError::InvalidPlaceholder {
                    template: template.to_string(),
                    name: name.to_string(),
                });
            }
            if placeholders.iter().any(|p| p == name) {
                return Err(PatternError::DuplicatePlaceholder {
                    template: template.to_string(),
                    name: name.to_string(),
                });
            }

            let token = tokens.get(name).map(String::as_str).unwrap_or(SEGMENT_PATTERN);
            pattern.push_str("(?P<");
            pattern.push_str(name);
            pattern.push('>');
            pattern.push_str(token);
            pattern.push(')');

            segments.push(TemplateSegment::Placeholder(name.to_string()));
            placeholders.push(name.to_string());
            rest = &tail[close + 1..];
        }

        if !rest.is_empty() {
            pattern.push_str(&regex::escape(rest));
            segments.push(TemplateSegment::Literal(rest.to_string()));
        }

        if let Some(wild) = wildcard {
            if !is_valid_name(wild) {
                return Err(PatternError::InvalidPlaceholder {
                    template: template.to_string(),
                    name: wild.to_string(),
                });
            }
            // Optional tail: the bare template, or a slash plus the rest.
            pattern.push_str("(?:/(?P<");
            pattern.push_str(wild);
            pattern.push_str(">.*))?");
        }
        pattern.push('$');

        let regex = Regex::new(&pattern).map_err(|source| PatternError::BadPattern {
            template: template.to_string(),
            source,
        })?;

        Ok(Self {
            template: template.to_string(),
            regex,
            segments,
            placeholders,
            defaults: values.clone(),
            wildcard: wildcard.map(str::to_string),
        })
    }

    /// The original template string.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Literal and placeholder pieces, in template order.
    pub fn segments(&self) -> &[TemplateSegment] {
        &self.segments
    }

    pub fn defaults(&self) -> &HashMap<String, String> {
        &self.defaults
    }

    pub fn wildcard(&self) -> Option<&str> {
        self.wildcard.as_deref()
    }

    /// Test a concrete request path; on a match, extract named parameters.
    ///
    /// Configured defaults seed the parameter map and may add names that
    /// do not appear in the template at all; captured values overlay them.
    /// An empty wildcard tail does not shadow a default.
    pub fn test(&self, path: &str) -> Option<Params> {
        let captures = self.regex.captures(path)?;

        let mut params = self.defaults.clone();
        for name in &self.placeholders {
            if let Some(found) = captures.name(name) {
                params.insert(name.clone(), found.as_str().to_string());
            }
        }
        if let Some(wild) = &self.wildcard {
            if let Some(found) = captures.name(wild) {
                if !found.as_str().is_empty() {
                    params.insert(wild.clone(), found.as_str().to_string());
                }
            }
        }
        Some(params)
    }
}

/// Placeholder names double as regex capture-group names, so they are
/// restricted to identifier characters.
fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
