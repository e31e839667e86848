//! Path-pattern compilation and matching.
//!
//! # Data Flow
//! ```text
//! Path template ("/users/{id}", tokens, defaults, wildcard)
//!     → template.rs (compile to anchored regex with named captures)
//!     → set.rs (ordered registry of compiled patterns)
//!     → find(method, path): Matched / Failed / NoCandidate
//! ```
//!
//! # Design Decisions
//! - Placeholders match one path segment unless a constraint token widens
//!   or narrows them
//! - First match wins, in registration order
//! - A failed lookup stays informative: it reports whether any pattern at
//!   least matched the path, so the caller can tell a 405 from a 404

pub mod set;
pub mod template;
