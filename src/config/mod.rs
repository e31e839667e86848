//! Declarative route configuration.
//!
//! # Data Flow
//! ```text
//! routes.toml
//!     → loader.rs (read file, parse TOML)
//!     → validation.rs (collect every semantic error)
//!     → schema.rs RouteDef + host-supplied handler
//!     → Route values registered on the Router
//! ```
//!
//! # Design Decisions
//! - Definitions carry everything except the handler, which only the host
//!   application can supply
//! - Validation reports all problems at once, not just the first

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_routes, parse_routes, ConfigError};
pub use schema::{RouteDef, RoutesConfig};
pub use validation::{validate_config, ValidationError};
