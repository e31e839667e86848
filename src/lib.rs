//! Path-pattern HTTP request routing with method-aware failure
//! classification and reverse URI generation.

pub mod config;
pub mod error;
pub mod generator;
pub mod method;
pub mod pattern;
pub mod registry;
pub mod result;
pub mod route;
pub mod router;

pub use error::{PatternError, RouterError};
pub use method::MethodSet;
pub use result::RouteResult;
pub use route::{Route, RouteOptions};
pub use router::Router;
