//! Route-configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::RoutesConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading the file failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid TOML for the routes schema.
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// The parsed definitions failed semantic validation.
    #[error("validation failed: {}", format_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate route definitions from a TOML file.
pub fn load_routes(path: &Path) -> Result<RoutesConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_routes(&content)
}

/// Parse and validate route definitions from TOML text.
pub fn parse_routes(content: &str) -> Result<RoutesConfig, ConfigError> {
    let config: RoutesConfig = toml::from_str(content)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    tracing::debug!(route_count = config.routes.len(), "parsed route definitions");
    Ok(config)
}
