//! Configuration validation
//!
//! Checks that loaded configuration values are consistent and within valid
//! ranges before the application starts using them.

use crate::{CerebraConfig, ConfigError, ConfigResult};

const KNOWN_LOG_LEVELS: [&str; 5] = ["ERROR", "WARNING", "INFO", "DEBUG", "TRACE"];

/// Validation errors that can occur during config validation
#[derive(Debug, Clone)]
pub enum ConfigValidationError {
    InvalidValue { field: String, reason: String },
    MissingRequired { field: String },
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidValue { field, reason } => {
                write!(f, "Invalid configuration value for {}: {}", field, reason)
            }
            Self::MissingRequired { field } => {
                write!(f, "Missing required configuration: {}", field)
            }
        }
    }
}

/// Validate the complete configuration
///
/// Checks for:
/// - A recognised log level
/// - A positive surface vertex bound
/// - A non-empty storage directory
///
/// # Errors
///
/// Returns `ConfigError::ValidationError` with details if validation fails
pub fn validate_config(config: &CerebraConfig) -> ConfigResult<()> {
    let mut errors = Vec::new();

    let level = config.system.log_level.to_uppercase();
    if !KNOWN_LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ConfigValidationError::InvalidValue {
            field: "system.log_level".to_string(),
            reason: format!(
                "'{}' is not one of {}",
                config.system.log_level,
                KNOWN_LOG_LEVELS.join(", ")
            ),
        });
    }

    if config.validation.max_surface_vertices == 0 {
        errors.push(ConfigValidationError::InvalidValue {
            field: "validation.max_surface_vertices".to_string(),
            reason: "the bound must be positive; 0 would reject every surface".to_string(),
        });
    }

    if config.storage.data_dir.as_os_str().is_empty() {
        errors.push(ConfigValidationError::MissingRequired {
            field: "storage.data_dir".to_string(),
        });
    }

    if !errors.is_empty() {
        let error_messages = errors
            .iter()
            .map(|e| format!("  - {}", e))
            .collect::<Vec<_>>()
            .join("\n");

        return Err(ConfigError::ValidationError(format!(
            "Configuration validation failed:\n{}",
            error_messages
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(validate_config(&CerebraConfig::default()).is_ok());
    }

    #[test]
    fn zero_vertex_bound_is_rejected() {
        let mut config = CerebraConfig::default();
        config.validation.max_surface_vertices = 0;
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("max_surface_vertices"));
    }

    #[test]
    fn unknown_log_level_is_rejected() {
        let mut config = CerebraConfig::default();
        config.system.log_level = "LOUD".to_string();
        assert!(validate_config(&config).is_err());
    }
}
