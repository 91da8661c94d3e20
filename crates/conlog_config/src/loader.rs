//! Configuration file loading and validation.

use crate::error::ConfigError;
use crate::types::LogConfig;
use std::path::Path;

/// File name the command-line tool looks for in the working directory.
pub const CONFIG_FILE_NAME: &str = "conlog.toml";

/// Loads and validates a `conlog.toml` configuration file.
pub fn load_config(path: &Path) -> Result<LogConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    load_config_from_str(&content)
}

/// Parses and validates a `conlog.toml` configuration from a string.
///
/// Useful for testing without filesystem dependencies.
pub fn load_config_from_str(content: &str) -> Result<LogConfig, ConfigError> {
    let config: LogConfig =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

/// Checks that every category has a printable, non-empty name.
fn validate_config(config: &LogConfig) -> Result<(), ConfigError> {
    for (key, def) in &config.categories {
        let name = def.label(key);
        if name.trim().is_empty() {
            return Err(ConfigError::ValidationError(format!(
                "category '{key}' has an empty name"
            )));
        }
        if name.chars().any(char::is_control) {
            return Err(ConfigError::ValidationError(format!(
                "category '{key}' has control characters in its name"
            )));
        }
    }
    Ok(())
}
