//! Room booking service configuration.
//!
//! Configuration is loaded from environment variables. The only knob is
//! the HTTP listen port.

use std::collections::HashMap;
use std::env;
use thiserror::Error;

/// Default HTTP listen port.
pub const DEFAULT_PORT: u16 = 3000;

/// Room booking service configuration.
///
/// Loaded from environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP listen port (default: 3000).
    pub port: u16,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid port configuration: {0}")]
    InvalidPort(String),
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(&env::vars().collect())
    }

    /// Load configuration from a HashMap (for testing).
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        // Parse the listen port with validation. An unset or empty PORT
        // falls back to the default.
        let port = match vars.get("PORT").filter(|value| !value.is_empty()) {
            Some(value_str) => value_str.parse().map_err(|e| {
                ConfigError::InvalidPort(format!(
                    "PORT must be a valid port number, got '{}': {}",
                    value_str, e
                ))
            })?,
            None => DEFAULT_PORT,
        };

        Ok(Config { port })
    }
}
