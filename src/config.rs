//! Configuration management for the herb search server.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file is loaded first if present, without printing anything to stdout
//! (which MCP uses for communication).

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Configuration for the herb search server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the JSON herb catalog
    pub data_path: PathBuf,

    /// Log level used when `RUST_LOG` is not set (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `HERB_DATA_PATH`: Path to the JSON herb catalog
    ///
    /// Optional environment variables:
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        let _ = dotenvy::dotenv();

        let data_path = env::var("HERB_DATA_PATH")
            .map_err(|_| ConfigError::MissingVar("HERB_DATA_PATH".to_string()))?;

        if data_path.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "HERB_DATA_PATH".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            data_path: PathBuf::from(data_path),
            log_level,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_path: PathBuf::from("data/herbs.json"),
            log_level: "error".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    // Helper to set and unset env vars for testing
    struct EnvGuard {
        vars: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            EnvGuard { vars: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.vars.push(key.to_string());
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in &self.vars {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.data_path, PathBuf::from("data/herbs.json"));
        assert_eq!(config.log_level, "error");
    }

    #[test]
    #[serial]
    fn test_config_from_env_empty_data_path() {
        let mut guard = EnvGuard::new();
        guard.set("HERB_DATA_PATH", "   ");

        let result = Config::from_env();
        match result {
            Err(ConfigError::InvalidValue { var, .. }) => assert_eq!(var, "HERB_DATA_PATH"),
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_from_env_valid() {
        let mut guard = EnvGuard::new();
        guard.set("HERB_DATA_PATH", "/srv/herbs/catalog.json");
        guard.set("LOG_LEVEL", "debug");

        let config = Config::from_env().unwrap();
        assert_eq!(config.data_path, PathBuf::from("/srv/herbs/catalog.json"));
        assert_eq!(config.log_level, "debug");
    }
}
