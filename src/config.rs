//! Configuration management for the contact directory binary.
//!
//! Settings come from environment variables, optionally seeded from a `.env`
//! file. Only logging is configurable; stdout carries the demo output and
//! logs always go to stderr.

use crate::error::{ConfigError, ConfigResult};
use std::env;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Configuration for the contact directory binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Log level used when `RUST_LOG` is not set (default: "error")
    pub log_level: String,

    /// Whether log lines use ANSI colors (default: true)
    pub log_ansi: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `LOG_LEVEL`: one of trace, debug, info, warn, error (default: "error")
    /// - `LOG_ANSI`: true/false, 1/0, yes/no (default: true)
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine
        let _ = dotenvy::dotenv();

        let log_level = match env::var("LOG_LEVEL") {
            Ok(val) => Self::parse_log_level("LOG_LEVEL", &val)?,
            Err(_) => "error".to_string(),
        };
        let log_ansi = Self::parse_env_bool("LOG_ANSI", true)?;

        Ok(Config {
            log_level,
            log_ansi,
        })
    }

    /// Normalize and check a log level name.
    fn parse_log_level(var_name: &str, val: &str) -> ConfigResult<String> {
        let level = val.trim().to_ascii_lowercase();
        if LOG_LEVELS.contains(&level.as_str()) {
            Ok(level)
        } else {
            Err(ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be one of {}, got: {}", LOG_LEVELS.join(", "), val),
            })
        }
    }

    /// Parse an environment variable as bool with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" => Ok(true),
                "false" | "0" | "no" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true or false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "error".to_string(),
            log_ansi: true,
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
        assert_eq!(config.log_level, "error");
        assert!(config.log_ansi);
    }

    #[test]
    #[serial]
    fn test_config_from_env_defaults() {
        env::remove_var("LOG_LEVEL");
        env::remove_var("LOG_ANSI");

        let config = Config::from_env().unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    #[serial]
    fn test_config_from_env_valid() {
        let mut guard = EnvGuard::new();
        guard.set("LOG_LEVEL", " Debug ");
        guard.set("LOG_ANSI", "no");

        let config = Config::from_env().unwrap();
        assert_eq!(config.log_level, "debug");
        assert!(!config.log_ansi);
    }

    #[test]
    #[serial]
    fn test_config_invalid_log_level() {
        let mut guard = EnvGuard::new();
        guard.set("LOG_LEVEL", "loud");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => assert_eq!(var, "LOG_LEVEL"),
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_parse_env_bool_invalid() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_BOOL_INVALID", "maybe");

        assert!(Config::parse_env_bool("TEST_BOOL_INVALID", true).is_err());
        assert!(Config::parse_env_bool("NONEXISTENT_BOOL", false).is_ok_and(|v| !v));
    }
}
