//! Configuration management for the contact directory console.
//!
//! Settings come from environment variables, optionally seeded from a `.env`
//! file in the working directory.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::str::FromStr;

/// How the console prints contacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One human-readable line per contact
    #[default]
    Text,

    /// One compact JSON object per line
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("Must be 'text' or 'json', got: {}", other)),
        }
    }
}

/// Configuration for the contact directory console.
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level used when RUST_LOG is unset (default: "warn")
    pub log_level: String,

    /// Contact rendering mode (default: text)
    pub output_format: OutputFormat,

    /// Print the menu header on every iteration (default: true)
    pub show_banner: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `LOG_LEVEL`: Logging level (default: "warn")
    /// - `CONTACTS_OUTPUT`: `text` or `json` (default: `text`)
    /// - `CONTACTS_BANNER`: `true`/`false`/`1`/`0`/`yes`/`no` (default: `true`)
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine, a malformed one is not
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                return Err(ConfigError::DotenvError(e.to_string()));
            }
        }

        let defaults = Config::default();

        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        let output_format = match env::var("CONTACTS_OUTPUT") {
            Ok(val) => val
                .parse::<OutputFormat>()
                .map_err(|reason| ConfigError::InvalidValue {
                    var: "CONTACTS_OUTPUT".to_string(),
                    reason,
                })?,
            Err(_) => defaults.output_format,
        };

        let show_banner = Self::parse_env_bool("CONTACTS_BANNER", defaults.show_banner)?;

        Ok(Config {
            log_level,
            output_format,
            show_banner,
        })
    }

    /// Parse an environment variable as a boolean with a default value.
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
            log_level: "warn".to_string(),
            output_format: OutputFormat::Text,
            show_banner: true,
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
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.output_format, OutputFormat::Text);
        assert!(config.show_banner);
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!("TEXT".parse::<OutputFormat>(), Ok(OutputFormat::Text));
        assert_eq!(" json ".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    #[serial]
    fn test_config_from_env_valid() {
        let mut guard = EnvGuard::new();
        guard.set("LOG_LEVEL", "debug");
        guard.set("CONTACTS_OUTPUT", "json");
        guard.set("CONTACTS_BANNER", "no");

        let config = Config::from_env().unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.output_format, OutputFormat::Json);
        assert!(!config.show_banner);
    }

    #[test]
    #[serial]
    fn test_config_from_env_invalid_output() {
        let mut guard = EnvGuard::new();
        guard.set("CONTACTS_OUTPUT", "xml");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => assert_eq!(var, "CONTACTS_OUTPUT"),
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_parse_env_bool() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_BOOL_TRUE", "1");
        guard.set("TEST_BOOL_INVALID", "maybe");

        assert!(Config::parse_env_bool("TEST_BOOL_TRUE", false).unwrap());
        assert!(Config::parse_env_bool("NONEXISTENT_BOOL", true).unwrap());
        assert!(Config::parse_env_bool("TEST_BOOL_INVALID", true).is_err());
    }
}
