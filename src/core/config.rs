// src/core/config.rs
use std::env;
use std::str::FromStr;
use std::time::Duration;
use log::LevelFilter;
use thiserror::Error;

use crate::models::PasswordGenerationOptions;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value '{value}' for {key}")]
    InvalidValue { key: String, value: String },
}

// Runtime configuration, read from the environment (and `.env`)
#[derive(Debug, Clone)]
pub struct Config {
    // Password Generation
    pub default_password_length: usize,
    pub max_password_length: usize,
    pub default_exclude_ambiguous: bool,

    // Clipboard
    pub clipboard_clear_after: Option<Duration>,

    // Web Interface
    pub web_address: String,
    pub web_port: u16,

    // Logging
    pub log_level: LevelFilter,

    // Values that failed to parse; reported once logging is up
    pub rejected: Vec<ConfigError>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_password_length: 16,
            max_password_length: 128,
            default_exclude_ambiguous: false,

            clipboard_clear_after: None,

            web_address: "127.0.0.1".to_string(),
            web_port: 5000,

            log_level: LevelFilter::Info,

            rejected: Vec::new(),
        }
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw.trim().parse().map(Some).map_err(|_| ConfigError::InvalidValue {
            key: key.to_string(),
            value: raw,
        }),
    }
}

fn parse_level(raw: &str) -> Option<LevelFilter> {
    match raw.to_lowercase().as_str() {
        "off" => Some(LevelFilter::Off),
        "error" => Some(LevelFilter::Error),
        "warn" => Some(LevelFilter::Warn),
        "info" => Some(LevelFilter::Info),
        "debug" => Some(LevelFilter::Debug),
        "trace" => Some(LevelFilter::Trace),
        _ => None,
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        let mut rejected = Vec::new();

        // Password Generation
        match parse_var::<usize, _>(&lookup, "MAX_PASSWORD_LENGTH") {
            Ok(Some(0)) => rejected.push(ConfigError::InvalidValue {
                key: "MAX_PASSWORD_LENGTH".to_string(),
                value: "0".to_string(),
            }),
            Ok(Some(max)) => config.max_password_length = max,
            Ok(None) => {}
            Err(e) => rejected.push(e),
        }

        match parse_var::<usize, _>(&lookup, "DEFAULT_PASSWORD_LENGTH") {
            Ok(Some(length)) if length >= 1 && length <= config.max_password_length => {
                config.default_password_length = length;
            }
            Ok(Some(length)) => rejected.push(ConfigError::InvalidValue {
                key: "DEFAULT_PASSWORD_LENGTH".to_string(),
                value: length.to_string(),
            }),
            Ok(None) => {}
            Err(e) => rejected.push(e),
        }
        config.default_password_length = config.default_password_length.min(config.max_password_length);

        match parse_var::<bool, _>(&lookup, "DEFAULT_EXCLUDE_AMBIGUOUS") {
            Ok(Some(exclude)) => config.default_exclude_ambiguous = exclude,
            Ok(None) => {}
            Err(e) => rejected.push(e),
        }

        // Clipboard
        match parse_var::<u64, _>(&lookup, "CLIPBOARD_CLEAR_SECONDS") {
            Ok(Some(0)) => config.clipboard_clear_after = None,
            Ok(Some(secs)) => config.clipboard_clear_after = Some(Duration::from_secs(secs)),
            Ok(None) => {}
            Err(e) => rejected.push(e),
        }

        // Web Interface
        if let Some(address) = lookup("WEB_ADDRESS") {
            if !address.trim().is_empty() {
                config.web_address = address.trim().to_string();
            }
        }

        match parse_var::<u16, _>(&lookup, "WEB_PORT") {
            Ok(Some(port)) => config.web_port = port,
            Ok(None) => {}
            Err(e) => rejected.push(e),
        }

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            match parse_level(level.trim()) {
                Some(filter) => config.log_level = filter,
                None => rejected.push(ConfigError::InvalidValue {
                    key: "LOG_LEVEL".to_string(),
                    value: level,
                }),
            }
        }

        config.rejected = rejected;
        config
    }

    /// Generation options the adapters start from before applying user choices.
    pub fn default_generation_options(&self) -> PasswordGenerationOptions {
        PasswordGenerationOptions {
            length: self.default_password_length,
            exclude_ambiguous: self.default_exclude_ambiguous,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_without_environment() {
        let config = config_from(&[]);
        assert_eq!(config.default_password_length, 16);
        assert_eq!(config.max_password_length, 128);
        assert!(!config.default_exclude_ambiguous);
        assert_eq!(config.clipboard_clear_after, None);
        assert_eq!(config.web_address, "127.0.0.1");
        assert_eq!(config.web_port, 5000);
        assert_eq!(config.log_level, LevelFilter::Info);
        assert!(config.rejected.is_empty());
    }

    #[test]
    fn test_reads_valid_values() {
        let config = config_from(&[
            ("DEFAULT_PASSWORD_LENGTH", "24"),
            ("MAX_PASSWORD_LENGTH", "64"),
            ("DEFAULT_EXCLUDE_AMBIGUOUS", "true"),
            ("CLIPBOARD_CLEAR_SECONDS", "30"),
            ("WEB_ADDRESS", "0.0.0.0"),
            ("WEB_PORT", "8080"),
            ("LOG_LEVEL", "DEBUG"),
        ]);
        assert_eq!(config.default_password_length, 24);
        assert_eq!(config.max_password_length, 64);
        assert!(config.default_exclude_ambiguous);
        assert_eq!(config.clipboard_clear_after, Some(Duration::from_secs(30)));
        assert_eq!(config.web_address, "0.0.0.0");
        assert_eq!(config.web_port, 8080);
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert!(config.rejected.is_empty());
    }

    #[test]
    fn test_invalid_values_keep_defaults() {
        let config = config_from(&[
            ("DEFAULT_PASSWORD_LENGTH", "lots"),
            ("WEB_PORT", "99999"),
            ("LOG_LEVEL", "loud"),
        ]);
        assert_eq!(config.default_password_length, 16);
        assert_eq!(config.web_port, 5000);
        assert_eq!(config.log_level, LevelFilter::Info);
        assert_eq!(config.rejected.len(), 3);
        assert_eq!(
            config.rejected[0],
            ConfigError::InvalidValue {
                key: "DEFAULT_PASSWORD_LENGTH".to_string(),
                value: "lots".to_string(),
            }
        );
    }

    #[test]
    fn test_default_length_must_fit_max() {
        let config = config_from(&[
            ("DEFAULT_PASSWORD_LENGTH", "40"),
            ("MAX_PASSWORD_LENGTH", "32"),
        ]);
        assert_eq!(config.default_password_length, 16);
        assert_eq!(config.rejected.len(), 1);

        let config = config_from(&[("MAX_PASSWORD_LENGTH", "8")]);
        assert_eq!(config.default_password_length, 8);
    }

    #[test]
    fn test_zero_clear_seconds_disables_clearing() {
        let config = config_from(&[("CLIPBOARD_CLEAR_SECONDS", "0")]);
        assert_eq!(config.clipboard_clear_after, None);
    }

    #[test]
    fn test_default_generation_options_follow_config() {
        let config = config_from(&[
            ("DEFAULT_PASSWORD_LENGTH", "20"),
            ("DEFAULT_EXCLUDE_AMBIGUOUS", "true"),
        ]);
        let options = config.default_generation_options();
        assert_eq!(options.length, 20);
        assert!(options.exclude_ambiguous);
        assert_eq!(options.enabled_class_count(), 4);
    }
}
