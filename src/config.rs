//! Server configuration from environment variables.
//!
//! Site address, ports and output paths come from `[package.metadata.leptos]`
//! through `get_configuration`; this covers the rest. Call `dotenvy::dotenv()`
//! first to pick up a `.env` file.

const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be a boolean (true/false, 1/0, yes/no), got {value:?}")]
    InvalidBool { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// `tracing` filter directive, from `RUST_LOG`
    pub log_filter: String,
    /// Compress responses, from `COMPRESSION` (on unless disabled)
    pub compression: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the configuration from any variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_filter = lookup("RUST_LOG")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        let compression = match lookup("COMPRESSION") {
            Some(value) => parse_bool("COMPRESSION", &value)?,
            None => true,
        };

        Ok(Self {
            log_filter,
            compression,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            compression: true,
        }
    }
}

fn parse_bool(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            name,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(config_from(&[]), Ok(Config::default()));
    }

    #[test]
    fn reads_log_filter() {
        let config = config_from(&[("RUST_LOG", "debug,tower_http=trace")]).unwrap();
        assert_eq!(config.log_filter, "debug,tower_http=trace");
    }

    #[test]
    fn blank_log_filter_falls_back() {
        let config = config_from(&[("RUST_LOG", "  ")]).unwrap();
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn compression_accepts_common_spellings() {
        for value in ["false", "0", "NO", " off "] {
            assert!(!config_from(&[("COMPRESSION", value)]).unwrap().compression);
        }
        for value in ["true", "1", "Yes", "on"] {
            assert!(config_from(&[("COMPRESSION", value)]).unwrap().compression);
        }
    }

    #[test]
    fn compression_rejects_garbage() {
        assert_eq!(
            config_from(&[("COMPRESSION", "maybe")]),
            Err(ConfigError::InvalidBool {
                name: "COMPRESSION",
                value: "maybe".to_string(),
            })
        );
    }
}
