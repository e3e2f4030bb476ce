// ABOUTME: Runtime configuration loaded from the process environment
// ABOUTME: Supports .env files via dotenvy and an injectable lookup for tests

use crate::constants::{
    DEFAULT_ADMIN_EMAIL, DEFAULT_ADMIN_NAME, DEFAULT_DARK_MODE, DEFAULT_LOG_FILTER,
    STOREFRONT_ADMIN_EMAIL, STOREFRONT_ADMIN_NAME, STOREFRONT_DARK_MODE, STOREFRONT_LOG,
};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid boolean value for {key}: {value}. Must be one of true, false, 1, 0")]
    InvalidBoolean { key: String, value: String },

    #[error("Invalid log filter: value cannot be empty")]
    InvalidLogFilter,
}

/// Application configuration shared through the dashboard context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub log_filter: String,
    pub admin_name: String,
    pub admin_email: String,
    pub dark_mode: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            admin_name: DEFAULT_ADMIN_NAME.to_string(),
            admin_email: DEFAULT_ADMIN_EMAIL.to_string(),
            dark_mode: DEFAULT_DARK_MODE,
        }
    }
}

impl AppConfig {
    /// Load configuration from the environment, reading a `.env` file first if one exists
    pub fn from_env() -> Result<Self, ConfigError> {
        match dotenvy::dotenv() {
            Ok(path) => debug!("Loaded environment from {}", path.display()),
            Err(e) if e.not_found() => {}
            Err(e) => debug!("Ignoring unreadable .env file: {}", e),
        }

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    ///
    /// Missing keys fall back to the built-in defaults. Blank values are treated as missing,
    /// except for the log filter where a blank value is rejected.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let log_filter = match lookup(STOREFRONT_LOG) {
            Some(value) if value.trim().is_empty() => return Err(ConfigError::InvalidLogFilter),
            Some(value) => value.trim().to_string(),
            None => defaults.log_filter,
        };

        let admin_name = non_blank(lookup(STOREFRONT_ADMIN_NAME)).unwrap_or(defaults.admin_name);
        let admin_email =
            non_blank(lookup(STOREFRONT_ADMIN_EMAIL)).unwrap_or(defaults.admin_email);

        let dark_mode = match non_blank(lookup(STOREFRONT_DARK_MODE)) {
            Some(value) => parse_bool(STOREFRONT_DARK_MODE, &value)?,
            None => defaults.dark_mode,
        };

        Ok(Self {
            log_filter,
            admin_name,
            admin_email,
            dark_mode,
        })
    }
}

/// Parse a boolean environment value (`true`, `false`, `1`, `0`, case-insensitive)
pub fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(ConfigError::InvalidBoolean {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
