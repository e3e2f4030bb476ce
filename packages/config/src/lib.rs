// ABOUTME: Configuration for the Storefront admin settings stack
// ABOUTME: Environment variable names, defaults, and the loaded AppConfig

pub mod app_config;
pub mod constants;

pub use app_config::{parse_bool, AppConfig, ConfigError};
