// ABOUTME: Error types for the dashboard context
// ABOUTME: Startup and configuration failures; form validation errors are not included

use storefront_config::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid log filter '{filter}': {reason}")]
    InvalidLogFilter { filter: String, reason: String },

    #[error("Unknown settings tab: {0}. Must be one of: profile, notifications, application")]
    UnknownTab(String),
}
