// ABOUTME: Application context passed explicitly to dashboard views
// ABOUTME: Owns configuration and the queue of toasts waiting to be displayed

use crate::error::DashboardError;
use crate::logging::init_logging;
use chrono::{DateTime, Utc};
use serde::Serialize;
use storefront_config::AppConfig;
use tracing::info;

/// A success notification queued for the host UI to display
///
/// Rejected submits report inline field errors instead of queueing a toast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Toast {
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            created_at: Utc::now(),
        }
    }
}

/// Shared state for one dashboard instance
///
/// Constructed once at startup and handed to views by reference. Call
/// [`AppContext::shutdown`] to tear it down.
#[derive(Debug)]
pub struct AppContext {
    config: AppConfig,
    toasts: Vec<Toast>,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        info!(
            admin = %config.admin_name,
            dark_mode = config.dark_mode,
            "Dashboard context created"
        );
        Self {
            config,
            toasts: Vec::new(),
        }
    }

    /// Load configuration from the environment and install logging
    pub fn from_env() -> Result<Self, DashboardError> {
        let config = AppConfig::from_env()?;
        init_logging(&config.log_filter)?;
        Ok(Self::new(config))
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn push_toast(&mut self, toast: Toast) {
        self.toasts.push(toast);
    }

    pub fn pending_toasts(&self) -> &[Toast] {
        &self.toasts
    }

    /// Take every queued toast, oldest first
    pub fn drain_toasts(&mut self) -> Vec<Toast> {
        std::mem::take(&mut self.toasts)
    }

    /// Tear down the context, returning toasts that were never displayed
    pub fn shutdown(mut self) -> Vec<Toast> {
        let undisplayed = self.drain_toasts();
        info!(
            undisplayed_toasts = undisplayed.len(),
            "Dashboard context shut down"
        );
        undisplayed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_context_has_no_toasts() {
        let ctx = AppContext::new(AppConfig::default());
        assert!(ctx.pending_toasts().is_empty());
        assert_eq!(ctx.config().admin_name, "Admin User");
    }

    #[test]
    fn test_drain_returns_toasts_in_order() {
        let mut ctx = AppContext::new(AppConfig::default());
        ctx.push_toast(Toast::success("first"));
        ctx.push_toast(Toast::success("second"));

        let drained = ctx.drain_toasts();

        assert_eq!(drained.len(), 2);
        assert_eq!(drained[0].message, "first");
        assert_eq!(drained[1].message, "second");
        assert!(drained[0].created_at <= drained[1].created_at);
        assert!(ctx.pending_toasts().is_empty());
    }

    #[test]
    fn test_shutdown_returns_undisplayed_toasts() {
        let mut ctx = AppContext::new(AppConfig::default());
        ctx.push_toast(Toast::success("pending"));

        let leftover = ctx.shutdown();

        assert_eq!(leftover.len(), 1);
        assert_eq!(leftover[0].message, "pending");
    }

    #[test]
    fn test_from_env_reads_config_and_rejects_bad_values() {
        use storefront_config::constants::{STOREFRONT_ADMIN_NAME, STOREFRONT_DARK_MODE};

        // Only test in this binary that touches the process environment
        std::env::set_var(STOREFRONT_ADMIN_NAME, "Env Admin");
        std::env::set_var(STOREFRONT_DARK_MODE, "1");
        let ctx = AppContext::from_env().unwrap();
        assert_eq!(ctx.config().admin_name, "Env Admin");
        assert!(ctx.config().dark_mode);

        std::env::set_var(STOREFRONT_DARK_MODE, "sometimes");
        let result = AppContext::from_env();
        std::env::remove_var(STOREFRONT_ADMIN_NAME);
        std::env::remove_var(STOREFRONT_DARK_MODE);

        assert!(matches!(result, Err(DashboardError::Config(_))));
    }

    #[test]
    fn test_toast_serializes_camel_case() {
        let toast = Toast::success("saved");
        let json = serde_json::to_value(&toast).unwrap();
        assert_eq!(json["message"], "saved");
        assert!(json["createdAt"].is_string());
    }
}
