// ABOUTME: Tracing subscriber setup for the dashboard
// ABOUTME: Compact fmt output filtered by the configured log filter

use crate::error::DashboardError;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Build the log filter from an already resolved directive string
///
/// `AppConfig::log_filter` has already applied `STOREFRONT_LOG`, so the environment is not
/// consulted again here.
pub fn build_filter(filter: &str) -> Result<EnvFilter, DashboardError> {
    EnvFilter::try_new(filter).map_err(|e| DashboardError::InvalidLogFilter {
        filter: filter.to_string(),
        reason: e.to_string(),
    })
}

/// Install the global subscriber
///
/// Returns `Ok(false)` when a subscriber was already installed.
pub fn init_logging(filter: &str) -> Result<bool, DashboardError> {
    let filter = build_filter(filter)?;

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init()
        .is_ok();

    if !installed {
        debug!("Tracing subscriber already installed, keeping existing one");
    }

    Ok(installed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_default_filter_builds() {
        assert!(build_filter("info").is_ok());
        assert!(build_filter("storefront_settings=debug,warn").is_ok());
    }

    #[test]
    fn test_malformed_filter_rejected() {
        let err = build_filter("storefront_settings=notalevel").unwrap_err();
        assert!(matches!(
            err,
            DashboardError::InvalidLogFilter { ref filter, .. } if filter == "storefront_settings=notalevel"
        ));
    }

    #[test]
    fn test_init_twice_is_not_an_error() {
        assert!(init_logging("info").is_ok());
        assert_eq!(init_logging("info").unwrap(), false);
    }
}
