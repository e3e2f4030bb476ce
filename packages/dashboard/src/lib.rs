// ABOUTME: Dashboard application context and Settings view for the Storefront admin
// ABOUTME: Wires configuration, logging, and settings forms together for a host UI

pub mod context;
pub mod error;
pub mod logging;
pub mod settings_view;

pub use context::{AppContext, Toast};
pub use error::DashboardError;
pub use logging::init_logging;
pub use settings_view::{SettingsTab, SettingsView};
