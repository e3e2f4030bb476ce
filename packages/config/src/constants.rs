// ABOUTME: Environment variable name constants and built-in defaults
// ABOUTME: Centralized definitions of all environment variables read by the Storefront admin

// Logging
pub const STOREFRONT_LOG: &str = "STOREFRONT_LOG";
pub const DEFAULT_LOG_FILTER: &str = "info";

// Administrator profile seed values
pub const STOREFRONT_ADMIN_NAME: &str = "STOREFRONT_ADMIN_NAME";
pub const STOREFRONT_ADMIN_EMAIL: &str = "STOREFRONT_ADMIN_EMAIL";
pub const DEFAULT_ADMIN_NAME: &str = "Admin User";
pub const DEFAULT_ADMIN_EMAIL: &str = "admin@example.com";

// Application preferences
pub const STOREFRONT_DARK_MODE: &str = "STOREFRONT_DARK_MODE";
pub const DEFAULT_DARK_MODE: bool = false;
