// ABOUTME: Settings records and validation for the Storefront admin
// ABOUTME: Profile and notification forms with typed constraint checks

pub mod form;
pub mod types;
pub mod validation;

pub use form::FormSession;
pub use types::{
    ApplicationSettings, NotificationField, NotificationPreferences, ProfileField,
    ProfileSettings,
};
pub use validation::{
    is_valid_email, validate_notifications, validate_profile, FieldError, FieldErrors, Validate,
};
