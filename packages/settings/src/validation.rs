// ABOUTME: Input validation for the admin settings forms
// ABOUTME: Field-level rules plus the cross-field password confirmation check

use crate::types::{NotificationPreferences, ProfileField, ProfileSettings};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::btree_map;
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::debug;

pub const MIN_FULL_NAME_LENGTH: usize = 2;
pub const MIN_NEW_PASSWORD_LENGTH: usize = 8;

pub const FULL_NAME_TOO_SHORT: &str = "Full name must be at least 2 characters.";
pub const INVALID_EMAIL: &str = "Invalid email address.";
pub const NEW_PASSWORD_TOO_SHORT: &str = "New password must be at least 8 characters.";
pub const PASSWORDS_MUST_MATCH: &str = "New passwords must match.";

lazy_static! {
    // Local part may not end in '.' or '\''; leading dots and ".." are rejected separately.
    static ref EMAIL_PATTERN: Regex = Regex::new(
        r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$"
    )
    .expect("email pattern is valid");
}

/// A single field that failed its constraint
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        FieldError {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Field name to message mapping returned by a rejected submission
///
/// Only the first error recorded for a field is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(transparent)]
#[error("{} field(s) failed validation", .0.len())]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, error: FieldError) {
        self.0.entry(error.field).or_insert(error.message);
    }

    pub fn remove(&mut self, field: &str) -> Option<String> {
        self.0.remove(field)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Failing field names in sorted order
    pub fn fields(&self) -> Vec<&str> {
        self.0.keys().map(String::as_str).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = FieldError> + '_ {
        self.0
            .iter()
            .map(|(field, message)| FieldError::new(field.as_str(), message.as_str()))
    }
}

impl FromIterator<FieldError> for FieldErrors {
    fn from_iter<I: IntoIterator<Item = FieldError>>(iter: I) -> Self {
        let mut errors = FieldErrors::new();
        for error in iter {
            errors.insert(error);
        }
        errors
    }
}

impl IntoIterator for FieldErrors {
    type Item = (String, String);
    type IntoIter = btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// A candidate record that can be accepted or rejected with field errors
pub trait Validate: Sized + Clone {
    fn validate(&self) -> Result<Self, FieldErrors>;
}

impl Validate for ProfileSettings {
    fn validate(&self) -> Result<Self, FieldErrors> {
        validate_profile(self)
    }
}

impl Validate for NotificationPreferences {
    fn validate(&self) -> Result<Self, FieldErrors> {
        validate_notifications(self)
    }
}

/// Validate a profile submission, collecting every failing field
pub fn validate_profile(profile: &ProfileSettings) -> Result<ProfileSettings, FieldErrors> {
    let mut errors = FieldErrors::new();

    let field_checks = [
        validate_full_name(&profile.full_name),
        validate_email(&profile.email),
        validate_new_password(profile.new_password()),
    ];
    for result in field_checks {
        if let Err(e) = result {
            errors.insert(e);
        }
    }

    // Cross-field rule runs after the per-field rules, even if they failed
    if let Err(e) =
        validate_password_confirmation(profile.new_password(), profile.confirm_password())
    {
        errors.insert(e);
    }

    if errors.is_empty() {
        debug!("Profile submission accepted");
        Ok(profile.clone())
    } else {
        debug!(
            failed_fields = errors.len(),
            "Profile submission rejected"
        );
        Err(errors)
    }
}

/// Notification toggles are plain booleans and always validate
pub fn validate_notifications(
    prefs: &NotificationPreferences,
) -> Result<NotificationPreferences, FieldErrors> {
    debug!("Notification preferences accepted");
    Ok(*prefs)
}

/// Validate the full name (at least 2 characters)
pub fn validate_full_name(full_name: &str) -> Result<(), FieldError> {
    if text_length(full_name) < MIN_FULL_NAME_LENGTH {
        return Err(FieldError::new(
            ProfileField::FullName.as_str(),
            FULL_NAME_TOO_SHORT,
        ));
    }
    Ok(())
}

/// Validate the email address shape
pub fn validate_email(email: &str) -> Result<(), FieldError> {
    if is_valid_email(email) {
        Ok(())
    } else {
        Err(FieldError::new(ProfileField::Email.as_str(), INVALID_EMAIL))
    }
}

/// Validate the new password length, skipped when no new password is given
pub fn validate_new_password(new_password: Option<&str>) -> Result<(), FieldError> {
    match new_password {
        Some(password) if text_length(password) < MIN_NEW_PASSWORD_LENGTH => Err(
            FieldError::new(ProfileField::NewPassword.as_str(), NEW_PASSWORD_TOO_SHORT),
        ),
        _ => Ok(()),
    }
}

/// Cross-field check: a new password must be confirmed exactly
///
/// The confirmation is unconstrained when no new password is given.
pub fn validate_password_confirmation(
    new_password: Option<&str>,
    confirm_password: Option<&str>,
) -> Result<(), FieldError> {
    let Some(new_password) = new_password else {
        return Ok(());
    };

    if confirm_password == Some(new_password) {
        Ok(())
    } else {
        Err(FieldError::new(
            ProfileField::ConfirmPassword.as_str(),
            PASSWORDS_MUST_MATCH,
        ))
    }
}

/// Length in UTF-16 code units, the unit browser form inputs report
///
/// Characters outside the Basic Multilingual Plane count as two.
pub fn text_length(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Check `local@domain.tld` shape
pub fn is_valid_email(value: &str) -> bool {
    if value.starts_with('.') || value.contains("..") {
        return false;
    }
    EMAIL_PATTERN.is_match(value)
}
