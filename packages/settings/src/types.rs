// ABOUTME: Type definitions for the admin settings forms
// ABOUTME: Profile, notification, and application records plus their field identifiers

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Candidate profile record edited on the Profile tab
///
/// Empty strings and `None` are equivalent for the optional password fields,
/// both for equality and on the wire (an empty value serializes as `null`).
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSettings {
    pub full_name: String,
    pub email: String,
    #[serde(default, with = "empty_as_none")]
    pub current_password: Option<String>,
    #[serde(default, with = "empty_as_none")]
    pub new_password: Option<String>,
    #[serde(default, with = "empty_as_none")]
    pub confirm_password: Option<String>,
}

impl ProfileSettings {
    pub fn new(full_name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            email: email.into(),
            current_password: None,
            new_password: None,
            confirm_password: None,
        }
    }

    /// Set the password change fields
    pub fn with_password_change(
        mut self,
        current: impl Into<String>,
        new: impl Into<String>,
        confirm: impl Into<String>,
    ) -> Self {
        self.current_password = Some(current.into());
        self.new_password = Some(new.into());
        self.confirm_password = Some(confirm.into());
        self
    }

    pub fn current_password(&self) -> Option<&str> {
        non_empty(&self.current_password)
    }

    pub fn new_password(&self) -> Option<&str> {
        non_empty(&self.new_password)
    }

    pub fn confirm_password(&self) -> Option<&str> {
        non_empty(&self.confirm_password)
    }

    /// Whether the candidate requests a password change
    pub fn changes_password(&self) -> bool {
        self.new_password().is_some()
    }

    /// Drop every password value, keeping name and email
    pub fn without_passwords(&self) -> Self {
        Self::new(self.full_name.clone(), self.email.clone())
    }
}

impl PartialEq for ProfileSettings {
    fn eq(&self, other: &Self) -> bool {
        self.full_name == other.full_name
            && self.email == other.email
            && self.current_password() == other.current_password()
            && self.new_password() == other.new_password()
            && self.confirm_password() == other.confirm_password()
    }
}

impl Eq for ProfileSettings {}

impl Default for ProfileSettings {
    fn default() -> Self {
        Self::new("Admin User", "admin@example.com")
    }
}

// Password values must never reach logs, so Debug only reports their presence.
impl fmt::Debug for ProfileSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProfileSettings")
            .field("full_name", &self.full_name)
            .field("email", &self.email)
            .field("has_current_password", &self.current_password().is_some())
            .field("has_new_password", &self.new_password().is_some())
            .field("has_confirm_password", &self.confirm_password().is_some())
            .finish()
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

mod empty_as_none {
    use super::*;

    pub fn serialize<S>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        non_empty(value).serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(value.filter(|v| !v.is_empty()))
    }
}

/// Field identifiers for [`ProfileSettings`], named as they appear in error maps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileField {
    FullName,
    Email,
    CurrentPassword,
    NewPassword,
    ConfirmPassword,
}

impl ProfileField {
    pub const ALL: [ProfileField; 5] = [
        ProfileField::FullName,
        ProfileField::Email,
        ProfileField::CurrentPassword,
        ProfileField::NewPassword,
        ProfileField::ConfirmPassword,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileField::FullName => "fullName",
            ProfileField::Email => "email",
            ProfileField::CurrentPassword => "currentPassword",
            ProfileField::NewPassword => "newPassword",
            ProfileField::ConfirmPassword => "confirmPassword",
        }
    }
}

impl AsRef<str> for ProfileField {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Notification toggles edited on the Notifications tab
///
/// Missing fields deserialize to the schema defaults, which differ from the
/// values the form starts with (see [`NotificationPreferences::form_initial`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationPreferences {
    #[serde(default)]
    pub email_new_order: bool,
    #[serde(default)]
    pub email_shipment_update: bool,
    #[serde(default = "default_email_promotions")]
    pub email_promotions: bool,
    #[serde(default)]
    pub sms_low_stock: bool,
}

fn default_email_promotions() -> bool {
    true
}

impl Default for NotificationPreferences {
    fn default() -> Self {
        Self {
            email_new_order: false,
            email_shipment_update: false,
            email_promotions: default_email_promotions(),
            sms_low_stock: false,
        }
    }
}

impl NotificationPreferences {
    /// Values shown when the notifications form is first opened
    pub fn form_initial() -> Self {
        Self {
            email_new_order: true,
            email_shipment_update: true,
            email_promotions: false,
            sms_low_stock: true,
        }
    }

    pub fn get(&self, field: NotificationField) -> bool {
        match field {
            NotificationField::EmailNewOrder => self.email_new_order,
            NotificationField::EmailShipmentUpdate => self.email_shipment_update,
            NotificationField::EmailPromotions => self.email_promotions,
            NotificationField::SmsLowStock => self.sms_low_stock,
        }
    }

    pub fn set(&mut self, field: NotificationField, enabled: bool) {
        match field {
            NotificationField::EmailNewOrder => self.email_new_order = enabled,
            NotificationField::EmailShipmentUpdate => self.email_shipment_update = enabled,
            NotificationField::EmailPromotions => self.email_promotions = enabled,
            NotificationField::SmsLowStock => self.sms_low_stock = enabled,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationField {
    EmailNewOrder,
    EmailShipmentUpdate,
    EmailPromotions,
    SmsLowStock,
}

impl NotificationField {
    pub const ALL: [NotificationField; 4] = [
        NotificationField::EmailNewOrder,
        NotificationField::EmailShipmentUpdate,
        NotificationField::EmailPromotions,
        NotificationField::SmsLowStock,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationField::EmailNewOrder => "emailNewOrder",
            NotificationField::EmailShipmentUpdate => "emailShipmentUpdate",
            NotificationField::EmailPromotions => "emailPromotions",
            NotificationField::SmsLowStock => "smsLowStock",
        }
    }
}

impl AsRef<str> for NotificationField {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for NotificationField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// General preferences from the Application tab
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationSettings {
    #[serde(default)]
    pub dark_mode: bool,
    #[serde(default)]
    pub api_key: Option<String>,
}

impl fmt::Debug for ApplicationSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApplicationSettings")
            .field("dark_mode", &self.dark_mode)
            .field("has_api_key", &self.api_key.is_some())
            .finish()
    }
}
