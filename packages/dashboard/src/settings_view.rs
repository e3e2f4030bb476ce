// ABOUTME: Settings view controller with profile, notifications, and application tabs
// ABOUTME: Drives form sessions on submit and queues toasts on the application context

use crate::context::{AppContext, Toast};
use crate::error::DashboardError;
use rand::Rng;
use std::fmt;
use std::str::FromStr;
use storefront_settings::{
    ApplicationSettings, FieldErrors, FormSession, NotificationPreferences, ProfileSettings,
};
use tracing::{debug, info, warn};

pub const PROFILE_SAVED: &str = "Profile updated successfully!";
pub const NOTIFICATIONS_SAVED: &str = "Notification preferences saved!";
pub const APPLICATION_SAVED: &str = "Application settings saved!";

pub const API_KEY_PREFIX: &str = "sk_";
pub const API_KEY_LENGTH: usize = 32;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SettingsTab {
    #[default]
    Profile,
    Notifications,
    Application,
}

impl SettingsTab {
    pub fn as_str(&self) -> &'static str {
        match self {
            SettingsTab::Profile => "profile",
            SettingsTab::Notifications => "notifications",
            SettingsTab::Application => "application",
        }
    }
}

impl fmt::Display for SettingsTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SettingsTab {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "profile" => Ok(SettingsTab::Profile),
            "notifications" => Ok(SettingsTab::Notifications),
            "application" => Ok(SettingsTab::Application),
            other => Err(DashboardError::UnknownTab(other.to_string())),
        }
    }
}

/// State behind the Settings page
#[derive(Debug)]
pub struct SettingsView {
    active_tab: SettingsTab,
    profile: FormSession<ProfileSettings>,
    notifications: FormSession<NotificationPreferences>,
    application: ApplicationSettings,
}

impl SettingsView {
    pub fn new(ctx: &AppContext) -> Self {
        let config = ctx.config();
        let profile = ProfileSettings::new(config.admin_name.clone(), config.admin_email.clone());
        let application = ApplicationSettings {
            dark_mode: config.dark_mode,
            api_key: None,
        };

        Self {
            active_tab: SettingsTab::default(),
            profile: FormSession::new(profile),
            notifications: FormSession::new(NotificationPreferences::form_initial()),
            application,
        }
    }

    pub fn active_tab(&self) -> SettingsTab {
        self.active_tab
    }

    pub fn select_tab(&mut self, tab: SettingsTab) {
        debug!("Switching settings tab to {}", tab);
        self.active_tab = tab;
    }

    pub fn profile_form(&self) -> &FormSession<ProfileSettings> {
        &self.profile
    }

    pub fn profile_form_mut(&mut self) -> &mut FormSession<ProfileSettings> {
        &mut self.profile
    }

    pub fn notifications_form(&self) -> &FormSession<NotificationPreferences> {
        &self.notifications
    }

    pub fn notifications_form_mut(&mut self) -> &mut FormSession<NotificationPreferences> {
        &mut self.notifications
    }

    pub fn application(&self) -> &ApplicationSettings {
        &self.application
    }

    /// Submit the profile form
    ///
    /// Accepted values start a fresh session with the password fields cleared.
    pub fn submit_profile(&mut self, ctx: &mut AppContext) -> Result<ProfileSettings, FieldErrors> {
        match self.profile.submit() {
            Ok(accepted) => {
                info!(profile = ?accepted, "Profile settings submitted");
                ctx.push_toast(Toast::success(PROFILE_SAVED));
                self.profile.restart(accepted.without_passwords());
                Ok(accepted)
            }
            Err(errors) => {
                warn!(fields = ?errors.fields(), "Profile settings rejected");
                Err(errors)
            }
        }
    }

    /// Submit the notification preferences form
    pub fn submit_notifications(
        &mut self,
        ctx: &mut AppContext,
    ) -> Result<NotificationPreferences, FieldErrors> {
        match self.notifications.submit() {
            Ok(accepted) => {
                info!(preferences = ?accepted, "Notification settings submitted");
                ctx.push_toast(Toast::success(NOTIFICATIONS_SAVED));
                self.notifications.restart(accepted);
                Ok(accepted)
            }
            Err(errors) => {
                warn!(fields = ?errors.fields(), "Notification settings rejected");
                Err(errors)
            }
        }
    }

    /// Flip the theme, returning whether dark mode is now on
    pub fn toggle_dark_mode(&mut self) -> bool {
        self.application.dark_mode = !self.application.dark_mode;
        debug!(dark_mode = self.application.dark_mode, "Theme toggled");
        self.application.dark_mode
    }

    /// Set or clear the API key; blank input clears it
    pub fn set_api_key(&mut self, key: Option<String>) {
        self.application.api_key = key
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());
    }

    /// Generate a new API key and store it in the application settings
    pub fn generate_api_key(&mut self) -> String {
        let key = generate_api_key();
        self.application.api_key = Some(key.clone());
        info!("Generated new API key");
        key
    }

    pub fn save_application(&mut self, ctx: &mut AppContext) -> ApplicationSettings {
        info!(settings = ?self.application, "Application settings submitted");
        ctx.push_toast(Toast::success(APPLICATION_SAVED));
        self.application.clone()
    }
}

/// Generate an API key: `sk_` followed by 32 alphanumeric characters
pub fn generate_api_key() -> String {
    const CHARSET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
    let mut rng = rand::thread_rng();
    let body: String = (0..API_KEY_LENGTH)
        .map(|_| {
            let idx = rng.gen_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect();
    format!("{}{}", API_KEY_PREFIX, body)
}
