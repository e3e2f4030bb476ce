// ABOUTME: Form session holding one candidate record for the lifetime of an edit
// ABOUTME: Tracks inline field errors and re-checks them on every edit after a submit

use crate::validation::{FieldErrors, Validate};

/// One editing session over a candidate record
///
/// The session owns its candidate exclusively; nothing else observes it until
/// [`FormSession::submit`] hands back an accepted copy.
#[derive(Debug, Clone)]
pub struct FormSession<T> {
    initial: T,
    values: T,
    errors: FieldErrors,
    submitted: bool,
}

impl<T> FormSession<T>
where
    T: Validate + PartialEq,
{
    pub fn new(initial: T) -> Self {
        Self {
            values: initial.clone(),
            initial,
            errors: FieldErrors::new(),
            submitted: false,
        }
    }

    pub fn values(&self) -> &T {
        &self.values
    }

    /// Inline errors currently shown for the candidate
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error_for(&self, field: impl AsRef<str>) -> Option<&str> {
        self.errors.get(field.as_ref())
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Apply an edit to one field
    ///
    /// Before the first submit this only clears the edited field's error. Once a submit has
    /// been attempted the whole record is re-validated, so cross-field errors follow the edit.
    pub fn update<F>(&mut self, field: impl AsRef<str>, edit: F)
    where
        F: FnOnce(&mut T),
    {
        edit(&mut self.values);

        if self.submitted {
            self.errors = self.values.validate().err().unwrap_or_default();
        } else {
            self.errors.remove(field.as_ref());
        }
    }

    /// Validate the candidate
    ///
    /// On rejection the errors are recorded for inline display and the candidate is kept
    /// as-is so the user can correct it.
    pub fn submit(&mut self) -> Result<T, FieldErrors> {
        self.submitted = true;
        match self.values.validate() {
            Ok(accepted) => {
                self.errors.clear();
                Ok(accepted)
            }
            Err(errors) => {
                self.errors = errors.clone();
                Err(errors)
            }
        }
    }

    /// Whether the candidate differs from the values the session started with
    pub fn is_dirty(&self) -> bool {
        self.values != self.initial
    }

    /// Discard edits and errors, returning to the initial values
    pub fn reset(&mut self) {
        self.values = self.initial.clone();
        self.errors.clear();
        self.submitted = false;
    }

    /// End this session and start a new one seeded with `initial`
    pub fn restart(&mut self, initial: T) {
        *self = Self::new(initial);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{NotificationField, NotificationPreferences, ProfileField, ProfileSettings};
    use crate::validation::{FULL_NAME_TOO_SHORT, INVALID_EMAIL};

    #[test]
    fn test_new_session_is_clean() {
        let session = FormSession::new(ProfileSettings::default());
        assert!(!session.is_dirty());
        assert!(!session.has_errors());
        assert_eq!(session.values(), &ProfileSettings::default());
    }

    #[test]
    fn test_rejected_submit_records_errors_and_keeps_candidate() {
        let mut session = FormSession::new(ProfileSettings::default());
        session.update(ProfileField::FullName, |p| p.full_name = "A".to_string());
        session.update(ProfileField::Email, |p| p.email = "bad-email".to_string());

        let errors = session.submit().unwrap_err();

        assert_eq!(errors.len(), 2);
        assert_eq!(session.error_for(ProfileField::FullName), Some(FULL_NAME_TOO_SHORT));
        assert_eq!(session.error_for(ProfileField::Email), Some(INVALID_EMAIL));
        assert_eq!(session.values().full_name, "A");
        assert!(session.is_dirty());
    }

    #[test]
    fn test_update_clears_only_that_fields_error() {
        let mut session = FormSession::new(ProfileSettings::new("A", "bad-email"));
        assert!(session.submit().is_err());

        session.update(ProfileField::FullName, |p| p.full_name = "Al".to_string());

        assert_eq!(session.error_for(ProfileField::FullName), None);
        assert_eq!(session.error_for(ProfileField::Email), Some(INVALID_EMAIL));
    }

    #[test]
    fn test_matching_new_password_clears_confirmation_error() {
        let mut session = FormSession::new(
            ProfileSettings::default().with_password_change("", "longenough1", "longenough2"),
        );
        let errors = session.submit().unwrap_err();
        assert_eq!(errors.fields(), vec!["confirmPassword"]);

        session.update(ProfileField::NewPassword, |p| {
            p.new_password = Some("longenough2".to_string())
        });

        assert_eq!(session.error_for(ProfileField::ConfirmPassword), None);
        assert!(!session.has_errors());
        assert!(session.submit().is_ok());
    }

    #[test]
    fn test_edit_after_submit_can_raise_new_errors() {
        let mut session = FormSession::new(ProfileSettings::new("A", "admin@example.com"));
        assert!(session.submit().is_err());

        session.update(ProfileField::Email, |p| p.email = "bad-email".to_string());

        assert_eq!(session.error_for(ProfileField::FullName), Some(FULL_NAME_TOO_SHORT));
        assert_eq!(session.error_for(ProfileField::Email), Some(INVALID_EMAIL));
    }

    #[test]
    fn test_edit_before_submit_does_not_validate() {
        let mut session = FormSession::new(ProfileSettings::default());
        session.update(ProfileField::FullName, |p| p.full_name = "A".to_string());

        assert!(!session.has_errors());
    }

    #[test]
    fn test_cleared_password_field_is_not_dirty() {
        let mut session = FormSession::new(ProfileSettings::default());
        session.update(ProfileField::NewPassword, |p| {
            p.new_password = Some("typed".to_string())
        });
        assert!(session.is_dirty());

        session.update(ProfileField::NewPassword, |p| p.new_password = Some(String::new()));

        assert!(!session.is_dirty());
    }

    #[test]
    fn test_accepted_submit_clears_errors() {
        let mut session = FormSession::new(ProfileSettings::new("A", "admin@example.com"));
        assert!(session.submit().is_err());

        session.update(ProfileField::FullName, |p| p.full_name = "Al".to_string());
        let accepted = session.submit().unwrap();

        assert_eq!(accepted.full_name, "Al");
        assert!(!session.has_errors());
    }

    #[test]
    fn test_reset_restores_initial_values() {
        let mut session = FormSession::new(NotificationPreferences::form_initial());
        session.update(NotificationField::SmsLowStock, |p| p.sms_low_stock = false);
        assert!(session.is_dirty());

        session.reset();

        assert!(!session.is_dirty());
        assert_eq!(session.values(), &NotificationPreferences::form_initial());
    }

    #[test]
    fn test_restart_seeds_new_session() {
        let mut session = FormSession::new(ProfileSettings::default());
        session.update(ProfileField::FullName, |p| p.full_name = "Store Owner".to_string());
        let accepted = session.submit().unwrap();

        session.restart(accepted.clone());

        assert!(!session.is_dirty());
        assert_eq!(session.values(), &accepted);
    }
}
