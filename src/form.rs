//! Form validation controller for the new/confirm password pair.

use std::fmt;

use secrecy::{ExposeSecret, SecretString};

use crate::allowlist::first_disallowed;
use crate::criteria::CriteriaSnapshot;
use crate::display::{CriteriaDisplay, CriteriaMarks, DisplayMode};
use crate::error::{FieldError, ValidationResult};
use crate::observer::{FormObserver, NoopObserver};

/// The two input fields of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    NewPassword,
    ConfirmPassword,
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldId::NewPassword => f.write_str("new password"),
            FieldId::ConfirmPassword => f.write_str("confirm password"),
        }
    }
}

fn empty_secret() -> SecretString {
    SecretString::new(String::new().into())
}

/// State and validation rules of the set-password form.
///
/// Text is kept in [`SecretString`], so `Debug` output never shows it. Every
/// change the UI must render is pushed to the observer `O`.
#[derive(Debug)]
pub struct PasswordForm<O = NoopObserver> {
    new_password: SecretString,
    confirm_password: SecretString,
    display: CriteriaDisplay,
    observer: O,
}

impl Default for PasswordForm<NoopObserver> {
    fn default() -> Self {
        Self::new(NoopObserver)
    }
}

impl<O: FormObserver> PasswordForm<O> {
    pub fn new(observer: O) -> Self {
        Self {
            new_password: empty_secret(),
            confirm_password: empty_secret(),
            display: CriteriaDisplay::new(),
            observer,
        }
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    pub fn into_observer(self) -> O {
        self.observer
    }

    pub fn text(&self, field: FieldId) -> &SecretString {
        match field {
            FieldId::NewPassword => &self.new_password,
            FieldId::ConfirmPassword => &self.confirm_password,
        }
    }

    pub fn display_mode(&self) -> DisplayMode {
        self.display.mode()
    }

    pub fn marks(&self) -> CriteriaMarks {
        self.display.marks()
    }

    pub fn snapshot(&self) -> CriteriaSnapshot {
        self.display.snapshot()
    }

    // Inbound events

    /// Stores the new text of `field`. New-password edits refresh the criteria.
    pub fn on_text_changed(&mut self, field: FieldId, text: &str) {
        match field {
            FieldId::NewPassword => {
                self.new_password = SecretString::new(text.into());
                self.update_display(text);
            }
            FieldId::ConfirmPassword => {
                self.confirm_password = SecretString::new(text.into());
            }
        }
    }

    /// Validates `field` after it lost focus.
    ///
    /// The first focus loss of the new-password field switches the criteria
    /// display to [`DisplayMode::PostEdit`] before validating.
    pub fn on_field_lost_focus(&mut self, field: FieldId) -> ValidationResult {
        if field == FieldId::NewPassword {
            self.display.finish_editing();
        }
        self.validate_field(field)
    }

    /// Validates both fields and reports the outcome.
    ///
    /// Both fields are always validated so each one surfaces its own message.
    pub fn on_submit(&mut self) -> bool {
        let new_ok = self.validate_field(FieldId::NewPassword).is_valid;
        let confirm_ok = self.validate_field(FieldId::ConfirmPassword).is_valid;
        let accepted = new_ok && confirm_ok;

        if accepted {
            #[cfg(feature = "tracing")]
            tracing::info!("password form submitted");
            self.observer.submit_succeeded();
        } else {
            #[cfg(feature = "tracing")]
            tracing::debug!(new_ok, confirm_ok, "password form submit rejected");
            self.observer.submit_failed();
        }
        accepted
    }

    // Criteria display

    /// Re-evaluates `text` and notifies the new marks.
    pub fn update_display(&mut self, text: &str) -> CriteriaSnapshot {
        let snapshot = self.display.update_display(text);
        self.observer
            .criteria_snapshot_changed(snapshot, self.display.marks());
        snapshot
    }

    /// Whether `text` satisfies the password policy.
    pub fn validate(&self, text: &str) -> bool {
        self.display.validate(text)
    }

    /// Clears the criteria marks back to neutral and notifies.
    pub fn reset(&mut self) {
        self.display.reset();
        self.observer
            .criteria_snapshot_changed(self.display.snapshot(), self.display.marks());
    }

    /// Returns the form to its freshly opened state, display mode included.
    pub fn reset_form(&mut self) {
        self.new_password = empty_secret();
        self.confirm_password = empty_secret();
        self.display = CriteriaDisplay::new();
        self.observer
            .criteria_snapshot_changed(self.display.snapshot(), self.display.marks());
    }

    // Field validation

    /// Runs the rules of `field` and notifies the result.
    pub fn validate_field(&mut self, field: FieldId) -> ValidationResult {
        let outcome = match field {
            FieldId::NewPassword => self.validate_new_password(),
            FieldId::ConfirmPassword => self.validate_confirm_password(),
        };

        #[cfg(feature = "tracing")]
        {
            if let Err(reason) = outcome {
                tracing::debug!(
                    "{}",
                    crate::error::ValidationError::FieldValidationFailed { field, reason }
                );
            }
        }

        let result = ValidationResult::from(outcome);
        self.observer.field_validation_result(field, &result);
        result
    }

    /// Rules of the new-password field.
    ///
    /// Empty text resets the criteria marks; text on the allow-list refreshes
    /// them before the policy check.
    pub fn validate_new_password(&mut self) -> Result<(), FieldError> {
        let text = self.new_password.expose_secret().to_owned();

        if text.is_empty() {
            self.reset();
            return Err(FieldError::Empty);
        }
        if first_disallowed(&text).is_some() {
            return Err(FieldError::DisallowedCharacter);
        }

        self.update_display(&text);
        if !self.validate(&text) {
            return Err(FieldError::PolicyUnmet);
        }
        Ok(())
    }

    /// Rules of the confirm-password field.
    pub fn validate_confirm_password(&self) -> Result<(), FieldError> {
        let confirm = self.confirm_password.expose_secret();
        if confirm.is_empty() {
            return Err(FieldError::Empty);
        }
        if confirm != self.new_password.expose_secret() {
            return Err(FieldError::Mismatch);
        }
        Ok(())
    }
}
