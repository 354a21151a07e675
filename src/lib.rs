//! Password criteria evaluation and set/confirm form validation
//!
//! This library provides the logic behind a "choose a new password" screen:
//! five independent criteria, the policy that combines them, and a controller
//! for the new/confirm password pair that tells the UI what to render.
//!
//! # Policy
//!
//! A password is accepted when it is 8 to 32 characters long with no
//! whitespace, and meets at least 3 of: uppercase letter, lowercase letter,
//! digit, special character.
//!
//! # Features
//!
//! - `async`: Enables [`ChannelObserver`], forwarding form events over a tokio channel
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use pwd_form::{FieldId, FormEvent, PasswordForm, is_policy_met};
//!
//! assert!(is_policy_met("Abcdef1!"));
//!
//! let mut form = PasswordForm::new(Vec::<FormEvent>::new());
//! form.on_text_changed(FieldId::NewPassword, "Abcdef1!");
//! form.on_text_changed(FieldId::ConfirmPassword, "Abcdef1");
//!
//! assert!(!form.on_submit());
//! assert_eq!(form.observer().last(), Some(&FormEvent::SubmitFailed));
//! ```

// Internal modules
mod allowlist;
mod criteria;
mod display;
mod error;
mod evaluator;
mod form;
mod observer;
mod policy;
mod sections;

#[cfg(test)]
mod proptest;

// Public API
pub use allowlist::{ALLOWED_PUNCTUATION, first_disallowed, is_allowed, is_allowed_char};
pub use criteria::{CriteriaSnapshot, Criterion};
pub use display::{CriteriaDisplay, CriteriaMarks, CriterionMark, DisplayMode};
pub use error::{FieldError, ValidationError, ValidationResult};
pub use evaluator::{evaluate, is_policy_met};
pub use form::{FieldId, PasswordForm};
pub use observer::{FormEvent, FormObserver, NoopObserver};
pub use policy::PasswordPolicy;
pub use sections::{
    digit_met, length_and_no_space_met, lowercase_met, special_character_met, uppercase_met,
};

#[cfg(feature = "async")]
pub use observer::ChannelObserver;
