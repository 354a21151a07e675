//! Advisory validation errors.
//!
//! None of these are fatal. They are surfaced to the presentation layer as
//! criterion marks or as the message of a [`ValidationResult`].

use thiserror::Error;

use crate::allowlist::ALLOWED_PUNCTUATION;
use crate::criteria::Criterion;
use crate::form::FieldId;

/// Why a single field failed validation. `Display` is the user-facing message.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    #[error("Enter your password")]
    Empty,
    #[error("Enter valid special chars ({}) with no spaces", ALLOWED_PUNCTUATION)]
    DisallowedCharacter,
    #[error("Make sure your password meets the requirements below")]
    PolicyUnmet,
    #[error("Passwords do not match")]
    Mismatch,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Criterion not met: {0}")]
    CriterionUnmet(Criterion),
    #[error("{field}: {reason}")]
    FieldValidationFailed { field: FieldId, reason: FieldError },
}

/// Outcome of one field validation as rendered by the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: bool,
    /// Empty when `is_valid` is true.
    pub message: String,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            message: String::new(),
        }
    }

    pub fn invalid(reason: FieldError) -> Self {
        Self {
            is_valid: false,
            message: reason.to_string(),
        }
    }
}

impl From<Result<(), FieldError>> for ValidationResult {
    fn from(result: Result<(), FieldError>) -> Self {
        match result {
            Ok(()) => Self::valid(),
            Err(reason) => Self::invalid(reason),
        }
    }
}
