//! Character variety section - uppercase, lowercase, digits, special characters.
//!
//! Only ASCII ranges count as letters and digits. Everything outside
//! `[A-Za-z0-9]` is a special character here; the narrower punctuation
//! allow-list of the form lives in [`crate::allowlist`].

/// At least one character in `A-Z`.
pub fn uppercase_met(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_uppercase())
}

/// At least one character in `a-z`.
pub fn lowercase_met(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_lowercase())
}

/// At least one character in `0-9`.
pub fn digit_met(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_digit())
}

/// At least one character outside `[A-Za-z0-9]`.
pub fn special_character_met(password: &str) -> bool {
    password.chars().any(|c| !c.is_ascii_alphanumeric())
}
