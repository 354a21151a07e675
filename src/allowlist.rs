//! Character allow-list for the new-password field.
//!
//! The form accepts ASCII letters, ASCII digits and the punctuation in
//! [`ALLOWED_PUNCTUATION`]. This is narrower than the special-character
//! criterion, which counts anything outside `[A-Za-z0-9]`: a password with
//! `%` satisfies the criterion but is still rejected by the form.

/// Punctuation accepted by the new-password field.
pub const ALLOWED_PUNCTUATION: &str = ".,@:?!*()$\\/#";

/// Returns `true` if `c` may appear in a new password.
pub fn is_allowed_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || ALLOWED_PUNCTUATION.contains(c)
}

/// Returns the first character of `text` that is not on the allow-list.
pub fn first_disallowed(text: &str) -> Option<char> {
    text.chars().find(|&c| !is_allowed_char(c))
}

/// Returns `true` if every character of `text` is on the allow-list.
///
/// Returns `true` for `""`; emptiness is checked separately by the form.
pub fn is_allowed(text: &str) -> bool {
    first_disallowed(text).is_none()
}
