//! Length section - checks the 8..=32 length window and the absence of whitespace.

use unicode_segmentation::UnicodeSegmentation;

use crate::policy::PasswordPolicy;

/// Checks the length window of the default policy and rejects any whitespace.
///
/// Length is counted in grapheme clusters, so `"é"` written with a combining
/// accent counts as one character.
pub fn length_and_no_space_met(password: &str) -> bool {
    PasswordPolicy::default().length_and_no_space_met(password)
}

/// Length check against explicit bounds (inclusive on both ends).
pub(crate) fn length_within(password: &str, min: usize, max: usize) -> bool {
    if password.chars().any(char::is_whitespace) {
        return false;
    }
    let len = password.graphemes(true).count();
    (min..=max).contains(&len)
}
