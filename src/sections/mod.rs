//! Password criteria sections
//!
//! Each section answers a single yes/no question about a candidate password.
//! Sections are pure: no state, no allocation beyond iteration, `false` on `""`.

mod length;
mod variety;

pub use length::length_and_no_space_met;
pub(crate) use length::length_within;
pub use variety::{digit_met, lowercase_met, special_character_met, uppercase_met};

/// Signature shared by every criterion predicate.
pub type SectionFn = fn(&str) -> bool;
