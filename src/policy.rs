//! Policy thresholds.
//!
//! The default policy is the one the form enforces: 8 to 32 characters with no
//! whitespace, plus at least 3 of the 4 optional criteria.

use crate::criteria::{CriteriaSnapshot, Criterion};
use crate::sections::length_within;

pub const DEFAULT_MIN_LENGTH: usize = 8;
pub const DEFAULT_MAX_LENGTH: usize = 32;
pub const DEFAULT_MIN_OPTIONAL_CRITERIA: usize = 3;

/// Thresholds of the aggregate acceptance rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordPolicy {
    pub min_length: usize,
    pub max_length: usize,
    pub min_optional_criteria: usize,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            max_length: DEFAULT_MAX_LENGTH,
            min_optional_criteria: DEFAULT_MIN_OPTIONAL_CRITERIA,
        }
    }
}

impl PasswordPolicy {
    pub fn length_and_no_space_met(&self, password: &str) -> bool {
        length_within(password, self.min_length, self.max_length)
    }

    /// Evaluates all five criteria under this policy's length window.
    pub fn evaluate(&self, password: &str) -> CriteriaSnapshot {
        crate::evaluator::evaluate_with(password, |p| self.length_and_no_space_met(p))
    }

    /// Aggregate verdict for an already computed snapshot.
    pub fn accepts(&self, snapshot: &CriteriaSnapshot) -> bool {
        snapshot.is_met(Criterion::LengthAndNoSpace)
            && snapshot.optional_met_count() >= self.min_optional_criteria
    }

    pub fn is_met(&self, password: &str) -> bool {
        self.accepts(&self.evaluate(password))
    }
}
