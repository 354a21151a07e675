//! Criteria evaluator - runs every section and aggregates the policy verdict.

use crate::criteria::{CriteriaSnapshot, Criterion};
use crate::policy::PasswordPolicy;
use crate::sections::{
    SectionFn, digit_met, length_and_no_space_met, lowercase_met, special_character_met,
    uppercase_met,
};

/// Evaluates the five criteria for `password` under the default policy.
pub fn evaluate(password: &str) -> CriteriaSnapshot {
    evaluate_with(password, length_and_no_space_met)
}

/// Same as [`evaluate`] with a caller-provided length section.
pub(crate) fn evaluate_with(
    password: &str,
    length_section: impl Fn(&str) -> bool,
) -> CriteriaSnapshot {
    // Orchestrator: one section per optional criterion
    let sections: [(Criterion, SectionFn); 4] = [
        (Criterion::Uppercase, uppercase_met),
        (Criterion::Lowercase, lowercase_met),
        (Criterion::Digit, digit_met),
        (Criterion::Special, special_character_met),
    ];

    CriteriaSnapshot::from_fn(|criterion| match criterion {
        Criterion::LengthAndNoSpace => length_section(password),
        other => sections
            .iter()
            .find(|(c, _)| *c == other)
            .is_some_and(|(_, section_fn)| section_fn(password)),
    })
}

/// Length/no-space met and at least 3 of the 4 optional criteria met.
pub fn is_policy_met(password: &str) -> bool {
    PasswordPolicy::default().accepts(&evaluate(password))
}
