//! Criterion names and the per-input snapshot of verdicts.

use std::fmt;

use crate::error::ValidationError;

/// One independently evaluable password rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Criterion {
    LengthAndNoSpace,
    Uppercase,
    Lowercase,
    Digit,
    Special,
}

impl Criterion {
    /// All criteria, in display order.
    pub const ALL: [Criterion; 5] = [
        Criterion::LengthAndNoSpace,
        Criterion::Uppercase,
        Criterion::Lowercase,
        Criterion::Digit,
        Criterion::Special,
    ];

    /// The criteria that take part in the "at least N of these" rule.
    pub const OPTIONAL: [Criterion; 4] = [
        Criterion::Uppercase,
        Criterion::Lowercase,
        Criterion::Digit,
        Criterion::Special,
    ];

    /// Header shown above the optional criteria.
    pub const OPTIONAL_HEADER: &'static str =
        "Use at least 3 of these 4 criteria when setting your password:";

    /// Human-readable description shown next to the criterion mark.
    pub fn label(self) -> &'static str {
        match self {
            Criterion::LengthAndNoSpace => "Length 8-32 characters (No spaces).",
            Criterion::Uppercase => "Has uppercase letter (A-Z).",
            Criterion::Lowercase => "Has lowercase letter (a-z).",
            Criterion::Digit => "Has digit (0-9).",
            Criterion::Special => "Has special character (e.g. !@#$%^).",
        }
    }

    /// Whether the criterion is mandatory rather than one of the optional four.
    pub fn is_required(self) -> bool {
        matches!(self, Criterion::LengthAndNoSpace)
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Criterion::LengthAndNoSpace => "length and no spaces",
            Criterion::Uppercase => "uppercase letter",
            Criterion::Lowercase => "lowercase letter",
            Criterion::Digit => "digit",
            Criterion::Special => "special character",
        };
        f.write_str(name)
    }
}

/// Verdicts of the five criteria for one input string.
///
/// The default value is the snapshot of `""`: nothing met.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CriteriaSnapshot {
    met: [bool; 5],
}

impl CriteriaSnapshot {
    pub(crate) fn from_fn(mut f: impl FnMut(Criterion) -> bool) -> Self {
        let mut met = [false; 5];
        for criterion in Criterion::ALL {
            met[criterion.index()] = f(criterion);
        }
        Self { met }
    }

    pub fn is_met(&self, criterion: Criterion) -> bool {
        self.met[criterion.index()]
    }

    /// How many of the four optional criteria are met.
    pub fn optional_met_count(&self) -> usize {
        Criterion::OPTIONAL
            .iter()
            .filter(|&&c| self.is_met(c))
            .count()
    }

    /// Policy verdict under the default thresholds.
    pub fn is_policy_met(&self) -> bool {
        crate::policy::PasswordPolicy::default().accepts(self)
    }

    /// Iterates `(criterion, met)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Criterion, bool)> + '_ {
        Criterion::ALL.into_iter().map(|c| (c, self.is_met(c)))
    }

    /// One `CriterionUnmet` error per failed criterion.
    pub fn unmet(&self) -> Vec<ValidationError> {
        self.iter()
            .filter(|(_, met)| !met)
            .map(|(c, _)| ValidationError::CriterionUnmet(c))
            .collect()
    }
}
