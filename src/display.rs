//! Criteria display - how each criterion is marked while the user types.

use crate::criteria::{CriteriaSnapshot, Criterion};
use crate::evaluator::{evaluate, is_policy_met};

/// Whether the user has left the new-password field at least once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    /// Unmet criteria are shown as neutral.
    #[default]
    PreEdit,
    /// Unmet criteria are shown as failed.
    PostEdit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CriterionMark {
    #[default]
    Neutral,
    Satisfied,
    Failed,
}

impl CriterionMark {
    fn for_verdict(met: bool, mode: DisplayMode) -> Self {
        match (met, mode) {
            (true, _) => CriterionMark::Satisfied,
            (false, DisplayMode::PreEdit) => CriterionMark::Neutral,
            (false, DisplayMode::PostEdit) => CriterionMark::Failed,
        }
    }
}

/// One mark per criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CriteriaMarks {
    marks: [CriterionMark; 5],
}

impl CriteriaMarks {
    pub fn get(&self, criterion: Criterion) -> CriterionMark {
        self.marks[criterion.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Criterion, CriterionMark)> + '_ {
        Criterion::ALL.into_iter().map(|c| (c, self.get(c)))
    }

    pub fn all_neutral(&self) -> bool {
        self.marks.iter().all(|&m| m == CriterionMark::Neutral)
    }
}

/// Marks and snapshot behind the criteria list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CriteriaDisplay {
    mode: DisplayMode,
    snapshot: CriteriaSnapshot,
    marks: CriteriaMarks,
}

impl CriteriaDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn snapshot(&self) -> CriteriaSnapshot {
        self.snapshot
    }

    pub fn marks(&self) -> CriteriaMarks {
        self.marks
    }

    /// Moves to `PostEdit`. Returns `true` only on the first call.
    pub fn finish_editing(&mut self) -> bool {
        if self.mode == DisplayMode::PostEdit {
            return false;
        }
        self.mode = DisplayMode::PostEdit;

        #[cfg(feature = "tracing")]
        tracing::debug!("criteria display switched to post-edit mode");

        true
    }

    /// Re-evaluates `text` and refreshes every mark for the current mode.
    pub fn update_display(&mut self, text: &str) -> CriteriaSnapshot {
        let snapshot = evaluate(text);
        let mode = self.mode;
        for criterion in Criterion::ALL {
            self.marks.marks[criterion.index()] =
                CriterionMark::for_verdict(snapshot.is_met(criterion), mode);
        }
        self.snapshot = snapshot;
        snapshot
    }

    /// Whether `text` may be submitted.
    pub fn validate(&self, text: &str) -> bool {
        is_policy_met(text)
    }

    /// Clears every mark back to neutral. The display mode is kept.
    pub fn reset(&mut self) {
        self.snapshot = CriteriaSnapshot::default();
        self.marks = CriteriaMarks::default();
    }
}
