//! Property-based tests for the criteria evaluator and the form.
//!
//! These tests use proptest to verify:
//! - the policy verdict is exactly "length rule and at least 3 of 4"
//! - the length window and whitespace rule
//! - reset idempotence of the criteria display

use crate::criteria::Criterion;
use crate::display::{CriteriaDisplay, DisplayMode};
use crate::evaluator::{evaluate, is_policy_met};
use crate::form::{FieldId, PasswordForm};
use crate::sections::{
    digit_met, length_and_no_space_met, lowercase_met, special_character_met, uppercase_met,
};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

/// Arbitrary input including whitespace, punctuation and non-ASCII letters.
fn arb_input() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z0-9 \\t.,@:?!*()$/#%é]{0,40}").unwrap()
}

/// Input without any whitespace.
fn arb_no_space(len: std::ops::RangeInclusive<usize>) -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(
            "abcXYZ019.,@:?!*()$/#%".chars().collect::<Vec<_>>(),
        ),
        len,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

fn display_in(mode: DisplayMode) -> CriteriaDisplay {
    let mut display = CriteriaDisplay::new();
    if mode == DisplayMode::PostEdit {
        display.finish_editing();
    }
    display
}

// ============================================================================
// Exhaustive combination table
// ============================================================================

/// Builds a string with exactly the requested character classes.
fn build(upper: bool, lower: bool, digit: bool, special: bool, long_enough: bool) -> String {
    let mut s = String::new();
    if upper {
        s.push('A');
    }
    if lower {
        s.push('a');
    }
    if digit {
        s.push('1');
    }
    if special {
        s.push('!');
    }
    // pad with a class already present, or with a special character when
    // nothing is selected and the special criterion is not wanted
    let filler = if upper {
        'B'
    } else if lower {
        'b'
    } else if digit {
        '2'
    } else {
        ' '
    };
    let target = if long_enough { 8 } else { 3 };
    while s.chars().count() < target {
        s.push(filler);
    }
    s
}

#[test]
fn policy_matches_combination_table() {
    for bits in 0u8..16 {
        let (upper, lower, digit, special) =
            (bits & 1 != 0, bits & 2 != 0, bits & 4 != 0, bits & 8 != 0);
        for long_enough in [false, true] {
            let s = build(upper, lower, digit, special, long_enough);
            let snapshot = evaluate(&s);
            let count = [upper, lower, digit, special].iter().filter(|&&b| b).count();
            let filler_is_space = !(upper || lower || digit);
            let length_ok = long_enough && !filler_is_space;

            assert_eq!(uppercase_met(&s), upper, "{s:?}");
            assert_eq!(lowercase_met(&s), lower, "{s:?}");
            assert_eq!(digit_met(&s), digit, "{s:?}");
            assert_eq!(
                special_character_met(&s),
                special || (filler_is_space && !s.is_empty()),
                "{s:?}"
            );
            assert_eq!(length_and_no_space_met(&s), length_ok, "{s:?}");
            assert_eq!(
                is_policy_met(&s),
                length_ok && count >= 3,
                "bits {bits:04b}, long {long_enough}: {s:?}"
            );
            assert_eq!(snapshot.is_policy_met(), is_policy_met(&s));
        }
    }
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn policy_is_length_rule_and_three_of_four(s in arb_input()) {
        let snapshot = evaluate(&s);
        let count = Criterion::OPTIONAL.iter().filter(|&&c| snapshot.is_met(c)).count();
        prop_assert_eq!(
            is_policy_met(&s),
            length_and_no_space_met(&s) && count >= 3
        );
    }

    #[test]
    fn length_window_without_whitespace_is_met(s in arb_no_space(8..=32)) {
        prop_assert!(length_and_no_space_met(&s));
    }

    #[test]
    fn length_outside_window_is_not_met(
        s in prop_oneof![arb_no_space(0..=7), arb_no_space(33..=40)]
    ) {
        prop_assert!(!length_and_no_space_met(&s));
    }

    #[test]
    fn any_whitespace_disqualifies(
        s in arb_no_space(8..=31),
        at in any::<prop::sample::Index>(),
        ws in prop::sample::select(vec![' ', '\t', '\n', '\u{a0}'])
    ) {
        let mut chars: Vec<char> = s.chars().collect();
        let pos = at.index(chars.len() + 1);
        chars.insert(pos, ws);
        let with_ws: String = chars.into_iter().collect();
        prop_assert!(!length_and_no_space_met(&with_ws));
        prop_assert!(!is_policy_met(&with_ws));
    }

    #[test]
    fn reset_then_update_equals_fresh_update(
        previous in arb_input(),
        s in arb_input(),
        post_edit in any::<bool>()
    ) {
        let mode = if post_edit { DisplayMode::PostEdit } else { DisplayMode::PreEdit };
        let mut fresh = display_in(mode);
        let mut reused = display_in(mode);

        reused.update_display(&previous);
        reused.reset();

        prop_assert_eq!(fresh.update_display(&s), reused.update_display(&s));
        prop_assert_eq!(fresh, reused);
    }

    #[test]
    fn submit_accepts_only_matching_policy_compliant_pairs(
        new in arb_input(),
        confirm in arb_input()
    ) {
        let mut form = PasswordForm::default();
        form.on_text_changed(FieldId::NewPassword, &new);
        form.on_text_changed(FieldId::ConfirmPassword, &confirm);

        let expected = crate::allowlist::is_allowed(&new)
            && is_policy_met(&new)
            && new == confirm;
        prop_assert_eq!(form.on_submit(), expected);
    }
}
