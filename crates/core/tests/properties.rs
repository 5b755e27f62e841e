//! Property-based tests for the rule engine.

use proptest::prelude::*;

use clanops_core::correction::{CorrectionApplicator, CorrectionRule};
use clanops_core::normalize::normalize_value;
use clanops_core::validation::{
    FieldStatus, ValidationEvaluator, ValidationRowInput, ValidationRuleEntry,
};

const FIELDS: &[&str] = &["player", "source", "chest", "clan", "guild"];
const STATUSES: &[&str] = &["valid", "invalid", "VALID", "Invalid", "pending"];

/// Short values drawn from a small alphabet so rules and rows collide often.
fn value_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ ]{0,2}[abAB]{0,3}[ ]{0,2}").expect("valid regex")
}

fn rule_strategy() -> impl Strategy<Value = ValidationRuleEntry> {
    (
        prop::sample::select(FIELDS),
        value_strategy(),
        prop::sample::select(STATUSES),
    )
        .prop_map(|(field, value, status)| ValidationRuleEntry::new(field, &value, status))
}

fn row_strategy() -> impl Strategy<Value = ValidationRowInput> {
    (
        value_strategy(),
        value_strategy(),
        value_strategy(),
        value_strategy(),
    )
        .prop_map(|(p, s, c, k)| ValidationRowInput::new(&p, &s, &c, &k))
}

fn normalized_row(row: &ValidationRowInput) -> ValidationRowInput {
    ValidationRowInput::new(
        &normalize_value(&row.player),
        &normalize_value(&row.source),
        &normalize_value(&row.chest),
        &normalize_value(&row.clan),
    )
}

proptest! {
    /// Normalizing the row first never changes the outcome.
    #[test]
    fn evaluation_is_case_and_whitespace_invariant(
        rules in prop::collection::vec(rule_strategy(), 0..8),
        row in row_strategy(),
    ) {
        let ev = ValidationEvaluator::new(&rules);
        prop_assert_eq!(ev.evaluate(&row), ev.evaluate(&normalized_row(&row)));
    }

    /// A row is invalid exactly when one of its fields is.
    #[test]
    fn row_invalid_iff_any_field_invalid(
        rules in prop::collection::vec(rule_strategy(), 0..8),
        row in row_strategy(),
    ) {
        let result = ValidationEvaluator::new(&rules).evaluate(&row);
        let any_invalid = result
            .field_status
            .iter()
            .any(|(_, status)| status == FieldStatus::Invalid);
        prop_assert_eq!(result.row_status == FieldStatus::Invalid, any_invalid);
    }

    /// Building twice from the same rules gives identical results.
    #[test]
    fn construction_is_deterministic(
        rules in prop::collection::vec(rule_strategy(), 0..8),
        row in row_strategy(),
    ) {
        let a = ValidationEvaluator::new(&rules).evaluate(&row);
        let b = ValidationEvaluator::new(&rules).evaluate(&row);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn empty_rules_are_always_neutral(row in row_strategy()) {
        let result = ValidationEvaluator::new(&[]).evaluate(&row);
        prop_assert_eq!(result.row_status, FieldStatus::Neutral);
    }

    /// A later duplicate of an indexed rule has no observable effect.
    #[test]
    fn first_correction_rule_wins(
        field in prop::sample::select(FIELDS),
        value in "[a-z]{1,6}",
        first in "[A-Z]{1,6}",
        second in "[A-Z]{1,6}",
    ) {
        let app = CorrectionApplicator::new(&[
            CorrectionRule::new("first", field, &value, &first),
            CorrectionRule::new("second", field, &value.to_uppercase(), &second),
        ]);
        let m = app.apply_to_field(field, &value);
        prop_assert_eq!(m.value, first);
        prop_assert_eq!(m.rule_id.as_deref(), Some("first"));
    }

    /// Without a matching rule the input comes back byte-for-byte.
    #[test]
    fn unmatched_value_is_untouched(value in value_strategy()) {
        let app = CorrectionApplicator::new(&[CorrectionRule::new("r", "all", "zzz", "q")]);
        let m = app.apply_to_field("player", &value);
        prop_assert!(!m.was_corrected);
        prop_assert_eq!(m.value, value);
    }
}
