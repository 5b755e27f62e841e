//! Import review: corrections followed by validation, row by row.
//!
//! Mirrors the data-import review screen: each incoming row is rewritten by
//! the correction rules first and the corrected row is then classified.
//! Pure logic; accepting or persisting the result is up to the caller.

use serde::{Deserialize, Serialize};

use crate::correction::{CorrectionApplicator, FieldCorrection};
use crate::validation::{FieldStatus, ValidationEvaluator, ValidationRowInput, ValidationRowResult};

/// Review outcome for a single row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowReview {
    pub row_index: usize,
    pub original: ValidationRowInput,
    pub corrected: ValidationRowInput,
    pub corrections: Vec<FieldCorrection>,
    pub validation: ValidationRowResult,
}

impl RowReview {
    pub fn was_corrected(&self) -> bool {
        !self.corrections.is_empty()
    }

    pub fn row_status(&self) -> FieldStatus {
        self.validation.row_status
    }

    /// Rows a reviewer needs to look at: invalid or touched by a correction.
    pub fn is_flagged(&self) -> bool {
        self.was_corrected() || self.row_status() == FieldStatus::Invalid
    }
}

/// Aggregated review over a batch of rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewSummary {
    pub total_rows: usize,
    pub valid_rows: usize,
    pub invalid_rows: usize,
    pub neutral_rows: usize,
    pub corrected_rows: usize,
    pub corrected_fields: usize,
    pub rows: Vec<RowReview>,
}

impl ReviewSummary {
    /// Create an empty summary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a row review and update the totals.
    pub fn push(&mut self, review: RowReview) {
        self.total_rows += 1;
        match review.row_status() {
            FieldStatus::Valid => self.valid_rows += 1,
            FieldStatus::Invalid => self.invalid_rows += 1,
            FieldStatus::Neutral => self.neutral_rows += 1,
        }
        if review.was_corrected() {
            self.corrected_rows += 1;
            self.corrected_fields += review.corrections.len();
        }
        self.rows.push(review);
    }

    /// Drop rows that need no attention. Totals are left untouched.
    pub fn retain_flagged(&mut self) {
        self.rows.retain(RowReview::is_flagged);
    }
}

/// Correct then validate one row.
pub fn review_row(
    applicator: &CorrectionApplicator,
    evaluator: &ValidationEvaluator,
    row_index: usize,
    row: &ValidationRowInput,
) -> RowReview {
    let correction = applicator.apply_to_row(row);
    let validation = evaluator.evaluate(&correction.row);

    RowReview {
        row_index,
        original: row.clone(),
        corrected: correction.row,
        corrections: correction.corrections,
        validation,
    }
}

/// Review a batch of rows in order.
pub fn review_rows(
    applicator: &CorrectionApplicator,
    evaluator: &ValidationEvaluator,
    rows: &[ValidationRowInput],
) -> ReviewSummary {
    let mut summary = ReviewSummary::new();
    for (index, row) in rows.iter().enumerate() {
        summary.push(review_row(applicator, evaluator, index, row));
    }
    tracing::debug!(
        total = summary.total_rows,
        invalid = summary.invalid_rows,
        corrected = summary.corrected_rows,
        "Reviewed rows",
    );
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::correction::CorrectionRule;
    use crate::validation::ValidationRuleEntry;

    fn fixtures() -> (CorrectionApplicator, ValidationEvaluator) {
        let applicator = CorrectionApplicator::new(&[CorrectionRule::new(
            "r1",
            "player",
            "b0b",
            "Bob",
        )]);
        let evaluator = ValidationEvaluator::new(&[
            ValidationRuleEntry::new("player", "bob", "valid"),
            ValidationRuleEntry::new("player", "alice", "valid"),
        ]);
        (applicator, evaluator)
    }

    #[test]
    fn validation_sees_corrected_value() {
        let (app, ev) = fixtures();
        let review = review_row(&app, &ev, 0, &ValidationRowInput::new("B0B", "s", "c", "k"));
        assert!(review.was_corrected());
        assert_eq!(review.corrected.player, "Bob");
        assert_eq!(review.original.player, "B0B");
        assert_eq!(review.row_status(), FieldStatus::Valid);
    }

    #[test]
    fn summary_counts_each_bucket() {
        let (app, ev) = fixtures();
        let rows = vec![
            ValidationRowInput::new("alice", "s", "c", "k"),
            ValidationRowInput::new("b0b", "s", "c", "k"),
            ValidationRowInput::new("mallory", "s", "c", "k"),
        ];
        let summary = review_rows(&app, &ev, &rows);
        assert_eq!(summary.total_rows, 3);
        assert_eq!(summary.valid_rows, 2);
        assert_eq!(summary.invalid_rows, 1);
        assert_eq!(summary.neutral_rows, 0);
        assert_eq!(summary.corrected_rows, 1);
        assert_eq!(summary.corrected_fields, 1);
        assert_eq!(summary.rows[2].row_index, 2);
    }

    #[test]
    fn empty_rule_sets_give_neutral_rows() {
        let summary = review_rows(
            &CorrectionApplicator::default(),
            &ValidationEvaluator::default(),
            &[ValidationRowInput::new("a", "b", "c", "d")],
        );
        assert_eq!(summary.neutral_rows, 1);
        assert_eq!(summary.corrected_rows, 0);
    }

    #[test]
    fn retain_flagged_keeps_totals() {
        let (app, ev) = fixtures();
        let rows = vec![
            ValidationRowInput::new("alice", "s", "c", "k"),
            ValidationRowInput::new("mallory", "s", "c", "k"),
        ];
        let mut summary = review_rows(&app, &ev, &rows);
        summary.retain_flagged();
        assert_eq!(summary.rows.len(), 1);
        assert_eq!(summary.rows[0].original.player, "mallory");
        assert_eq!(summary.total_rows, 2);
    }
}
