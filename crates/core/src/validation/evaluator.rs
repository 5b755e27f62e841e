//! Rule evaluator: pure logic, no database access.
//!
//! Rules are compiled once into per-field whitelist/blacklist sets; rows are
//! then classified with set membership tests only.

use std::collections::HashSet;

use super::rules::{
    FieldStatus, FieldStatusMap, RuleStatus, ValidationRowInput, ValidationRowResult,
    ValidationRuleEntry,
};
use crate::normalize::{normalize_token, normalize_value, RowField};

/// Compiled valid/invalid value sets for one field.
#[derive(Debug, Clone, Default)]
pub struct ValidationRuleGroup {
    valid: HashSet<String>,
    invalid: HashSet<String>,
}

impl ValidationRuleGroup {
    pub fn valid(&self) -> &HashSet<String> {
        &self.valid
    }

    pub fn invalid(&self) -> &HashSet<String> {
        &self.invalid
    }

    fn len(&self) -> usize {
        self.valid.len() + self.invalid.len()
    }

    /// Classify one value against this group.
    ///
    /// A non-empty whitelist is checked first and is authoritative: a value
    /// outside it is invalid whether or not a blacklist exists.
    pub fn evaluate(&self, value: &str) -> FieldStatus {
        let key = normalize_value(value);

        if !self.valid.is_empty() && !self.valid.contains(&key) {
            return FieldStatus::Invalid;
        }
        if !self.invalid.is_empty() && self.invalid.contains(&key) {
            return FieldStatus::Invalid;
        }
        if !self.valid.is_empty() || !self.invalid.is_empty() {
            return FieldStatus::Valid;
        }
        FieldStatus::Neutral
    }
}

/// Immutable validation index built from a rule list.
///
/// Safe to share across threads; evaluation never mutates the index. Build a
/// new evaluator when the rule set changes.
#[derive(Debug, Clone, Default)]
pub struct ValidationEvaluator {
    groups: [ValidationRuleGroup; 4],
    rule_count: usize,
}

/// Build a [`ValidationEvaluator`] from stored rule rows.
pub fn create_validation_evaluator(rules: &[ValidationRuleEntry]) -> ValidationEvaluator {
    ValidationEvaluator::new(rules)
}

impl ValidationEvaluator {
    pub fn new(rules: &[ValidationRuleEntry]) -> Self {
        let mut groups: [ValidationRuleGroup; 4] = Default::default();
        let mut discarded = 0usize;

        for rule in rules {
            let Some((field, status, key)) = compile_rule(rule) else {
                discarded += 1;
                continue;
            };
            let group = &mut groups[slot(field)];
            match status {
                RuleStatus::Valid => group.valid.insert(key),
                RuleStatus::Invalid => group.invalid.insert(key),
            };
        }

        let rule_count = groups.iter().map(ValidationRuleGroup::len).sum();
        tracing::debug!(
            total = rules.len(),
            indexed = rule_count,
            discarded,
            "Built validation index",
        );

        Self { groups, rule_count }
    }

    /// The compiled group for `field`.
    pub fn group(&self, field: RowField) -> &ValidationRuleGroup {
        &self.groups[slot(field)]
    }

    /// Classify a single field value.
    pub fn evaluate_field(&self, field: RowField, value: &str) -> FieldStatus {
        self.group(field).evaluate(value)
    }

    /// Classify a value for a field given by name. Unknown names have no
    /// rule group and yield [`FieldStatus::Neutral`].
    pub fn evaluate_field_named(&self, field: &str, value: &str) -> FieldStatus {
        match RowField::from_normalized(&normalize_token(field)) {
            Some(field) => self.evaluate_field(field, value),
            None => FieldStatus::Neutral,
        }
    }

    /// Classify a whole row. The row is invalid if any field is invalid;
    /// otherwise valid when at least one rule was indexed, else neutral.
    pub fn evaluate(&self, row: &ValidationRowInput) -> ValidationRowResult {
        let field_status =
            FieldStatusMap::from_fn(|field| self.evaluate_field(field, row.get(field)));

        let row_status = if field_status
            .iter()
            .any(|(_, status)| status == FieldStatus::Invalid)
        {
            FieldStatus::Invalid
        } else if self.rule_count > 0 {
            FieldStatus::Valid
        } else {
            FieldStatus::Neutral
        };

        ValidationRowResult {
            row_status,
            field_status,
        }
    }

    /// Number of distinct entries across every valid and invalid set.
    pub fn rule_count(&self) -> usize {
        self.rule_count
    }

    pub fn is_empty(&self) -> bool {
        self.rule_count == 0
    }
}

fn slot(field: RowField) -> usize {
    match field {
        RowField::Player => 0,
        RowField::Source => 1,
        RowField::Chest => 2,
        RowField::Clan => 3,
    }
}

/// Normalize a rule row, or `None` if it cannot be indexed.
fn compile_rule(rule: &ValidationRuleEntry) -> Option<(RowField, RuleStatus, String)> {
    let key = normalize_value(rule.match_value.as_deref()?);
    if key.is_empty() {
        return None;
    }
    let field = RowField::from_normalized(&normalize_token(rule.field.as_deref()?))?;
    let status = RuleStatus::parse(rule.status.as_deref()?)?;
    Some((field, status, key))
}
