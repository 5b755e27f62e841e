//! Correction applicator: field-scoped and wildcard substitution lookups.
//!
//! Within one scope the first registered rule for a key wins. A field-scoped
//! rule always beats a wildcard rule for the same value, regardless of the
//! order they were registered in.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::rules::{CorrectionMatch, CorrectionRule, WILDCARD_FIELD};
use crate::normalize::{normalize_field, normalize_value, RowField};
use crate::validation::ValidationRowInput;

/// Immutable correction index built from a rule list.
#[derive(Debug, Clone, Default)]
pub struct CorrectionApplicator {
    /// normalized field -> normalized match value -> rule
    by_field: HashMap<String, HashMap<String, CorrectionRule>>,
    /// normalized match value -> rule
    wildcard: HashMap<String, CorrectionRule>,
}

/// Build a [`CorrectionApplicator`] from stored rule rows.
pub fn create_correction_applicator(rules: &[CorrectionRule]) -> CorrectionApplicator {
    CorrectionApplicator::new(rules)
}

impl CorrectionApplicator {
    pub fn new(rules: &[CorrectionRule]) -> Self {
        let mut by_field: HashMap<String, HashMap<String, CorrectionRule>> = HashMap::new();
        let mut wildcard: HashMap<String, CorrectionRule> = HashMap::new();
        let mut inactive = 0usize;
        let mut shadowed = 0usize;

        for rule in rules {
            if !rule.is_active() {
                inactive += 1;
                continue;
            }
            let key = normalize_value(&rule.match_value);
            if key.is_empty() {
                continue;
            }
            let field = normalize_field(&rule.field);
            let scope = if field == WILDCARD_FIELD {
                &mut wildcard
            } else {
                by_field.entry(field).or_default()
            };
            match scope.entry(key) {
                Entry::Vacant(slot) => {
                    slot.insert(rule.clone());
                }
                Entry::Occupied(_) => shadowed += 1,
            }
        }

        let applicator = Self { by_field, wildcard };
        tracing::debug!(
            total = rules.len(),
            field_rules = applicator.field_rule_count(),
            wildcard_rules = applicator.wildcard_rule_count(),
            inactive,
            shadowed,
            "Built correction index",
        );
        applicator
    }

    /// Look up a correction for `value` in `field`.
    ///
    /// On no match the original value is returned exactly as given.
    pub fn apply_to_field(&self, field: &str, value: &str) -> CorrectionMatch {
        let key = normalize_value(value);
        if key.is_empty() {
            return CorrectionMatch::unchanged(value);
        }
        let field = normalize_field(field);

        if let Some(rule) = self.by_field.get(&field).and_then(|rules| rules.get(&key)) {
            return CorrectionMatch::corrected(value, rule, &field);
        }
        if let Some(rule) = self.wildcard.get(&key) {
            return CorrectionMatch::corrected(value, rule, WILDCARD_FIELD);
        }
        CorrectionMatch::unchanged(value)
    }

    /// Apply corrections to each canonical field of a row.
    pub fn apply_to_row(&self, row: &ValidationRowInput) -> RowCorrection {
        let mut corrected = row.clone();
        let mut corrections = Vec::new();

        for field in RowField::ALL {
            let result = self.apply_to_field(field.as_str(), row.get(field));
            if result.was_corrected {
                *corrected.get_mut(field) = result.value.clone();
                corrections.push(FieldCorrection {
                    field,
                    correction: result,
                });
            }
        }

        RowCorrection {
            row: corrected,
            corrections,
        }
    }

    /// Number of field-scoped rules in the index.
    pub fn field_rule_count(&self) -> usize {
        self.by_field.values().map(HashMap::len).sum()
    }

    /// Number of wildcard rules in the index.
    pub fn wildcard_rule_count(&self) -> usize {
        self.wildcard.len()
    }

    pub fn is_empty(&self) -> bool {
        self.field_rule_count() == 0 && self.wildcard.is_empty()
    }
}

/// One corrected field within a row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldCorrection {
    pub field: RowField,
    #[serde(flatten)]
    pub correction: CorrectionMatch,
}

/// A row after corrections, with the fields that changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowCorrection {
    pub row: ValidationRowInput,
    pub corrections: Vec<FieldCorrection>,
}

impl RowCorrection {
    pub fn corrected_count(&self) -> usize {
        self.corrections.len()
    }
}
