//! Serialized rule sets and their compiled form.
//!
//! The loader only fails on unreadable files or malformed JSON. Rule rows
//! with unknown fields, empty values or unrecognized statuses still load and
//! are dropped when the indexes are built.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::correction::{CorrectionApplicator, CorrectionRule};
use crate::error::CoreError;
use crate::validation::{ValidationEvaluator, ValidationRuleEntry};

/// Validation and correction rules exported from the host's rule store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    #[serde(default)]
    pub validation: Vec<ValidationRuleEntry>,
    #[serde(default)]
    pub corrections: Vec<CorrectionRule>,
}

/// Both indexes built from one [`RuleSet`].
#[derive(Debug, Clone, Default)]
pub struct CompiledRuleSet {
    pub evaluator: ValidationEvaluator,
    pub applicator: CorrectionApplicator,
}

impl RuleSet {
    pub fn from_json_str(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a rule set file.
    pub fn load(path: &Path) -> Result<Self, CoreError> {
        let json = std::fs::read_to_string(path).map_err(|source| CoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let rules = Self::from_json_str(&json)?;
        tracing::info!(
            path = %path.display(),
            validation_rules = rules.validation.len(),
            correction_rules = rules.corrections.len(),
            "Loaded rule set",
        );
        Ok(rules)
    }

    pub fn compile(&self) -> CompiledRuleSet {
        CompiledRuleSet {
            evaluator: ValidationEvaluator::new(&self.validation),
            applicator: CorrectionApplicator::new(&self.corrections),
        }
    }
}
