//! Row validation engine.
//!
//! Provides rule types and a pure-logic evaluator that classifies rows as
//! valid, invalid, or neutral against per-field whitelists and blacklists.

pub mod evaluator;
pub mod rules;

pub use evaluator::{create_validation_evaluator, ValidationEvaluator, ValidationRuleGroup};
pub use rules::{
    FieldStatus, FieldStatusMap, RuleStatus, ValidationRowInput, ValidationRowResult,
    ValidationRuleEntry,
};
