//! Field value correction engine.
//!
//! Rewrites individual field values according to substitution rules scoped
//! either to one field or to every field (the `all` wildcard).

pub mod applicator;
pub mod rules;

pub use applicator::{
    create_correction_applicator, CorrectionApplicator, FieldCorrection, RowCorrection,
};
pub use rules::{CorrectionMatch, CorrectionRule, STATUS_ACTIVE, WILDCARD_FIELD};
