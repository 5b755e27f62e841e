//! `clanops-core` -- validation and correction rule engine.
//!
//! Rule sets are compiled once into immutable indexes and then evaluated
//! per row. Loading rules from storage and persisting corrected values are
//! left to the host application.

pub mod correction;
pub mod error;
pub mod normalize;
pub mod review;
pub mod ruleset;
pub mod validation;
