//! Key normalization shared by the validation and correction indexes.
//!
//! Every comparison in the engine happens on normalized keys: rule values
//! are normalized once when an index is built, row values on every lookup.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Trim surrounding whitespace and lowercase.
///
/// ```
/// use clanops_core::normalize::normalize_value;
///
/// assert_eq!(normalize_value("  Alice "), "alice");
/// assert_eq!(normalize_value("   "), "");
/// ```
pub fn normalize_value(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Lowercase only. Used for short tokens such as validation `field` and
/// `status`, which are matched without trimming.
pub fn normalize_token(token: &str) -> String {
    token.to_lowercase()
}

/// Trim and lowercase a correction rule's field name.
pub fn normalize_field(field: &str) -> String {
    normalize_value(field)
}

// ---------------------------------------------------------------------------
// Row fields
// ---------------------------------------------------------------------------

/// One of the four logical columns rules can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowField {
    Player,
    Source,
    Chest,
    Clan,
}

impl RowField {
    /// All fields, in row order.
    pub const ALL: [RowField; 4] = [
        RowField::Player,
        RowField::Source,
        RowField::Chest,
        RowField::Clan,
    ];

    /// Stable string representation matching serde's `rename_all = "lowercase"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Player => "player",
            Self::Source => "source",
            Self::Chest => "chest",
            Self::Clan => "clan",
        }
    }

    /// Resolve an already-normalized field name. Returns `None` for anything
    /// outside the four recognized names.
    pub fn from_normalized(name: &str) -> Option<Self> {
        match name {
            "player" => Some(Self::Player),
            "source" => Some(Self::Source),
            "chest" => Some(Self::Chest),
            "clan" => Some(Self::Clan),
            _ => None,
        }
    }
}

impl fmt::Display for RowField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RowField {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_normalized(s)
            .ok_or_else(|| CoreError::Validation(format!("unknown row field '{s}'")))
    }
}
