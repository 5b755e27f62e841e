//! Validation rule, row, and result types.

use serde::{Deserialize, Serialize};

use crate::normalize::{normalize_token, RowField};

/// A validation rule row as loaded by the host from storage.
///
/// Every field is optional because the engine tolerates partial rows: a rule
/// missing any of them is simply never indexed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationRuleEntry {
    #[serde(default)]
    pub field: Option<String>,
    #[serde(default)]
    pub match_value: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl ValidationRuleEntry {
    pub fn new(field: &str, match_value: &str, status: &str) -> Self {
        Self {
            field: Some(field.to_string()),
            match_value: Some(match_value.to_string()),
            status: Some(status.to_string()),
        }
    }
}

/// Which list a validation rule contributes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleStatus {
    Valid,
    Invalid,
}

impl RuleStatus {
    /// Parse a stored status case-insensitively. Anything other than
    /// `valid`/`invalid` yields `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match normalize_token(raw).as_str() {
            "valid" => Some(Self::Valid),
            "invalid" => Some(Self::Invalid),
            _ => None,
        }
    }
}

/// Three-way classification of a field or a whole row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldStatus {
    Valid,
    Invalid,
    Neutral,
}

/// One record to classify.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationRowInput {
    #[serde(default)]
    pub player: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub chest: String,
    #[serde(default)]
    pub clan: String,
}

impl ValidationRowInput {
    pub fn new(player: &str, source: &str, chest: &str, clan: &str) -> Self {
        Self {
            player: player.to_string(),
            source: source.to_string(),
            chest: chest.to_string(),
            clan: clan.to_string(),
        }
    }

    pub fn get(&self, field: RowField) -> &str {
        match field {
            RowField::Player => &self.player,
            RowField::Source => &self.source,
            RowField::Chest => &self.chest,
            RowField::Clan => &self.clan,
        }
    }

    pub fn get_mut(&mut self, field: RowField) -> &mut String {
        match field {
            RowField::Player => &mut self.player,
            RowField::Source => &mut self.source,
            RowField::Chest => &mut self.chest,
            RowField::Clan => &mut self.clan,
        }
    }
}

/// Per-field classification, one slot per [`RowField`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldStatusMap {
    pub player: FieldStatus,
    pub source: FieldStatus,
    pub chest: FieldStatus,
    pub clan: FieldStatus,
}

impl FieldStatusMap {
    /// Build the map by evaluating `f` once per field.
    pub fn from_fn(mut f: impl FnMut(RowField) -> FieldStatus) -> Self {
        Self {
            player: f(RowField::Player),
            source: f(RowField::Source),
            chest: f(RowField::Chest),
            clan: f(RowField::Clan),
        }
    }

    pub fn get(&self, field: RowField) -> FieldStatus {
        match field {
            RowField::Player => self.player,
            RowField::Source => self.source,
            RowField::Chest => self.chest,
            RowField::Clan => self.clan,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (RowField, FieldStatus)> + '_ {
        RowField::ALL.into_iter().map(|field| (field, self.get(field)))
    }

    /// Fields that evaluated to [`FieldStatus::Invalid`], in row order.
    pub fn invalid_fields(&self) -> Vec<RowField> {
        self.iter()
            .filter(|(_, status)| *status == FieldStatus::Invalid)
            .map(|(field, _)| field)
            .collect()
    }
}

/// Outcome of evaluating one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationRowResult {
    pub row_status: FieldStatus,
    pub field_status: FieldStatusMap,
}
