//! Correction rule and match types.

use serde::{Deserialize, Deserializer, Serialize};

/// Reserved field name for rules that apply to every field.
pub const WILDCARD_FIELD: &str = "all";

/// Status value that keeps a correction rule enabled.
pub const STATUS_ACTIVE: &str = "active";

/// A substitution rule as loaded by the host from storage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorrectionRule {
    /// Opaque identifier, echoed back on a match for attribution.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub field: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub match_value: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub replacement_value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl CorrectionRule {
    pub fn new(id: &str, field: &str, match_value: &str, replacement_value: &str) -> Self {
        Self {
            id: id.to_string(),
            field: field.to_string(),
            match_value: match_value.to_string(),
            replacement_value: replacement_value.to_string(),
            status: None,
        }
    }

    pub fn with_status(mut self, status: &str) -> Self {
        self.status = Some(status.to_string());
        self
    }

    /// A missing status counts as active.
    pub fn is_active(&self) -> bool {
        match &self.status {
            None => true,
            Some(status) => status.eq_ignore_ascii_case(STATUS_ACTIVE),
        }
    }
}

/// Stored rule rows may carry `null` columns; treat them as empty strings.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Result of looking up one field value.
///
/// The attribution fields are only populated when `was_corrected` is true,
/// and are omitted from JSON otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorrectionMatch {
    pub value: String,
    pub was_corrected: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule_field: Option<String>,
}

impl CorrectionMatch {
    /// The input passed through untouched.
    pub fn unchanged(value: &str) -> Self {
        Self {
            value: value.to_string(),
            was_corrected: false,
            rule_id: None,
            from: None,
            to: None,
            rule_field: None,
        }
    }

    /// The input replaced by `rule`. `rule_field` is the scope the rule was
    /// registered under (`all` for wildcard rules).
    pub fn corrected(original: &str, rule: &CorrectionRule, rule_field: &str) -> Self {
        Self {
            value: rule.replacement_value.clone(),
            was_corrected: true,
            rule_id: Some(rule.id.clone()),
            from: Some(original.to_string()),
            to: Some(rule.replacement_value.clone()),
            rule_field: Some(rule_field.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_status_is_active() {
        assert!(CorrectionRule::new("r1", "player", "a", "b").is_active());
    }

    #[test]
    fn active_status_is_case_insensitive() {
        let rule = CorrectionRule::new("r1", "player", "a", "b").with_status("ACTIVE");
        assert!(rule.is_active());
    }

    #[test]
    fn other_status_disables_rule() {
        let rule = CorrectionRule::new("r1", "player", "a", "b").with_status("inactive");
        assert!(!rule.is_active());
    }

    #[test]
    fn unchanged_match_omits_attribution_in_json() {
        let json = serde_json::to_value(CorrectionMatch::unchanged("  Foo ")).unwrap();
        assert_eq!(json["value"], "  Foo ");
        assert_eq!(json["wasCorrected"], false);
        assert!(json.get("ruleId").is_none());
        assert!(json.get("from").is_none());
        assert!(json.get("ruleField").is_none());
    }

    #[test]
    fn rule_deserializes_with_null_status() {
        let rule: CorrectionRule = serde_json::from_str(
            r#"{"id":"r1","field":"source","matchValue":"typo","replacementValue":"fix","status":null}"#,
        )
        .unwrap();
        assert_eq!(rule.status, None);
        assert!(rule.is_active());
    }

    #[test]
    fn rule_deserializes_null_columns_as_empty() {
        let rule: CorrectionRule =
            serde_json::from_str(r#"{"id":"r2","field":null,"matchValue":null}"#).unwrap();
        assert_eq!(rule.field, "");
        assert_eq!(rule.match_value, "");
        assert_eq!(rule.replacement_value, "");
    }
}
