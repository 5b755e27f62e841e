use std::path::PathBuf;

use clanops_core::error::CoreError;

/// Batch review configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewConfig {
    /// JSON rule set with `validation` and `corrections` arrays.
    pub ruleset_path: PathBuf,
    /// JSON array of rows with `player`, `source`, `chest`, `clan`.
    pub rows_path: PathBuf,
    /// Only emit rows that are invalid or were corrected (default: `false`).
    pub only_flagged: bool,
    /// Pretty-print the report (default: `true`).
    pub pretty: bool,
}

impl ReviewConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var               | Default    |
    /// |-----------------------|------------|
    /// | `RULESET_PATH`        | (required) |
    /// | `ROWS_PATH`           | (required) |
    /// | `REVIEW_ONLY_FLAGGED` | `false`    |
    /// | `REVIEW_PRETTY`       | `true`     |
    pub fn from_env() -> Result<Self, CoreError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, CoreError> {
        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| {
                    CoreError::Validation(format!("{key} environment variable is required"))
                })
        };

        let ruleset_path = PathBuf::from(required("RULESET_PATH")?);
        let rows_path = PathBuf::from(required("ROWS_PATH")?);
        let only_flagged = parse_bool("REVIEW_ONLY_FLAGGED", lookup("REVIEW_ONLY_FLAGGED"), false)?;
        let pretty = parse_bool("REVIEW_PRETTY", lookup("REVIEW_PRETTY"), true)?;

        Ok(Self {
            ruleset_path,
            rows_path,
            only_flagged,
            pretty,
        })
    }
}

fn parse_bool(key: &str, raw: Option<String>, default: bool) -> Result<bool, CoreError> {
    let Some(raw) = raw else {
        return Ok(default);
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        _ => Err(CoreError::Validation(format!(
            "{key} must be a boolean, got '{raw}'"
        ))),
    }
}
