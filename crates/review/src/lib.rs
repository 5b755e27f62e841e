//! `clanops-review` library crate.
//!
//! Loads a rule set and a batch of rows from JSON, runs corrections and
//! validation over every row and returns the review summary. The binary
//! entrypoint lives in `main.rs`.

pub mod config;

use std::path::Path;

use clanops_core::error::CoreError;
use clanops_core::review::{review_rows, ReviewSummary};
use clanops_core::ruleset::RuleSet;
use clanops_core::validation::ValidationRowInput;

use crate::config::ReviewConfig;

/// Read a JSON array of rows.
pub fn load_rows(path: &Path) -> Result<Vec<ValidationRowInput>, CoreError> {
    let json = std::fs::read_to_string(path).map_err(|source| CoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let rows: Vec<ValidationRowInput> = serde_json::from_str(&json)?;
    tracing::info!(path = %path.display(), rows = rows.len(), "Loaded rows");
    Ok(rows)
}

/// Run one batch review as described by `config`.
pub fn run(config: &ReviewConfig) -> Result<ReviewSummary, CoreError> {
    let rules = RuleSet::load(&config.ruleset_path)?;
    let rows = load_rows(&config.rows_path)?;

    let compiled = rules.compile();
    let mut summary = review_rows(&compiled.applicator, &compiled.evaluator, &rows);

    tracing::info!(
        total = summary.total_rows,
        valid = summary.valid_rows,
        invalid = summary.invalid_rows,
        neutral = summary.neutral_rows,
        corrected_rows = summary.corrected_rows,
        corrected_fields = summary.corrected_fields,
        "Review complete",
    );

    if config.only_flagged {
        summary.retain_flagged();
    }
    Ok(summary)
}

/// Serialize a summary for output.
pub fn render(summary: &ReviewSummary, pretty: bool) -> Result<String, CoreError> {
    let out = if pretty {
        serde_json::to_string_pretty(summary)?
    } else {
        serde_json::to_string(summary)?
    };
    Ok(out)
}
