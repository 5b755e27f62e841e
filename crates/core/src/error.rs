use std::path::PathBuf;

/// Errors surfaced by the rule-set loader and host configuration.
///
/// The evaluator and applicator themselves are total and never produce
/// these; malformed rule rows are dropped at index construction instead.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Validation failed: {0}")]
    Validation(String),
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        CoreError::Parse(err.to_string())
    }
}
