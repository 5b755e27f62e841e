//! `clanops-review` -- batch correction and validation review.
//!
//! Applies a stored rule set to a batch of imported rows and prints the
//! review report as JSON on stdout.
//!
//! # Environment variables
//!
//! | Variable              | Required | Default | Description                          |
//! |-----------------------|----------|---------|--------------------------------------|
//! | `RULESET_PATH`        | yes      | --      | JSON rule set (`validation`, `corrections`) |
//! | `ROWS_PATH`           | yes      | --      | JSON array of rows                   |
//! | `REVIEW_ONLY_FLAGGED` | no       | `false` | Only print invalid or corrected rows |
//! | `REVIEW_PRETTY`       | no       | `true`  | Pretty-print the report              |

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use clanops_review::config::ReviewConfig;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "clanops_review=info,clanops_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = ReviewConfig::from_env().context("invalid review configuration")?;

    tracing::info!(
        ruleset = %config.ruleset_path.display(),
        rows = %config.rows_path.display(),
        only_flagged = config.only_flagged,
        "Starting clanops-review",
    );

    let summary = clanops_review::run(&config).context("review failed")?;
    println!("{}", clanops_review::render(&summary, config.pretty)?);
    Ok(())
}
