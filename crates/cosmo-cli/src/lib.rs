//! # cosmo-cli: Command-Line Front End for Cosmo UI Validation
//!
//! Provides the `cosmo` binary for checking AI-generated component records
//! stored in JSON or YAML files.
//!
//! ## Subcommands
//!
//! - `cosmo validate`: Report every error and warning, without repairing.
//! - `cosmo sanitize`: Print the repaired record(s).
//! - `cosmo correct`: Validate, fall back to the sanitized record, explain.
//! - `cosmo kinds`: List the supported component kinds.
//! - `cosmo schema`: Print the JSON Schema of one kind.
//!
//! ```bash
//! cosmo validate card.json
//! cosmo validate surface.yaml --format json
//! cosmo --config policy.yaml correct reply.json --kind hud-card
//! ```
//!
//! ## Exit Codes
//!
//! `0` valid or usable, `1` invalid or rejected, `2` operational error
//! (unreadable file, malformed document, unknown kind).

pub mod catalog;
pub mod correct;
pub mod input;
pub mod sanitize;
pub mod validate;

use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;

use cosmo_correct::CorrectionPolicy;

/// Exit code for a clean run.
pub const EXIT_OK: u8 = 0;
/// Exit code when at least one record is invalid or rejected.
pub const EXIT_FAILED: u8 = 1;
/// Exit code for operational errors.
pub const EXIT_ERROR: u8 = 2;

/// Report rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable diagnostics.
    #[default]
    Text,
    /// Machine-readable JSON on stdout.
    Json,
}

/// Load the correction policy named by `--config`, or the defaults.
pub fn load_policy(config: Option<&Path>) -> Result<CorrectionPolicy> {
    match config {
        Some(path) => {
            let policy = CorrectionPolicy::load(path).context("failed to load correction policy")?;
            tracing::info!(path = %path.display(), ?policy, "loaded correction policy");
            Ok(policy)
        }
        None => Ok(CorrectionPolicy::default()),
    }
}

/// Pretty-print `value` as JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    println!("{text}");
    Ok(())
}
