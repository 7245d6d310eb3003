//! # cosmo CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cosmo_cli::catalog::{run_kinds, run_schema, SchemaArgs};
use cosmo_cli::correct::{run_correct, CorrectArgs};
use cosmo_cli::sanitize::{run_sanitize, SanitizeArgs};
use cosmo_cli::validate::{run_validate, ValidateArgs};
use cosmo_cli::EXIT_ERROR;

/// Cosmo UI component validator
///
/// Validates, sanitizes and self-corrects AI-generated interface records
/// (HUD cards, badges, rings, timers, ...) stored as JSON or YAML.
#[derive(Parser, Debug)]
#[command(name = "cosmo", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML correction policy.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Report every error and warning in a record or surface.
    Validate(ValidateArgs),

    /// Print the repaired record(s) as JSON.
    Sanitize(SanitizeArgs),

    /// Validate, fall back to the sanitized record, and explain.
    Correct(CorrectArgs),

    /// List the supported component kinds.
    Kinds,

    /// Print the JSON Schema of one component kind.
    Schema(SchemaArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    // Logs go to stderr; stdout carries JSON output.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("cosmo CLI v{} starting", env!("CARGO_PKG_VERSION"));

    let config = cli.config.as_deref();
    let result = match cli.command {
        Commands::Validate(args) => run_validate(&args, config),
        Commands::Sanitize(args) => run_sanitize(&args, config),
        Commands::Correct(args) => run_correct(&args, config),
        Commands::Kinds => run_kinds(),
        Commands::Schema(args) => run_schema(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}
