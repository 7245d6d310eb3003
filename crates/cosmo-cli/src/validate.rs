//! # Validate Subcommand
//!
//! Checks one candidate or a whole render surface and reports every error
//! and warning without repairing anything. Surfaces are additionally
//! checked for repeated ids.
//!
//! ## Security Invariant
//!
//! Validation is the gate in front of rendering: a record that fails here
//! must not be displayed as-is. `cosmo sanitize` or `cosmo correct` produce
//! the renderable fallback.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use serde_json::Value;

use cosmo_core::{ComponentKind, IdGenerator};
use cosmo_correct::format_diagnostic;
use cosmo_schema::{check_surface, validate_component, ComponentRecord, FieldIssue, ValidationResult};

use crate::input::{self, Document};
use crate::{load_policy, print_json, OutputFormat, EXIT_FAILED, EXIT_OK};

/// Arguments for the `cosmo validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// JSON or YAML file holding one record or an array of tagged records.
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Component kind of an untagged record (e.g. `hud-card`, `Timer`).
    #[arg(long)]
    pub kind: Option<ComponentKind>,

    /// Report format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Diagnosis of one input entry.
#[derive(Debug, Serialize)]
pub struct EntryReport {
    /// `None` when a surface entry's tag could not be read.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<ComponentKind>,
    #[serde(flatten)]
    pub result: ValidationResult<ComponentRecord>,
}

/// Diagnosis of a whole input file.
#[derive(Debug, Serialize)]
pub struct ValidationReport {
    /// True iff every entry is valid and the surface has no repeated id.
    pub valid: bool,
    pub entries: Vec<EntryReport>,
    /// Surface-level issues (repeated ids).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub surface: Vec<FieldIssue>,
    #[serde(skip)]
    is_surface: bool,
}

/// Execute the validate subcommand.
///
/// Returns exit code: 0 when everything is valid, 1 otherwise.
pub fn run_validate(args: &ValidateArgs, config: Option<&Path>) -> Result<u8> {
    let policy = load_policy(config)?;
    let document = input::load(&args.path, args.kind)?;
    let report = validate_document(&document, policy.id_strategy.generator());

    tracing::info!(
        path = %args.path.display(),
        entries = report.entries.len(),
        valid = report.valid,
        "validated input"
    );

    match args.format {
        OutputFormat::Text => println!("{}", render_text(&report)),
        OutputFormat::Json => print_json(&report)?,
    }

    Ok(if report.valid { EXIT_OK } else { EXIT_FAILED })
}

/// Validate every entry of `document`.
pub fn validate_document(document: &Document, ids: Arc<dyn IdGenerator>) -> ValidationReport {
    match document {
        Document::Single { kind, candidate } => {
            let result = validate_component(*kind, candidate, ids);
            ValidationReport {
                valid: result.valid,
                entries: vec![EntryReport {
                    kind: Some(*kind),
                    result,
                }],
                surface: Vec::new(),
                is_surface: false,
            }
        }
        Document::Surface(entries) => {
            let entries: Vec<EntryReport> = entries
                .iter()
                .enumerate()
                .map(|(index, entry)| validate_entry(index, entry, Arc::clone(&ids)))
                .collect();

            // Ids are only comparable when every entry produced a record;
            // otherwise indices would no longer line up with the input.
            let records: Option<Vec<ComponentRecord>> =
                entries.iter().map(|e| e.result.sanitized.clone()).collect();
            let surface = match records {
                Some(records) => check_surface(&records),
                None => {
                    tracing::debug!("skipping duplicate-id check on a surface with unreadable entries");
                    Vec::new()
                }
            };

            let valid = surface.is_empty() && entries.iter().all(|e| e.result.valid);
            ValidationReport {
                valid,
                entries,
                surface,
                is_surface: true,
            }
        }
    }
}

fn validate_entry(index: usize, entry: &Value, ids: Arc<dyn IdGenerator>) -> EntryReport {
    match input::entry_kind(index, entry) {
        Ok(kind) => EntryReport {
            kind: Some(kind),
            result: validate_component(kind, entry, ids),
        },
        Err(e) => EntryReport {
            kind: None,
            result: ValidationResult::from_issues(vec![FieldIssue::error("type", format!("{e:#}"))], None),
        },
    }
}

/// Human-readable rendering of `report`.
pub fn render_text(report: &ValidationReport) -> String {
    if !report.is_surface {
        return match report.entries.first() {
            Some(EntryReport { kind: Some(kind), result }) => format_diagnostic(*kind, result),
            _ => String::new(),
        };
    }

    let mut blocks = Vec::with_capacity(report.entries.len() + 2);
    for (index, entry) in report.entries.iter().enumerate() {
        let body = match entry.kind {
            Some(kind) => format_diagnostic(kind, &entry.result),
            None => {
                let mut text = String::from("unrecognized entry");
                for issue in entry.result.issues() {
                    text.push_str(&format!("\n  {:<5} {issue}", issue.severity.label()));
                }
                text
            }
        };
        blocks.push(format!("[{index}] {body}"));
    }
    if !report.surface.is_empty() {
        let mut text = format!("surface: {} error(s)", report.surface.len());
        for issue in &report.surface {
            text.push_str(&format!("\n  {:<5} {issue}", issue.severity.label()));
        }
        blocks.push(text);
    }
    let passed = report.entries.iter().filter(|e| e.result.valid).count();
    blocks.push(format!("Surface: {passed}/{} entries valid", report.entries.len()));
    blocks.join("\n")
}
