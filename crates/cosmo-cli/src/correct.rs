//! # Correct Subcommand
//!
//! Runs the self-correction workflow over the input: valid records pass
//! through, invalid ones fall back to their sanitized form, and repeated
//! ids across a surface are renamed. The policy comes from `--config`.
//!
//! Text output keeps stdout pipeable: renderable records go to stdout as
//! JSON, diagnostics go to stderr. JSON output prints the full outcomes.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use serde_json::Value;

use cosmo_core::ComponentKind;
use cosmo_correct::{SelfCorrector, SurfaceCorrection};

use crate::input::{self, Document};
use crate::{load_policy, print_json, OutputFormat, EXIT_FAILED, EXIT_OK};

/// Arguments for the `cosmo correct` subcommand.
#[derive(Args, Debug)]
pub struct CorrectArgs {
    /// JSON or YAML file holding one record or an array of tagged records.
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Component kind of an untagged record.
    #[arg(long)]
    pub kind: Option<ComponentKind>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Execute the correct subcommand.
///
/// Returns exit code: 0 when every record is usable, 1 if any was rejected.
pub fn run_correct(args: &CorrectArgs, config: Option<&Path>) -> Result<u8> {
    let policy = load_policy(config)?;
    let corrector = SelfCorrector::new(policy);
    let document = input::load(&args.path, args.kind)?;
    let is_surface = matches!(document, Document::Surface(_));
    let correction = correct_document(&corrector, document)?;

    let rejected = correction.rejected();
    tracing::info!(
        path = %args.path.display(),
        entries = correction.outcomes.len(),
        rejected,
        renamed = correction.renamed.len(),
        "corrected input"
    );

    match args.format {
        OutputFormat::Text => {
            eprintln!("{}", render_diagnostics(&correction));
            print_json(&renderable(&correction, is_surface)?)?;
        }
        OutputFormat::Json => print_json(&correction)?,
    }

    Ok(if rejected == 0 { EXIT_OK } else { EXIT_FAILED })
}

/// Correct `document`; a single candidate becomes a one-entry surface.
pub fn correct_document(corrector: &SelfCorrector, document: Document) -> Result<SurfaceCorrection> {
    match document {
        Document::Single { kind, candidate } => {
            let outcome = corrector.correct_component(kind, &candidate)?;
            Ok(SurfaceCorrection {
                outcomes: vec![outcome],
                renamed: Vec::new(),
            })
        }
        Document::Surface(entries) => Ok(corrector.correct_surface(&entries)?),
    }
}

/// Every outcome's diagnostic, then every rename.
pub fn render_diagnostics(correction: &SurfaceCorrection) -> String {
    let mut blocks: Vec<String> = correction.outcomes.iter().map(|o| o.diagnostic()).collect();
    if !correction.renamed.is_empty() {
        let mut text = format!("renamed {} duplicate id(s)", correction.renamed.len());
        for issue in &correction.renamed {
            text.push_str(&format!("\n  {:<5} {issue}", issue.severity.label()));
        }
        blocks.push(text);
    }
    blocks.join("\n")
}

// A single candidate prints as one object, or null when rejected.
fn renderable(correction: &SurfaceCorrection, is_surface: bool) -> Result<Value> {
    let records: Vec<_> = correction.records().collect();
    let value = if is_surface {
        serde_json::to_value(records)
    } else {
        serde_json::to_value(records.first())
    };
    value.context("failed to serialize corrected records")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use cosmo_core::SequentialIds;
    use cosmo_correct::{CorrectionPolicy, CorrectionState};
    use serde_json::json;

    fn corrector(policy: CorrectionPolicy) -> SelfCorrector {
        SelfCorrector::with_id_generator(policy, Arc::new(SequentialIds::new()))
    }

    #[test]
    fn single_candidate_is_corrected() {
        let doc = Document::Single {
            kind: ComponentKind::StatusIndicator,
            candidate: json!({"state": "loading"}),
        };
        let correction = correct_document(&corrector(CorrectionPolicy::default()), doc).unwrap();
        assert_eq!(correction.outcomes[0].state, CorrectionState::Corrected);
        let text = render_diagnostics(&correction);
        assert!(text.starts_with("StatusIndicator corrected"));
        assert!(text.contains("ERROR id: is required"));
    }

    #[test]
    fn residual_errors_reject_under_a_strict_policy() {
        let strict = CorrectionPolicy {
            reject_on_residual_errors: true,
            ..CorrectionPolicy::default()
        };
        let doc = Document::Single {
            kind: ComponentKind::HudCard,
            candidate: json!({"id": "h", "title": "No body"}),
        };
        let correction = correct_document(&corrector(strict), doc).unwrap();
        assert_eq!(correction.rejected(), 1);
        assert_eq!(correction.records().count(), 0);
    }

    #[test]
    fn surface_renames_are_reported() {
        let doc = Document::Surface(vec![
            json!({"type": "tooltip", "id": "a", "content": "One"}),
            json!({"type": "tooltip", "id": "a", "content": "Two"}),
        ]);
        let correction = correct_document(&corrector(CorrectionPolicy::default()), doc).unwrap();
        assert_eq!(correction.renamed.len(), 1);
        assert!(render_diagnostics(&correction).contains("renamed 1 duplicate id(s)"));
    }

    #[test]
    fn untagged_surface_entry_is_an_error() {
        let doc = Document::Surface(vec![json!({"content": "loose"})]);
        assert!(correct_document(&corrector(CorrectionPolicy::default()), doc).is_err());
    }
}
