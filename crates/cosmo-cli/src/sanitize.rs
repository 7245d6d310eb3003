//! # Sanitize Subcommand
//!
//! Prints the repaired form of every record in the input as JSON. A single
//! candidate yields one object; a surface yields an array in input order.
//! Sanitizing never fails on malformed records, only on unreadable input.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use clap::Args;
use serde_json::Value;

use cosmo_core::{ComponentKind, IdGenerator};
use cosmo_schema::{sanitize_component, ComponentRecord};

use crate::input::{self, Document};
use crate::{load_policy, print_json, EXIT_OK};

/// Arguments for the `cosmo sanitize` subcommand.
#[derive(Args, Debug)]
pub struct SanitizeArgs {
    /// JSON or YAML file holding one record or an array of tagged records.
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Component kind of an untagged record.
    #[arg(long)]
    pub kind: Option<ComponentKind>,
}

/// Execute the sanitize subcommand.
pub fn run_sanitize(args: &SanitizeArgs, config: Option<&Path>) -> Result<u8> {
    let policy = load_policy(config)?;
    let document = input::load(&args.path, args.kind)?;
    let output = sanitize_document(&document, policy.id_strategy.generator())?;
    print_json(&output)?;
    Ok(EXIT_OK)
}

/// Sanitize every entry of `document`.
///
/// # Errors
///
/// A surface entry whose kind cannot be determined.
pub fn sanitize_document(document: &Document, ids: Arc<dyn IdGenerator>) -> Result<Value> {
    let output = match document {
        Document::Single { kind, candidate } => {
            serde_json::to_value(sanitize_component(*kind, candidate, ids))?
        }
        Document::Surface(entries) => {
            let records = entries
                .iter()
                .enumerate()
                .map(|(index, entry)| {
                    let kind = input::entry_kind(index, entry)?;
                    Ok(sanitize_component(kind, entry, Arc::clone(&ids)))
                })
                .collect::<Result<Vec<ComponentRecord>>>()?;
            tracing::debug!(records = records.len(), "sanitized surface");
            serde_json::to_value(records)?
        }
    };
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmo_core::SequentialIds;
    use serde_json::json;

    fn ids() -> Arc<dyn IdGenerator> {
        Arc::new(SequentialIds::new())
    }

    #[test]
    fn single_record_is_repaired() {
        let doc = Document::Single {
            kind: ComponentKind::ProgressRing,
            candidate: json!({"value": 150}),
        };
        let out = sanitize_document(&doc, ids()).unwrap();
        assert_eq!(out["type"], "progress-ring");
        assert_eq!(out["id"], "ring-1");
        assert_eq!(out["value"], 100.0);
    }

    #[test]
    fn surface_keeps_input_order() {
        let doc = Document::Surface(vec![
            json!({"type": "timer", "durationSeconds": 0}),
            json!({"type": "tooltip", "content": "Tip"}),
        ]);
        let out = sanitize_document(&doc, ids()).unwrap();
        let tags: Vec<_> = out.as_array().unwrap().iter().map(|r| r["type"].clone()).collect();
        assert_eq!(tags, [json!("timer"), json!("tooltip")]);
        assert_eq!(out[0]["durationSeconds"], 1.0);
        assert_eq!(out[1]["id"], "tooltip-2");
    }

    #[test]
    fn untagged_surface_entry_is_an_error() {
        let doc = Document::Surface(vec![json!({"content": "Tip"})]);
        let err = sanitize_document(&doc, ids()).unwrap_err();
        assert!(format!("{err:#}").contains("surface entry [0]"));
    }
}
