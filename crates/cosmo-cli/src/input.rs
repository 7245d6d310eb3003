//! # Input Documents
//!
//! Every subcommand that takes a `PATH` reads it through this module.
//! The file is JSON, or YAML when its extension is `.yaml`/`.yml`, and
//! holds either one candidate object or an array of tagged candidates (a
//! render surface).

use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;

use cosmo_core::ComponentKind;

/// A parsed input file.
#[derive(Debug, Clone, PartialEq)]
pub enum Document {
    /// One candidate and the kind it is checked as.
    Single {
        kind: ComponentKind,
        candidate: Value,
    },
    /// A render surface; every entry carries its own `"type"` tag.
    Surface(Vec<Value>),
}

/// Read and classify `path`.
///
/// `kind` overrides the tag of a single candidate, and fills in the tag of
/// surface entries that have none.
pub fn load(path: &Path, kind: Option<ComponentKind>) -> Result<Document> {
    let value = read_value(path)?;
    classify(value, kind).with_context(|| format!("in {}", path.display()))
}

/// Parse `path` as JSON or YAML.
fn read_value(path: &Path) -> Result<Value> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    if is_yaml(path) {
        serde_yaml::from_str(&text).with_context(|| format!("failed to parse YAML {}", path.display()))
    } else {
        serde_json::from_str(&text).with_context(|| format!("failed to parse JSON {}", path.display()))
    }
}

fn is_yaml(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"))
}

/// Split a parsed document into a single candidate or a surface.
pub fn classify(value: Value, kind: Option<ComponentKind>) -> Result<Document> {
    match value {
        Value::Array(entries) => Ok(Document::Surface(
            entries.into_iter().map(|entry| tag_entry(entry, kind)).collect(),
        )),
        candidate => {
            let kind = match kind {
                Some(kind) => kind,
                None => ComponentKind::from_candidate(&candidate)
                    .context("cannot tell the component kind; pass --kind or add a \"type\" tag")?,
            };
            Ok(Document::Single { kind, candidate })
        }
    }
}

fn tag_entry(mut entry: Value, kind: Option<ComponentKind>) -> Value {
    if let (Some(kind), Value::Object(map)) = (kind, &mut entry) {
        map.entry("type")
            .or_insert_with(|| Value::String(kind.as_str().to_string()));
    }
    entry
}

/// The kind of surface entry `index`.
pub fn entry_kind(index: usize, entry: &Value) -> Result<ComponentKind> {
    ComponentKind::from_candidate(entry).with_context(|| format!("surface entry [{index}]"))
}
