//! # Catalog Subcommands
//!
//! `cosmo kinds` lists the supported component kinds; `cosmo schema`
//! prints the JSON Schema (Draft 2020-12) of one kind, derived from the
//! same constraint table the validator uses.

use anyhow::Result;
use clap::Args;

use cosmo_core::ComponentKind;
use cosmo_schema::json_schema;

use crate::{print_json, EXIT_OK};

/// Arguments for the `cosmo schema` subcommand.
#[derive(Args, Debug)]
pub struct SchemaArgs {
    /// Component kind (e.g. `hud-card`, `HUDCard`).
    #[arg(long)]
    pub kind: ComponentKind,
}

/// Execute the kinds subcommand.
pub fn run_kinds() -> Result<u8> {
    println!("{}", kinds_table());
    Ok(EXIT_OK)
}

/// Execute the schema subcommand.
pub fn run_schema(args: &SchemaArgs) -> Result<u8> {
    print_json(&json_schema(args.kind))?;
    Ok(EXIT_OK)
}

/// One line per kind: wire tag, component name, generated-id prefix.
pub fn kinds_table() -> String {
    let mut lines = vec![format!("{:<18} {:<16} {}", "TAG", "NAME", "ID PREFIX")];
    lines.extend(ComponentKind::all().iter().map(|kind| {
        format!("{:<18} {:<16} {}-", kind.as_str(), kind.display_name(), kind.id_prefix())
    }));
    lines.join("\n")
}
