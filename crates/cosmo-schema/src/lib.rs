//! # cosmo-schema: Constraint Tables & Validation Engine
//!
//! Turns untrusted JSON produced by a language model into typed component
//! records that are safe to render.
//!
//! ## Constraint Tables (`tables`)
//!
//! Every bound, vocabulary, default and cross-field rule of the 16
//! component kinds is declared once, as static data, in [`tables`]. The
//! engine, the typed records' fallbacks and the JSON Schema export all read
//! the same tables.
//!
//! ## Engine (`engine`)
//!
//! One generic walker interprets the tables in two passes:
//!
//! - [`engine::check`] reports errors and warnings without touching the
//!   candidate.
//! - [`engine::repair`] builds the nearest conforming object.
//!
//! [`Validator<R>`] wraps both for one record type, and
//! [`validate_component`] / [`sanitize_component`] dispatch on a runtime
//! [`ComponentKind`](cosmo_core::ComponentKind).
//!
//! ## Security Invariant
//!
//! Sanitized output never carries a field the table does not declare, a
//! word outside a vocabulary, a malformed color or timestamp, or a string
//! longer than its cap. Validation reports problems as data; it never
//! panics or returns `Err` on malformed input.
//!
//! ## Crate Policy
//!
//! - Depends only on `cosmo-core` internally.
//! - No I/O and no global state. Id generation is injected.
//! - No `.unwrap()` outside tests.

pub mod constraints;
pub mod dispatch;
pub mod engine;
pub mod export;
pub mod fields;
pub mod issue;
pub mod records;
pub mod surface;
pub mod tables;
pub mod validator;

pub use constraints::{FieldKind, FieldRule, ObjectSchema, Range};
pub use dispatch::{sanitize_component, validate_component};
pub use export::json_schema;
pub use issue::{FieldIssue, Severity, ValidationResult};
pub use records::ComponentRecord;
pub use surface::check_surface;
pub use tables::schema_for;
pub use validator::{ComponentSchema, Validator};
