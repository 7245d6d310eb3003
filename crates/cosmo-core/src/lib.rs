//! # cosmo-core: Foundational Types for Cosmo UI
//!
//! This crate is the leaf of the Cosmo workspace. It defines the primitives
//! every other crate shares when it talks about AI-generated interface
//! cards: which component kinds exist, the closed vocabularies their
//! discrete fields draw from, and how missing identifiers are minted.
//!
//! ## Key Design Principles
//!
//! 1. **Single `ComponentKind` enum.** One definition, 16 variants,
//!    exhaustive `match` everywhere. Adding a kind forces every consumer
//!    (constraint tables, typed records, CLI) to handle it.
//!
//! 2. **Vocabularies are Rust enums.** Every enumerated field (variant,
//!    position, trigger, anchor type, ...) is backed by an enum whose
//!    `VALUES` slice is what the constraint tables check against. The wire
//!    spelling lives in exactly one place.
//!
//! 3. **Injected id generation.** Missing ids are minted through the
//!    [`IdGenerator`] trait. There is no process-wide counter and no
//!    wall-clock based id.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `cosmo-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod format;
pub mod identity;
pub mod kind;
pub mod vocab;

pub use error::CosmoError;
pub use format::{HexColor, Timestamp};
pub use identity::{is_generated_id, IdGenerator, RandomIds, SequentialIds};
pub use kind::{ComponentKind, COMPONENT_KIND_COUNT};
pub use vocab::Vocabulary;
