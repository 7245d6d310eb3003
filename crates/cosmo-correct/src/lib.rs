//! # cosmo-correct: Self-Correction for Generated Records
//!
//! The single-pass fallback from an invalid AI-generated record to its
//! sanitized counterpart, with an explicit state machine, a configurable
//! policy and human-readable diagnostics.
//!
//! ## Workflow
//!
//! 1. Validate the candidate ([`cosmo_schema::Validator::validate`]).
//! 2. Valid: accept it. Invalid: use the sanitized record and keep the
//!    original errors for display.
//! 3. Optionally re-validate the sanitized record; residual errors are
//!    required content the model never produced, and may reject the
//!    attempt under [`CorrectionPolicy::reject_on_residual_errors`].
//!
//! ## Observability
//!
//! `tracing` events at `debug` for every attempt and `warn` for corrected
//! or rejected ones; a `metrics` counter `cosmo_correction_outcomes_total`
//! labelled by `kind` and `outcome`.
//!
//! ## Crate Policy
//!
//! - No retries. Re-prompting belongs to the caller.
//! - No I/O beyond reading a policy file on request.

pub mod corrector;
pub mod diagnostic;
pub mod error;
pub mod policy;
pub mod state;

pub use corrector::{CorrectionOutcome, SelfCorrector, SurfaceCorrection};
pub use diagnostic::format_diagnostic;
pub use error::CorrectionError;
pub use policy::{CorrectionPolicy, IdStrategy};
pub use state::{CorrectionAttempt, CorrectionState, TransitionRecord};
