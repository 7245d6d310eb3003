//! Errors of the correction layer.
//!
//! A malformed candidate is never an error here: it ends in a `Corrected`
//! or `Rejected` outcome. Errors are reserved for misuse (an illegal state
//! transition, an untagged surface entry) and unreadable configuration.

use thiserror::Error;

use cosmo_core::CosmoError;

/// Errors raised by the self-correction orchestrator.
#[derive(Error, Debug)]
pub enum CorrectionError {
    /// The attempt cannot move from its current state to the requested one.
    #[error("invalid correction transition: {from} -> {to}")]
    InvalidTransition {
        /// Current state.
        from: String,
        /// Attempted target state.
        to: String,
    },

    /// The correction policy could not be read or parsed.
    #[error("invalid correction policy {source_name}: {reason}")]
    Config {
        /// File path or `<inline>`.
        source_name: String,
        /// What went wrong.
        reason: String,
    },

    /// A surface entry carried no usable kind tag.
    #[error("surface entry [{index}]: {source}")]
    UntaggedEntry {
        /// Position in the surface.
        index: usize,
        /// Why the tag could not be read.
        #[source]
        source: CosmoError,
    },
}
