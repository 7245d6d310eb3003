//! # Error Types
//!
//! Errors raised when callers hand `cosmo-core` a value it cannot
//! interpret: an unknown component kind, a word outside a vocabulary, a
//! malformed color or timestamp. Malformed *records* are never errors at
//! this layer; they are reported through validation results upstream.

use thiserror::Error;

/// Top-level error type for Cosmo core primitives.
#[derive(Error, Debug)]
pub enum CosmoError {
    /// The component kind name is not one of the 16 supported kinds.
    #[error("unknown component kind: {0:?}")]
    UnknownKind(String),

    /// A tagged candidate carried no usable `"type"` field.
    #[error("candidate has no string \"type\" tag")]
    MissingTypeTag,

    /// A word is not part of the named vocabulary.
    #[error("{value:?} is not a valid {vocabulary}")]
    UnknownValue {
        /// Vocabulary name (e.g. `CardVariant`).
        vocabulary: &'static str,
        /// The rejected input.
        value: String,
    },

    /// Not a `#rgb` or `#rrggbb` color.
    #[error("invalid hex color: {0:?}")]
    InvalidHexColor(String),

    /// Not an RFC 3339 timestamp.
    #[error("invalid RFC 3339 timestamp {value:?}: {reason}")]
    InvalidTimestamp {
        /// The rejected input.
        value: String,
        /// Parser message.
        reason: String,
    },

    /// JSON serialization or deserialization failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
