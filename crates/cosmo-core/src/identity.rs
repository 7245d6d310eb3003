//! # Identifier Generation
//!
//! When an AI-produced record arrives without an `id`, sanitization mints
//! one of the form `<prefix>-<digits>`, where the prefix names the
//! component kind (`badge-`, `ring-`, `tooltip-`, ...).
//!
//! Generation is injected through [`IdGenerator`]:
//!
//! - [`RandomIds`] (the default) draws the digits from a UUID v4, so
//!   concurrent callers in one process do not collide.
//! - [`SequentialIds`] counts up from a chosen start with an atomic
//!   counter owned by the instance, for deterministic tests and fixtures.

use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

/// Source of generated record identifiers.
///
/// Implementations must be safe to share across threads and must return
/// `<prefix>-<one or more ASCII digits>`.
pub trait IdGenerator: Send + Sync + std::fmt::Debug {
    /// Mint a fresh identifier for the given prefix.
    fn next_id(&self, prefix: &str) -> String;
}

/// Random identifiers backed by UUID v4.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn next_id(&self, prefix: &str) -> String {
        // 64 random bits are plenty for ids scoped to one render surface.
        let digits = Uuid::new_v4().as_u128() as u64;
        format!("{prefix}-{digits}")
    }
}

/// Monotonic identifiers from an instance-owned counter.
#[derive(Debug)]
pub struct SequentialIds {
    next: AtomicU64,
}

impl SequentialIds {
    /// Start counting at 1.
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Start counting at `first`.
    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self, prefix: &str) -> String {
        let n = self.next.fetch_add(1, Ordering::SeqCst);
        format!("{prefix}-{n}")
    }
}

/// True if `id` has the generated shape `<prefix>-<digits>`.
pub fn is_generated_id(id: &str, prefix: &str) -> bool {
    id.strip_prefix(prefix)
        .and_then(|rest| rest.strip_prefix('-'))
        .is_some_and(|digits| !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()))
}
