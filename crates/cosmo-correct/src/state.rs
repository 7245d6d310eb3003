//! # Correction State Machine
//!
//! One generation attempt moves through:
//!
//! ```text
//! Pending ──▶ Validated{valid} ──▶ Accepted    (valid = true)
//!                             ├──▶ Corrected   (valid = false, repaired record)
//!                             └──▶ Rejected    (valid = false, nothing usable)
//! ```
//!
//! `Accepted`, `Corrected` and `Rejected` are terminal. Every other move is
//! refused with [`CorrectionError::InvalidTransition`]. Each accepted move
//! is logged with a UTC timestamp.

use serde::{Deserialize, Serialize};
use std::fmt;

use cosmo_core::Timestamp;

use crate::error::CorrectionError;

/// Where an attempt stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum CorrectionState {
    /// Raw candidate received.
    Pending,
    /// The candidate was checked.
    Validated {
        /// Whether validation found no errors.
        valid: bool,
    },
    /// The candidate was valid and is used as is.
    Accepted,
    /// The candidate was invalid; its sanitized record is used instead.
    Corrected,
    /// Nothing renderable could be produced.
    Rejected,
}

impl CorrectionState {
    /// Stable lowercase name, also used as the `outcome` metric label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Validated { .. } => "validated",
            Self::Accepted => "accepted",
            Self::Corrected => "corrected",
            Self::Rejected => "rejected",
        }
    }

    /// True for `Accepted`, `Corrected` and `Rejected`.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Accepted | Self::Corrected | Self::Rejected)
    }

    /// Whether `self -> next` is a legal move.
    pub fn can_transition_to(&self, next: CorrectionState) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Validated { .. })
                | (Self::Validated { valid: true }, Self::Accepted)
                | (Self::Validated { valid: false }, Self::Corrected | Self::Rejected)
        )
    }
}

impl fmt::Display for CorrectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validated { valid } => write!(f, "validated(valid={valid})"),
            other => f.write_str(other.as_str()),
        }
    }
}

/// Record of one state change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitionRecord {
    pub from_state: CorrectionState,
    pub to_state: CorrectionState,
    pub timestamp: Timestamp,
    pub reason: String,
}

/// A single attempt and its transition history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrectionAttempt {
    state: CorrectionState,
    transitions: Vec<TransitionRecord>,
}

impl Default for CorrectionAttempt {
    fn default() -> Self {
        Self::new()
    }
}

impl CorrectionAttempt {
    /// A fresh attempt in `Pending`.
    pub fn new() -> Self {
        Self {
            state: CorrectionState::Pending,
            transitions: Vec::new(),
        }
    }

    /// Current state.
    pub fn state(&self) -> CorrectionState {
        self.state
    }

    /// Transitions so far, oldest first.
    pub fn transitions(&self) -> &[TransitionRecord] {
        &self.transitions
    }

    /// Move to `to`, logging the change.
    ///
    /// # Errors
    ///
    /// [`CorrectionError::InvalidTransition`] if the move is not legal from
    /// the current state. The attempt is left unchanged.
    pub fn transition(&mut self, to: CorrectionState, reason: &str) -> Result<(), CorrectionError> {
        if !self.state.can_transition_to(to) {
            return Err(CorrectionError::InvalidTransition {
                from: self.state.to_string(),
                to: to.to_string(),
            });
        }
        self.transitions.push(TransitionRecord {
            from_state: self.state,
            to_state: to,
            timestamp: Timestamp::now(),
            reason: reason.to_string(),
        });
        self.state = to;
        Ok(())
    }

    /// Give up the history.
    pub fn into_transitions(self) -> Vec<TransitionRecord> {
        self.transitions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use CorrectionState::*;

    #[test]
    fn happy_paths() {
        let mut a = CorrectionAttempt::new();
        a.transition(Validated { valid: true }, "no errors").unwrap();
        a.transition(Accepted, "accepted").unwrap();
        assert_eq!(a.state(), Accepted);
        assert_eq!(a.transitions().len(), 2);
        assert_eq!(a.transitions()[0].from_state, Pending);

        let mut b = CorrectionAttempt::new();
        b.transition(Validated { valid: false }, "2 errors").unwrap();
        b.transition(Corrected, "sanitized").unwrap();
        assert!(b.state().is_terminal());
    }

    #[test]
    fn valid_candidates_cannot_be_corrected_or_rejected() {
        let mut a = CorrectionAttempt::new();
        a.transition(Validated { valid: true }, "").unwrap();
        let err = a.transition(Corrected, "").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid correction transition: validated(valid=true) -> corrected"
        );
        assert!(a.transition(Rejected, "").is_err());
        assert_eq!(a.state(), Validated { valid: true });
        assert_eq!(a.transitions().len(), 1);
    }

    #[test]
    fn invalid_candidates_cannot_be_accepted() {
        let mut a = CorrectionAttempt::new();
        a.transition(Validated { valid: false }, "").unwrap();
        assert!(a.transition(Accepted, "").is_err());
    }

    #[test]
    fn pending_must_validate_first() {
        for target in [Accepted, Corrected, Rejected, Pending] {
            assert!(!Pending.can_transition_to(target), "{target}");
        }
    }

    #[test]
    fn terminal_states_are_final() {
        let all = [
            Pending,
            Validated { valid: true },
            Validated { valid: false },
            Accepted,
            Corrected,
            Rejected,
        ];
        for from in [Accepted, Corrected, Rejected] {
            for to in all {
                assert!(!from.can_transition_to(to), "{from} -> {to}");
            }
        }
    }

    #[test]
    fn transition_timestamps_are_ordered() {
        let mut a = CorrectionAttempt::new();
        a.transition(Validated { valid: false }, "").unwrap();
        a.transition(Rejected, "").unwrap();
        let log = a.into_transitions();
        assert!(log[0].timestamp <= log[1].timestamp);
    }

    #[test]
    fn state_serializes_with_tag() {
        let json = serde_json::to_value(Validated { valid: false }).unwrap();
        assert_eq!(json, serde_json::json!({"state": "validated", "valid": false}));
        let json = serde_json::to_value(Corrected).unwrap();
        assert_eq!(json, serde_json::json!({"state": "corrected"}));
    }
}
