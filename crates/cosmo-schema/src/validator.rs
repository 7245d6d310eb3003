//! # Validator
//!
//! [`Validator<R>`] checks and repairs candidates of one component kind.
//! It is generic over the typed record `R`, so `sanitized` is always a
//! `HudCard`, a `Timer`, and so on, never an untyped blob.
//!
//! A validator holds nothing but its id source and is cheap to clone and
//! share across threads.
//!
//! ## Implements
//!
//! - `validate`: diagnose a candidate without changing it, and attach the
//!   repaired record for every object candidate.
//! - `sanitize`: repair any candidate, including non-objects, into a
//!   record. Never fails.

use std::marker::PhantomData;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use cosmo_core::{ComponentKind, IdGenerator, RandomIds};

use crate::constraints::ObjectSchema;
use crate::engine;
use crate::fields::Fields;
use crate::issue::ValidationResult;
use crate::tables::schema_for;

/// A typed record bound to its constraint table.
pub trait ComponentSchema:
    Sized + Clone + PartialEq + std::fmt::Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// The kind this record represents.
    const KIND: ComponentKind;

    /// The constraint table of the kind.
    fn schema() -> &'static ObjectSchema {
        schema_for(Self::KIND)
    }

    /// Build the record from a repaired object.
    fn from_fields(fields: &Fields<'_>) -> Self;

    /// The record id.
    fn id(&self) -> &str;
}

/// Validator and sanitizer for records of type `R`.
#[derive(Debug)]
pub struct Validator<R> {
    ids: Arc<dyn IdGenerator>,
    _record: PhantomData<fn() -> R>,
}

impl<R> Clone for Validator<R> {
    fn clone(&self) -> Self {
        Self {
            ids: Arc::clone(&self.ids),
            _record: PhantomData,
        }
    }
}

impl<R: ComponentSchema> Default for Validator<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: ComponentSchema> Validator<R> {
    /// A validator minting random ids.
    pub fn new() -> Self {
        Self::with_id_generator(Arc::new(RandomIds))
    }

    /// A validator minting ids from `ids`.
    pub fn with_id_generator(ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            ids,
            _record: PhantomData,
        }
    }

    /// The kind this validator handles.
    pub fn kind(&self) -> ComponentKind {
        R::KIND
    }

    /// Diagnose `candidate`.
    ///
    /// `valid` is true iff no errors were found. `sanitized` holds the
    /// repaired record for every object candidate, and is `None` only when
    /// the candidate is not a JSON object.
    pub fn validate(&self, candidate: &Value) -> ValidationResult<R> {
        let issues = engine::check(R::schema(), candidate);
        let sanitized = candidate.is_object().then(|| self.sanitize(candidate));
        ValidationResult::from_issues(issues, sanitized)
    }

    /// Repair `candidate` into the nearest record that satisfies the table.
    pub fn sanitize(&self, candidate: &Value) -> R {
        let schema = R::schema();
        let repaired = engine::repair(schema, candidate, R::KIND.id_prefix(), self.ids.as_ref());
        R::from_fields(&Fields::new(&repaired, schema))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{HudCard, ProgressRing, StatusIndicator};
    use cosmo_core::vocab::IndicatorState;
    use cosmo_core::{is_generated_id, SequentialIds};
    use serde_json::json;

    fn rings() -> Validator<ProgressRing> {
        Validator::with_id_generator(Arc::new(SequentialIds::new()))
    }

    #[test]
    fn validate_attaches_sanitized_record() {
        let result = rings().validate(&json!({"id": "r", "value": 120}));
        assert!(result.valid);
        assert!(result.has_warning("value"));
        assert_eq!(result.sanitized.unwrap().value, 100.0);
    }

    #[test]
    fn validate_non_object_has_no_record() {
        let result = rings().validate(&json!("ring"));
        assert!(!result.valid);
        assert_eq!(result.errors.len(), 1);
        assert!(result.sanitized.is_none());
    }

    #[test]
    fn sanitize_non_object_behaves_like_empty() {
        let record = rings().sanitize(&json!(42));
        assert_eq!(record.id, "ring-1");
        assert_eq!(record.value, 0.0);
    }

    #[test]
    fn default_validator_mints_random_pattern_ids() {
        let record = Validator::<StatusIndicator>::new().sanitize(&json!({"state": "loading"}));
        assert!(is_generated_id(&record.id, "indicator"));
        assert_eq!(record.state, IndicatorState::Loading);
        assert!(record.pulse);
    }

    #[test]
    fn validator_clones_share_the_id_source() {
        let a = Validator::<HudCard>::with_id_generator(Arc::new(SequentialIds::new()));
        let b = a.clone();
        assert_eq!(a.sanitize(&json!({})).id, "hud-1");
        assert_eq!(b.sanitize(&json!({})).id, "hud-2");
        assert_eq!(b.kind(), ComponentKind::HudCard);
    }
}
