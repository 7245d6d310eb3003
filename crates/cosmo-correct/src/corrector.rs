//! # Self-Corrector
//!
//! Wraps validate and sanitize into the single-pass workflow a generation
//! pipeline needs: accept a valid candidate, otherwise fall back to its
//! sanitized record, and keep the original diagnosis for display. There
//! are no retries here; re-prompting a model with
//! [`CorrectionOutcome::diagnostic`] is the caller's business.
//!
//! Each finished attempt increments `cosmo_correction_outcomes_total`
//! with `kind` and `outcome` labels. No exporter is installed by this
//! crate; without a recorder the counter is a no-op.

use std::collections::HashSet;
use std::sync::Arc;

use metrics::counter;
use serde::Serialize;
use serde_json::Value;

use cosmo_core::{ComponentKind, IdGenerator};
use cosmo_schema::{
    validate_component, ComponentRecord, ComponentSchema, FieldIssue, ValidationResult, Validator,
};

use crate::diagnostic::{format_diagnostic, push_issues};
use crate::error::CorrectionError;
use crate::policy::CorrectionPolicy;
use crate::state::{CorrectionAttempt, CorrectionState, TransitionRecord};

/// Result of one correction attempt.
#[derive(Debug, Clone, Serialize)]
pub struct CorrectionOutcome<R> {
    pub kind: ComponentKind,
    /// Terminal state of the attempt.
    pub state: CorrectionState,
    /// The record to render. `None` iff rejected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record: Option<R>,
    /// Diagnosis of the original candidate.
    pub validation: ValidationResult<()>,
    /// Diagnosis of the sanitized record, when it was re-validated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub residual: Option<ValidationResult<()>>,
    pub transitions: Vec<TransitionRecord>,
}

impl<R> CorrectionOutcome<R> {
    /// True unless the attempt was rejected.
    pub fn is_usable(&self) -> bool {
        self.record.is_some()
    }

    /// The record, if any.
    pub fn into_record(self) -> Option<R> {
        self.record
    }

    /// Multi-line description: the outcome, every original issue, and any
    /// residual issues left after sanitizing.
    pub fn diagnostic(&self) -> String {
        let mut out = format!("{} {}", self.kind.display_name(), self.state.as_str());
        out.push('\n');
        out.push_str(&format_diagnostic(self.kind, &self.validation));
        if let Some(residual) = self.residual.as_ref().filter(|r| r.issues().next().is_some()) {
            out.push_str(&format!(
                "\nresidual after sanitize: {} error(s), {} warning(s)",
                residual.errors.len(),
                residual.warnings.len()
            ));
            push_issues(&mut out, residual.issues(), "  ");
        }
        out
    }
}

/// Outcomes of correcting a whole render surface.
#[derive(Debug, Clone, Serialize)]
pub struct SurfaceCorrection {
    /// One outcome per entry, in input order.
    pub outcomes: Vec<CorrectionOutcome<ComponentRecord>>,
    /// Warnings at `[i].id` for every id replaced to keep the surface unique.
    pub renamed: Vec<FieldIssue>,
}

impl SurfaceCorrection {
    /// Records that can be rendered, in input order.
    pub fn records(&self) -> impl Iterator<Item = &ComponentRecord> {
        self.outcomes.iter().filter_map(|o| o.record.as_ref())
    }

    /// Number of rejected entries.
    pub fn rejected(&self) -> usize {
        self.outcomes.iter().filter(|o| !o.is_usable()).count()
    }
}

/// Validate-then-sanitize orchestrator.
#[derive(Debug, Clone)]
pub struct SelfCorrector {
    policy: CorrectionPolicy,
    ids: Arc<dyn IdGenerator>,
}

impl Default for SelfCorrector {
    fn default() -> Self {
        Self::new(CorrectionPolicy::default())
    }
}

impl SelfCorrector {
    /// A corrector minting ids per `policy.id_strategy`.
    pub fn new(policy: CorrectionPolicy) -> Self {
        let ids = policy.id_strategy.generator();
        Self { policy, ids }
    }

    /// A corrector with an explicit id source; `policy.id_strategy` is
    /// ignored.
    pub fn with_id_generator(policy: CorrectionPolicy, ids: Arc<dyn IdGenerator>) -> Self {
        Self { policy, ids }
    }

    pub fn policy(&self) -> &CorrectionPolicy {
        &self.policy
    }

    /// Correct a candidate of a statically known kind.
    ///
    /// # Errors
    ///
    /// Only [`CorrectionError::InvalidTransition`], which signals a broken
    /// validator contract rather than a bad candidate.
    pub fn correct<R: ComponentSchema>(&self, candidate: &Value) -> Result<CorrectionOutcome<R>, CorrectionError> {
        let validator = Validator::<R>::with_id_generator(Arc::clone(&self.ids));
        self.run(R::KIND, candidate, |value| validator.validate(value))
    }

    /// Correct a candidate whose kind is known at runtime.
    ///
    /// # Errors
    ///
    /// As [`SelfCorrector::correct`].
    pub fn correct_component(
        &self,
        kind: ComponentKind,
        candidate: &Value,
    ) -> Result<CorrectionOutcome<ComponentRecord>, CorrectionError> {
        self.run(kind, candidate, |value| {
            validate_component(kind, value, Arc::clone(&self.ids))
        })
    }

    /// Correct every tagged entry of a render surface, then rename
    /// duplicate ids so the usable records are unique.
    ///
    /// # Errors
    ///
    /// [`CorrectionError::UntaggedEntry`] for the first entry whose
    /// `"type"` tag is missing or names no kind.
    pub fn correct_surface(&self, candidates: &[Value]) -> Result<SurfaceCorrection, CorrectionError> {
        let mut outcomes = Vec::with_capacity(candidates.len());
        for (index, candidate) in candidates.iter().enumerate() {
            let kind = ComponentKind::from_candidate(candidate)
                .map_err(|source| CorrectionError::UntaggedEntry { index, source })?;
            outcomes.push(self.correct_component(kind, candidate)?);
        }

        let mut seen = HashSet::new();
        let mut renamed = Vec::new();
        for (index, outcome) in outcomes.iter_mut().enumerate() {
            let Some(record) = outcome.record.as_mut() else {
                continue;
            };
            if seen.insert(record.id().to_string()) {
                continue;
            }
            let fresh = self.ids.next_id(outcome.kind.id_prefix());
            tracing::warn!(index, from = record.id(), to = %fresh, "renamed duplicate id");
            renamed.push(FieldIssue::warning(
                format!("[{index}].id"),
                format!("duplicate id {:?} renamed to {fresh:?}", record.id()),
            ));
            seen.insert(fresh.clone());
            record.set_id(fresh);
        }

        Ok(SurfaceCorrection { outcomes, renamed })
    }

    fn run<R: Serialize>(
        &self,
        kind: ComponentKind,
        candidate: &Value,
        validate: impl Fn(&Value) -> ValidationResult<R>,
    ) -> Result<CorrectionOutcome<R>, CorrectionError> {
        let mut attempt = CorrectionAttempt::new();
        let result = validate(candidate);
        let validation = result.diagnosis();
        let (errors, warnings) = (validation.errors.len(), validation.warnings.len());

        attempt.transition(
            CorrectionState::Validated { valid: result.valid },
            &format!("{errors} error(s), {warnings} warning(s)"),
        )?;
        tracing::debug!(kind = %kind, valid = result.valid, errors, warnings, "validated candidate");

        let (state, record, residual, reason) = match (result.valid, result.sanitized) {
            (true, Some(record)) => (CorrectionState::Accepted, Some(record), None, "passed validation".to_string()),
            (_, Some(record)) => {
                let residual = self.policy.revalidate.then(|| revalidate(&record, &validate));
                let residual_errors = residual.as_ref().map_or(0, |r| r.errors.len());
                if self.policy.reject_on_residual_errors && residual_errors > 0 {
                    (
                        CorrectionState::Rejected,
                        None,
                        residual,
                        format!("{residual_errors} error(s) remain after sanitize"),
                    )
                } else {
                    (CorrectionState::Corrected, Some(record), residual, "using sanitized record".to_string())
                }
            }
            (_, None) => (CorrectionState::Rejected, None, None, "nothing to sanitize".to_string()),
        };
        attempt.transition(state, &reason)?;

        match state {
            CorrectionState::Corrected => {
                tracing::warn!(kind = %kind, errors, warnings, "candidate corrected: {reason}")
            }
            CorrectionState::Rejected => {
                tracing::warn!(kind = %kind, errors, warnings, "candidate rejected: {reason}")
            }
            _ => tracing::debug!(kind = %kind, "candidate accepted"),
        }
        counter!(
            "cosmo_correction_outcomes_total",
            "kind" => kind.as_str(),
            "outcome" => state.as_str()
        )
        .increment(1);

        Ok(CorrectionOutcome {
            kind,
            state,
            record,
            validation,
            residual,
            transitions: attempt.into_transitions(),
        })
    }
}

fn revalidate<R: Serialize>(record: &R, validate: impl Fn(&Value) -> ValidationResult<R>) -> ValidationResult<()> {
    match serde_json::to_value(record) {
        Ok(value) => validate(&value).diagnosis(),
        Err(e) => ValidationResult::from_issues(vec![FieldIssue::error("", e.to_string())], None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmo_core::SequentialIds;
    use cosmo_schema::records::{ContextBadge, HudCard};
    use serde_json::json;

    fn corrector(policy: CorrectionPolicy) -> SelfCorrector {
        SelfCorrector::with_id_generator(policy, Arc::new(SequentialIds::new()))
    }

    #[test]
    fn valid_candidate_is_accepted() {
        let outcome = corrector(CorrectionPolicy::default())
            .correct::<ContextBadge>(&json!({"id": "b", "label": "Live"}))
            .unwrap();
        assert_eq!(outcome.state, CorrectionState::Accepted);
        assert_eq!(outcome.record.unwrap().label, "Live");
        assert!(outcome.residual.is_none());
        assert_eq!(outcome.transitions.len(), 2);
    }

    #[test]
    fn invalid_candidate_is_corrected_and_keeps_original_errors() {
        let outcome = corrector(CorrectionPolicy::default())
            .correct::<ContextBadge>(&json!({"label": "Live", "variant": "purple"}))
            .unwrap();
        assert_eq!(outcome.state, CorrectionState::Corrected);
        assert!(outcome.validation.has_error("id"));
        assert!(outcome.validation.has_error("variant"));
        assert_eq!(outcome.record.as_ref().unwrap().id, "badge-1");
        assert!(outcome.residual.as_ref().unwrap().valid);
        assert_eq!(
            outcome.transitions.iter().map(|t| t.to_state).collect::<Vec<_>>(),
            [CorrectionState::Validated { valid: false }, CorrectionState::Corrected]
        );
    }

    #[test]
    fn non_object_is_rejected() {
        let outcome = corrector(CorrectionPolicy::default())
            .correct::<HudCard>(&json!(["not", "a", "card"]))
            .unwrap();
        assert_eq!(outcome.state, CorrectionState::Rejected);
        assert!(!outcome.is_usable());
    }

    #[test]
    fn residual_errors_can_reject() {
        let strict = CorrectionPolicy {
            reject_on_residual_errors: true,
            ..CorrectionPolicy::default()
        };
        let candidate = json!({"title": "No body"});
        let outcome = corrector(strict).correct::<HudCard>(&candidate).unwrap();
        assert_eq!(outcome.state, CorrectionState::Rejected);
        assert!(outcome.residual.unwrap().has_error("content"));

        let lenient = corrector(CorrectionPolicy::default()).correct::<HudCard>(&candidate).unwrap();
        assert_eq!(lenient.state, CorrectionState::Corrected);
    }

    #[test]
    fn revalidation_can_be_disabled() {
        let policy = CorrectionPolicy {
            revalidate: false,
            reject_on_residual_errors: true,
            ..CorrectionPolicy::default()
        };
        let outcome = corrector(policy).correct::<HudCard>(&json!({"title": "No body"})).unwrap();
        assert_eq!(outcome.state, CorrectionState::Corrected);
        assert!(outcome.residual.is_none());
    }

    #[test]
    fn diagnostic_lists_original_and_residual_issues() {
        let outcome = corrector(CorrectionPolicy::default())
            .correct::<HudCard>(&json!({"id": "h", "title": "Hi", "priority": 7}))
            .unwrap();
        let text = outcome.diagnostic();
        assert!(text.starts_with("HUDCard corrected\nHUDCard validation failed: 1 error(s), 1 warning(s)"));
        assert!(text.contains("ERROR content: is required"));
        assert!(text.contains("WARN  priority:"));
        assert!(text.contains("residual after sanitize: 1 error(s), 0 warning(s)"));
        assert!(text.contains("ERROR content: must not be empty"));
    }
}
