//! # Validation Results
//!
//! `validate` reports problems as data, never as `Err`: malformed input is
//! the expected case when the input comes from a language model. A
//! [`ValidationResult`] separates blocking errors from advisory warnings
//! and carries the typed, repaired record alongside the diagnosis.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether an issue blocks acceptance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The value is categorically wrong; the record may not be rendered as is.
    Error,
    /// The value is usable but outside a recommended window or overridden.
    Warning,
}

impl Severity {
    /// Upper-case label for diagnostics.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Error => "ERROR",
            Self::Warning => "WARN",
        }
    }
}

/// A single problem found in a candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldIssue {
    /// Dot/index path to the field (`title`, `metadata.anchorType`,
    /// `actions[1].label`). Empty for the root.
    pub field: String,
    /// Human-readable description.
    pub message: String,
    /// Blocking or advisory.
    pub severity: Severity,
}

impl FieldIssue {
    /// A blocking issue.
    pub fn error(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            severity: Severity::Error,
        }
    }

    /// An advisory issue.
    pub fn warning(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            severity: Severity::Warning,
        }
    }

    /// True for [`Severity::Error`].
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.field.is_empty() {
            write!(f, "(root): {}", self.message)
        } else {
            write!(f, "{}: {}", self.field, self.message)
        }
    }
}

/// Outcome of checking one candidate against one constraint table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult<R> {
    /// True iff `errors` is empty. Warnings never affect validity.
    pub valid: bool,
    /// Blocking issues.
    pub errors: Vec<FieldIssue>,
    /// Advisory issues.
    pub warnings: Vec<FieldIssue>,
    /// Best-effort repaired record. `None` only when the candidate was not
    /// a JSON object at all.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sanitized: Option<R>,
}

impl<R> ValidationResult<R> {
    /// Split a flat issue list by severity.
    pub fn from_issues(issues: Vec<FieldIssue>, sanitized: Option<R>) -> Self {
        let (errors, warnings): (Vec<_>, Vec<_>) = issues.into_iter().partition(FieldIssue::is_error);
        Self {
            valid: errors.is_empty(),
            errors,
            warnings,
            sanitized,
        }
    }

    /// Map the sanitized record, keeping the diagnosis.
    pub fn map<S>(self, f: impl FnOnce(R) -> S) -> ValidationResult<S> {
        ValidationResult {
            valid: self.valid,
            errors: self.errors,
            warnings: self.warnings,
            sanitized: self.sanitized.map(f),
        }
    }

    /// Drop the record, keeping only the diagnosis.
    pub fn diagnosis(&self) -> ValidationResult<()> {
        ValidationResult {
            valid: self.valid,
            errors: self.errors.clone(),
            warnings: self.warnings.clone(),
            sanitized: None,
        }
    }

    /// Errors then warnings.
    pub fn issues(&self) -> impl Iterator<Item = &FieldIssue> {
        self.errors.iter().chain(self.warnings.iter())
    }

    /// True if any error or warning names `field`.
    pub fn mentions(&self, field: &str) -> bool {
        self.issues().any(|issue| issue.field == field)
    }

    /// True if an error names `field`.
    pub fn has_error(&self, field: &str) -> bool {
        self.errors.iter().any(|issue| issue.field == field)
    }

    /// True if a warning names `field`.
    pub fn has_warning(&self, field: &str) -> bool {
        self.warnings.iter().any(|issue| issue.field == field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_issues_partitions_by_severity() {
        let result: ValidationResult<()> = ValidationResult::from_issues(
            vec![
                FieldIssue::warning("size", "out of range"),
                FieldIssue::error("label", "is required"),
            ],
            None,
        );
        assert!(!result.valid);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.warnings.len(), 1);
        assert!(result.has_error("label"));
        assert!(result.has_warning("size"));
        assert!(!result.has_error("size"));
    }

    #[test]
    fn warnings_alone_are_valid() {
        let result: ValidationResult<()> =
            ValidationResult::from_issues(vec![FieldIssue::warning("value", "clamped")], None);
        assert!(result.valid);
    }

    #[test]
    fn issue_display_marks_root() {
        assert_eq!(
            FieldIssue::error("", "expected a JSON object").to_string(),
            "(root): expected a JSON object"
        );
        assert_eq!(
            FieldIssue::error("metadata.anchorType", "bad").to_string(),
            "metadata.anchorType: bad"
        );
    }

    #[test]
    fn result_serializes_without_absent_record() {
        let result: ValidationResult<()> = ValidationResult::from_issues(Vec::new(), None);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json, serde_json::json!({"valid": true, "errors": [], "warnings": []}));
    }
}
