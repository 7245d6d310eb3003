//! Human-readable diagnostics for logs, the CLI and re-prompting.
//!
//! The text lists every error and every warning, one per line. It is meant
//! for people and for feeding back to a language model; nothing parses it.

use std::fmt::Write;

use cosmo_core::ComponentKind;
use cosmo_schema::{FieldIssue, ValidationResult};

/// Render `result` for `kind`.
///
/// ```text
/// HUDCard validation failed: 1 error(s), 1 warning(s)
///   ERROR title: is required
///   WARN  priority: 9 is outside the recommended range [1, 5]
/// ```
pub fn format_diagnostic<R>(kind: ComponentKind, result: &ValidationResult<R>) -> String {
    let name = kind.display_name();
    let errors = result.errors.len();
    let warnings = result.warnings.len();
    let mut out = if !result.valid {
        format!("{name} validation failed: {errors} error(s), {warnings} warning(s)")
    } else if warnings > 0 {
        format!("{name} is valid with {warnings} warning(s)")
    } else {
        format!("{name} is valid")
    };
    push_issues(&mut out, result.issues(), "  ");
    out
}

pub(crate) fn push_issues<'a>(out: &mut String, issues: impl Iterator<Item = &'a FieldIssue>, indent: &str) {
    for issue in issues {
        // `{:<5}` keeps messages aligned under ERROR and WARN.
        let _ = write!(out, "\n{indent}{:<5} {issue}", issue.severity.label());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_every_issue() {
        let result: ValidationResult<()> = ValidationResult::from_issues(
            vec![
                FieldIssue::error("title", "is required"),
                FieldIssue::error("actions[0].label", "must not be empty"),
                FieldIssue::warning("priority", "9 is outside the recommended range [1, 5]"),
            ],
            None,
        );
        let text = format_diagnostic(ComponentKind::HudCard, &result);
        assert_eq!(
            text,
            "HUDCard validation failed: 2 error(s), 1 warning(s)\n\
             \x20 ERROR title: is required\n\
             \x20 ERROR actions[0].label: must not be empty\n\
             \x20 WARN  priority: 9 is outside the recommended range [1, 5]"
        );
    }

    #[test]
    fn valid_results() {
        let clean: ValidationResult<()> = ValidationResult::from_issues(Vec::new(), None);
        assert_eq!(format_diagnostic(ComponentKind::Timer, &clean), "Timer is valid");

        let warned: ValidationResult<()> =
            ValidationResult::from_issues(vec![FieldIssue::warning("size", "too big")], None);
        assert_eq!(
            format_diagnostic(ComponentKind::ProgressRing, &warned),
            "ProgressRing is valid with 1 warning(s)\n  WARN  size: too big"
        );
    }

    #[test]
    fn root_issues_are_labelled() {
        let result: ValidationResult<()> = ValidationResult::from_issues(
            vec![FieldIssue::error("", "expected a JSON object, got string")],
            None,
        );
        assert!(format_diagnostic(ComponentKind::Tooltip, &result)
            .ends_with("ERROR (root): expected a JSON object, got string"));
    }
}
