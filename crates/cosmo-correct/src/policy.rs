//! # Correction Policy
//!
//! Knobs of the orchestrator, loadable from YAML:
//!
//! ```yaml
//! revalidate: true
//! reject_on_residual_errors: false
//! id_strategy: random   # or: sequential
//! ```
//!
//! Every key is optional; missing keys take the defaults shown. Unknown
//! keys are refused so a typo cannot silently fall back to a default.

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use cosmo_core::{IdGenerator, RandomIds, SequentialIds};

use crate::error::CorrectionError;

/// How generated ids are minted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    /// Digits drawn from a UUID v4.
    #[default]
    Random,
    /// A counter starting at 1, owned by the corrector.
    Sequential,
}

impl IdStrategy {
    /// A fresh generator for this strategy.
    pub fn generator(&self) -> Arc<dyn IdGenerator> {
        match self {
            Self::Random => Arc::new(RandomIds),
            Self::Sequential => Arc::new(SequentialIds::new()),
        }
    }
}

/// Orchestrator configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CorrectionPolicy {
    /// Re-validate the sanitized record and keep the residual issues.
    pub revalidate: bool,
    /// Reject instead of correct when re-validation still finds errors.
    /// Only meaningful with `revalidate`.
    pub reject_on_residual_errors: bool,
    pub id_strategy: IdStrategy,
}

impl Default for CorrectionPolicy {
    fn default() -> Self {
        Self {
            revalidate: true,
            reject_on_residual_errors: false,
            id_strategy: IdStrategy::Random,
        }
    }
}

impl CorrectionPolicy {
    /// Parse a policy from YAML text.
    ///
    /// # Errors
    ///
    /// [`CorrectionError::Config`] on malformed YAML or unknown keys.
    pub fn from_yaml_str(text: &str) -> Result<Self, CorrectionError> {
        Self::parse(text, "<inline>")
    }

    /// Read a policy file.
    ///
    /// # Errors
    ///
    /// [`CorrectionError::Config`] if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, CorrectionError> {
        let source_name = path.display().to_string();
        let text = std::fs::read_to_string(path).map_err(|e| CorrectionError::Config {
            source_name: source_name.clone(),
            reason: e.to_string(),
        })?;
        Self::parse(&text, &source_name)
    }

    fn parse(text: &str, source_name: &str) -> Result<Self, CorrectionError> {
        // An empty document means "all defaults".
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text).map_err(|e| CorrectionError::Config {
            source_name: source_name.to_string(),
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults() {
        let policy = CorrectionPolicy::default();
        assert!(policy.revalidate);
        assert!(!policy.reject_on_residual_errors);
        assert_eq!(policy.id_strategy, IdStrategy::Random);
    }

    #[test]
    fn partial_yaml_keeps_other_defaults() {
        let policy = CorrectionPolicy::from_yaml_str("id_strategy: sequential\n").unwrap();
        assert_eq!(policy.id_strategy, IdStrategy::Sequential);
        assert!(policy.revalidate);
    }

    #[test]
    fn empty_document_is_default() {
        assert_eq!(CorrectionPolicy::from_yaml_str("  \n").unwrap(), CorrectionPolicy::default());
    }

    #[test]
    fn unknown_keys_are_refused() {
        let err = CorrectionPolicy::from_yaml_str("revalidat: false\n").unwrap_err();
        assert!(matches!(err, CorrectionError::Config { ref source_name, .. } if source_name == "<inline>"));
    }

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "revalidate: false\nreject_on_residual_errors: true").unwrap();
        let policy = CorrectionPolicy::load(file.path()).unwrap();
        assert!(!policy.revalidate);
        assert!(policy.reject_on_residual_errors);
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.yaml");
        let err = CorrectionPolicy::load(&missing).unwrap_err();
        assert!(err.to_string().contains("nope.yaml"));
    }

    #[test]
    fn sequential_strategy_counts_from_one() {
        let ids = IdStrategy::Sequential.generator();
        assert_eq!(ids.next_id("hud"), "hud-1");
    }
}
