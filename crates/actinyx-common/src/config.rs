//! Engine configuration.
//!
//! Selects which knowledge bases feed treatment evidence and external trials.
//! Loaded from TOML or YAML; the path is always supplied by the caller.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ActinyxError, Result};
use crate::events::Knowledgebase;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Source of treatment evidence (approved / experimental / pre-clinical / resistant)
    #[serde(default = "default_evidence_source")]
    pub evidence_source: Knowledgebase,

    /// Source of externally recruiting trials
    #[serde(default = "default_external_trial_source")]
    pub external_trial_source: Knowledgebase,

    /// Evaluate multiple findings on the rayon pool
    #[serde(default = "default_true")]
    pub parallel: bool,
}

fn default_evidence_source() -> Knowledgebase { Knowledgebase::CkbEvidence }
fn default_external_trial_source() -> Knowledgebase { Knowledgebase::CkbTrial }
fn default_true() -> bool { true }

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            evidence_source: default_evidence_source(),
            external_trial_source: default_external_trial_source(),
            parallel: default_true(),
        }
    }
}

impl EngineConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read engine config: {}", path.display()))?;
        let config = Self::from_toml_str(&content)
            .with_context(|| format!("Invalid engine config: {}", path.display()))?;
        debug!(
            path = %path.display(),
            evidence_source = %config.evidence_source,
            external_trial_source = %config.external_trial_source,
            "Engine config loaded"
        );
        Ok(config)
    }

    /// Evidence and trial sources must differ, otherwise trial events would also be tiered.
    pub fn validate(&self) -> Result<()> {
        if self.evidence_source == self.external_trial_source {
            return Err(ActinyxError::Config(format!(
                "evidence_source and external_trial_source are both {}",
                self.evidence_source
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.evidence_source, Knowledgebase::CkbEvidence);
        assert_eq!(config.external_trial_source, Knowledgebase::CkbTrial);
        assert!(config.parallel);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_toml_partial_uses_defaults() {
        let config = EngineConfig::from_toml_str("parallel = false\n").unwrap();
        assert!(!config.parallel);
        assert_eq!(config.evidence_source, Knowledgebase::CkbEvidence);
    }

    #[test]
    fn test_toml_sources() {
        let config = EngineConfig::from_toml_str(
            "evidence_source = \"vicc\"\nexternal_trial_source = \"iclusion\"\n",
        )
        .unwrap();
        assert_eq!(config.evidence_source, Knowledgebase::Vicc);
        assert_eq!(config.external_trial_source, Knowledgebase::Iclusion);
    }

    #[test]
    fn test_equal_sources_rejected() {
        let err = EngineConfig::from_yaml_str(
            "evidence_source: ckb_trial\nexternal_trial_source: ckb_trial\n",
        )
        .unwrap_err();
        assert!(matches!(err, ActinyxError::Config(_)));
    }

    #[test]
    fn test_malformed_input_maps_to_format_errors() {
        assert!(matches!(EngineConfig::from_toml_str("parallel = "), Err(ActinyxError::Toml(_))));
        assert!(matches!(EngineConfig::from_yaml_str("parallel: [1"), Err(ActinyxError::Yaml(_))));
    }

    #[test]
    fn test_missing_file() {
        assert!(EngineConfig::from_toml_file("/nonexistent/actinyx.toml").is_err());
    }

    fn write_temp_config(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("actinyx-{}-{}.toml", name, std::process::id()));
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_from_toml_file_loads() {
        let path = write_temp_config(
            "loads",
            "evidence_source = \"vicc\"\nexternal_trial_source = \"iclusion\"\nparallel = false\n",
        );
        let config = EngineConfig::from_toml_file(&path);
        std::fs::remove_file(&path).unwrap();

        let config = config.unwrap();
        assert_eq!(config.evidence_source, Knowledgebase::Vicc);
        assert_eq!(config.external_trial_source, Knowledgebase::Iclusion);
        assert!(!config.parallel);
    }

    #[test]
    fn test_from_toml_file_validates() {
        let path = write_temp_config(
            "validates",
            "evidence_source = \"ckb_trial\"\nexternal_trial_source = \"ckb_trial\"\n",
        );
        let result = EngineConfig::from_toml_file(&path);
        std::fs::remove_file(&path).unwrap();

        let err = result.unwrap_err();
        assert!(err.to_string().starts_with("Invalid engine config"));
        assert!(matches!(err.downcast_ref::<ActinyxError>(), Some(ActinyxError::Config(_))));
    }

    #[test]
    fn test_yaml_roundtrip() {
        let config = EngineConfig::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed = EngineConfig::from_yaml_str(&yaml).unwrap();
        assert_eq!(config, parsed);
    }
}
