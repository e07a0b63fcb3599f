//! Configuration structures for label interpretation.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{MedAlertError, Result};
use crate::label::rules::EmptyDirectionsPolicy;
use crate::models::label::DIRECTIONS_PLACEHOLDER;

/// Main configuration for medalert.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MedAlertConfig {
    /// Label extraction configuration.
    pub extraction: ExtractionConfig,
}

/// Label extraction configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// What the frequency normalizer does with empty directions.
    pub empty_directions: EmptyDirectionsPolicy,

    /// Directions text stored when the label has no directions line.
    pub directions_placeholder: String,

    /// Maximum number of words kept in a cleaned drug name.
    pub max_drug_name_tokens: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            empty_directions: EmptyDirectionsPolicy::DefaultOnce,
            directions_placeholder: DIRECTIONS_PLACEHOLDER.to_string(),
            max_drug_name_tokens: 3,
        }
    }
}

impl ExtractionConfig {
    /// Reject settings the interpreter cannot honour.
    pub fn validate(&self) -> Result<()> {
        if self.max_drug_name_tokens == 0 {
            return Err(MedAlertError::Config(
                "extraction.max_drug_name_tokens must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl MedAlertConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.extraction.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
