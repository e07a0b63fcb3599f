//! Rule-based prescription label parser.

use std::collections::BTreeMap;
use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};

use crate::error::ExtractionError;
use crate::models::config::ExtractionConfig;
use crate::models::label::{ParsedLabel, DIRECTIONS_PLACEHOLDER};

use super::rules::{
    extract_form, extract_strength, normalize_lines, DirectionsExtractor, DrugLineExtractor,
    DrugNameCleaner, EmptyDirectionsPolicy, FieldExtractor, FrequencyNormalizer, FrequencyRule,
    PatientNameExtractor, RxNumberExtractor,
};
use super::{LabelParser, Result};

/// Result of label interpretation.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractionResult {
    /// Interpreted label.
    pub label: ParsedLabel,
    /// Raw OCR text.
    pub raw_text: String,
    /// Fields that could not be found, and defaults that were applied.
    pub warnings: Vec<String>,
    /// Confidence of the rule behind each extracted field.
    pub field_confidence: BTreeMap<String, f32>,
    /// Overall confidence (0.0 - 1.0).
    pub confidence: f32,
    /// Rule that produced `times_per_day`.
    pub frequency_rule: Option<FrequencyRule>,
    /// When the label was interpreted.
    pub scanned_at: DateTime<Utc>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Label parser built from ordered extraction rules.
#[derive(Debug, Clone)]
pub struct RuleLabelParser {
    /// What to do with empty directions.
    empty_directions: EmptyDirectionsPolicy,
    /// Directions text stored when none was found.
    directions_placeholder: String,
    /// Words kept in the cleaned drug name.
    max_drug_name_tokens: usize,
}

impl RuleLabelParser {
    /// Create a new parser with default settings.
    pub fn new() -> Self {
        Self {
            empty_directions: EmptyDirectionsPolicy::DefaultOnce,
            directions_placeholder: DIRECTIONS_PLACEHOLDER.to_string(),
            max_drug_name_tokens: 3,
        }
    }

    /// Create a parser from extraction settings.
    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self::new()
            .with_empty_directions(config.empty_directions)
            .with_directions_placeholder(config.directions_placeholder.clone())
            .with_max_drug_name_tokens(config.max_drug_name_tokens)
    }

    /// Set the empty-directions policy.
    pub fn with_empty_directions(mut self, policy: EmptyDirectionsPolicy) -> Self {
        self.empty_directions = policy;
        self
    }

    /// Set the directions placeholder.
    pub fn with_directions_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.directions_placeholder = placeholder.into();
        self
    }

    /// Set how many words of the drug name are kept.
    pub fn with_max_drug_name_tokens(mut self, tokens: usize) -> Self {
        self.max_drug_name_tokens = tokens.max(1);
        self
    }
}

impl Default for RuleLabelParser {
    fn default() -> Self {
        Self::new()
    }
}

impl LabelParser for RuleLabelParser {
    fn interpret(&self, text: &str) -> Result<ExtractionResult> {
        let start = Instant::now();
        let mut warnings = Vec::new();
        let mut field_confidence = BTreeMap::new();

        info!("Interpreting label from {} characters of text", text.len());

        let lines = normalize_lines(text);
        if lines.is_empty() {
            debug!("Label text has no non-blank lines");
            return Err(ExtractionError::NoData);
        }

        // Mandatory: drug line and a non-empty name cleaned from it
        let drug_line = DrugLineExtractor::new()
            .extract(&lines)
            .ok_or_else(|| ExtractionError::MissingField("drug line".to_string()))?;
        debug!(line = ?drug_line.line, "Selected drug line: {}", drug_line.value);

        let drug_name = DrugNameCleaner::new()
            .with_max_tokens(self.max_drug_name_tokens)
            .clean(&drug_line.value)
            .ok_or_else(|| ExtractionError::EmptyField("drug name".to_string()))?;
        field_confidence.insert("drug_name".to_string(), drug_line.confidence);

        let strength = extract_strength(&drug_line.value);
        let form = extract_form(&drug_line.value);
        for (field, value) in [("strength", &strength), ("form", &form)] {
            if value.is_some() {
                field_confidence.insert(field.to_string(), drug_line.confidence);
            }
        }

        let patient = PatientNameExtractor::new().extract(&lines);
        let rx_number = RxNumberExtractor::new().extract(&lines);
        for (field, found) in [("patient_name", &patient), ("rx_number", &rx_number)] {
            if let Some(m) = found {
                field_confidence.insert(field.to_string(), m.confidence);
            }
        }

        let directions = match DirectionsExtractor::new().extract(&lines) {
            Some(m) if !m.value.is_empty() => {
                field_confidence.insert("directions".to_string(), m.confidence);
                m.value
            }
            _ => String::new(),
        };
        let has_directions = !directions.is_empty();

        let frequency = FrequencyNormalizer::new()
            .with_empty_policy(self.empty_directions)
            .normalize(&directions);
        debug!(?frequency, "Normalized dosing frequency");

        let label = ParsedLabel {
            patient_name: patient.map(|m| m.value),
            drug_name,
            directions: if directions.is_empty() {
                self.directions_placeholder.clone()
            } else {
                directions
            },
            rx_number: rx_number.map(|m| m.value),
            strength,
            form,
            times_per_day: frequency.map(|m| m.times_per_day),
        };

        let mut confidence = 1.0f32;
        for field in label.missing_fields() {
            warnings.push(format!("Could not extract {}", field));
            confidence -= 0.1;
        }
        if !has_directions {
            warnings.push("Could not extract directions".to_string());
            confidence -= 0.2;
        }
        match frequency.map(|m| m.rule) {
            Some(FrequencyRule::Default) => {
                warnings.push("No dosing frequency recognized; assuming once daily".to_string());
                confidence -= 0.1;
            }
            None => {
                warnings.push("Dosing frequency unknown".to_string());
                confidence -= 0.1;
            }
            Some(_) => {}
        }
        let confidence = confidence.max(0.0);

        debug!(
            "Interpreted label for {} with confidence {:.2}",
            label.drug_name, confidence
        );

        Ok(ExtractionResult {
            label,
            raw_text: text.to_string(),
            warnings,
            field_confidence,
            confidence,
            frequency_rule: frequency.map(|m| m.rule),
            scanned_at: Utc::now(),
            processing_time_ms: start.elapsed().as_millis() as u64,
        })
    }
}

/// Interpret label text with default settings.
pub fn parse_label(text: &str) -> Option<ParsedLabel> {
    RuleLabelParser::new().parse(text)
}
