//! Interpreted prescription label.

use serde::{Deserialize, Serialize};

/// Directions text used when no directions line is found on the label.
pub const DIRECTIONS_PLACEHOLDER: &str = "See label";

/// Structured medication record produced from one label photo.
///
/// `drug_name` is never empty; a label that cannot yield a drug name produces
/// no `ParsedLabel` at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedLabel {
    /// Best-guess patient identity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient_name: Option<String>,

    /// Cleaned drug name.
    pub drug_name: String,

    /// Dosing instructions, or the placeholder when none were found.
    pub directions: String,

    /// Prescription number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rx_number: Option<String>,

    /// Dosage magnitude and unit as printed (e.g. "20 mg").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strength: Option<String>,

    /// Lower-cased dosage form (tablet, capsule, syrup, ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form: Option<String>,

    /// Normalized number of doses per day (always >= 1 when present).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub times_per_day: Option<u32>,
}

impl ParsedLabel {
    /// Names of the best-effort fields that were not found.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.patient_name.is_none() {
            missing.push("patient name");
        }
        if self.rx_number.is_none() {
            missing.push("rx number");
        }
        if self.strength.is_none() {
            missing.push("strength");
        }
        if self.form.is_none() {
            missing.push("form");
        }
        missing
    }

    /// One-line human readable summary, e.g. "Amoxicillin 500 mg capsule".
    pub fn display_name(&self) -> String {
        let mut parts = vec![self.drug_name.as_str()];
        if let Some(strength) = &self.strength {
            parts.push(strength);
        }
        if let Some(form) = &self.form {
            parts.push(form);
        }
        parts.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ParsedLabel {
        ParsedLabel {
            patient_name: Some("John Smith".to_string()),
            drug_name: "Amoxicillin".to_string(),
            directions: "Take 1 capsule three times daily".to_string(),
            rx_number: Some("12345".to_string()),
            strength: Some("500 mg".to_string()),
            form: Some("capsule".to_string()),
            times_per_day: Some(3),
        }
    }

    #[test]
    fn test_json_uses_camel_case_keys() {
        let json = serde_json::to_value(sample()).unwrap();

        assert_eq!(json["patientName"], "John Smith");
        assert_eq!(json["drugName"], "Amoxicillin");
        assert_eq!(json["rxNumber"], "12345");
        assert_eq!(json["timesPerDay"], 3);
    }

    #[test]
    fn test_json_omits_absent_fields() {
        let label = ParsedLabel {
            patient_name: None,
            rx_number: None,
            strength: None,
            form: None,
            times_per_day: None,
            ..sample()
        };
        let json = serde_json::to_value(&label).unwrap();
        let object = json.as_object().unwrap();

        assert_eq!(object.len(), 2);
        assert!(object.contains_key("drugName"));
        assert!(object.contains_key("directions"));
        assert_eq!(
            label.missing_fields(),
            vec!["patient name", "rx number", "strength", "form"]
        );
    }

    #[test]
    fn test_display_name() {
        assert_eq!(sample().display_name(), "Amoxicillin 500 mg capsule");

        let bare = ParsedLabel {
            strength: None,
            form: None,
            ..sample()
        };
        assert_eq!(bare.display_name(), "Amoxicillin");
    }
}
