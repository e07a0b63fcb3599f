//! Drug line selection, strength/form extraction and drug name cleaning.

use super::patterns::{DOSAGE, DOSAGE_FORM, PLAIN_WORDS_LINE};
use super::{ExtractionMatch, FieldExtractor};

const FORM_KEYWORDS: [&str; 4] = ["tablet", "capsule", "tab", "cap"];

/// Release-type and form suffixes dropped from the end of a drug name.
const NAME_SUFFIXES: [&str; 14] = [
    "er", "xr", "sr", "cr", "dr", "ir", "xl", "la", "cd", "hcl", "tab", "tablet", "cap", "capsule",
];

/// Finds the line holding the drug name and dosage.
///
/// Rules, in order: a line with a dosage ("20 mg"), a line mentioning a
/// tablet/capsule keyword, a line of plain words.
pub struct DrugLineExtractor;

impl DrugLineExtractor {
    pub fn new() -> Self {
        Self
    }

    fn has_form_keyword(line: &str) -> bool {
        let lower = line.to_lowercase();
        FORM_KEYWORDS.iter().any(|k| lower.contains(k))
    }
}

impl Default for DrugLineExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for DrugLineExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, lines: &[&str]) -> Option<Self::Output> {
        self.extract_all(lines).into_iter().next()
    }

    fn extract_all(&self, lines: &[&str]) -> Vec<Self::Output> {
        let rules: [(fn(&str) -> bool, f32); 3] = [
            (|l| DOSAGE.is_match(l), 0.9),
            (Self::has_form_keyword, 0.7),
            (|l| PLAIN_WORDS_LINE.is_match(l), 0.4),
        ];

        let mut results: Vec<Self::Output> = Vec::new();
        for (rule, confidence) in rules {
            for (i, &line) in lines.iter().enumerate() {
                // A line already picked by a stronger rule keeps its first spot
                if results.iter().any(|r| r.line == Some(i)) || !rule(line) {
                    continue;
                }
                results.push(ExtractionMatch::new(line.to_string(), confidence, line).with_line(i));
            }
        }
        results
    }
}

/// First dosage magnitude and unit on the drug line, verbatim.
pub fn extract_strength(drug_line: &str) -> Option<String> {
    DOSAGE.find(drug_line).map(|m| m.as_str().to_string())
}

/// First dosage form word on the drug line, lower-cased.
pub fn extract_form(drug_line: &str) -> Option<String> {
    DOSAGE_FORM
        .find(drug_line)
        .map(|m| m.as_str().to_lowercase())
}

/// Turns a drug line into a canonical drug name.
pub struct DrugNameCleaner {
    max_tokens: usize,
}

impl DrugNameCleaner {
    pub fn new() -> Self {
        Self { max_tokens: 3 }
    }

    /// Set how many words of the name are kept.
    pub fn with_max_tokens(mut self, max_tokens: usize) -> Self {
        self.max_tokens = max_tokens.max(1);
        self
    }

    /// Clean the drug line; `None` when nothing usable is left.
    pub fn clean(&self, drug_line: &str) -> Option<String> {
        let before_dosage = match DOSAGE.find(drug_line) {
            Some(m) => &drug_line[..m.start()],
            None => drug_line,
        };

        let mut tokens: Vec<&str> = before_dosage.split_whitespace().collect();
        if tokens.len() >= 2 {
            let last = tokens[tokens.len() - 1].to_lowercase();
            if NAME_SUFFIXES.contains(&last.as_str()) {
                tokens.pop();
            }
        }
        tokens.truncate(self.max_tokens);

        let name: String = tokens
            .join(" ")
            .chars()
            .filter(|c| c.is_ascii_alphabetic() || c.is_whitespace())
            .collect();
        let name = name.trim();

        if name.is_empty() {
            None
        } else {
            Some(name.to_string())
        }
    }
}

impl Default for DrugNameCleaner {
    fn default() -> Self {
        Self::new()
    }
}

/// Clean a drug line with the default settings.
pub fn clean_drug_name(drug_line: &str) -> Option<String> {
    DrugNameCleaner::new().clean(drug_line)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drug_line(lines: &[&str]) -> Option<String> {
        DrugLineExtractor::new().extract(lines).map(|m| m.value)
    }

    #[test]
    fn test_dosage_line_wins() {
        let lines = ["Take 1 capsule daily", "Amoxicillin 500 mg capsule"];
        assert_eq!(drug_line(&lines), Some("Amoxicillin 500 mg capsule".to_string()));
    }

    #[test]
    fn test_dosage_units() {
        for line in ["Vitamin D 1000 mcg", "Amoxicillin 250mg/5ml", "Cream 0.5 G", "Syrup 5 ML"] {
            assert!(DOSAGE.is_match(line), "{line}");
        }
        // Unit must be a whole word
        assert!(!DOSAGE.is_match("Take 2 gummies"));
        assert!(!DOSAGE.is_match("10 mgs"));
    }

    #[test]
    fn test_form_keyword_fallback() {
        let lines = ["Patient: Jane Doe", "Lisinopril tablets"];
        let found = DrugLineExtractor::new().extract(&lines).unwrap();

        assert_eq!(found.value, "Lisinopril tablets");
        assert_eq!(found.confidence, 0.7);
    }

    #[test]
    fn test_plain_words_fallback() {
        let lines = ["Rx#100", "Patient: Jane Doe", "Metformin ER"];
        let found = DrugLineExtractor::new().extract(&lines).unwrap();

        assert_eq!(found.value, "Metformin ER");
        assert_eq!(found.line, Some(2));
        assert_eq!(found.confidence, 0.4);
    }

    #[test]
    fn test_no_drug_line() {
        let lines = ["Rx#100", "Patient: Jane Doe", "555-1234", "X"];
        assert_eq!(drug_line(&lines), None);
    }

    #[test]
    fn test_candidates_are_not_repeated() {
        let lines = ["Amoxicillin 500 mg capsule", "Refills 2"];
        let all = DrugLineExtractor::new().extract_all(&lines);
        let values: Vec<&str> = all.iter().map(|m| m.value.as_str()).collect();

        assert_eq!(values, vec!["Amoxicillin 500 mg capsule", "Refills 2"]);
    }

    #[test]
    fn test_strength_and_form() {
        let line = "Verapamil 120 mg ER tablet";
        assert_eq!(extract_strength(line), Some("120 mg".to_string()));
        assert_eq!(extract_form(line), Some("tablet".to_string()));

        assert_eq!(extract_strength("Albuterol inhaler"), None);
        assert_eq!(extract_form("Albuterol HFA INHALER"), Some("inhaler".to_string()));
        assert_eq!(extract_form("Captopril 25mg"), None);
    }

    #[test]
    fn test_clean_strips_release_suffix() {
        assert_eq!(clean_drug_name("Verapamil 120 mg ER tablet"), Some("Verapamil".to_string()));
        assert_eq!(clean_drug_name("Verapamil ER 120 mg"), Some("Verapamil".to_string()));
        assert_eq!(clean_drug_name("Diltiazem CD"), Some("Diltiazem".to_string()));
    }

    #[test]
    fn test_clean_keeps_multi_word_names() {
        assert_eq!(
            clean_drug_name("Amoxicillin Clavulanate 875 mg tab"),
            Some("Amoxicillin Clavulanate".to_string())
        );
    }

    #[test]
    fn test_clean_single_suffix_token_is_kept() {
        assert_eq!(clean_drug_name("Tablet 5 mg"), Some("Tablet".to_string()));
    }

    #[test]
    fn test_clean_keeps_three_tokens() {
        assert_eq!(
            clean_drug_name("Aspirin Low Dose Enteric Coated"),
            Some("Aspirin Low Dose".to_string())
        );
        assert_eq!(
            DrugNameCleaner::new()
                .with_max_tokens(1)
                .clean("Amoxicillin Clavulanate 875 mg"),
            Some("Amoxicillin".to_string())
        );
    }

    #[test]
    fn test_clean_strips_non_letters() {
        assert_eq!(clean_drug_name("*Lisinopril-HCTZ* 20 mg"), Some("LisinoprilHCTZ".to_string()));
    }

    #[test]
    fn test_clean_empty_result() {
        assert_eq!(clean_drug_name("20 mg"), None);
        assert_eq!(clean_drug_name("#123 500 mg"), None);
    }
}
