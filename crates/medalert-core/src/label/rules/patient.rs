//! Patient name extraction.

use super::patterns::{ALL_CAPS_NAME, LAST_FIRST_NAME};
use super::{starts_with_ignore_case, ExtractionMatch, FieldExtractor};

const LABEL_PREFIXES: [&str; 2] = ["Patient:", "Name:"];

/// Patient name extractor.
///
/// The first labeled line ("Patient: ...", "Name: ...") wins, and an empty
/// value there means no name. Only without any labeled line is the name
/// guessed from an all-caps line, then from a "Last, First" line.
pub struct PatientNameExtractor;

impl PatientNameExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PatientNameExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for PatientNameExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, lines: &[&str]) -> Option<Self::Output> {
        match lines.iter().position(|line| is_labeled(line)) {
            Some(i) => labeled_match(i, lines[i]),
            None => self.extract_all(lines).into_iter().next(),
        }
    }

    fn extract_all(&self, lines: &[&str]) -> Vec<Self::Output> {
        let mut results: Vec<Self::Output> = lines
            .iter()
            .enumerate()
            .filter(|(_, line)| is_labeled(line))
            .filter_map(|(i, line)| labeled_match(i, line))
            .collect();

        for (i, line) in lines.iter().enumerate() {
            if ALL_CAPS_NAME.is_match(line) {
                results.push(ExtractionMatch::new(line.to_string(), 0.6, *line).with_line(i));
            }
        }

        for (i, line) in lines.iter().enumerate() {
            if LAST_FIRST_NAME.is_match(line) {
                results.push(ExtractionMatch::new(line.to_string(), 0.5, *line).with_line(i));
            }
        }

        results
    }
}

fn is_labeled(line: &str) -> bool {
    LABEL_PREFIXES.iter().any(|p| starts_with_ignore_case(line, p))
}

fn labeled_match(i: usize, line: &str) -> Option<ExtractionMatch<String>> {
    let (_, name) = line.split_once(':')?;
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    Some(ExtractionMatch::new(name.to_string(), 0.95, line).with_line(i))
}

/// Extract the patient name from label lines.
pub fn extract_patient_name(lines: &[&str]) -> Option<String> {
    PatientNameExtractor::new().extract(lines).map(|m| m.value)
}
