//! Rule-based field extractors for prescription labels.
//!
//! Every extractor works on the normalized line list and is independent of the
//! others. Within one extractor the order in which rules are tried matters:
//! `extract_all` returns candidates in that order and `extract` takes the first.

pub mod directions;
pub mod drug;
pub mod frequency;
pub mod lines;
pub mod patient;
pub mod patterns;
pub mod rx;

pub use directions::{extract_directions, DirectionsExtractor};
pub use drug::{clean_drug_name, extract_form, extract_strength, DrugLineExtractor, DrugNameCleaner};
pub use frequency::{
    times_per_day, EmptyDirectionsPolicy, FrequencyMatch, FrequencyNormalizer, FrequencyRule,
};
pub use lines::normalize_lines;
pub use patient::{extract_patient_name, PatientNameExtractor};
pub use rx::{extract_rx_number, RxNumberExtractor};

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field from the label lines.
    fn extract(&self, lines: &[&str]) -> Option<Self::Output>;

    /// Extract every candidate, best first.
    fn extract_all(&self, lines: &[&str]) -> Vec<Self::Output>;
}

/// Extraction context with confidence scores.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionMatch<T> {
    /// Extracted value.
    pub value: T,
    /// Confidence score (0.0 - 1.0).
    pub confidence: f32,
    /// Index of the source line.
    pub line: Option<usize>,
    /// Source line that was matched.
    pub source: String,
}

impl<T> ExtractionMatch<T> {
    pub fn new(value: T, confidence: f32, source: impl Into<String>) -> Self {
        Self {
            value,
            confidence,
            line: None,
            source: source.into(),
        }
    }

    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }
}

/// Case-insensitive ASCII prefix test.
pub(crate) fn starts_with_ignore_case(line: &str, prefix: &str) -> bool {
    line.len() >= prefix.len()
        && line.is_char_boundary(prefix.len())
        && line[..prefix.len()].eq_ignore_ascii_case(prefix)
}
