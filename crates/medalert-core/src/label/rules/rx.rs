//! Prescription (Rx) number extraction.

use super::{starts_with_ignore_case, ExtractionMatch, FieldExtractor};

/// Rx number extractor: a line starting with "Rx" that contains '#'.
///
/// Only the first such line counts. When nothing follows its '#', the
/// number is missing even if a later line carries one.
pub struct RxNumberExtractor;

impl RxNumberExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RxNumberExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for RxNumberExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, lines: &[&str]) -> Option<Self::Output> {
        let (i, line) = lines
            .iter()
            .enumerate()
            .find(|(_, line)| is_rx_line(line))?;
        number_match(i, line)
    }

    fn extract_all(&self, lines: &[&str]) -> Vec<Self::Output> {
        lines
            .iter()
            .enumerate()
            .filter(|(_, line)| is_rx_line(line))
            .filter_map(|(i, line)| number_match(i, line))
            .collect()
    }
}

fn is_rx_line(line: &str) -> bool {
    starts_with_ignore_case(line, "rx") && line.contains('#')
}

fn number_match(i: usize, line: &str) -> Option<ExtractionMatch<String>> {
    let (_, number) = line.split_once('#')?;
    let number = number.trim();
    if number.is_empty() {
        return None;
    }
    Some(ExtractionMatch::new(number.to_string(), 0.9, line).with_line(i))
}

/// Extract the prescription number from label lines.
pub fn extract_rx_number(lines: &[&str]) -> Option<String> {
    RxNumberExtractor::new().extract(lines).map(|m| m.value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_rx_number() {
        assert_eq!(extract_rx_number(&["Rx#12345"]), Some("12345".to_string()));
    }

    #[test]
    fn test_spaced_and_lowercase() {
        let lines = ["Patient: Jane Doe", "rx no. # 0048-221 "];
        assert_eq!(extract_rx_number(&lines), Some("0048-221".to_string()));
    }

    #[test]
    fn test_everything_after_first_hash() {
        assert_eq!(extract_rx_number(&["RX# 12#34"]), Some("12#34".to_string()));
    }

    #[test]
    fn test_requires_rx_prefix_and_hash() {
        assert_eq!(extract_rx_number(&["Order # 555", "Rx Only"]), None);
    }

    #[test]
    fn test_first_rx_line_decides() {
        let lines = ["Rx#", "Rx# 991"];
        assert_eq!(extract_rx_number(&lines), None);
    }

    #[test]
    fn test_rx_line_without_hash_is_not_a_candidate() {
        let lines = ["Rx Only", "Rx# 991"];
        assert_eq!(extract_rx_number(&lines), Some("991".to_string()));
    }
}
