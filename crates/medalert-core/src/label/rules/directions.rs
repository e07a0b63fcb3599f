//! Directions (Sig) extraction.

use super::{starts_with_ignore_case, ExtractionMatch, FieldExtractor};

const DIRECTION_PREFIXES: [&str; 3] = ["take", "sig", "directions"];
const ROUTE_MARKERS: [&str; 2] = ["by mouth", "po "];

/// Directions line extractor.
pub struct DirectionsExtractor;

impl DirectionsExtractor {
    pub fn new() -> Self {
        Self
    }

    fn is_directions_line(line: &str) -> bool {
        if DIRECTION_PREFIXES.iter().any(|p| starts_with_ignore_case(line, p)) {
            return true;
        }
        let lower = line.to_lowercase();
        ROUTE_MARKERS.iter().any(|m| lower.contains(m))
    }
}

impl Default for DirectionsExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for DirectionsExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, lines: &[&str]) -> Option<Self::Output> {
        self.extract_all(lines).into_iter().next()
    }

    fn extract_all(&self, lines: &[&str]) -> Vec<Self::Output> {
        lines
            .iter()
            .enumerate()
            .filter(|(_, line)| Self::is_directions_line(line))
            .map(|(i, line)| {
                let text = line.split_once(':').map_or(*line, |(_, rest)| rest).trim();
                ExtractionMatch::new(text.to_string(), 0.9, *line).with_line(i)
            })
            .collect()
    }
}

/// Extract the directions text; empty when the label has no directions line.
pub fn extract_directions(lines: &[&str]) -> String {
    DirectionsExtractor::new()
        .extract(lines)
        .map(|m| m.value)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_line() {
        let lines = ["Amoxicillin 500 mg capsule", "Take 1 capsule three times daily"];
        assert_eq!(extract_directions(&lines), "Take 1 capsule three times daily");
    }

    #[test]
    fn test_sig_line_after_colon() {
        let lines = ["SIG: 1 tab po bid", "Metoprolol 25 mg"];
        assert_eq!(extract_directions(&lines), "1 tab po bid");
    }

    #[test]
    fn test_directions_prefix() {
        let lines = ["Directions:   apply thin layer twice daily  "];
        assert_eq!(extract_directions(&lines), "apply thin layer twice daily");
    }

    #[test]
    fn test_route_marker_anywhere() {
        let lines = ["Rx# 9", "1 tablet by mouth every morning"];
        let found = DirectionsExtractor::new().extract(&lines).unwrap();

        assert_eq!(found.value, "1 tablet by mouth every morning");
        assert_eq!(found.line, Some(1));
    }

    #[test]
    fn test_po_marker_is_case_insensitive() {
        let lines = ["1 CAP PO Q8H"];
        assert_eq!(extract_directions(&lines), "1 CAP PO Q8H");
    }

    #[test]
    fn test_first_qualifying_line_wins() {
        let lines = ["Take with food", "Take 2 tablets twice daily"];
        assert_eq!(extract_directions(&lines), "Take with food");
    }

    #[test]
    fn test_no_directions_is_empty() {
        let lines = ["Patient: John Smith", "Lisinopril 10 mg"];
        assert_eq!(extract_directions(&lines), "");
    }
}
