//! Splitting raw OCR output into label lines.

/// Split raw OCR text into trimmed, non-empty lines, top to bottom.
///
/// Only `'\n'` separates lines; a trailing `'\r'` is removed by the trim.
pub fn normalize_lines(text: &str) -> Vec<&str> {
    text.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_and_drops_blank_lines() {
        let text = "  Patient: Jane Doe  \n\n   \nRx# 77\r\n\tLisinopril 10 mg tablet\n";
        assert_eq!(
            normalize_lines(text),
            vec!["Patient: Jane Doe", "Rx# 77", "Lisinopril 10 mg tablet"]
        );
    }

    #[test]
    fn test_empty_and_whitespace_only() {
        assert!(normalize_lines("").is_empty());
        assert!(normalize_lines(" \n\t\n \r\n").is_empty());
    }

    #[test]
    fn test_keeps_single_line() {
        assert_eq!(normalize_lines("Metformin"), vec!["Metformin"]);
    }
}
