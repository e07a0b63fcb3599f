//! Common regex patterns for prescription label extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Dosage magnitude followed by a strength unit: "20 mg", "0.5mcg", "5 ML"
    pub static ref DOSAGE: Regex = Regex::new(
        r"(?i)\b\d+(?:\.\d+)?\s*(?:mg|mcg|g|ml)\b"
    ).unwrap();

    // Closed vocabulary of dosage forms, whole words only
    pub static ref DOSAGE_FORM: Regex = Regex::new(
        r"(?i)\b(tablet|tab|capsule|cap|solution|suspension|syrup|cream|ointment|patch|inhaler)\b"
    ).unwrap();

    // Last-resort drug line: letters, digits, hyphens and spaces, leading letter
    pub static ref PLAIN_WORDS_LINE: Regex = Regex::new(
        r"^[A-Za-z][A-Za-z0-9\-\s]+$"
    ).unwrap();

    // Patient name guesses
    pub static ref ALL_CAPS_NAME: Regex = Regex::new(
        r"^[A-Z][A-Z\s.,'\-]{3,}$"
    ).unwrap();

    pub static ref LAST_FIRST_NAME: Regex = Regex::new(
        r"^[A-Z][a-z]+,\s*[A-Z][a-z]+$"
    ).unwrap();

    // Frequency phrases (matched against lower-cased directions)
    pub static ref TIMES_COUNT: Regex = Regex::new(
        r"(\d+)\s*times?(?:\s*(?:a day|daily|per day))?"
    ).unwrap();

    pub static ref TIMES_PER_DAY_X: Regex = Regex::new(
        r"(\d+)\s*x\s*(?:/\s*day|per day)"
    ).unwrap();

    pub static ref HOURLY_INTERVAL: Regex = Regex::new(
        r"q(\d+)h"
    ).unwrap();
}
