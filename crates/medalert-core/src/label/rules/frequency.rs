//! Dosing frequency normalization.
//!
//! Maps free-text directions ("Take 1 tablet twice daily", "1 cap po q8h") to
//! a number of doses per day. Rules are tried in a fixed order and the first
//! one that matches decides:
//!
//! 1. `<N> time(s) [a day|daily|per day]`
//! 2. `<N>x/day`, `<N>x per day`
//! 3. `once`, `twice`/`two times`, `thrice`/`three times`
//! 4. `qd`, `bid`, `tid`, `qid`
//! 5. `q<N>h` (every N hours, 24 / N doses)
//! 6. once a day

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::patterns::{HOURLY_INTERVAL, TIMES_COUNT, TIMES_PER_DAY_X};

const WORD_COUNTS: [(&str, u32); 5] = [
    ("once", 1),
    ("twice", 2),
    ("two times", 2),
    ("thrice", 3),
    ("three times", 3),
];

const ABBREVIATIONS: [(&str, u32); 4] = [("qd", 1), ("bid", 2), ("tid", 3), ("qid", 4)];

/// What to do when the directions text is empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyDirectionsPolicy {
    /// Assume once a day, same as unrecognized directions.
    #[default]
    DefaultOnce,
    /// Leave the frequency unknown.
    Skip,
}

/// Which rule produced a frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrequencyRule {
    /// "3 times daily"
    Count,
    /// "2x/day"
    PerDay,
    /// "twice"
    Word,
    /// "bid"
    Abbreviation,
    /// "q8h"
    Interval,
    /// Nothing recognized; once a day assumed.
    Default,
}

/// A normalized frequency and the rule behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrequencyMatch {
    pub times_per_day: u32,
    pub rule: FrequencyRule,
}

impl FrequencyMatch {
    fn new(times_per_day: u32, rule: FrequencyRule) -> Self {
        Self { times_per_day, rule }
    }
}

/// Directions → times per day.
pub struct FrequencyNormalizer {
    empty_policy: EmptyDirectionsPolicy,
}

impl FrequencyNormalizer {
    pub fn new() -> Self {
        Self {
            empty_policy: EmptyDirectionsPolicy::default(),
        }
    }

    /// Set the empty-directions policy.
    pub fn with_empty_policy(mut self, policy: EmptyDirectionsPolicy) -> Self {
        self.empty_policy = policy;
        self
    }

    /// Normalize directions text; `None` only for empty text under `Skip`.
    pub fn normalize(&self, directions: &str) -> Option<FrequencyMatch> {
        let text = directions.trim().to_lowercase();

        if text.is_empty() && self.empty_policy == EmptyDirectionsPolicy::Skip {
            return None;
        }

        let found = Self::count(&text)
            .or_else(|| Self::per_day(&text))
            .or_else(|| Self::word(&text))
            .or_else(|| Self::abbreviation(&text))
            .or_else(|| Self::interval(&text))
            .unwrap_or(FrequencyMatch::new(1, FrequencyRule::Default));

        trace!(?found, directions = %text, "normalized frequency");
        Some(found)
    }

    fn count(text: &str) -> Option<FrequencyMatch> {
        let caps = TIMES_COUNT.captures(text)?;
        positive(&caps[1]).map(|n| FrequencyMatch::new(n, FrequencyRule::Count))
    }

    fn per_day(text: &str) -> Option<FrequencyMatch> {
        let caps = TIMES_PER_DAY_X.captures(text)?;
        positive(&caps[1]).map(|n| FrequencyMatch::new(n, FrequencyRule::PerDay))
    }

    fn word(text: &str) -> Option<FrequencyMatch> {
        WORD_COUNTS
            .iter()
            .find(|(word, _)| text.contains(word))
            .map(|&(_, n)| FrequencyMatch::new(n, FrequencyRule::Word))
    }

    fn abbreviation(text: &str) -> Option<FrequencyMatch> {
        ABBREVIATIONS
            .iter()
            .find(|(abbr, _)| text.contains(abbr))
            .map(|&(_, n)| FrequencyMatch::new(n, FrequencyRule::Abbreviation))
    }

    fn interval(text: &str) -> Option<FrequencyMatch> {
        let caps = HOURLY_INTERVAL.captures(text)?;
        // Intervals longer than a day would round down to zero doses
        positive(&caps[1])
            .filter(|&hours| hours <= 24)
            .map(|hours| FrequencyMatch::new(24 / hours, FrequencyRule::Interval))
    }
}

impl Default for FrequencyNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a digit run as a count >= 1; overflow or zero is no match.
fn positive(digits: &str) -> Option<u32> {
    digits.parse::<u32>().ok().filter(|&n| n > 0)
}

/// Times per day for directions text, with the default policy.
pub fn times_per_day(directions: &str) -> Option<u32> {
    FrequencyNormalizer::new()
        .normalize(directions)
        .map(|m| m.times_per_day)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule_for(directions: &str) -> FrequencyRule {
        FrequencyNormalizer::new().normalize(directions).unwrap().rule
    }

    #[test]
    fn test_numeric_times() {
        assert_eq!(times_per_day("Take 1 tablet 3 times a day"), Some(3));
        assert_eq!(times_per_day("inhale 2 puffs 4 times daily"), Some(4));
        assert_eq!(times_per_day("1 TIME PER DAY"), Some(1));
        assert_eq!(times_per_day("use 2times"), Some(2));
        assert_eq!(rule_for("3 times a day"), FrequencyRule::Count);
    }

    #[test]
    fn test_x_per_day() {
        assert_eq!(times_per_day("1 tab 2x/day"), Some(2));
        assert_eq!(times_per_day("apply 3x per day"), Some(3));
        assert_eq!(times_per_day("4 X / DAY"), Some(4));
        assert_eq!(rule_for("2x/day"), FrequencyRule::PerDay);
    }

    #[test]
    fn test_word_numbers() {
        assert_eq!(times_per_day("Take 2 tablets twice daily"), Some(2));
        assert_eq!(times_per_day("take one tablet once daily"), Some(1));
        assert_eq!(times_per_day("Take 1 capsule three times daily"), Some(3));
        assert_eq!(times_per_day("two times a day with food"), Some(2));
        assert_eq!(times_per_day("thrice daily"), Some(3));
        assert_eq!(rule_for("twice daily"), FrequencyRule::Word);
    }

    #[test]
    fn test_once_is_checked_before_twice() {
        assert_eq!(times_per_day("once, or twice if needed"), Some(1));
    }

    #[test]
    fn test_count_beats_words() {
        assert_eq!(times_per_day("twice... actually 3 times daily"), Some(3));
    }

    #[test]
    fn test_medical_shorthand() {
        assert_eq!(times_per_day("1 tab po qd"), Some(1));
        assert_eq!(times_per_day("1 tab po bid"), Some(2));
        assert_eq!(times_per_day("1 tab po TID"), Some(3));
        assert_eq!(times_per_day("1 tab po qid"), Some(4));
        assert_eq!(times_per_day("bid"), Some(2));
        assert_eq!(rule_for("bid"), FrequencyRule::Abbreviation);
    }

    #[test]
    fn test_hourly_interval() {
        assert_eq!(times_per_day("1 cap po q8h"), Some(3));
        assert_eq!(times_per_day("q12h"), Some(2));
        assert_eq!(times_per_day("Q6H PRN"), Some(4));
        assert_eq!(times_per_day("q5h"), Some(4));
        assert_eq!(rule_for("q8h"), FrequencyRule::Interval);
    }

    #[test]
    fn test_degenerate_interval_defaults() {
        assert_eq!(rule_for("q0h"), FrequencyRule::Default);
        assert_eq!(times_per_day("q0h"), Some(1));
        assert_eq!(times_per_day("q48h"), Some(1));
    }

    #[test]
    fn test_zero_or_overflowing_count_falls_through() {
        assert_eq!(times_per_day("0 times daily, then twice"), Some(2));
        assert_eq!(times_per_day("99999999999 times daily"), Some(1));
    }

    #[test]
    fn test_unrecognized_defaults_to_once() {
        assert_eq!(times_per_day("Apply to affected area as needed"), Some(1));
        assert_eq!(rule_for("as directed"), FrequencyRule::Default);
    }

    #[test]
    fn test_empty_directions_policy() {
        assert_eq!(times_per_day(""), Some(1));
        assert_eq!(times_per_day("   "), Some(1));

        let skip = FrequencyNormalizer::new().with_empty_policy(EmptyDirectionsPolicy::Skip);
        assert_eq!(skip.normalize(""), None);
        assert_eq!(skip.normalize("as directed").map(|m| m.times_per_day), Some(1));
    }

    #[test]
    fn test_policy_serde_names() {
        assert_eq!(
            serde_json::to_string(&EmptyDirectionsPolicy::DefaultOnce).unwrap(),
            "\"default_once\""
        );
        assert_eq!(
            serde_json::from_str::<EmptyDirectionsPolicy>("\"skip\"").unwrap(),
            EmptyDirectionsPolicy::Skip
        );
    }
}
