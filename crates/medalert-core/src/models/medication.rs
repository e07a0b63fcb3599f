//! Medication record handed to the reminder scheduler.

use serde::{Deserialize, Serialize};

use super::label::ParsedLabel;

/// A medication as the scheduler sees it: one reminder slot per daily dose.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Medication {
    /// Drug name shown on reminders.
    pub name: String,

    /// Pills left in the bottle; a label photo does not tell us, so 0.
    pub pills_remaining: u32,

    /// Doses per day.
    pub times_per_day: u32,
}

impl Medication {
    /// Number of reminder slots to create per day.
    pub fn reminder_count(&self) -> u32 {
        self.times_per_day
    }
}

impl From<&ParsedLabel> for Medication {
    fn from(label: &ParsedLabel) -> Self {
        Self {
            name: label.drug_name.clone(),
            pills_remaining: 0,
            times_per_day: label.times_per_day.unwrap_or(1),
        }
    }
}
