//! Recurrence data types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// How often a series repeats or a budget resets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Recurrence {
    /// Every day.
    Daily,
    /// Every 7 days.
    Weekly,
    /// Every calendar month, clamping day-of-month overflow.
    Monthly,
    /// Every 3 calendar months, clamping day-of-month overflow.
    Quarterly,
    /// Every calendar year, clamping Feb 29 on non-leap years.
    Yearly,
}

/// A half-open date range `[start, end)` during which a budget's spend is
/// measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    /// First date of the period (inclusive).
    pub start: NaiveDate,
    /// First date after the period (exclusive).
    pub end: NaiveDate,
}

impl Period {
    /// Returns true if the given date falls within this period.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date < self.end
    }
}
