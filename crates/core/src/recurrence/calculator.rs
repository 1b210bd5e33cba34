//! Period boundary and next-occurrence calculation.

use chrono::{Datelike, Duration, NaiveDate};

use super::types::{Period, Recurrence};

/// Adds exactly one recurrence unit to a date.
///
/// Month, quarter, and year steps clamp day-of-month overflow: Jan 31 plus
/// one month is the last day of February, not an invalid date.
#[must_use]
pub fn advance(date: NaiveDate, recurrence: Recurrence) -> NaiveDate {
    match recurrence {
        Recurrence::Daily => date + Duration::days(1),
        Recurrence::Weekly => date + Duration::weeks(1),
        Recurrence::Monthly => shift_months(date, 1),
        Recurrence::Quarterly => shift_months(date, 3),
        Recurrence::Yearly => shift_years(date, 1),
    }
}

/// Returns the occurrence immediately after the anchor date.
#[must_use]
pub fn next_occurrence(anchor: NaiveDate, recurrence: Recurrence) -> NaiveDate {
    advance(anchor, recurrence)
}

/// Computes the period containing `reference`, walking forward from the
/// anchor one unit at a time.
///
/// If `reference` precedes the anchor, the first period
/// `[anchor, advance(anchor))` is returned, so not-yet-started budgets read
/// as 0% progress.
#[must_use]
pub fn period_bounds(anchor: NaiveDate, recurrence: Recurrence, reference: NaiveDate) -> Period {
    let mut start = anchor;
    let mut end = advance(anchor, recurrence);

    while end <= reference {
        start = end;
        end = advance(end, recurrence);
    }

    Period { start, end }
}

#[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
fn shift_months(date: NaiveDate, months: i32) -> NaiveDate {
    let mut year = date.year();
    let mut month = date.month() as i32 + months;
    while month > 12 {
        month -= 12;
        year += 1;
    }
    while month < 1 {
        month += 12;
        year -= 1;
    }
    let month = month as u32;
    let day = date.day().min(days_in_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day).expect("clamped day is always valid")
}

fn shift_years(date: NaiveDate, years: i32) -> NaiveDate {
    let year = date.year() + years;
    let day = date.day().min(days_in_month(year, date.month()));
    NaiveDate::from_ymd_opt(year, date.month(), day).expect("clamped day is always valid")
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let first_of_next =
        NaiveDate::from_ymd_opt(next_year, next_month, 1).expect("first of month is always valid");
    (first_of_next - Duration::days(1)).day()
}
