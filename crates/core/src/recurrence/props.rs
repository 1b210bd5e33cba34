//! Property-based tests for period calculation.

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;

use super::calculator::{advance, period_bounds};
use super::types::Recurrence;

/// Strategy to generate an arbitrary recurrence unit.
fn recurrence() -> impl Strategy<Value = Recurrence> {
    prop_oneof![
        Just(Recurrence::Daily),
        Just(Recurrence::Weekly),
        Just(Recurrence::Monthly),
        Just(Recurrence::Quarterly),
        Just(Recurrence::Yearly),
    ]
}

/// Strategy to generate anchor dates across month lengths and leap years.
fn anchor_date() -> impl Strategy<Value = NaiveDate> {
    (2000i32..2030, 1u32..=12, 1u32..=31).prop_map(|(y, m, d)| {
        // Clamp instead of filtering so day-overflow anchors stay in the mix.
        let mut day = d;
        loop {
            if let Some(date) = NaiveDate::from_ymd_opt(y, m, day) {
                return date;
            }
            day -= 1;
        }
    })
}

/// Strategy to generate an offset (in days) from the anchor to "now".
fn reference_offset() -> impl Strategy<Value = i64> {
    0i64..1500
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// advance() strictly increases the date for every unit.
    #[test]
    fn prop_advance_strictly_increases(
        anchor in anchor_date(),
        recurrence in recurrence(),
    ) {
        prop_assert!(advance(anchor, recurrence) > anchor);
    }

    /// The computed period always contains the reference date.
    #[test]
    fn prop_bounds_contain_reference(
        anchor in anchor_date(),
        recurrence in recurrence(),
        offset in reference_offset(),
    ) {
        let reference = anchor + Duration::days(offset);
        let period = period_bounds(anchor, recurrence, reference);
        prop_assert!(
            period.contains(reference),
            "period [{}, {}) should contain {}",
            period.start, period.end, reference
        );
    }

    /// Every date on or after the anchor belongs to exactly one period: the
    /// period starting at a boundary is distinct from the one ending there.
    #[test]
    fn prop_boundary_belongs_to_next_period(
        anchor in anchor_date(),
        recurrence in recurrence(),
        offset in reference_offset(),
    ) {
        let reference = anchor + Duration::days(offset);
        let period = period_bounds(anchor, recurrence, reference);
        let next = period_bounds(anchor, recurrence, period.end);
        prop_assert_eq!(next.start, period.end);
        prop_assert!(next.end > next.start);
    }

    /// Boundaries never move backward as the reference advances.
    #[test]
    fn prop_bounds_monotonic_in_reference(
        anchor in anchor_date(),
        recurrence in recurrence(),
        offset in reference_offset(),
        step in 1i64..120,
    ) {
        let reference = anchor + Duration::days(offset);
        let later = reference + Duration::days(step);
        let period = period_bounds(anchor, recurrence, reference);
        let next = period_bounds(anchor, recurrence, later);
        prop_assert!(next.start >= period.start);
        prop_assert!(next.end >= period.end);
    }

    /// Identical inputs always produce identical bounds.
    #[test]
    fn prop_bounds_deterministic(
        anchor in anchor_date(),
        recurrence in recurrence(),
        offset in reference_offset(),
    ) {
        let reference = anchor + Duration::days(offset);
        let first = period_bounds(anchor, recurrence, reference);
        let second = period_bounds(anchor, recurrence, reference);
        prop_assert_eq!(first, second);
    }
}
