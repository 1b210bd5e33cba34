//! Property-based tests for currency conversion.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::conversion::{convert_amount, convert_with_attached_rates};

/// Strategy to generate positive decimal amounts (0.01 to 1,000,000.00).
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate positive exchange rates (0.0001 to 10000.0000).
fn positive_rate() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|v| Decimal::new(v, 4))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Conversion result is always rounded to at most the requested places.
    #[test]
    fn prop_convert_rounds_to_2_decimals(
        amount in positive_amount(),
        rate in positive_rate(),
    ) {
        let result = convert_amount(amount, rate, 2);
        let scaled = result * Decimal::from(100);
        prop_assert_eq!(
            scaled.round(),
            scaled,
            "Result {} should have at most 2 decimal places",
            result
        );
    }

    /// Conversion is deterministic.
    #[test]
    fn prop_convert_is_deterministic(
        amount in positive_amount(),
        rate in positive_rate(),
    ) {
        prop_assert_eq!(
            convert_amount(amount, rate, 2),
            convert_amount(amount, rate, 2)
        );
    }

    /// Identity rates preserve the amount (up to 2-decimal rounding).
    #[test]
    fn prop_identity_rates_preserve_amount(
        amount in positive_amount(),
    ) {
        let result = convert_with_attached_rates(amount, None, None);
        prop_assert_eq!(result, amount);
    }

    /// Equal from/to rates cancel out.
    #[test]
    fn prop_equal_rates_cancel(
        amount in positive_amount(),
        rate in positive_rate(),
    ) {
        let result = convert_with_attached_rates(amount, Some(rate), Some(rate));
        prop_assert_eq!(result, amount);
    }
}
