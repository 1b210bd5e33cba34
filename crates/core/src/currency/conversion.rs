//! Currency conversion logic.
//!
//! CRITICAL: Rounding strategy for multi-currency:
//! - Always round to currency's decimal places
//! - Use banker's rounding (round half to even)
//! - Keep the original amount alongside the converted one

use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;

/// Converts an amount using the given exchange rate.
///
/// Uses banker's rounding (round half to even) to minimize cumulative errors.
#[must_use]
pub fn convert_amount(amount: Decimal, rate: Decimal, decimal_places: u32) -> Decimal {
    let converted = amount * rate;
    converted.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointNearestEven)
}

/// Converts a transaction amount into a target currency through the rate
/// pair captured on the transaction.
///
/// `from_rate` prices one unit of the transaction currency in the rate base;
/// `to_rate` prices one unit of the target currency. A missing side of the
/// pair defaults to 1 (identity), which is a recoverable default rather than
/// an error. Rates must be positive; callers reject zero or negative rates
/// before converting.
#[must_use]
pub fn convert_with_attached_rates(
    amount: Decimal,
    from_rate: Option<Decimal>,
    to_rate: Option<Decimal>,
) -> Decimal {
    let from = from_rate.unwrap_or(Decimal::ONE);
    let to = to_rate.unwrap_or(Decimal::ONE);
    convert_amount(amount, from / to, 2)
}
