//! Input contract validation for transaction snapshots.

use std::collections::HashSet;

use moneta_shared::types::{SeriesId, TransactionId};
use rust_decimal::Decimal;
use thiserror::Error;

use super::types::Transaction;

/// Validation errors for transaction snapshots.
#[derive(Debug, Error)]
pub enum TransactionValidationError {
    /// Transaction amount is zero or negative.
    #[error("Transaction {0} amount must be positive")]
    NonPositiveAmount(TransactionId),

    /// Instance references a series that is not part of the snapshot.
    #[error("Transaction {transaction_id} references unknown series {series_id}")]
    UnknownSeries {
        /// The offending instance.
        transaction_id: TransactionId,
        /// The dangling series reference.
        series_id: SeriesId,
    },
}

/// Validates a user's transaction snapshot before the engine computes over
/// it.
///
/// Callers validate user input at the edge; this check exists so a corrupt
/// snapshot fails fast instead of producing silently wrong aggregates.
///
/// # Errors
///
/// Returns an error for a non-positive amount or a dangling series
/// reference.
pub fn validate_snapshot(
    transactions: &[Transaction],
    known_series: &HashSet<SeriesId>,
) -> Result<(), TransactionValidationError> {
    for transaction in transactions {
        if transaction.amount <= Decimal::ZERO {
            return Err(TransactionValidationError::NonPositiveAmount(
                transaction.id,
            ));
        }

        if let Some(series_id) = transaction.series_id {
            if !known_series.contains(&series_id) {
                return Err(TransactionValidationError::UnknownSeries {
                    transaction_id: transaction.id,
                    series_id,
                });
            }
        }
    }

    Ok(())
}
