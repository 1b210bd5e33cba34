//! Budget error types.

use moneta_shared::types::{BudgetId, TransactionId};
use thiserror::Error;

/// Budget-related errors.
#[derive(Debug, Error)]
pub enum BudgetError {
    /// Budget amount is zero or negative.
    #[error("Budget {0} amount must be positive")]
    NonPositiveAmount(BudgetId),

    /// A matched transaction has a zero or negative amount.
    #[error("Transaction {0} amount must be positive")]
    NonPositiveTransactionAmount(TransactionId),

    /// A matched transaction carries a zero or negative exchange rate.
    #[error("Transaction {0} has a non-positive exchange rate")]
    InvalidRate(TransactionId),
}
