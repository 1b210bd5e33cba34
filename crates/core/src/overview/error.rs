//! Overview error types.

use thiserror::Error;

use crate::budget::BudgetError;
use crate::transaction::TransactionValidationError;

/// Errors surfaced while assembling an overview.
#[derive(Debug, Error)]
pub enum OverviewError {
    /// The transaction snapshot violated its input contract.
    #[error(transparent)]
    Snapshot(#[from] TransactionValidationError),

    /// A budget computation failed.
    #[error(transparent)]
    Budget(#[from] BudgetError),
}
