//! Recurring series error types.

use chrono::NaiveDate;
use moneta_shared::types::SeriesId;
use thiserror::Error;

/// Recurring-series errors.
#[derive(Debug, Error)]
pub enum RecurringError {
    /// Series amount is zero or negative.
    #[error("Series {0} amount must be positive")]
    NonPositiveAmount(SeriesId),

    /// Series end date precedes its anchor date.
    #[error("Series {series_id} ends on {end_date} before it starts on {anchor_date}")]
    EndBeforeAnchor {
        /// The misconfigured series.
        series_id: SeriesId,
        /// First occurrence date.
        anchor_date: NaiveDate,
        /// Configured end date.
        end_date: NaiveDate,
    },
}
