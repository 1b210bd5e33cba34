//! Recurring series data types.

use chrono::NaiveDate;
use moneta_shared::types::{CurrencyCode, SeriesId, TransactionId, UserId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::recurrence::Recurrence;
use crate::transaction::{Transaction, TransactionKind};

/// A recurring-transaction definition.
///
/// The series is dormant once `active` is false or "now" has passed the
/// inclusive `end_date`; dormant series produce neither instances nor
/// reminders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecurringSeries {
    /// Series ID.
    pub id: SeriesId,
    /// Owning user.
    pub user_id: UserId,
    /// Income or expense.
    pub kind: TransactionKind,
    /// Title copied onto every generated instance.
    pub title: String,
    /// Amount copied onto every generated instance (must be positive).
    pub amount: Decimal,
    /// Currency copied onto every generated instance.
    pub currency: CurrencyCode,
    /// Category copied onto every generated instance.
    pub category: String,
    /// How often an instance falls due.
    pub frequency: Recurrence,
    /// Date of the first occurrence.
    pub anchor_date: NaiveDate,
    /// Last date (inclusive) an occurrence may fall on.
    pub end_date: Option<NaiveDate>,
    /// Whether the series is still generating occurrences.
    pub active: bool,
    /// True to create instances automatically; false to only remind.
    pub auto_create: bool,
}

/// A not-yet-persisted instance proposed by the materializer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceDraft {
    /// Series the instance belongs to.
    pub series_id: SeriesId,
    /// Owning user.
    pub user_id: UserId,
    /// Income or expense.
    pub kind: TransactionKind,
    /// Title copied from the series.
    pub title: String,
    /// Amount copied from the series.
    pub amount: Decimal,
    /// Currency copied from the series.
    pub currency: CurrencyCode,
    /// Category copied from the series.
    pub category: String,
    /// Date the instance falls due.
    pub date: NaiveDate,
}

impl InstanceDraft {
    /// Materializes the draft into a transaction under a caller-assigned ID.
    #[must_use]
    pub fn into_transaction(self, id: TransactionId) -> Transaction {
        Transaction {
            id,
            user_id: self.user_id,
            kind: self.kind,
            title: self.title,
            amount: self.amount,
            currency: self.currency,
            category: self.category,
            date: self.date,
            series_id: Some(self.series_id),
            from_rate: None,
            to_rate: None,
        }
    }
}

/// Result of evaluating a series against "now".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum MaterializationOutcome {
    /// Nothing to do: the series is dormant or its next occurrence is still
    /// in the future.
    Idle,
    /// An instance is due and `auto_create` is on; the caller persists it.
    Create(InstanceDraft),
    /// An instance is due but `auto_create` is off; the user must act.
    Remind {
        /// The due date the reminder is about.
        date: NaiveDate,
    },
}

impl MaterializationOutcome {
    /// Returns true if the outcome proposes persisting a new instance.
    #[must_use]
    pub fn should_create(&self) -> bool {
        matches!(self, Self::Create(_))
    }

    /// Returns true if the outcome is a reminder-only signal.
    #[must_use]
    pub fn is_reminder(&self) -> bool {
        matches!(self, Self::Remind { .. })
    }
}
