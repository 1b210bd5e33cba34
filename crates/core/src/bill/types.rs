//! Bill data types.

use chrono::NaiveDate;
use moneta_shared::types::{BillId, CurrencyCode, UserId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::recurrence::Recurrence;

/// Payment status of a bill.
///
/// `Overdue` is a read-time projection derived from the due date; the only
/// persisted, user-triggered transition is into `Paid`, which is terminal
/// for the billing occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillStatus {
    /// Not paid yet.
    Unpaid,
    /// Payment initiated but not confirmed.
    Pending,
    /// Paid; terminal.
    Paid,
    /// Past due and not paid.
    Overdue,
}

impl BillStatus {
    /// Returns true if no further status change can occur.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Paid)
    }
}

/// A recurring obligation with a due date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bill {
    /// Bill ID.
    pub id: BillId,
    /// Owning user.
    pub user_id: UserId,
    /// Short description shown in lists.
    pub title: String,
    /// Amount due.
    pub amount: Decimal,
    /// Currency of the amount due.
    pub currency: CurrencyCode,
    /// Bill category (e.g., utilities, subscriptions).
    pub category: String,
    /// How often the bill recurs.
    pub frequency: Recurrence,
    /// Date the current occurrence is due.
    pub due_date: NaiveDate,
    /// Stored status as last written by the user.
    pub status: BillStatus,
}
