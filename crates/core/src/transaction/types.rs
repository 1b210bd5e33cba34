//! Transaction data types.

use chrono::NaiveDate;
use moneta_shared::types::{CurrencyCode, SeriesId, TransactionId, UserId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Transaction direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money coming in.
    Income,
    /// Money going out.
    Expense,
}

/// A single dated income or expense record.
///
/// A transaction generated from a recurring series carries the series id in
/// `series_id`; the series definition itself lives in
/// [`crate::recurring::RecurringSeries`], so one record never plays both the
/// template and the instance role.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction ID.
    pub id: TransactionId,
    /// Owning user.
    pub user_id: UserId,
    /// Income or expense.
    pub kind: TransactionKind,
    /// Short description shown in lists.
    pub title: String,
    /// Amount in `currency` (must be positive).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency: CurrencyCode,
    /// Spending category (matched against budget categories).
    pub category: String,
    /// Date the transaction occurred.
    pub date: NaiveDate,
    /// Back-reference to the recurring series this instance was generated
    /// from, if any.
    pub series_id: Option<SeriesId>,
    /// Exchange rate of `currency` against the rate base, captured at
    /// creation time.
    pub from_rate: Option<Decimal>,
    /// Exchange rate of the target currency against the rate base, captured
    /// at creation time.
    pub to_rate: Option<Decimal>,
}

impl Transaction {
    /// Returns true if this transaction was generated from a recurring
    /// series.
    #[must_use]
    pub fn is_instance(&self) -> bool {
        self.series_id.is_some()
    }

    /// Returns true if this transaction reduces budget headroom.
    #[must_use]
    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }
}
