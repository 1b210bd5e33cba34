//! Overview data types.

use chrono::NaiveDate;
use moneta_shared::types::{BillId, CurrencyCode};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::bill::BillStatus;
use crate::budget::BudgetProgress;
use crate::health::BudgetHealth;

/// A bill with its display status resolved for "now".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedBill {
    /// Bill ID.
    pub id: BillId,
    /// Short description shown in lists.
    pub title: String,
    /// Amount due.
    pub amount: Decimal,
    /// Currency of the amount due.
    pub currency: CurrencyCode,
    /// Date the current occurrence is due.
    pub due_date: NaiveDate,
    /// Resolved display status.
    pub status: BillStatus,
}

/// Income and spend totals for one currency.
///
/// Flows are reported per currency and never summed across currencies;
/// no canonical exchange basis exists for blending them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyFlow {
    /// Currency of this bucket.
    pub currency: CurrencyCode,
    /// Total income in this currency.
    pub income: Decimal,
    /// Total expenses in this currency.
    pub expenses: Decimal,
    /// `income - expenses`.
    pub net: Decimal,
}

/// Everything the dashboard renders for one user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Overview {
    /// Current-period progress for every budget.
    pub budgets: Vec<BudgetProgress>,
    /// Composite health over all budgets.
    pub health: BudgetHealth,
    /// Bills with statuses resolved for "now".
    pub bills: Vec<ResolvedBill>,
    /// Per-currency income/spend totals over the snapshot.
    pub cash_flow: Vec<CurrencyFlow>,
}
