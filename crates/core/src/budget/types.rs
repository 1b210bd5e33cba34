//! Budget data types.

use chrono::NaiveDate;
use moneta_shared::types::{BudgetId, CurrencyCode, UserId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::recurrence::Recurrence;

/// A per-category spending limit that resets every recurrence period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Budget {
    /// Budget ID.
    pub id: BudgetId,
    /// Owning user.
    pub user_id: UserId,
    /// Category this budget limits.
    pub category: String,
    /// Spending limit per period (must be positive).
    pub amount: Decimal,
    /// Currency the limit is expressed in.
    pub currency: CurrencyCode,
    /// How often the budget resets.
    pub recurrence: Recurrence,
    /// Anchor for all period boundaries. Periods are successive additions
    /// of the recurrence unit to this date, never derived from "now".
    pub start_date: NaiveDate,
}

/// Spend that could not be converted into the budget currency, reported in
/// its own currency rather than silently merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForeignSpend {
    /// Currency of this bucket.
    pub currency: CurrencyCode,
    /// Total spent in this currency.
    pub total_spent: Decimal,
    /// Number of expenses in this bucket.
    pub expenses_count: u32,
}

/// Aggregated spend for a budget's current period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpendSummary {
    /// Budget currency the total is expressed in.
    pub currency: CurrencyCode,
    /// Total spent in the budget currency (converted where rates allow).
    pub total_spent: Decimal,
    /// Number of expenses summed into `total_spent`.
    pub expenses_count: u32,
    /// Per-currency buckets for unconvertible spend.
    pub foreign: Vec<ForeignSpend>,
}

/// Derived progress of one budget for its current period.
///
/// Recomputed on every query; nothing here is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetProgress {
    /// Budget this progress belongs to.
    pub budget_id: BudgetId,
    /// Budget currency.
    pub currency: CurrencyCode,
    /// Total spent this period in the budget currency.
    pub total_spent: Decimal,
    /// Headroom left this period (negative when over budget).
    pub remaining: Decimal,
    /// Spend as a percentage of the limit, rounded to 2 decimal places.
    /// Unbounded above 100.
    pub progress: Decimal,
    /// True once spend exceeds the limit.
    pub is_over_budget: bool,
    /// Number of expenses summed into `total_spent`.
    pub expenses_count: u32,
    /// Per-currency buckets for unconvertible spend.
    pub foreign: Vec<ForeignSpend>,
}
