//! Health score data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Usage classification of a single budget's progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UsageLevel {
    /// Progress above 100%.
    OverBudget,
    /// Progress in `[80, 100]`.
    High,
    /// Progress in `[60, 80)`.
    Medium,
    /// Progress in `[40, 60)`. Carries no score delta.
    Moderate,
    /// Progress below 40%.
    Low,
}

impl UsageLevel {
    /// Classifies a progress percentage.
    #[must_use]
    pub fn classify(progress: Decimal) -> Self {
        if progress > Decimal::ONE_HUNDRED {
            Self::OverBudget
        } else if progress >= Decimal::from(80) {
            Self::High
        } else if progress >= Decimal::from(60) {
            Self::Medium
        } else if progress >= Decimal::from(40) {
            Self::Moderate
        } else {
            Self::Low
        }
    }
}

/// Per-bucket counts and point deltas behind a health score.
///
/// The breakdown is part of the contract: callers render it as the
/// explanation tooltip, so every count and delta that moved the score is
/// retained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthBreakdown {
    /// Score before any deltas.
    pub base_score: i32,
    /// Budgets above 100%.
    pub over_budget_count: u32,
    /// Total points subtracted for over-budget budgets (non-positive).
    pub over_budget_penalty: i32,
    /// Budgets at 80-100%.
    pub high_usage_count: u32,
    /// Total points subtracted for high-usage budgets (non-positive).
    pub high_usage_penalty: i32,
    /// Budgets at 60-80%.
    pub medium_usage_count: u32,
    /// Total points subtracted for medium-usage budgets (non-positive).
    pub medium_usage_penalty: i32,
    /// Budgets below 40%.
    pub low_usage_count: u32,
    /// Total points added for low-usage budgets (non-negative).
    pub low_usage_bonus: i32,
    /// One-time bonus applied when no budget is over or high usage.
    pub perfect_record_bonus: i32,
}

/// Composite health signal over all of a user's budgets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetHealth {
    /// Clamped composite score in `[0, 100]`.
    pub score: i32,
    /// Display label for the score band.
    pub label: String,
    /// Display color for the score band.
    pub color: String,
    /// Counts and point deltas per bucket.
    pub breakdown: HealthBreakdown,
}
