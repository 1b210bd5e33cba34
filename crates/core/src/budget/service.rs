//! Budget aggregation service.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::error::BudgetError;
use super::types::{Budget, BudgetProgress, ForeignSpend, SpendSummary};
use crate::currency::convert_with_attached_rates;
use crate::recurrence::period_bounds;
use crate::transaction::Transaction;

/// Budget service for spend aggregation and progress.
pub struct BudgetService;

impl BudgetService {
    /// Sums the budget's expenses for the period containing `now`.
    ///
    /// Only expense transactions in the budget's category reduce headroom;
    /// income in the same category never appears in the total. A
    /// differing-currency expense converts through its attached rate pair;
    /// one with no rates at all lands in a per-currency
    /// [`ForeignSpend`] bucket instead.
    ///
    /// The aggregation is a pure fold: identical inputs always produce
    /// identical output.
    ///
    /// # Errors
    ///
    /// Fails fast on a non-positive budget amount, transaction amount, or
    /// exchange rate.
    pub fn aggregate(
        budget: &Budget,
        transactions: &[Transaction],
        now: NaiveDate,
    ) -> Result<SpendSummary, BudgetError> {
        if budget.amount <= Decimal::ZERO {
            return Err(BudgetError::NonPositiveAmount(budget.id));
        }

        let period = period_bounds(budget.start_date, budget.recurrence, now);

        let mut total_spent = Decimal::ZERO;
        let mut expenses_count = 0u32;
        let mut foreign: Vec<ForeignSpend> = Vec::new();

        for transaction in transactions {
            if !transaction.is_expense()
                || transaction.category != budget.category
                || !period.contains(transaction.date)
            {
                continue;
            }
            if transaction.amount <= Decimal::ZERO {
                return Err(BudgetError::NonPositiveTransactionAmount(transaction.id));
            }

            if transaction.currency == budget.currency {
                total_spent += transaction.amount;
                expenses_count += 1;
            } else if transaction.from_rate.is_none() && transaction.to_rate.is_none() {
                // No rates were captured at creation time; keep the amount
                // in its own currency bucket.
                let position = foreign
                    .iter()
                    .position(|bucket| bucket.currency == transaction.currency);
                match position {
                    Some(position) => {
                        foreign[position].total_spent += transaction.amount;
                        foreign[position].expenses_count += 1;
                    }
                    None => foreign.push(ForeignSpend {
                        currency: transaction.currency.clone(),
                        total_spent: transaction.amount,
                        expenses_count: 1,
                    }),
                }
            } else {
                if transaction.from_rate.is_some_and(|rate| rate <= Decimal::ZERO)
                    || transaction.to_rate.is_some_and(|rate| rate <= Decimal::ZERO)
                {
                    return Err(BudgetError::InvalidRate(transaction.id));
                }
                total_spent += convert_with_attached_rates(
                    transaction.amount,
                    transaction.from_rate,
                    transaction.to_rate,
                );
                expenses_count += 1;
            }
        }

        Ok(SpendSummary {
            currency: budget.currency.clone(),
            total_spent,
            expenses_count,
            foreign,
        })
    }

    /// Computes the budget's progress for the period containing `now`.
    ///
    /// Progress is `total_spent / amount * 100` rounded to 2 decimal
    /// places; it exceeds 100 when the budget is blown. A budget with no
    /// matching expenses reads 0%, which is a valid result rather than an
    /// error.
    ///
    /// # Errors
    ///
    /// Propagates the input-contract errors of [`Self::aggregate`].
    pub fn progress(
        budget: &Budget,
        transactions: &[Transaction],
        now: NaiveDate,
    ) -> Result<BudgetProgress, BudgetError> {
        let summary = Self::aggregate(budget, transactions, now)?;

        let progress = (summary.total_spent / budget.amount * Decimal::ONE_HUNDRED).round_dp(2);
        let remaining = budget.amount - summary.total_spent;
        let is_over_budget = summary.total_spent > budget.amount;

        tracing::debug!(
            budget_id = %budget.id,
            %progress,
            over = is_over_budget,
            "budget progress computed"
        );

        Ok(BudgetProgress {
            budget_id: budget.id,
            currency: summary.currency,
            total_spent: summary.total_spent,
            remaining,
            progress,
            is_over_budget,
            expenses_count: summary.expenses_count,
            foreign: summary.foreign,
        })
    }
}
