//! Overview assembly service.

use std::collections::HashSet;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::error::OverviewError;
use super::types::{CurrencyFlow, Overview, ResolvedBill};
use crate::bill::{Bill, BillService};
use crate::budget::{Budget, BudgetService};
use crate::health::HealthService;
use crate::recurring::RecurringSeries;
use crate::transaction::{Transaction, validate_snapshot};

/// Service assembling the dashboard view over one user's snapshot.
pub struct OverviewService;

impl OverviewService {
    /// Builds the overview for "now".
    ///
    /// The transaction snapshot is validated first so a corrupt snapshot
    /// fails fast instead of producing silently wrong cards.
    ///
    /// # Errors
    ///
    /// Returns `OverviewError` when the snapshot or a budget violates its
    /// input contract.
    pub fn build(
        budgets: &[Budget],
        series: &[RecurringSeries],
        transactions: &[Transaction],
        bills: &[Bill],
        now: NaiveDate,
    ) -> Result<Overview, OverviewError> {
        let known_series: HashSet<_> = series.iter().map(|s| s.id).collect();
        validate_snapshot(transactions, &known_series)?;

        let progress = budgets
            .iter()
            .map(|budget| BudgetService::progress(budget, transactions, now))
            .collect::<Result<Vec<_>, _>>()?;

        let health = HealthService::score(&progress);

        let resolved_bills = bills
            .iter()
            .map(|bill| ResolvedBill {
                id: bill.id,
                title: bill.title.clone(),
                amount: bill.amount,
                currency: bill.currency.clone(),
                due_date: bill.due_date,
                status: BillService::resolve(bill, now),
            })
            .collect();

        let cash_flow = Self::cash_flow(transactions);

        tracing::debug!(
            budgets = budgets.len(),
            bills = bills.len(),
            score = health.score,
            "overview assembled"
        );

        Ok(Overview {
            budgets: progress,
            health,
            bills: resolved_bills,
            cash_flow,
        })
    }

    /// Folds the snapshot into per-currency income/spend totals.
    ///
    /// One bucket per currency, in first-seen order; surpluses are never
    /// blended across currencies.
    fn cash_flow(transactions: &[Transaction]) -> Vec<CurrencyFlow> {
        let mut flows: Vec<CurrencyFlow> = Vec::new();

        for transaction in transactions {
            let position = flows
                .iter()
                .position(|flow| flow.currency == transaction.currency)
                .unwrap_or_else(|| {
                    flows.push(CurrencyFlow {
                        currency: transaction.currency.clone(),
                        income: Decimal::ZERO,
                        expenses: Decimal::ZERO,
                        net: Decimal::ZERO,
                    });
                    flows.len() - 1
                });
            let flow = &mut flows[position];

            if transaction.is_expense() {
                flow.expenses += transaction.amount;
            } else {
                flow.income += transaction.amount;
            }
            flow.net = flow.income - flow.expenses;
        }

        flows
    }
}
