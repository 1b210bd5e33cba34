//! Tests for budget aggregation and progress.

use chrono::NaiveDate;
use moneta_shared::types::{BudgetId, CurrencyCode, TransactionId, UserId};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::service::BudgetService;
use super::types::Budget;
use crate::recurrence::Recurrence;
use crate::transaction::{Transaction, TransactionKind};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn usd() -> CurrencyCode {
    CurrencyCode::new("USD").unwrap()
}

fn food_budget(amount: Decimal) -> Budget {
    Budget {
        id: BudgetId::new(),
        user_id: UserId::new(),
        category: "Food".to_string(),
        amount,
        currency: usd(),
        recurrence: Recurrence::Monthly,
        start_date: date(2024, 1, 1),
    }
}

fn expense(amount: Decimal, category: &str, on: NaiveDate) -> Transaction {
    Transaction {
        id: TransactionId::new(),
        user_id: UserId::new(),
        kind: TransactionKind::Expense,
        title: "Expense".to_string(),
        amount,
        currency: usd(),
        category: category.to_string(),
        date: on,
        series_id: None,
        from_rate: None,
        to_rate: None,
    }
}

fn income(amount: Decimal, category: &str, on: NaiveDate) -> Transaction {
    Transaction {
        kind: TransactionKind::Income,
        ..expense(amount, category, on)
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Adding an expense in the budget's category and period never
    /// decreases progress.
    #[test]
    fn prop_expense_never_decreases_progress(
        amounts in prop::collection::vec(1i64..1_000_00, 0..20),
        extra in 1i64..1_000_00,
    ) {
        let budget = food_budget(dec!(500));
        let now = date(2024, 1, 31);
        let mut transactions: Vec<Transaction> = amounts
            .iter()
            .map(|cents| expense(Decimal::new(*cents, 2), "Food", date(2024, 1, 15)))
            .collect();

        let before = BudgetService::progress(&budget, &transactions, now).unwrap();
        transactions.push(expense(Decimal::new(extra, 2), "Food", date(2024, 1, 20)));
        let after = BudgetService::progress(&budget, &transactions, now).unwrap();

        prop_assert!(after.progress >= before.progress);
        prop_assert!(after.total_spent > before.total_spent);
    }

    /// Adding income in the budget's category never changes progress.
    #[test]
    fn prop_income_never_changes_progress(
        amounts in prop::collection::vec(1i64..1_000_00, 0..20),
        extra in 1i64..1_000_00,
    ) {
        let budget = food_budget(dec!(500));
        let now = date(2024, 1, 31);
        let mut transactions: Vec<Transaction> = amounts
            .iter()
            .map(|cents| expense(Decimal::new(*cents, 2), "Food", date(2024, 1, 15)))
            .collect();

        let before = BudgetService::progress(&budget, &transactions, now).unwrap();
        transactions.push(income(Decimal::new(extra, 2), "Food", date(2024, 1, 20)));
        let after = BudgetService::progress(&budget, &transactions, now).unwrap();

        prop_assert_eq!(before.progress, after.progress);
        prop_assert_eq!(before.total_spent, after.total_spent);
        prop_assert_eq!(before.expenses_count, after.expenses_count);
    }

    /// Aggregation is a pure fold: identical inputs, identical output.
    #[test]
    fn prop_aggregation_deterministic(
        amounts in prop::collection::vec(1i64..1_000_00, 0..20),
    ) {
        let budget = food_budget(dec!(500));
        let now = date(2024, 1, 31);
        let transactions: Vec<Transaction> = amounts
            .iter()
            .map(|cents| expense(Decimal::new(*cents, 2), "Food", date(2024, 1, 15)))
            .collect();

        let first = BudgetService::aggregate(&budget, &transactions, now).unwrap();
        let second = BudgetService::aggregate(&budget, &transactions, now).unwrap();
        prop_assert_eq!(first, second);
    }
}

mod unit_tests {
    use super::*;
    use crate::budget::error::BudgetError;

    #[test]
    fn test_high_usage_budget() {
        // 450 of 500 spent in January: 90%, not over budget.
        let budget = food_budget(dec!(500));
        let transactions = vec![
            expense(dec!(200), "Food", date(2024, 1, 5)),
            expense(dec!(250), "Food", date(2024, 1, 20)),
        ];

        let progress =
            BudgetService::progress(&budget, &transactions, date(2024, 1, 31)).unwrap();

        assert_eq!(progress.total_spent, dec!(450));
        assert_eq!(progress.progress, dec!(90.00));
        assert_eq!(progress.remaining, dec!(50));
        assert!(!progress.is_over_budget);
        assert_eq!(progress.expenses_count, 2);
    }

    #[test]
    fn test_over_budget() {
        // 600 of 500 spent: 120%, over budget, remaining -100.
        let budget = food_budget(dec!(500));
        let transactions = vec![expense(dec!(600), "Food", date(2024, 1, 10))];

        let progress =
            BudgetService::progress(&budget, &transactions, date(2024, 1, 31)).unwrap();

        assert_eq!(progress.progress, dec!(120.00));
        assert!(progress.is_over_budget);
        assert_eq!(progress.remaining, dec!(-100));
    }

    #[test]
    fn test_income_is_excluded_from_spend() {
        let budget = food_budget(dec!(500));
        let transactions = vec![
            expense(dec!(100), "Food", date(2024, 1, 10)),
            income(dec!(1000), "Food", date(2024, 1, 11)),
        ];

        let summary =
            BudgetService::aggregate(&budget, &transactions, date(2024, 1, 31)).unwrap();

        assert_eq!(summary.total_spent, dec!(100));
        assert_eq!(summary.expenses_count, 1);
    }

    #[test]
    fn test_other_categories_are_excluded() {
        let budget = food_budget(dec!(500));
        let transactions = vec![
            expense(dec!(100), "Food", date(2024, 1, 10)),
            expense(dec!(400), "Transport", date(2024, 1, 10)),
        ];

        let summary =
            BudgetService::aggregate(&budget, &transactions, date(2024, 1, 31)).unwrap();

        assert_eq!(summary.total_spent, dec!(100));
    }

    #[test]
    fn test_only_current_period_counts() {
        let budget = food_budget(dec!(500));
        let transactions = vec![
            expense(dec!(100), "Food", date(2024, 1, 10)),
            // Previous and next period.
            expense(dec!(100), "Food", date(2023, 12, 31)),
            expense(dec!(100), "Food", date(2024, 2, 1)),
        ];

        let summary =
            BudgetService::aggregate(&budget, &transactions, date(2024, 1, 31)).unwrap();

        assert_eq!(summary.total_spent, dec!(100));
        assert_eq!(summary.expenses_count, 1);
    }

    #[test]
    fn test_empty_period_reads_zero_percent() {
        let budget = food_budget(dec!(500));

        let progress = BudgetService::progress(&budget, &[], date(2024, 1, 31)).unwrap();

        assert_eq!(progress.total_spent, Decimal::ZERO);
        assert_eq!(progress.progress, Decimal::ZERO);
        assert_eq!(progress.remaining, dec!(500));
        assert!(!progress.is_over_budget);
    }

    #[test]
    fn test_not_yet_started_budget_reads_zero() {
        let mut budget = food_budget(dec!(500));
        budget.start_date = date(2024, 6, 1);
        let transactions = vec![expense(dec!(100), "Food", date(2024, 1, 10))];

        let progress =
            BudgetService::progress(&budget, &transactions, date(2024, 1, 31)).unwrap();

        assert_eq!(progress.progress, Decimal::ZERO);
    }

    #[test]
    fn test_foreign_expense_with_rates_is_converted() {
        let budget = food_budget(dec!(500));
        let mut foreign = expense(dec!(100), "Food", date(2024, 1, 10));
        foreign.currency = CurrencyCode::new("EUR").unwrap();
        foreign.from_rate = Some(dec!(1.10));
        foreign.to_rate = Some(dec!(1.00));

        let summary =
            BudgetService::aggregate(&budget, &[foreign], date(2024, 1, 31)).unwrap();

        assert_eq!(summary.total_spent, dec!(110.00));
        assert_eq!(summary.expenses_count, 1);
        assert!(summary.foreign.is_empty());
    }

    #[test]
    fn test_rateless_foreign_expense_stays_in_own_bucket() {
        let budget = food_budget(dec!(500));
        let jpy = CurrencyCode::new("JPY").unwrap();
        let mut first = expense(dec!(3000), "Food", date(2024, 1, 10));
        first.currency = jpy.clone();
        let mut second = expense(dec!(1500), "Food", date(2024, 1, 12));
        second.currency = jpy.clone();
        let native = expense(dec!(50), "Food", date(2024, 1, 15));

        let summary = BudgetService::aggregate(
            &budget,
            &[first, second, native],
            date(2024, 1, 31),
        )
        .unwrap();

        assert_eq!(summary.total_spent, dec!(50));
        assert_eq!(summary.expenses_count, 1);
        assert_eq!(summary.foreign.len(), 1);
        assert_eq!(summary.foreign[0].currency, jpy);
        assert_eq!(summary.foreign[0].total_spent, dec!(4500));
        assert_eq!(summary.foreign[0].expenses_count, 2);
    }

    #[test]
    fn test_partial_rate_defaults_to_identity() {
        let budget = food_budget(dec!(500));
        let mut foreign = expense(dec!(80), "Food", date(2024, 1, 10));
        foreign.currency = CurrencyCode::new("GBP").unwrap();
        foreign.from_rate = Some(dec!(1.25));

        let summary =
            BudgetService::aggregate(&budget, &[foreign], date(2024, 1, 31)).unwrap();

        assert_eq!(summary.total_spent, dec!(100.00));
        assert!(summary.foreign.is_empty());
    }

    #[test]
    fn test_non_positive_budget_amount_fails_fast() {
        let budget = food_budget(dec!(0));

        let result = BudgetService::aggregate(&budget, &[], date(2024, 1, 31));

        assert!(matches!(result, Err(BudgetError::NonPositiveAmount(_))));
    }

    #[test]
    fn test_non_positive_transaction_amount_fails_fast() {
        let budget = food_budget(dec!(500));
        let transactions = vec![expense(dec!(-5), "Food", date(2024, 1, 10))];

        let result = BudgetService::aggregate(&budget, &transactions, date(2024, 1, 31));

        assert!(matches!(
            result,
            Err(BudgetError::NonPositiveTransactionAmount(_))
        ));
    }

    #[test]
    fn test_zero_rate_fails_fast() {
        let budget = food_budget(dec!(500));
        let mut foreign = expense(dec!(80), "Food", date(2024, 1, 10));
        foreign.currency = CurrencyCode::new("GBP").unwrap();
        foreign.from_rate = Some(dec!(0));
        foreign.to_rate = Some(dec!(1));

        let result = BudgetService::aggregate(&budget, &[foreign], date(2024, 1, 31));

        assert!(matches!(result, Err(BudgetError::InvalidRate(_))));
    }
}
