//! Materialization of due instances from recurring series.

use std::collections::HashSet;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::error::RecurringError;
use super::types::{InstanceDraft, MaterializationOutcome, RecurringSeries};
use crate::recurrence::advance;

/// Service deciding whether a series is due for a new instance.
pub struct RecurringService;

impl RecurringService {
    /// Evaluates one series against "now".
    ///
    /// The next due date walks forward from the series anchor, skipping
    /// every date already present in `existing_instance_dates`, so
    /// re-running the evaluation can never propose a date twice.
    ///
    /// # Errors
    ///
    /// Returns `RecurringError::NonPositiveAmount` or
    /// `RecurringError::EndBeforeAnchor` when the series violates its input
    /// contract.
    pub fn evaluate(
        series: &RecurringSeries,
        existing_instance_dates: &HashSet<NaiveDate>,
        now: NaiveDate,
    ) -> Result<MaterializationOutcome, RecurringError> {
        Self::validate(series)?;

        if !series.active {
            return Ok(MaterializationOutcome::Idle);
        }
        if let Some(end_date) = series.end_date {
            // End date is inclusive: the series goes dormant strictly after it.
            if now > end_date {
                return Ok(MaterializationOutcome::Idle);
            }
        }

        let mut candidate = series.anchor_date;
        while existing_instance_dates.contains(&candidate) {
            candidate = advance(candidate, series.frequency);
        }

        if series.end_date.is_some_and(|end_date| candidate > end_date) {
            return Ok(MaterializationOutcome::Idle);
        }
        if candidate > now {
            return Ok(MaterializationOutcome::Idle);
        }

        tracing::debug!(
            series_id = %series.id,
            date = %candidate,
            auto_create = series.auto_create,
            "instance due"
        );

        if series.auto_create {
            Ok(MaterializationOutcome::Create(InstanceDraft {
                series_id: series.id,
                user_id: series.user_id,
                kind: series.kind,
                title: series.title.clone(),
                amount: series.amount,
                currency: series.currency.clone(),
                category: series.category.clone(),
                date: candidate,
            }))
        } else {
            Ok(MaterializationOutcome::Remind { date: candidate })
        }
    }

    fn validate(series: &RecurringSeries) -> Result<(), RecurringError> {
        if series.amount <= Decimal::ZERO {
            return Err(RecurringError::NonPositiveAmount(series.id));
        }
        if let Some(end_date) = series.end_date {
            if end_date < series.anchor_date {
                return Err(RecurringError::EndBeforeAnchor {
                    series_id: series.id,
                    anchor_date: series.anchor_date,
                    end_date,
                });
            }
        }
        Ok(())
    }
}
