//! Read-time bill status resolution.

use chrono::NaiveDate;

use super::types::{Bill, BillStatus};

/// Service deriving a bill's display status from its stored status and due
/// date.
pub struct BillService;

impl BillService {
    /// Resolves the status to display for `today`.
    ///
    /// `Paid` always wins regardless of date. Otherwise a due date strictly
    /// before `today` projects to `Overdue` without ever being written
    /// back; the projection re-derives correctly every time "now"
    /// advances. Any other stored status passes through unchanged.
    #[must_use]
    pub fn resolve(bill: &Bill, today: NaiveDate) -> BillStatus {
        if bill.status == BillStatus::Paid {
            return BillStatus::Paid;
        }
        if bill.due_date < today {
            return BillStatus::Overdue;
        }
        bill.status
    }
}
