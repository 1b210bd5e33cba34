//! Dashboard assembly over a full snapshot.
//!
//! Combines every budget's progress, the composite health score, resolved
//! bill statuses, and per-currency cash flow into one structure for the UI
//! layer.

pub mod error;
pub mod service;
pub mod types;


pub use error::OverviewError;
pub use service::OverviewService;
pub use types::{CurrencyFlow, Overview, ResolvedBill};
