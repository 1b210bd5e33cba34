//! Attached-rate currency conversion.
//!
//! The engine never looks rates up; every transaction carries the rates that
//! were captured when it was created.

pub mod conversion;

#[cfg(test)]
mod props;

pub use conversion::{convert_amount, convert_with_attached_rates};
