//! Shared types for Moneta.
//!
//! This crate provides common types used across all other crates:
//! - Money and currency-code types with decimal precision
//! - Typed IDs for type-safe entity references

pub mod types;

pub use types::{CurrencyCode, Money};
