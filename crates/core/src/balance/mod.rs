//! Per-member balance calculation.
//!
//! This module turns expense and member snapshots into balance rows:
//! - Domain types (members, expenses, rows, reason codes)
//! - Input validation
//! - Exact share allocation in currency minor units
//! - The balance calculator itself

pub mod allocation;
pub mod calculator;
pub mod error;
pub mod types;
pub mod validation;

#[cfg(test)]
mod calculator_props;

pub use allocation::AllocationUtil;
pub use calculator::BalanceCalculator;
pub use error::BalanceError;
pub use types::{BalanceRow, BalanceSheet, Expense, Member, ReasonCode};
pub use validation::{validate_expenses, validate_members};
