//! Core balance and settlement logic for Kitty.
//!
//! This crate is pure computation over in-memory list snapshots. It has no
//! storage, network or presentation dependencies.
//!
//! # Modules
//!
//! - `balance` - Per-member paid, share and net positions
//! - `settlement` - Debtor to creditor transfers and reimbursement drafts
//! - `engine` - Facade chaining the two over a snapshot

pub mod balance;
pub mod engine;
pub mod settlement;

pub use balance::{BalanceCalculator, BalanceError, BalanceRow, BalanceSheet, Expense, Member, ReasonCode};
pub use engine::{EngineOptions, LedgerSnapshot, LedgerSummary, SettlementEngine, SummaryTotals};
pub use settlement::{
    GreedySettlement, ReimbursementDraft, ReimbursementError, ReimbursementStatus, Settlement,
    SettlementStrategy,
};
