//! Combined output of one balance and settlement run.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::balance::{BalanceRow, ReasonCode};
use crate::settlement::Settlement;

/// Headline totals for a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryTotals {
    /// Sum of all expense amounts considered.
    pub total_spent: Decimal,
    /// Sum of all settlement amounts.
    pub total_transferred: Decimal,
    /// Number of settlements.
    pub transfer_count: usize,
}

/// Balance rows, settlements and the reason they may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerSummary {
    /// Per-member rows, sorted by net descending.
    pub rows: Vec<BalanceRow>,
    /// Transfers in emission order.
    pub settlements: Vec<Settlement>,
    /// Why `rows` is empty, or `none`.
    pub reason: ReasonCode,
    /// Headline totals.
    pub totals: SummaryTotals,
}

impl LedgerSummary {
    /// Assembles a summary, deriving the transfer totals.
    #[must_use]
    pub fn new(
        rows: Vec<BalanceRow>,
        settlements: Vec<Settlement>,
        reason: ReasonCode,
        total_spent: Decimal,
    ) -> Self {
        let totals = SummaryTotals {
            total_spent,
            total_transferred: settlements.iter().map(|s| s.amount).sum(),
            transfer_count: settlements.len(),
        };
        Self {
            rows,
            settlements,
            reason,
            totals,
        }
    }

    /// Returns true if nobody owes anything.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.settlements.is_empty()
    }
}
