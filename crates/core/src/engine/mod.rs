//! Balance and settlement facade.
//!
//! Chains the balance calculator and a settlement strategy over a list
//! snapshot. Every call recomputes from scratch; nothing is cached.

pub mod snapshot;
pub mod summary;


use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{debug, instrument, warn};
use kitty_shared::config::{DEFAULT_EPSILON, SettlementConfig};
use kitty_shared::types::{Currency, ListId};

use crate::balance::{BalanceCalculator, BalanceError};
use crate::settlement::{
    GreedySettlement, ReimbursementDraft, SettlementStrategy, generate_reimbursements,
};

pub use snapshot::LedgerSnapshot;
pub use summary::{LedgerSummary, SummaryTotals};

/// Engine tuning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineOptions {
    /// Settlement currency of the list.
    pub currency: Currency,
    /// Remaining balance below which a settlement cursor advances.
    pub epsilon: Decimal,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            currency: Currency::Usd,
            epsilon: DEFAULT_EPSILON,
        }
    }
}

impl From<&SettlementConfig> for EngineOptions {
    fn from(config: &SettlementConfig) -> Self {
        Self {
            currency: config.currency,
            epsilon: config.epsilon,
        }
    }
}

/// Computes balances and settlements for list snapshots.
#[derive(Debug, Clone)]
pub struct SettlementEngine<S = GreedySettlement> {
    calculator: BalanceCalculator,
    strategy: S,
}

impl SettlementEngine<GreedySettlement> {
    /// Creates an engine using greedy settlement.
    #[must_use]
    pub fn new(options: EngineOptions) -> Self {
        let strategy = GreedySettlement::new(options.epsilon, options.currency.minor_units());
        Self::with_strategy(options.currency, strategy)
    }
}

impl Default for SettlementEngine<GreedySettlement> {
    fn default() -> Self {
        Self::new(EngineOptions::default())
    }
}

impl<S: SettlementStrategy> SettlementEngine<S> {
    /// Creates an engine using a custom settlement strategy.
    #[must_use]
    pub fn with_strategy(currency: Currency, strategy: S) -> Self {
        Self {
            calculator: BalanceCalculator::new(currency),
            strategy,
        }
    }

    /// The settlement currency.
    #[must_use]
    pub const fn currency(&self) -> Currency {
        self.calculator.currency()
    }

    /// Compute balances then settle them.
    ///
    /// # Errors
    ///
    /// Returns `BalanceError` if the snapshot fails validation.
    #[instrument(
        skip_all,
        fields(
            list_id = %snapshot.list_id,
            members = snapshot.members.len(),
            expenses = snapshot.expenses.len(),
            strategy = self.strategy.name(),
        )
    )]
    pub fn summarize(&self, snapshot: &LedgerSnapshot) -> Result<LedgerSummary, BalanceError> {
        let sheet = self
            .calculator
            .compute(&snapshot.expenses, &snapshot.members)
            .inspect_err(|err| warn!(code = err.error_code(), error = %err, "Rejected snapshot"))?;

        let settlements = self.strategy.settle(&sheet.rows);
        let total_spent: Decimal = snapshot.expenses.iter().map(|e| e.amount).sum();

        let summary = LedgerSummary::new(sheet.rows, settlements, sheet.reason, total_spent);
        debug!(
            reason = %summary.reason,
            rows = summary.rows.len(),
            transfers = summary.totals.transfer_count,
            transferred = %summary.totals.total_transferred,
            "Computed settlement"
        );

        Ok(summary)
    }

    /// Summarize only expenses dated on or before `date`.
    ///
    /// # Errors
    ///
    /// Returns `BalanceError` if the snapshot fails validation.
    pub fn summarize_as_of(
        &self,
        snapshot: &LedgerSnapshot,
        date: NaiveDate,
    ) -> Result<LedgerSummary, BalanceError> {
        self.summarize(&snapshot.as_of(date))
    }

    /// Generate pending reimbursements for a list.
    ///
    /// # Errors
    ///
    /// Returns `BalanceError` if the snapshot fails validation.
    #[instrument(skip_all, fields(list_id = %snapshot.list_id))]
    pub fn reimbursements(
        &self,
        snapshot: &LedgerSnapshot,
        created_on: NaiveDate,
    ) -> Result<Vec<ReimbursementDraft>, BalanceError> {
        let summary = self.summarize(snapshot)?;
        let drafts = self.drafts_for(snapshot.list_id, &summary, created_on);
        debug!(drafts = drafts.len(), "Generated reimbursements");
        Ok(drafts)
    }

    /// Turn an existing summary's settlements into pending drafts.
    #[must_use]
    pub fn drafts_for(
        &self,
        list_id: ListId,
        summary: &LedgerSummary,
        created_on: NaiveDate,
    ) -> Vec<ReimbursementDraft> {
        generate_reimbursements(list_id, &summary.settlements, self.currency(), created_on)
    }
}
