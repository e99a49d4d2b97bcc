//! Debt matching strategies.
//!
//! A strategy turns net positions into transfers. The greedy strategy here
//! is deterministic and linear but not guaranteed to use the fewest
//! possible transfers.

use rust_decimal::Decimal;
use kitty_shared::config::DEFAULT_EPSILON;

use super::types::Settlement;
use crate::balance::{BalanceRow, Member};

/// Turns balance rows into a list of transfers that zero every position.
pub trait SettlementStrategy {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Produce transfers for rows sorted by net descending.
    fn settle(&self, rows: &[BalanceRow]) -> Vec<Settlement>;
}

/// Remaining balance of one side of the matching.
struct Position<'a> {
    member: &'a Member,
    remaining: Decimal,
}

/// Greedy two-cursor cash-flow matching.
///
/// Creditors are consumed largest first and debtors in row order, so each
/// step settles the smaller of the two current positions in full. Produces
/// at most `creditors + debtors - 1` transfers.
#[derive(Debug, Clone, Copy)]
pub struct GreedySettlement {
    epsilon: Decimal,
    decimal_places: u32,
}

impl GreedySettlement {
    /// Creates a greedy strategy.
    ///
    /// `epsilon` is the remaining balance below which a cursor advances;
    /// `decimal_places` is the precision an emitted amount must survive.
    #[must_use]
    pub const fn new(epsilon: Decimal, decimal_places: u32) -> Self {
        Self {
            epsilon,
            decimal_places,
        }
    }

    fn exhausted(&self, remaining: Decimal) -> bool {
        remaining <= Decimal::ZERO || remaining < self.epsilon
    }
}

impl Default for GreedySettlement {
    fn default() -> Self {
        Self::new(DEFAULT_EPSILON, 2)
    }
}

impl SettlementStrategy for GreedySettlement {
    fn name(&self) -> &'static str {
        "greedy"
    }

    fn settle(&self, rows: &[BalanceRow]) -> Vec<Settlement> {
        let mut creditors: Vec<Position<'_>> = rows
            .iter()
            .filter(|row| row.net > Decimal::ZERO)
            .map(|row| Position {
                member: &row.member,
                remaining: row.net,
            })
            .collect();
        let mut debtors: Vec<Position<'_>> = rows
            .iter()
            .filter(|row| row.net < Decimal::ZERO)
            .map(|row| Position {
                member: &row.member,
                remaining: -row.net,
            })
            .collect();

        let mut settlements =
            Vec::with_capacity((creditors.len() + debtors.len()).saturating_sub(1));
        let (mut c, mut d) = (0, 0);

        while c < creditors.len() && d < debtors.len() {
            let creditor = &mut creditors[c];
            let debtor = &mut debtors[d];
            let amount = creditor.remaining.min(debtor.remaining);

            // Dust is consumed without emitting a transfer
            if !amount.round_dp(self.decimal_places).is_zero() {
                settlements.push(Settlement::new(
                    debtor.member.clone(),
                    creditor.member.clone(),
                    amount,
                ));
            }

            creditor.remaining -= amount;
            debtor.remaining -= amount;

            if self.exhausted(creditor.remaining) {
                c += 1;
            }
            if self.exhausted(debtor.remaining) {
                d += 1;
            }
        }

        settlements
    }
}
