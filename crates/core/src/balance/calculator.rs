//! Per-member balance computation.

use std::collections::HashMap;

use rust_decimal::Decimal;
use kitty_shared::types::{Currency, MemberId};

use super::allocation::AllocationUtil;
use super::error::BalanceError;
use super::types::{BalanceRow, BalanceSheet, Expense, Member, ReasonCode};
use super::validation::{validate_expenses, validate_members};

/// Turns expenses and weighted members into per-member balance rows.
///
/// The calculator is stateless apart from the settlement currency, which
/// fixes the precision shares are allocated at.
#[derive(Debug, Clone, Copy)]
pub struct BalanceCalculator {
    currency: Currency,
}

impl BalanceCalculator {
    /// Creates a calculator for a list settled in `currency`.
    #[must_use]
    pub const fn new(currency: Currency) -> Self {
        Self { currency }
    }

    /// The settlement currency.
    #[must_use]
    pub const fn currency(&self) -> Currency {
        self.currency
    }

    /// Compute each weighted member's paid, share and net totals.
    ///
    /// Steps:
    /// 1. Validate members and expenses
    /// 2. Return `NoExpenses` / `NoMembers` for degenerate input
    /// 3. Accumulate each expense into its payer's `paid` and its
    ///    beneficiaries' `share`
    /// 4. Return `NoSplit` if nothing was allocated
    /// 5. Build rows and sort them by net descending (stable)
    ///
    /// # Errors
    ///
    /// Returns `BalanceError` if the input fails validation. Nothing is
    /// computed in that case.
    pub fn compute(
        &self,
        expenses: &[Expense],
        members: &[Member],
    ) -> Result<BalanceSheet, BalanceError> {
        validate_members(members)?;
        validate_expenses(expenses, self.currency)?;

        if expenses.is_empty() {
            return Ok(BalanceSheet::empty(ReasonCode::NoExpenses));
        }

        let weighted: Vec<&Member> = members.iter().filter(|m| m.is_weighted()).collect();
        if weighted.is_empty() {
            return Ok(BalanceSheet::empty(ReasonCode::NoMembers));
        }

        let index: HashMap<MemberId, usize> = weighted
            .iter()
            .enumerate()
            .map(|(i, member)| (member.id, i))
            .collect();

        let decimal_places = self.currency.minor_units();
        let mut paid = vec![Decimal::ZERO; weighted.len()];
        let mut share = vec![Decimal::ZERO; weighted.len()];

        for expense in expenses {
            // Payers outside the weighted set still let the expense be shared
            if let Some(&payer) = expense.paid_by.as_ref().and_then(|id| index.get(id)) {
                paid[payer] += expense.amount;
            }

            let beneficiaries = resolve_beneficiaries(expense, weighted.len(), &index);
            let weights: Vec<Decimal> = beneficiaries
                .iter()
                .map(|&i| weighted[i].split_percentage)
                .collect();
            let allocations =
                AllocationUtil::allocate_by_weights(expense.amount, &weights, decimal_places);

            for (&i, allocation) in beneficiaries.iter().zip(allocations) {
                share[i] += allocation;
            }
        }

        if share.iter().all(Decimal::is_zero) {
            return Ok(BalanceSheet::empty(ReasonCode::NoSplit));
        }

        let mut rows: Vec<BalanceRow> = weighted
            .into_iter()
            .zip(paid.into_iter().zip(share))
            .map(|(member, (paid, share))| BalanceRow::new(member.clone(), paid, share))
            .collect();

        // sort_by is stable: equal nets keep member order
        rows.sort_by(|a, b| b.net.cmp(&a.net));

        Ok(BalanceSheet {
            rows,
            reason: ReasonCode::None,
        })
    }
}

/// Indexes (into the weighted list) of the members an expense is shared by.
///
/// Explicit beneficiaries outside the weighted set are dropped; if none
/// remain, every weighted member benefits. Indexes come back in member
/// order with duplicates collapsed.
fn resolve_beneficiaries(
    expense: &Expense,
    weighted_count: usize,
    index: &HashMap<MemberId, usize>,
) -> Vec<usize> {
    let mut selected = vec![false; weighted_count];
    for id in &expense.beneficiaries {
        if let Some(&i) = index.get(id) {
            selected[i] = true;
        }
    }

    let resolved: Vec<usize> = (0..weighted_count).filter(|&i| selected[i]).collect();
    if resolved.is_empty() {
        (0..weighted_count).collect()
    } else {
        resolved
    }
}
