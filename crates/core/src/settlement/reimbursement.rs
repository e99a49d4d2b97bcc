//! Reimbursement drafts generated from settlements.
//!
//! A draft is what the persistence layer stores as a new pending ledger
//! row. Once paid, a draft is recorded as an expense from the debtor to the
//! creditor, which brings both balances back to zero.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use kitty_shared::types::{Currency, ExpenseId, ListId, MemberId, Money, ReimbursementId};

use super::error::ReimbursementError;
use super::types::Settlement;
use crate::balance::Expense;

/// Lifecycle of a reimbursement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReimbursementStatus {
    /// Generated, not yet paid.
    Pending,
    /// Paid by the debtor.
    Completed,
    /// Withdrawn before payment.
    Cancelled,
}

impl std::fmt::Display for ReimbursementStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Completed => write!(f, "completed"),
            Self::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// A reimbursement ready to be persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReimbursementDraft {
    /// The reimbursement ID.
    pub id: ReimbursementId,
    /// The list this reimbursement belongs to.
    pub list_id: ListId,
    /// Member who pays.
    pub from: MemberId,
    /// Member who is paid.
    pub to: MemberId,
    /// Amount in the list's settlement currency.
    pub amount: Money,
    /// Current status.
    pub status: ReimbursementStatus,
    /// Date the draft was generated.
    pub created_on: NaiveDate,
}

impl ReimbursementDraft {
    /// Creates a pending draft for one settlement.
    #[must_use]
    pub fn from_settlement(
        list_id: ListId,
        settlement: &Settlement,
        currency: Currency,
        created_on: NaiveDate,
    ) -> Self {
        Self {
            id: ReimbursementId::new(),
            list_id,
            from: settlement.from.id,
            to: settlement.to.id,
            amount: Money::new(settlement.amount, currency),
            status: ReimbursementStatus::Pending,
            created_on,
        }
    }

    /// Marks the reimbursement as paid.
    ///
    /// # Errors
    ///
    /// Returns `ReimbursementError::NotPending` unless the draft is pending.
    pub fn complete(&mut self) -> Result<(), ReimbursementError> {
        self.transition(ReimbursementStatus::Completed)
    }

    /// Withdraws the reimbursement.
    ///
    /// # Errors
    ///
    /// Returns `ReimbursementError::NotPending` unless the draft is pending.
    pub fn cancel(&mut self) -> Result<(), ReimbursementError> {
        self.transition(ReimbursementStatus::Cancelled)
    }

    fn transition(&mut self, next: ReimbursementStatus) -> Result<(), ReimbursementError> {
        if self.status != ReimbursementStatus::Pending {
            return Err(ReimbursementError::NotPending {
                id: self.id,
                status: self.status,
            });
        }
        self.status = next;
        Ok(())
    }

    /// The expense that records this reimbursement being paid.
    ///
    /// Paid by the debtor with the creditor as sole beneficiary.
    #[must_use]
    pub fn to_expense(&self) -> Expense {
        Expense {
            id: ExpenseId::new(),
            amount: self.amount.amount,
            paid_by: Some(self.from),
            beneficiaries: vec![self.to],
            spent_on: Some(self.created_on),
            label: Some("Reimbursement".to_string()),
        }
    }
}

/// Turn settlements into pending reimbursement drafts, in settlement order.
#[must_use]
pub fn generate_reimbursements(
    list_id: ListId,
    settlements: &[Settlement],
    currency: Currency,
    created_on: NaiveDate,
) -> Vec<ReimbursementDraft> {
    settlements
        .iter()
        .map(|s| ReimbursementDraft::from_settlement(list_id, s, currency, created_on))
        .collect()
}
