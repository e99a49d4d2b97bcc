//! Balance computation error types.
//!
//! Only caller misuse is an error. Degenerate but well-formed input is
//! reported through `ReasonCode` instead.

use rust_decimal::Decimal;
use thiserror::Error;
use kitty_shared::AppError;
use kitty_shared::types::{Currency, ExpenseId, MemberId};

/// Errors raised while validating balance inputs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BalanceError {
    /// Expense amount is negative.
    #[error("Expense {expense_id} has a negative amount: {amount}")]
    NegativeAmount {
        /// The offending expense.
        expense_id: ExpenseId,
        /// The rejected amount.
        amount: Decimal,
    },

    /// Expense amount has more decimals than the settlement currency allows.
    #[error("Expense {expense_id} amount {amount} exceeds {currency} precision")]
    PrecisionExceeded {
        /// The offending expense.
        expense_id: ExpenseId,
        /// The rejected amount.
        amount: Decimal,
        /// The settlement currency.
        currency: Currency,
    },

    /// Expense amounts are too large to split without overflowing.
    #[error("Expense {expense_id} amount {amount} pushes the list total out of range")]
    AmountTooLarge {
        /// The expense at which the running total overflowed.
        expense_id: ExpenseId,
        /// The rejected amount.
        amount: Decimal,
    },

    /// Split percentage is outside 0-100.
    #[error("Member {member_id} has split percentage {value} outside 0-100")]
    InvalidSplitPercentage {
        /// The offending member.
        member_id: MemberId,
        /// The rejected percentage.
        value: Decimal,
    },

    /// The same member appears twice in the member list.
    #[error("Member {0} appears more than once")]
    DuplicateMember(MemberId),
}

impl BalanceError {
    /// Returns the error code for machine-readable output.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NegativeAmount { .. } => "NEGATIVE_AMOUNT",
            Self::PrecisionExceeded { .. } => "PRECISION_EXCEEDED",
            Self::AmountTooLarge { .. } => "AMOUNT_TOO_LARGE",
            Self::InvalidSplitPercentage { .. } => "INVALID_SPLIT_PERCENTAGE",
            Self::DuplicateMember(_) => "DUPLICATE_MEMBER",
        }
    }
}

impl From<BalanceError> for AppError {
    fn from(err: BalanceError) -> Self {
        Self::Validation(err.to_string())
    }
}
