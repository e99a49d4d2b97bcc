//! Input validation for balance computation.

use std::collections::HashSet;

use rust_decimal::Decimal;
use kitty_shared::types::{Currency, Money};

use super::error::BalanceError;
use super::types::{Expense, Member};

/// Validates a member list.
///
/// # Errors
///
/// Returns an error if a split percentage is outside 0-100 or a member ID repeats.
pub fn validate_members(members: &[Member]) -> Result<(), BalanceError> {
    let mut seen = HashSet::with_capacity(members.len());

    for member in members {
        if member.split_percentage < Decimal::ZERO
            || member.split_percentage > Decimal::ONE_HUNDRED
        {
            return Err(BalanceError::InvalidSplitPercentage {
                member_id: member.id,
                value: member.split_percentage,
            });
        }
        if !seen.insert(member.id) {
            return Err(BalanceError::DuplicateMember(member.id));
        }
    }

    Ok(())
}

/// Validates expense amounts against the settlement currency.
///
/// The running total is kept small enough that weighting it by a full
/// split percentage still fits in a `Decimal`, so accumulation and
/// allocation never overflow.
///
/// # Errors
///
/// Returns an error if an amount is negative, finer than the currency's minor
/// unit, or pushes the total out of range.
pub fn validate_expenses(expenses: &[Expense], currency: Currency) -> Result<(), BalanceError> {
    let mut total = Decimal::ZERO;

    for expense in expenses {
        let money = Money::new(expense.amount, currency);
        if money.is_negative() {
            return Err(BalanceError::NegativeAmount {
                expense_id: expense.id,
                amount: expense.amount,
            });
        }
        if !money.fits_precision() {
            return Err(BalanceError::PrecisionExceeded {
                expense_id: expense.id,
                amount: expense.amount,
                currency,
            });
        }

        total = total
            .checked_add(expense.amount)
            .filter(|sum| sum.checked_mul(Decimal::ONE_HUNDRED).is_some())
            .ok_or(BalanceError::AmountTooLarge {
                expense_id: expense.id,
                amount: expense.amount,
            })?;
    }

    Ok(())
}
