//! Settlement domain types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::balance::Member;

/// A single directed transfer between two members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    /// Member who pays (negative net).
    pub from: Member,
    /// Member who receives (positive net).
    pub to: Member,
    /// Amount transferred; always positive.
    pub amount: Decimal,
}

impl Settlement {
    /// Creates a settlement.
    #[must_use]
    pub const fn new(from: Member, to: Member, amount: Decimal) -> Self {
        Self { from, to, amount }
    }
}

impl std::fmt::Display for Settlement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}: {}", self.from.name, self.to.name, self.amount)
    }
}
