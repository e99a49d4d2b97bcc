//! Domain types for balance calculation.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use kitty_shared::types::{ExpenseId, MemberId};

/// A member of a shared list, as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// The member ID.
    pub id: MemberId,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Weight in percent (0-100). Zero excludes the member from settlement.
    pub split_percentage: Decimal,
}

impl Member {
    /// Creates a new member snapshot.
    #[must_use]
    pub fn new(id: MemberId, name: impl Into<String>, split_percentage: Decimal) -> Self {
        Self {
            id,
            name: name.into(),
            split_percentage,
        }
    }

    /// Returns true if the member bears expense shares.
    #[must_use]
    pub fn is_weighted(&self) -> bool {
        self.split_percentage > Decimal::ZERO
    }
}

/// A recorded expense, as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// The expense ID.
    #[serde(default)]
    pub id: ExpenseId,
    /// Amount in the list's settlement currency.
    pub amount: Decimal,
    /// Member who paid, if recorded.
    #[serde(default)]
    pub paid_by: Option<MemberId>,
    /// Members the cost is allocated across. Empty means every weighted member.
    #[serde(default)]
    pub beneficiaries: Vec<MemberId>,
    /// Date the expense was incurred.
    #[serde(default)]
    pub spent_on: Option<NaiveDate>,
    /// Free-form label.
    #[serde(default)]
    pub label: Option<String>,
}

impl Expense {
    /// Creates an expense with no payer and no explicit beneficiaries.
    #[must_use]
    pub fn new(amount: Decimal) -> Self {
        Self {
            id: ExpenseId::new(),
            amount,
            paid_by: None,
            beneficiaries: Vec::new(),
            spent_on: None,
            label: None,
        }
    }

    /// Sets the payer.
    #[must_use]
    pub fn paid_by(mut self, member: MemberId) -> Self {
        self.paid_by = Some(member);
        self
    }

    /// Restricts the expense to the given beneficiaries.
    #[must_use]
    pub fn for_members(mut self, members: impl IntoIterator<Item = MemberId>) -> Self {
        self.beneficiaries = members.into_iter().collect();
        self
    }

    /// Sets the date the expense was incurred.
    #[must_use]
    pub fn on(mut self, date: NaiveDate) -> Self {
        self.spent_on = Some(date);
        self
    }

    /// Sets the label.
    #[must_use]
    pub fn labeled(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// Why a balance sheet has no rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReasonCode {
    /// Rows were computed.
    None,
    /// The list has no expenses.
    NoExpenses,
    /// No member has a positive split percentage.
    NoMembers,
    /// Every computed share was zero.
    NoSplit,
}

impl ReasonCode {
    /// Returns the wire representation of the reason.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::NoExpenses => "no-expenses",
            Self::NoMembers => "no-members",
            Self::NoSplit => "no-split",
        }
    }
}

impl std::fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-member position derived from one computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceRow {
    /// The member this row describes.
    pub member: Member,
    /// Total the member paid.
    pub paid: Decimal,
    /// Total allocated to the member.
    pub share: Decimal,
    /// `paid - share`. Positive means the member is owed money.
    pub net: Decimal,
    /// The member's split percentage.
    pub percentage: Decimal,
}

impl BalanceRow {
    /// Creates a row, deriving `net` from `paid` and `share`.
    #[must_use]
    pub fn new(member: Member, paid: Decimal, share: Decimal) -> Self {
        let percentage = member.split_percentage;
        Self {
            member,
            paid,
            share,
            net: paid - share,
            percentage,
        }
    }
}

/// Result of a balance computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceSheet {
    /// Rows sorted by net descending.
    pub rows: Vec<BalanceRow>,
    /// Why `rows` is empty, or `None`.
    pub reason: ReasonCode,
}

impl BalanceSheet {
    /// Creates an empty sheet carrying the given reason.
    #[must_use]
    pub const fn empty(reason: ReasonCode) -> Self {
        Self {
            rows: Vec::new(),
            reason,
        }
    }

    /// Sum of all net positions. Zero for any computed sheet.
    #[must_use]
    pub fn total_net(&self) -> Decimal {
        self.rows.iter().map(|row| row.net).sum()
    }

    /// Sum of all positive net positions.
    #[must_use]
    pub fn total_owed(&self) -> Decimal {
        self.rows
            .iter()
            .map(|row| row.net.max(Decimal::ZERO))
            .sum()
    }

    /// Returns true if no member owes or is owed anything.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.rows.iter().all(|row| row.net.is_zero())
    }
}
