//! Immutable list snapshots supplied by the record-fetching layer.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use kitty_shared::types::ListId;

use crate::balance::{Expense, Member};

/// Members and expenses of one list at a point in time.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    /// The list the records belong to.
    #[serde(default)]
    pub list_id: ListId,
    /// Members of the list.
    #[serde(default)]
    pub members: Vec<Member>,
    /// Expenses recorded against the list.
    #[serde(default)]
    pub expenses: Vec<Expense>,
}

impl LedgerSnapshot {
    /// Creates a snapshot.
    #[must_use]
    pub fn new(list_id: ListId, members: Vec<Member>, expenses: Vec<Expense>) -> Self {
        Self {
            list_id,
            members,
            expenses,
        }
    }

    /// Keeps expenses dated on or before `date`. Undated expenses are kept.
    #[must_use]
    pub fn as_of(&self, date: NaiveDate) -> Self {
        self.filter_expenses(|spent_on| spent_on <= date)
    }

    /// Keeps expenses dated within `start..=end`. Undated expenses are kept.
    #[must_use]
    pub fn between(&self, start: NaiveDate, end: NaiveDate) -> Self {
        self.filter_expenses(|spent_on| start <= spent_on && spent_on <= end)
    }

    fn filter_expenses(&self, keep: impl Fn(NaiveDate) -> bool) -> Self {
        Self {
            list_id: self.list_id,
            members: self.members.clone(),
            expenses: self
                .expenses
                .iter()
                .filter(|e| e.spent_on.is_none_or(&keep))
                .cloned()
                .collect(),
        }
    }
}
