//! Property-based tests for greedy settlement.
//!
//! Rows are produced by the balance calculator so they carry its guarantees
//! (nets on the cent grid, summing to zero, sorted descending).

use proptest::prelude::*;
use rust_decimal::Decimal;
use kitty_shared::types::{Currency, MemberId};

use super::optimizer::{GreedySettlement, SettlementStrategy};
use crate::balance::{BalanceCalculator, BalanceRow, Expense, Member};

/// Strategy to generate rows from 2-10 members and 1-25 expenses.
fn rows() -> impl Strategy<Value = Vec<BalanceRow>> {
    prop::collection::vec(1i64..=100i64, 2..10)
        .prop_flat_map(|weights| {
            let count = weights.len();
            let expenses =
                prop::collection::vec((1i64..5_000_000i64, 0..count), 1..25);
            (Just(weights), expenses)
        })
        .prop_map(|(weights, raw)| {
            let members: Vec<Member> = weights
                .into_iter()
                .enumerate()
                .map(|(i, w)| Member::new(MemberId::new(), format!("m{i}"), Decimal::from(w)))
                .collect();
            let expenses: Vec<Expense> = raw
                .into_iter()
                .map(|(cents, payer)| Expense::new(Decimal::new(cents, 2)).paid_by(members[payer].id))
                .collect();
            BalanceCalculator::new(Currency::Usd)
                .compute(&expenses, &members)
                .map(|sheet| sheet.rows)
                .unwrap_or_default()
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// *For any* rows, the transferred total equals the total owed.
    #[test]
    fn prop_full_redistribution(rows in rows()) {
        let settlements = GreedySettlement::default().settle(&rows);

        let owed: Decimal = rows.iter().map(|r| r.net.max(Decimal::ZERO)).sum();
        let transferred: Decimal = settlements.iter().map(|s| s.amount).sum();
        prop_assert_eq!(transferred, owed);
    }

    /// *For any* rows, no member pays themself and every amount is positive.
    #[test]
    fn prop_no_self_transfer(rows in rows()) {
        for s in GreedySettlement::default().settle(&rows) {
            prop_assert_ne!(s.from.id, s.to.id);
            prop_assert!(s.amount > Decimal::ZERO);
        }
    }

    /// *For any* rows, transfers flow from debtors to creditors and number
    /// at most creditors + debtors - 1.
    #[test]
    fn prop_transfer_count_bound(rows in rows()) {
        let settlements = GreedySettlement::default().settle(&rows);
        let creditors = rows.iter().filter(|r| r.net > Decimal::ZERO).count();
        let debtors = rows.iter().filter(|r| r.net < Decimal::ZERO).count();

        prop_assert!(settlements.len() <= (creditors + debtors).saturating_sub(1));
        for s in &settlements {
            let from = rows.iter().find(|r| r.member.id == s.from.id).unwrap();
            let to = rows.iter().find(|r| r.member.id == s.to.id).unwrap();
            prop_assert!(from.net < Decimal::ZERO);
            prop_assert!(to.net > Decimal::ZERO);
        }
    }

    /// *For any* rows, applying the transfers zeroes every position.
    #[test]
    fn prop_transfers_zero_all_positions(rows in rows()) {
        let settlements = GreedySettlement::default().settle(&rows);

        for row in &rows {
            let sent: Decimal = settlements
                .iter()
                .filter(|s| s.from.id == row.member.id)
                .map(|s| s.amount)
                .sum();
            let received: Decimal = settlements
                .iter()
                .filter(|s| s.to.id == row.member.id)
                .map(|s| s.amount)
                .sum();
            prop_assert_eq!(row.net + sent - received, Decimal::ZERO);
        }
    }

    /// *For any* rows, settling twice yields identical transfers.
    #[test]
    fn prop_settle_is_deterministic(rows in rows()) {
        let strategy = GreedySettlement::default();
        prop_assert_eq!(strategy.settle(&rows), strategy.settle(&rows));
    }
}
