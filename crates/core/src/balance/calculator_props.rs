//! Property-based tests for balance computation.
//!
//! - Conservation: nets sum to zero when every payer is a weighted member
//! - Allocation: shares sum to the total amount spent
//! - Ordering: rows are sorted by net descending
//! - Idempotence: the same input yields the same sheet

use proptest::prelude::*;
use rust_decimal::Decimal;
use kitty_shared::types::{Currency, MemberId};

use super::allocation::AllocationUtil;
use super::calculator::BalanceCalculator;
use super::types::{Expense, Member, ReasonCode};

/// Strategy to generate amounts in cents (0.01 to 100,000.00).
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..10_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate weights (0.01 to 100.00).
fn weight() -> impl Strategy<Value = Decimal> {
    (1i64..=10_000i64).prop_map(|v| Decimal::new(v, 2))
}

/// Strategy to generate 1-8 weighted members.
fn members() -> impl Strategy<Value = Vec<Member>> {
    prop::collection::vec(weight(), 1..8).prop_map(|weights| {
        weights
            .into_iter()
            .enumerate()
            .map(|(i, w)| Member::new(MemberId::new(), format!("m{i}"), w))
            .collect()
    })
}

/// Strategy to generate members plus expenses paid by them.
///
/// Each expense picks a payer and a beneficiary mask by index.
fn ledger() -> impl Strategy<Value = (Vec<Member>, Vec<Expense>)> {
    members().prop_flat_map(|members| {
        let count = members.len();
        let expenses = prop::collection::vec(
            (positive_amount(), 0..count, prop::collection::vec(any::<bool>(), count)),
            1..20,
        );
        (Just(members), expenses)
    })
    .prop_map(|(members, raw)| {
        let expenses = raw
            .into_iter()
            .map(|(amount, payer, mask)| {
                let beneficiaries = members
                    .iter()
                    .zip(mask)
                    .filter(|(_, picked)| *picked)
                    .map(|(m, _)| m.id);
                Expense::new(amount)
                    .paid_by(members[payer].id)
                    .for_members(beneficiaries)
            })
            .collect();
        (members, expenses)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// *For any* ledger whose payers are weighted members, nets sum to zero.
    #[test]
    fn prop_nets_sum_to_zero((members, expenses) in ledger()) {
        let sheet = BalanceCalculator::new(Currency::Usd)
            .compute(&expenses, &members)
            .unwrap();

        prop_assert_eq!(sheet.reason, ReasonCode::None);
        prop_assert_eq!(sheet.total_net(), Decimal::ZERO);
    }

    /// *For any* ledger, shares sum to the total spent and paid sums match.
    #[test]
    fn prop_shares_sum_to_total_spent((members, expenses) in ledger()) {
        let sheet = BalanceCalculator::new(Currency::Usd)
            .compute(&expenses, &members)
            .unwrap();

        let spent: Decimal = expenses.iter().map(|e| e.amount).sum();
        let shares: Decimal = sheet.rows.iter().map(|r| r.share).sum();
        let paid: Decimal = sheet.rows.iter().map(|r| r.paid).sum();
        prop_assert_eq!(shares, spent);
        prop_assert_eq!(paid, spent);
    }

    /// *For any* ledger, rows come back sorted by net descending.
    #[test]
    fn prop_rows_sorted_by_net((members, expenses) in ledger()) {
        let sheet = BalanceCalculator::new(Currency::Usd)
            .compute(&expenses, &members)
            .unwrap();

        for pair in sheet.rows.windows(2) {
            prop_assert!(pair[0].net >= pair[1].net);
        }
        prop_assert_eq!(sheet.rows.len(), members.len());
    }

    /// *For any* ledger, computing twice gives identical sheets.
    #[test]
    fn prop_compute_is_deterministic((members, expenses) in ledger()) {
        let calculator = BalanceCalculator::new(Currency::Usd);
        let first = calculator.compute(&expenses, &members).unwrap();
        let second = calculator.compute(&expenses, &members).unwrap();
        prop_assert_eq!(first, second);
    }

    /// *For any* amount and weights, allocations sum exactly to the amount
    /// and stay on the cent grid.
    #[test]
    fn prop_allocation_sum_invariant(
        amount in positive_amount(),
        weights in prop::collection::vec(0i64..=10_000i64, 1..10),
    ) {
        let weights: Vec<Decimal> = weights.into_iter().map(|w| Decimal::new(w, 2)).collect();
        let result = AllocationUtil::allocate_by_weights(amount, &weights, 2);

        prop_assert_eq!(result.len(), weights.len());
        prop_assert_eq!(result.iter().copied().sum::<Decimal>(), amount);
        for allocation in &result {
            prop_assert!(allocation.normalize().scale() <= 2);
            prop_assert!(*allocation >= Decimal::ZERO);
        }
    }
}

