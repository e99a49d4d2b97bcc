//! Share allocation using the Largest Remainder Method.
//!
//! Splitting an expense must never create or destroy a minor unit: the
//! allocations for one expense always sum exactly to its amount.
//!
//! The Largest Remainder Method works by:
//! 1. Calculate exact allocations
//! 2. Round each allocation toward zero at the target precision
//! 3. Calculate the remainder (total - sum of rounded)
//! 4. Distribute remainder units to items with the largest fractional parts

use rust_decimal::Decimal;
use rust_decimal::prelude::*;

/// Allocation utility for distributing an expense across beneficiaries.
pub struct AllocationUtil;

impl AllocationUtil {
    /// Allocate amount equally across N recipients.
    ///
    /// Leftover units go to the first recipients.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use kitty_core::balance::AllocationUtil;
    ///
    /// // 100 / 3 = [33.34, 33.33, 33.33], sum = 100.00
    /// let result = AllocationUtil::allocate_equal(dec!(100), 3, 2);
    /// assert_eq!(result.iter().sum::<rust_decimal::Decimal>(), dec!(100));
    /// ```
    #[must_use]
    pub fn allocate_equal(total: Decimal, count: usize, decimal_places: u32) -> Vec<Decimal> {
        if count == 0 {
            return vec![];
        }

        let total_rounded =
            total.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointNearestEven);
        if count == 1 {
            return vec![total_rounded];
        }

        let count_dec = Decimal::from(count as u64);
        let unit = Decimal::new(1, decimal_places);

        let base = (total_rounded / count_dec)
            .round_dp_with_strategy(decimal_places, RoundingStrategy::ToZero);
        let remainder = total_rounded - base * count_dec;
        let extra_count = Self::units_in(remainder, unit);

        (0..count)
            .map(|i| if i < extra_count { base + unit } else { base })
            .collect()
    }

    /// Allocate proportionally to arbitrary non-negative weights.
    ///
    /// Weights need not sum to 100. When they sum to zero the amount is
    /// split equally instead. Ties on the fractional remainder go to the
    /// earlier recipient.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use kitty_core::balance::AllocationUtil;
    ///
    /// let weights = vec![dec!(70), dec!(30)];
    /// let result = AllocationUtil::allocate_by_weights(dec!(100), &weights, 2);
    /// assert_eq!(result, vec![dec!(70), dec!(30)]);
    /// ```
    #[must_use]
    pub fn allocate_by_weights(
        total: Decimal,
        weights: &[Decimal],
        decimal_places: u32,
    ) -> Vec<Decimal> {
        if weights.is_empty() {
            return vec![];
        }

        let total_weight: Decimal = weights.iter().copied().sum();
        if total_weight <= Decimal::ZERO {
            return Self::allocate_equal(total, weights.len(), decimal_places);
        }

        let unit = Decimal::new(1, decimal_places);
        let total_rounded =
            total.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointNearestEven);

        let exact: Vec<Decimal> = weights
            .iter()
            .map(|w| total_rounded * *w / total_weight)
            .collect();

        let mut rounded: Vec<Decimal> = exact
            .iter()
            .map(|a| a.round_dp_with_strategy(decimal_places, RoundingStrategy::ToZero))
            .collect();

        let sum_rounded: Decimal = rounded.iter().copied().sum();
        let units_to_distribute = Self::units_in(total_rounded - sum_rounded, unit);
        if units_to_distribute == 0 {
            return rounded;
        }

        let mut remainders: Vec<(usize, Decimal)> = exact
            .iter()
            .zip(rounded.iter())
            .enumerate()
            .map(|(i, (e, r))| (i, *e - *r))
            .collect();

        // Stable: equal remainders keep recipient order
        remainders.sort_by(|a, b| b.1.cmp(&a.1));

        for (idx, _) in remainders.iter().take(units_to_distribute) {
            rounded[*idx] += unit;
        }

        rounded
    }

    /// Number of whole `unit`s in a non-negative remainder.
    fn units_in(remainder: Decimal, unit: Decimal) -> usize {
        let units = (remainder / unit)
            .round_dp_with_strategy(0, RoundingStrategy::ToZero)
            .to_u64()
            .unwrap_or(0);
        usize::try_from(units).unwrap_or(0)
    }
}
