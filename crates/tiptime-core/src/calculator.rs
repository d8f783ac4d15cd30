//! # Calculator Module
//!
//! The tip and total calculation.
//!
//! ## Calculation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  compute(cost, tier, mode)                                              │
//! │       │                                                                 │
//! │       ├── cost absent, zero, negative or above MAX_COST_CENTS?          │
//! │       │         ──► { tip: 0, total: 0 }  (no rounding)                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  rate = tier.rate()                                                     │
//! │       │                                                                 │
//! │       ├── RoundTip   ──► tip = ceil(cost × rate)                        │
//! │       │                  total = cost + tip                             │
//! │       │                                                                 │
//! │       ├── RoundTotal ──► tip = cost × rate                              │
//! │       │                  total = ceil(cost + cost × rate)               │
//! │       │                                                                 │
//! │       └── None       ──► tip = cost × rate                              │
//! │                          total = cost + tip                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::money::Money;
use crate::types::{BillResult, RoundingMode, ServiceTier};
use crate::MAX_COST_CENTS;

/// Computes the tip and total bill.
///
/// ## Rules
/// - An absent or zero cost gives a zero bill, whatever the tier or mode
/// - A cost the parser would reject (negative, or above [`MAX_COST_CENTS`])
///   is treated as absent
/// - `RoundTip`: the tip is rounded up to the next whole currency unit and
///   the total follows the rounded tip
/// - `RoundTotal`: the total is rounded up on its own, the tip is untouched
/// - Ceilings are taken on the exact amounts, never on cent-rounded ones
///
/// This function is pure: the same arguments always give the same bill.
///
/// ## Example
/// ```rust
/// use tiptime_core::calculator::compute;
/// use tiptime_core::{Money, RoundingMode, ServiceTier};
///
/// let cost = Some(Money::from_cents(5100)); // $51.00
///
/// let bill = compute(cost, ServiceTier::Poor, RoundingMode::RoundTotal);
/// assert_eq!(bill.tip.cents(), 510);    // $5.10
/// assert_eq!(bill.total.cents(), 5700); // $56.10 → $57.00
///
/// let bill = compute(None, ServiceTier::Excellent, RoundingMode::RoundTip);
/// assert!(bill.tip.is_zero() && bill.total.is_zero());
/// ```
pub fn compute(cost: Option<Money>, tier: ServiceTier, mode: RoundingMode) -> BillResult {
    let cost = match cost {
        Some(cost) if (1..=MAX_COST_CENTS).contains(&cost.cents()) => cost,
        _ => return BillResult::zero(),
    };

    let rate = tier.rate();

    match mode {
        RoundingMode::RoundTip => {
            let tip = cost.tip_rounded_up(rate);
            BillResult {
                tip,
                total: cost + tip,
            }
        }
        RoundingMode::RoundTotal => BillResult {
            tip: cost.calculate_tip(rate),
            total: cost.total_rounded_up(rate),
        },
        RoundingMode::None => {
            let tip = cost.calculate_tip(rate);
            BillResult {
                tip,
                total: cost + tip,
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn dollars(units: i64) -> Option<Money> {
        Some(Money::from_major_minor(units, 0))
    }

    fn bill(tip_cents: i64, total_cents: i64) -> BillResult {
        BillResult {
            tip: Money::from_cents(tip_cents),
            total: Money::from_cents(total_cents),
        }
    }

    #[test]
    fn test_absent_or_zero_cost_is_zero_bill() {
        for tier in ServiceTier::ALL {
            for mode in [
                RoundingMode::None,
                RoundingMode::RoundTip,
                RoundingMode::RoundTotal,
            ] {
                assert_eq!(compute(None, tier, mode), BillResult::zero());
                assert_eq!(compute(Some(Money::zero()), tier, mode), BillResult::zero());
            }
        }
    }

    #[test]
    fn test_average_no_rounding() {
        let result = compute(dollars(100), ServiceTier::Average, RoundingMode::None);
        assert_eq!(result, bill(1500, 11500));
    }

    #[test]
    fn test_round_tip_already_whole() {
        let result = compute(dollars(100), ServiceTier::Excellent, RoundingMode::RoundTip);
        assert_eq!(result, bill(2000, 12000));
    }

    #[test]
    fn test_round_tip_fraction() {
        // $5.10 → $6.00, total follows the rounded tip
        let result = compute(dollars(51), ServiceTier::Poor, RoundingMode::RoundTip);
        assert_eq!(result, bill(600, 5700));
    }

    #[test]
    fn test_round_total_leaves_tip_unrounded() {
        // $56.10 → $57.00, tip stays $5.10
        let result = compute(dollars(51), ServiceTier::Poor, RoundingMode::RoundTotal);
        assert_eq!(result, bill(510, 5700));
    }

    #[test]
    fn test_round_total_differs_from_round_tip() {
        // $43.00 at 18%: tip $7.74
        let cost = dollars(43);
        let tip_mode = compute(cost, ServiceTier::Good, RoundingMode::RoundTip);
        let total_mode = compute(cost, ServiceTier::Good, RoundingMode::RoundTotal);

        assert_eq!(tip_mode, bill(800, 5100));
        assert_eq!(total_mode, bill(774, 5100));

        // $43.50 at 18%: tip $7.83, total $51.33
        let cost = Some(Money::from_cents(4350));
        assert_eq!(
            compute(cost, ServiceTier::Good, RoundingMode::RoundTip),
            bill(800, 5150)
        );
        assert_eq!(
            compute(cost, ServiceTier::Good, RoundingMode::RoundTotal),
            bill(783, 5200)
        );
    }

    #[test]
    fn test_sub_cent_tip() {
        // $10.01 at 15% = $1.5015
        let cost = Some(Money::from_cents(1001));
        assert_eq!(
            compute(cost, ServiceTier::Average, RoundingMode::None),
            bill(150, 1151)
        );
        assert_eq!(
            compute(cost, ServiceTier::Average, RoundingMode::RoundTip),
            bill(200, 1201)
        );
        assert_eq!(
            compute(cost, ServiceTier::Average, RoundingMode::RoundTotal),
            bill(150, 1200)
        );
    }

    #[test]
    fn test_every_tier_rate_applies() {
        let tips: Vec<i64> = ServiceTier::ALL
            .iter()
            .map(|&tier| compute(dollars(50), tier, RoundingMode::None).tip.cents())
            .collect();
        assert_eq!(tips, vec![500, 750, 900, 1000]);
    }

    #[test]
    fn test_compute_is_idempotent() {
        let cost = Some(Money::from_cents(3333));
        let first = compute(cost, ServiceTier::Good, RoundingMode::RoundTotal);
        let second = compute(cost, ServiceTier::Good, RoundingMode::RoundTotal);
        assert_eq!(first, second);
    }

    #[test]
    fn test_cost_outside_accepted_range_is_zero_bill() {
        for cents in [-1, -5100, MAX_COST_CENTS + 1, i64::MAX / 10 * 9, i64::MAX, i64::MIN] {
            for mode in [
                RoundingMode::None,
                RoundingMode::RoundTip,
                RoundingMode::RoundTotal,
            ] {
                let cost = Some(Money::from_cents(cents));
                assert_eq!(
                    compute(cost, ServiceTier::Excellent, mode),
                    BillResult::zero(),
                    "{cents} {mode}"
                );
            }
        }
    }

    #[test]
    fn test_largest_accepted_cost() {
        let cost = Money::from_cents(MAX_COST_CENTS);
        // $999,999,999.99 at 20% = $199,999,999.998
        assert_eq!(
            compute(Some(cost), ServiceTier::Excellent, RoundingMode::RoundTip),
            bill(20_000_000_000, 119_999_999_999)
        );
        assert_eq!(
            compute(Some(cost), ServiceTier::Excellent, RoundingMode::RoundTotal),
            bill(20_000_000_000, 120_000_000_000)
        );
    }

    #[test]
    fn test_both_toggles_resolve_to_round_tip() {
        let mode = RoundingMode::from_toggles(true, true);
        let result = compute(dollars(51), ServiceTier::Poor, mode);
        assert_eq!(result, bill(600, 5700));
    }
}
