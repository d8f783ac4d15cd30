//! Property-based tests for the tip calculator.
//!
//! - Rounded amounts land on whole currency units
//! - Rounding never lowers an amount
//! - Bills are never negative and the total never undercuts the cost
//! - Any `Money` at all is safe to pass in

use proptest::prelude::*;

use crate::calculator::compute;
use crate::money::Money;
use crate::types::{BillResult, RoundingMode, ServiceTier};
use crate::MAX_COST_CENTS;

/// Strategy to generate costs from $0.01 up to the accepted maximum.
fn positive_cost() -> impl Strategy<Value = Money> {
    (1i64..=MAX_COST_CENTS).prop_map(Money::from_cents)
}

/// Strategy to pick any service tier.
fn any_tier() -> impl Strategy<Value = ServiceTier> {
    prop::sample::select(ServiceTier::ALL.to_vec())
}

/// Strategy to pick any rounding mode.
fn any_mode() -> impl Strategy<Value = RoundingMode> {
    prop::sample::select(vec![
        RoundingMode::None,
        RoundingMode::RoundTip,
        RoundingMode::RoundTotal,
    ])
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// With tip rounding the tip is whole and the total is cost + tip.
    #[test]
    fn prop_round_tip_is_whole(cost in positive_cost(), tier in any_tier()) {
        let result = compute(Some(cost), tier, RoundingMode::RoundTip);
        prop_assert!(result.tip.is_whole_unit());
        prop_assert_eq!(result.total, cost + result.tip);
    }

    /// With total rounding the total is whole and the tip is the plain tip.
    #[test]
    fn prop_round_total_is_whole(cost in positive_cost(), tier in any_tier()) {
        let plain = compute(Some(cost), tier, RoundingMode::None);
        let result = compute(Some(cost), tier, RoundingMode::RoundTotal);
        prop_assert!(result.total.is_whole_unit());
        prop_assert_eq!(result.tip, plain.tip);
    }

    /// Rounding up never produces less than the unrounded bill, and never
    /// adds a whole unit or more.
    #[test]
    fn prop_rounding_only_goes_up(cost in positive_cost(), tier in any_tier()) {
        let plain = compute(Some(cost), tier, RoundingMode::None);
        let tip_mode = compute(Some(cost), tier, RoundingMode::RoundTip);
        let total_mode = compute(Some(cost), tier, RoundingMode::RoundTotal);

        prop_assert!(tip_mode.tip >= plain.tip);
        prop_assert!((tip_mode.tip - plain.tip).cents() <= 100);
        prop_assert!(total_mode.total >= plain.total);
        prop_assert!((total_mode.total - plain.total).cents() <= 100);
    }

    /// Bills are never negative and the total always covers the cost.
    #[test]
    fn prop_bill_is_non_negative(
        cost in positive_cost(),
        tier in any_tier(),
        mode in any_mode(),
    ) {
        let result = compute(Some(cost), tier, mode);
        prop_assert!(!result.tip.is_negative());
        prop_assert!(result.total >= cost);
    }

    /// Costs anywhere in the `i64` range never panic or wrap. Outside the
    /// accepted range the bill is zero.
    #[test]
    fn prop_any_money_is_safe(
        cents in any::<i64>(),
        tier in any_tier(),
        mode in any_mode(),
    ) {
        let cost = Money::from_cents(cents);
        let result = compute(Some(cost), tier, mode);
        if (1..=MAX_COST_CENTS).contains(&cents) {
            prop_assert!(result.total >= cost);
        } else {
            prop_assert_eq!(result, BillResult::zero());
        }
        prop_assert!(!result.tip.is_negative());
        prop_assert!(!result.total.is_negative());
    }

    /// Same arguments, same bill.
    #[test]
    fn prop_compute_is_deterministic(
        cost in positive_cost(),
        tier in any_tier(),
        mode in any_mode(),
    ) {
        prop_assert_eq!(
            compute(Some(cost), tier, mode),
            compute(Some(cost), tier, mode)
        );
    }
}
