//! # Domain Types
//!
//! Core domain types used throughout Tip Time.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  ServiceTier    │   │    TipRate      │   │  RoundingMode   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  Poor       ────┼──►│  1000 bps       │   │  None (default) │       │
//! │  │  Average*   ────┼──►│  1500 bps       │   │  RoundTip       │       │
//! │  │  Good       ────┼──►│  1800 bps       │   │  RoundTotal     │       │
//! │  │  Excellent  ────┼──►│  2000 bps       │   │                 │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │   BillInput     │   │   BillResult    │                             │
//! │  │  ─────────────  │   │  ─────────────  │                             │
//! │  │  cost (Option)  │──►│  tip            │                             │
//! │  │  tier           │   │  total          │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! │                                                                         │
//! │  * default tier when none is selected                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::money::Money;

// =============================================================================
// Tip Rate
// =============================================================================

/// Tip rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 1800 bps = 18% (good service)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TipRate(u32);

impl TipRate {
    /// Creates a tip rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TipRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for TipRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / 100;
        let frac = self.0 % 100;
        if frac == 0 {
            write!(f, "{}%", whole)
        } else {
            write!(f, "{}.{:02}%", whole, frac)
        }
    }
}

// =============================================================================
// Service Tier
// =============================================================================

/// Quality of the service received, which decides the tip percentage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ServiceTier {
    /// 10%
    Poor,
    /// 15%, used when nothing is selected.
    #[default]
    Average,
    /// 18%
    Good,
    /// 20%
    Excellent,
}

impl ServiceTier {
    /// Every tier, in the order a tier picker lists them.
    pub const ALL: [ServiceTier; 4] = [
        ServiceTier::Poor,
        ServiceTier::Average,
        ServiceTier::Good,
        ServiceTier::Excellent,
    ];

    /// Returns the fixed tip rate for this tier.
    ///
    /// ## Lookup Table
    /// | Tier      | Rate |
    /// |-----------|------|
    /// | Poor      | 10%  |
    /// | Average   | 15%  |
    /// | Good      | 18%  |
    /// | Excellent | 20%  |
    ///
    /// ## Example
    /// ```rust
    /// use tiptime_core::ServiceTier;
    ///
    /// assert_eq!(ServiceTier::Good.rate().bps(), 1800);
    /// assert_eq!(ServiceTier::default().rate().bps(), 1500);
    /// ```
    #[inline]
    pub const fn rate(&self) -> TipRate {
        match self {
            ServiceTier::Poor => TipRate::from_bps(1000),
            ServiceTier::Average => TipRate::from_bps(1500),
            ServiceTier::Good => TipRate::from_bps(1800),
            ServiceTier::Excellent => TipRate::from_bps(2000),
        }
    }

    /// Short lowercase name used by the UI.
    pub const fn name(&self) -> &'static str {
        match self {
            ServiceTier::Poor => "poor",
            ServiceTier::Average => "average",
            ServiceTier::Good => "good",
            ServiceTier::Excellent => "excellent",
        }
    }
}

impl fmt::Display for ServiceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses a tier from its name, its `*_service` option name, or its
/// percentage.
///
/// ## Example
/// ```rust
/// use tiptime_core::ServiceTier;
///
/// assert_eq!("Excellent".parse::<ServiceTier>().unwrap(), ServiceTier::Excellent);
/// assert_eq!("poor_service".parse::<ServiceTier>().unwrap(), ServiceTier::Poor);
/// assert_eq!("18%".parse::<ServiceTier>().unwrap(), ServiceTier::Good);
/// assert!("amazing".parse::<ServiceTier>().is_err());
/// ```
impl FromStr for ServiceTier {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        let key = lowered.strip_suffix("_service").unwrap_or(&lowered);
        let key = key.strip_suffix('%').unwrap_or(key);

        match key {
            "poor" | "10" => Ok(ServiceTier::Poor),
            "average" | "15" => Ok(ServiceTier::Average),
            "good" | "18" => Ok(ServiceTier::Good),
            "excellent" | "20" => Ok(ServiceTier::Excellent),
            _ => Err(CoreError::UnknownServiceTier(s.trim().to_string())),
        }
    }
}

// =============================================================================
// Rounding Mode
// =============================================================================

/// Which amount, if any, is rounded up to the next whole currency unit.
///
/// ## Mutual Exclusion
/// The two "round" switches of the UI are folded into this one enum, so the
/// calculator can never be asked to round both the tip and the total.
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Switch event               Current mode      Next mode                 │
/// │  ─────────────              ────────────      ─────────                 │
/// │  round tip ON               any               RoundTip                  │
/// │  round total ON             any               RoundTotal                │
/// │  round tip OFF              RoundTip          None                      │
/// │  round tip OFF              other             (unchanged)               │
/// │  round total OFF            RoundTotal        None                      │
/// │  round total OFF            other             (unchanged)               │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMode {
    /// No rounding.
    #[default]
    None,
    /// Round the tip up, total follows the rounded tip.
    RoundTip,
    /// Round the total up, tip stays as calculated.
    RoundTotal,
}

impl RoundingMode {
    /// Resolves two independent switch positions into a single mode.
    ///
    /// Both switches on cannot happen through [`with_round_tip`] and
    /// [`with_round_total`], but raw flags (command-line options, a legacy
    /// UI) can still carry it. Tip rounding takes precedence.
    ///
    /// [`with_round_tip`]: RoundingMode::with_round_tip
    /// [`with_round_total`]: RoundingMode::with_round_total
    ///
    /// ## Example
    /// ```rust
    /// use tiptime_core::RoundingMode;
    ///
    /// assert_eq!(RoundingMode::from_toggles(false, false), RoundingMode::None);
    /// assert_eq!(RoundingMode::from_toggles(false, true), RoundingMode::RoundTotal);
    /// assert_eq!(RoundingMode::from_toggles(true, true), RoundingMode::RoundTip);
    /// ```
    pub const fn from_toggles(round_tip: bool, round_total: bool) -> Self {
        if round_tip {
            RoundingMode::RoundTip
        } else if round_total {
            RoundingMode::RoundTotal
        } else {
            RoundingMode::None
        }
    }

    /// Position of the "round tip" switch.
    #[inline]
    pub const fn round_tip(&self) -> bool {
        matches!(self, RoundingMode::RoundTip)
    }

    /// Position of the "round total" switch.
    #[inline]
    pub const fn round_total(&self) -> bool {
        matches!(self, RoundingMode::RoundTotal)
    }

    /// Mode after the "round tip" switch is set to `on`.
    ///
    /// Turning it on clears total rounding. Turning it off only matters if
    /// tip rounding was the active mode.
    pub const fn with_round_tip(self, on: bool) -> Self {
        match (on, self) {
            (true, _) => RoundingMode::RoundTip,
            (false, RoundingMode::RoundTip) => RoundingMode::None,
            (false, other) => other,
        }
    }

    /// Mode after the "round total" switch is set to `on`.
    pub const fn with_round_total(self, on: bool) -> Self {
        match (on, self) {
            (true, _) => RoundingMode::RoundTotal,
            (false, RoundingMode::RoundTotal) => RoundingMode::None,
            (false, other) => other,
        }
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RoundingMode::None => "none",
            RoundingMode::RoundTip => "round tip",
            RoundingMode::RoundTotal => "round total",
        };
        f.write_str(label)
    }
}

// =============================================================================
// Bill Input / Result
// =============================================================================

/// What the user typed and picked, ready for calculation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillInput {
    /// Cost of service. `None` when the field is empty or not a number.
    pub cost: Option<Money>,

    /// Selected service tier.
    pub tier: ServiceTier,
}

impl BillInput {
    /// Creates an input from a parsed cost and a tier.
    pub const fn new(cost: Option<Money>, tier: ServiceTier) -> Self {
        BillInput { cost, tier }
    }

    /// Runs the calculator on this input.
    pub fn compute(&self, mode: RoundingMode) -> BillResult {
        crate::calculator::compute(self.cost, self.tier, mode)
    }
}

/// Calculated tip and total bill.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct BillResult {
    /// Gratuity amount.
    pub tip: Money,

    /// Cost plus tip.
    pub total: Money,
}

impl BillResult {
    /// The `{0, 0}` result shown for an empty or zero cost.
    #[inline]
    pub const fn zero() -> Self {
        BillResult {
            tip: Money::zero(),
            total: Money::zero(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_rates() {
        let bps: Vec<u32> = ServiceTier::ALL.iter().map(|t| t.rate().bps()).collect();
        assert_eq!(bps, vec![1000, 1500, 1800, 2000]);
    }

    #[test]
    fn test_default_tier_is_average() {
        assert_eq!(ServiceTier::default(), ServiceTier::Average);
        assert_eq!(ServiceTier::default().rate(), TipRate::from_bps(1500));
    }

    #[test]
    fn test_tier_from_str() {
        assert_eq!(" good ".parse::<ServiceTier>().unwrap(), ServiceTier::Good);
        assert_eq!(
            "AVERAGE_SERVICE".parse::<ServiceTier>().unwrap(),
            ServiceTier::Average
        );
        assert_eq!("20".parse::<ServiceTier>().unwrap(), ServiceTier::Excellent);

        let err = "17".parse::<ServiceTier>().unwrap_err();
        assert!(matches!(err, CoreError::UnknownServiceTier(ref s) if s == "17"));
    }

    #[test]
    fn test_tier_display_roundtrips_through_from_str() {
        for tier in ServiceTier::ALL {
            assert_eq!(tier.to_string().parse::<ServiceTier>().unwrap(), tier);
        }
    }

    #[test]
    fn test_tip_rate_display() {
        assert_eq!(TipRate::from_bps(1800).to_string(), "18%");
        assert_eq!(TipRate::from_bps(825).to_string(), "8.25%");
        assert_eq!(TipRate::from_bps(1500).to_string(), "15%");
    }

    #[test]
    fn test_rounding_from_toggles() {
        assert_eq!(RoundingMode::from_toggles(false, false), RoundingMode::None);
        assert_eq!(RoundingMode::from_toggles(true, false), RoundingMode::RoundTip);
        assert_eq!(RoundingMode::from_toggles(false, true), RoundingMode::RoundTotal);
        // Both on: tip rounding wins
        assert_eq!(RoundingMode::from_toggles(true, true), RoundingMode::RoundTip);
    }

    #[test]
    fn test_enabling_one_rounding_clears_the_other() {
        let mode = RoundingMode::None.with_round_tip(true);
        assert_eq!(mode, RoundingMode::RoundTip);

        let mode = mode.with_round_total(true);
        assert_eq!(mode, RoundingMode::RoundTotal);
        assert!(mode.round_total());
        assert!(!mode.round_tip());

        let mode = mode.with_round_tip(true);
        assert_eq!(mode, RoundingMode::RoundTip);
        assert!(!mode.round_total());
    }

    #[test]
    fn test_disabling_inactive_rounding_is_a_no_op() {
        assert_eq!(
            RoundingMode::RoundTotal.with_round_tip(false),
            RoundingMode::RoundTotal
        );
        assert_eq!(
            RoundingMode::RoundTip.with_round_total(false),
            RoundingMode::RoundTip
        );
        assert_eq!(RoundingMode::RoundTip.with_round_tip(false), RoundingMode::None);
        assert_eq!(
            RoundingMode::RoundTotal.with_round_total(false),
            RoundingMode::None
        );
    }

    #[test]
    fn test_serde_wire_names() {
        assert_eq!(
            serde_json::to_string(&ServiceTier::Excellent).unwrap(),
            "\"excellent\""
        );
        assert_eq!(
            serde_json::to_string(&RoundingMode::RoundTotal).unwrap(),
            "\"round_total\""
        );

        let result = BillResult {
            tip: Money::from_cents(510),
            total: Money::from_cents(5700),
        };
        assert_eq!(
            serde_json::to_string(&result).unwrap(),
            r#"{"tip":510,"total":5700}"#
        );
    }

    #[test]
    fn test_bill_input_compute() {
        let input = BillInput::new(Some(Money::from_cents(10000)), ServiceTier::Average);
        let result = input.compute(RoundingMode::None);
        assert_eq!(result.tip, Money::from_cents(1500));
        assert_eq!(result.total, Money::from_cents(11500));

        assert_eq!(BillInput::default().compute(RoundingMode::RoundTip), BillResult::zero());
    }
}
