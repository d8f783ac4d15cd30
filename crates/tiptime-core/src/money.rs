//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With doubles:                                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  A ceiling is only as good as its input. One stray ulp above a whole   │
//! │  number turns a $6.00 tip into $7.00.                                   │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents × Basis Points                             │
//! │    4000 cents × 1500 bps = 6_000_000 (units of 1/10000 cent)            │
//! │    Exactly $6.00, so rounding up leaves it at $6.00                     │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tiptime_core::money::Money;
//!
//! // Create from cents (preferred)
//! let cost = Money::from_cents(5100); // $51.00
//!
//! // Arithmetic operations
//! let total = cost + Money::from_cents(510); // $56.10
//! assert_eq!(total.cents(), 5610);
//! assert!(!total.is_whole_unit());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};
use ts_rs::TS;

use crate::types::TipRate;
use crate::CENTS_PER_UNIT;

/// Basis points in 100%.
const BPS_SCALE: i128 = 10_000;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents for USD).
///
/// ## Design Decisions
/// - **i64 (signed)**: Matches the integer width the UI layer works in
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                                                                         │
/// │  "51.00" ──► parse_cost ──► cost ──┬──► calculate_tip ──► tip          │
/// │                                    │                       │            │
/// │                                    └──────── + ◄───────────┘            │
/// │                                              │                          │
/// │                                              ▼                          │
/// │                                            total ──► "$56.10" in UI     │
/// │                                                                         │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use tiptime_core::money::Money;
    ///
    /// let cost = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(cost.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units (dollars and cents).
    ///
    /// ## Example
    /// ```rust
    /// use tiptime_core::money::Money;
    ///
    /// let cost = Money::from_major_minor(51, 0); // $51.00
    /// assert_eq!(cost.cents(), 5100);
    /// ```
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * CENTS_PER_UNIT - minor)
        } else {
            Money(major * CENTS_PER_UNIT + minor)
        }
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-unit (dollars) portion.
    ///
    /// ## Example
    /// ```rust
    /// use tiptime_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1099).whole_units(), 10);
    /// assert_eq!(Money::from_cents(-550).whole_units(), -5);
    /// ```
    #[inline]
    pub const fn whole_units(&self) -> i64 {
        self.0 / CENTS_PER_UNIT
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % CENTS_PER_UNIT).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Checks if the value is a whole number of currency units.
    #[inline]
    pub const fn is_whole_unit(&self) -> bool {
        self.0 % CENTS_PER_UNIT == 0
    }

    /// Calculates the tip on this amount, reported to the cent.
    ///
    /// ## Rounding
    /// The exact tip can carry a sub-cent fraction ($10.01 × 15% = $1.5015).
    /// It is rounded half-up to the cent, the same value a currency formatter
    /// would show for the exact amount.
    ///
    /// ## Implementation
    /// Integer math: `(amount * rate + 5000) / 10000`, floored.
    /// The +5000 provides rounding (5000/10000 = 0.5)
    ///
    /// ## Example
    /// ```rust
    /// use tiptime_core::money::Money;
    /// use tiptime_core::types::TipRate;
    ///
    /// let cost = Money::from_cents(1001); // $10.01
    /// let tip = cost.calculate_tip(TipRate::from_bps(1500));
    /// // $10.01 × 15% = $1.5015 → $1.50
    /// assert_eq!(tip.cents(), 150);
    /// ```
    pub fn calculate_tip(&self, rate: TipRate) -> Money {
        let scaled = self.scaled_tip(rate);
        saturating_cents((scaled + BPS_SCALE / 2).div_euclid(BPS_SCALE))
    }

    /// Calculates the tip and rounds it up to the next whole currency unit.
    ///
    /// The ceiling is taken on the exact tip, so an already whole tip stays
    /// put and any fraction, however small, goes up.
    ///
    /// ## Example
    /// ```rust
    /// use tiptime_core::money::Money;
    /// use tiptime_core::types::TipRate;
    ///
    /// let rate = TipRate::from_bps(1000);
    /// assert_eq!(Money::from_cents(5100).tip_rounded_up(rate).cents(), 600);
    /// assert_eq!(Money::from_cents(10000).tip_rounded_up(rate).cents(), 1000);
    /// ```
    pub fn tip_rounded_up(&self, rate: TipRate) -> Money {
        let scaled = self.scaled_tip(rate);
        saturating_cents(ceil_to_unit(scaled))
    }

    /// Calculates amount plus tip and rounds the sum up to the next whole
    /// currency unit.
    ///
    /// ## Example
    /// ```rust
    /// use tiptime_core::money::Money;
    /// use tiptime_core::types::TipRate;
    ///
    /// // $51.00 + 10% = $56.10 → $57.00
    /// let total = Money::from_cents(5100).total_rounded_up(TipRate::from_bps(1000));
    /// assert_eq!(total.cents(), 5700);
    /// ```
    pub fn total_rounded_up(&self, rate: TipRate) -> Money {
        let scaled = i128::from(self.0) * BPS_SCALE + self.scaled_tip(rate);
        saturating_cents(ceil_to_unit(scaled))
    }

    /// Exact tip in units of 1/10000 cent. i128 keeps the product exact for
    /// any i64 amount.
    #[inline]
    fn scaled_tip(&self, rate: TipRate) -> i128 {
        i128::from(self.0) * i128::from(rate.bps())
    }
}

/// Narrows an i128 cent amount, saturating at the bounds of `i64`.
fn saturating_cents(cents: i128) -> Money {
    let cents = i64::try_from(cents).unwrap_or(if cents < 0 { i64::MIN } else { i64::MAX });
    Money::from_cents(cents)
}

/// Ceiling of a 1/10000-cent quantity to a whole currency unit, in cents.
fn ceil_to_unit(scaled: i128) -> i128 {
    let unit = i128::from(CENTS_PER_UNIT) * BPS_SCALE;
    -((-scaled).div_euclid(unit)) * i128::from(CENTS_PER_UNIT)
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a plain `$1234.50` form.
///
/// ## Note
/// This is for debugging. The UI layer's currency formatter handles symbol
/// and digit grouping for actual display.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.whole_units().abs(),
            self.cents_part()
        )
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
