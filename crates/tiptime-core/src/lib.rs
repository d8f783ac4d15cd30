//! # tiptime-core: Pure Tip Calculation for Tip Time
//!
//! This crate is the **heart** of Tip Time. It turns a cost of service, a
//! service-quality tier and a rounding choice into a tip and a total bill,
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Tip Time Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    UI Layer (tiptime-cli)                       │   │
//! │  │    Cost field ──► Tier picker ──► Round switches ──► Display    │   │
//! │  │    owns: cost text, selected tier, RoundingMode                 │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ plain values                           │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ tiptime-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌────────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │ calculator │  │ validation│  │   │
//! │  │   │ServiceTier│  │   Money   │  │  compute   │  │ parse_cost│  │   │
//! │  │   │RoundingMod│  │  ceilings │  │            │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └────────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STATE • NO LOGGING • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (ServiceTier, TipRate, RoundingMode, BillResult)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`calculator`] - The tip/total calculation
//! - [`error`] - Domain error types
//! - [`validation`] - Cost text parsing
//!
//! ## Example Usage
//!
//! ```rust
//! use tiptime_core::calculator::compute;
//! use tiptime_core::{Money, RoundingMode, ServiceTier};
//!
//! let cost = Money::from_cents(5100); // $51.00
//!
//! let bill = compute(Some(cost), ServiceTier::Poor, RoundingMode::RoundTip);
//! assert_eq!(bill.tip.cents(), 600);    // 10% = $5.10, rounded up to $6.00
//! assert_eq!(bill.total.cents(), 5700); // $57.00
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod calculator;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

#[cfg(test)]
mod calculator_props;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use calculator::compute;
pub use error::{CoreError, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Number of cents in one whole currency unit.
///
/// Rounding "to the next whole currency unit" means rounding up to a
/// multiple of this value.
pub const CENTS_PER_UNIT: i64 = 100;

/// Largest cost of service accepted from text input ($999,999,999.99).
///
/// ## Business Reason
/// Keeps every intermediate product of the tip arithmetic comfortably inside
/// `i64` once it is scaled back down, and catches runaway typing.
pub const MAX_COST_CENTS: i64 = 99_999_999_999;
