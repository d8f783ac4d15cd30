//! # Form State
//!
//! The calculator screen: one cost field, one tier picker, two rounding
//! switches and the result lines.
//!
//! ## Form Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Form State Operations                                │
//! │                                                                         │
//! │  User Action              Command                 Form State Change     │
//! │  ───────────              ───────                 ─────────────────     │
//! │                                                                         │
//! │  Type cost ──────────────► set_cost() ──────────► cost_text = "51"      │
//! │                                                                         │
//! │  Pick tier ──────────────► select_tier() ───────► tier = Some(Poor)     │
//! │                                                                         │
//! │  Flip "round tip" ───────► set_round_tip() ─────► rounding = RoundTip   │
//! │                                                                         │
//! │  Flip "round total" ─────► set_round_total() ───► rounding = RoundTotal │
//! │                                                   (tip switch cleared)  │
//! │                                                                         │
//! │  Calculate ──────────────► calculate() ─────────► last_result = {..}    │
//! │                                                                         │
//! │  NOTE: All operations acquire the Mutex lock exclusively, so an event   │
//! │        runs to completion before the next one touches the form.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Mutex, PoisonError};

use serde::{Deserialize, Serialize};
use tiptime_core::error::CoreResult;
use tiptime_core::validation::{parse_cost, validate_cost_text};
use tiptime_core::{BillInput, BillResult, Money, RoundingMode, ServiceTier};

/// Everything the calculator screen remembers between events.
///
/// ## Invariants
/// - At most one rounding switch is on (guaranteed by `RoundingMode`)
/// - `cost_text` is stored raw; it is only parsed when calculating
/// - `tier == None` means nothing picked yet, which calculates as Average
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TipForm {
    /// Raw contents of the cost field.
    pub cost_text: String,

    /// Selected tier, if the user picked one.
    pub tier: Option<ServiceTier>,

    /// Rounding switches, folded into one mode.
    pub rounding: RoundingMode,

    /// Result of the most recent calculation.
    pub last_result: Option<BillResult>,
}

impl TipForm {
    /// Creates an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the cost field text.
    pub fn set_cost_text(&mut self, text: impl Into<String>) {
        self.cost_text = text.into();
    }

    /// Selects a service tier.
    pub fn select_tier(&mut self, tier: ServiceTier) {
        self.tier = Some(tier);
    }

    /// Flips the "round tip" switch. Turning it on clears "round total".
    pub fn set_round_tip(&mut self, on: bool) {
        self.rounding = self.rounding.with_round_tip(on);
    }

    /// Flips the "round total" switch. Turning it on clears "round tip".
    pub fn set_round_total(&mut self, on: bool) {
        self.rounding = self.rounding.with_round_total(on);
    }

    /// Tier the calculator will use.
    pub fn effective_tier(&self) -> ServiceTier {
        self.tier.unwrap_or_default()
    }

    /// Validates the cost field.
    ///
    /// Only used to report *why* a cost was ignored; [`TipForm::calculate`]
    /// treats any invalid text as no cost.
    pub fn cost(&self) -> CoreResult<Money> {
        Ok(validate_cost_text(&self.cost_text)?)
    }

    /// Builds the calculator input from the current field values.
    pub fn input(&self) -> BillInput {
        BillInput::new(parse_cost(&self.cost_text), self.effective_tier())
    }

    /// Runs the calculator and remembers the result.
    pub fn calculate(&mut self) -> BillResult {
        let result = self.input().compute(self.rounding);
        self.last_result = Some(result);
        result
    }

    /// Resets every field to its initial value.
    pub fn clear(&mut self) {
        *self = TipForm::new();
    }
}

/// Form state shared by all commands.
///
/// ## Poisoning
/// `TipForm` is plain data that is consistent after every method call, so a
/// panic in another holder cannot leave it half-updated. A poisoned lock is
/// therefore recovered rather than propagated.
#[derive(Debug, Default)]
pub struct FormState {
    form: Mutex<TipForm>,
}

impl FormState {
    /// Creates a new empty form state.
    pub fn new() -> Self {
        FormState {
            form: Mutex::new(TipForm::new()),
        }
    }

    /// Executes a function with read access to the form.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let tier = form_state.with_form(|form| form.effective_tier());
    /// ```
    pub fn with_form<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&TipForm) -> R,
    {
        let form = self.form.lock().unwrap_or_else(PoisonError::into_inner);
        f(&form)
    }

    /// Executes a function with write access to the form.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// form_state.with_form_mut(|form| form.set_round_tip(true));
    /// ```
    pub fn with_form_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut TipForm) -> R,
    {
        let mut form = self.form.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut form)
    }
}
