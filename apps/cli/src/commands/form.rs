//! # Form Commands
//!
//! Commands that edit the calculator screen without calculating.
//!
//! ## Switch Interplay
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  round tip    [ON ]  ──► set_round_total(true) ──►  round tip    [off]  │
//! │  round total  [off]                                  round total  [ON ] │
//! │                                                                         │
//! │  The switch that was not touched is switched off, never both on.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tiptime_core::{RoundingMode, ServiceTier};
use tracing::debug;

use crate::error::ApiError;
use crate::state::{FormState, TipForm};

/// Snapshot of the form fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormResponse {
    pub cost_text: String,
    /// Tier the calculator will use (Average if none picked)
    pub tier: ServiceTier,
    pub tier_selected: bool,
    /// Tip percentage of `tier`, e.g. "18%"
    pub tip_rate: String,
    pub rounding: RoundingMode,
    pub round_tip: bool,
    pub round_total: bool,
}

impl From<&TipForm> for FormResponse {
    fn from(form: &TipForm) -> Self {
        let tier = form.effective_tier();
        FormResponse {
            cost_text: form.cost_text.clone(),
            tier,
            tier_selected: form.tier.is_some(),
            tip_rate: tier.rate().to_string(),
            rounding: form.rounding,
            round_tip: form.rounding.round_tip(),
            round_total: form.rounding.round_total(),
        }
    }
}

/// Gets the current form fields.
pub fn get_form(form: &FormState) -> FormResponse {
    debug!("get_form command");
    form.with_form(|f| FormResponse::from(f))
}

/// Replaces the cost field text.
///
/// The text is stored as typed. Parsing happens on calculate, where
/// non-numeric text counts as no cost.
pub fn set_cost(form: &FormState, text: &str) -> FormResponse {
    debug!(cost_text = %text, "set_cost command");
    form.with_form_mut(|f| {
        f.set_cost_text(text);
        FormResponse::from(&*f)
    })
}

/// Selects a service tier by name or percentage.
///
/// ## Arguments
/// * `name` - `poor`, `average`, `good`, `excellent`, their `*_service`
///   forms, or `10` / `15` / `18` / `20`
pub fn select_tier(form: &FormState, name: &str) -> Result<FormResponse, ApiError> {
    debug!(tier = %name, "select_tier command");
    let tier: ServiceTier = name.parse()?;

    Ok(form.with_form_mut(|f| {
        f.select_tier(tier);
        FormResponse::from(&*f)
    }))
}

/// Sets the "round tip" switch.
pub fn set_round_tip(form: &FormState, on: bool) -> FormResponse {
    debug!(on, "set_round_tip command");
    form.with_form_mut(|f| {
        f.set_round_tip(on);
        FormResponse::from(&*f)
    })
}

/// Sets the "round total" switch.
pub fn set_round_total(form: &FormState, on: bool) -> FormResponse {
    debug!(on, "set_round_total command");
    form.with_form_mut(|f| {
        f.set_round_total(on);
        FormResponse::from(&*f)
    })
}

/// Resets the whole form.
pub fn clear_form(form: &FormState) -> FormResponse {
    debug!("clear_form command");
    form.with_form_mut(|f| {
        f.clear();
        FormResponse::from(&*f)
    })
}
