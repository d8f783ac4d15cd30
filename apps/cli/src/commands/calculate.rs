//! # Calculate Commands
//!
//! Runs the tip calculator on the current form and formats the result.
//!
//! ## User Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Cost of Service: [ 51        ]                                         │
//! │  How was the service?  ( ) Excellent ( ) Good ( ) Average (•) Poor     │
//! │  Round up tip?     [ON ]                                                │
//! │  Round up total?   [off]                                                │
//! │                                                                         │
//! │  calculate ─────► compute(Some($51.00), Poor, RoundTip)                 │
//! │                                                                         │
//! │  Tip Amount: $6.00                                                      │
//! │  Total Amount: $57.00                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tiptime_core::{BillResult, Money, RoundingMode, ServiceTier};
use tracing::debug;

use crate::state::{ConfigState, FormState, TipForm};

/// Calculated bill with display strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResponse {
    pub tier: ServiceTier,
    pub rounding: RoundingMode,
    /// Tip in cents
    pub tip: Money,
    /// Total in cents
    pub total: Money,
    pub formatted_tip: String,
    pub formatted_total: String,
}

impl CalculationResponse {
    /// Builds the response for a result calculated from `form`.
    pub fn new(form: &TipForm, result: BillResult, config: &ConfigState) -> Self {
        CalculationResponse {
            tier: form.effective_tier(),
            rounding: form.rounding,
            tip: result.tip,
            total: result.total,
            formatted_tip: config.format_currency(result.tip),
            formatted_total: config.format_currency(result.total),
        }
    }

    /// The "Tip Amount: $6.00" result line.
    pub fn tip_line(&self) -> String {
        format!("Tip Amount: {}", self.formatted_tip)
    }

    /// The "Total Amount: $57.00" result line.
    pub fn total_line(&self) -> String {
        format!("Total Amount: {}", self.formatted_total)
    }
}

/// Runs the calculator on the current form.
///
/// ## Behavior
/// - Empty or non-numeric cost: $0.00 tip and total, the reason is logged
/// - No tier picked: Average (15%)
/// - The result is remembered on the form for `show`
pub fn calculate(form: &FormState, config: &ConfigState) -> CalculationResponse {
    form.with_form_mut(|f| {
        if let Err(reason) = f.cost() {
            debug!(cost_text = %f.cost_text, %reason, "cost ignored");
        }

        let result = f.calculate();
        debug!(
            tier = %f.effective_tier(),
            rounding = %f.rounding,
            tip = result.tip.cents(),
            total = result.total.cents(),
            "calculate command"
        );

        CalculationResponse::new(f, result, config)
    })
}

/// Gets the most recent calculation, if any.
///
/// Tier and rounding reflect the form as it is now, which may differ from
/// the inputs of that calculation if the user changed them since.
pub fn last_result(form: &FormState, config: &ConfigState) -> Option<CalculationResponse> {
    debug!("last_result command");
    form.with_form(|f| {
        f.last_result
            .map(|result| CalculationResponse::new(f, result, config))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::form::{select_tier, set_cost, set_round_tip, set_round_total};

    #[test]
    fn test_calculate_default_tier() {
        let form = FormState::new();
        let config = ConfigState::default();
        set_cost(&form, "100");

        let response = calculate(&form, &config);

        assert_eq!(response.tier, ServiceTier::Average);
        assert_eq!(response.tip_line(), "Tip Amount: $15.00");
        assert_eq!(response.total_line(), "Total Amount: $115.00");
    }

    #[test]
    fn test_calculate_round_tip_then_round_total() {
        let form = FormState::new();
        let config = ConfigState::default();
        set_cost(&form, "51");
        select_tier(&form, "poor").unwrap();

        set_round_tip(&form, true);
        let response = calculate(&form, &config);
        assert_eq!(response.formatted_tip, "$6.00");
        assert_eq!(response.formatted_total, "$57.00");

        set_round_total(&form, true);
        let response = calculate(&form, &config);
        assert_eq!(response.rounding, RoundingMode::RoundTotal);
        assert_eq!(response.formatted_tip, "$5.10");
        assert_eq!(response.formatted_total, "$57.00");
    }

    #[test]
    fn test_calculate_invalid_cost_is_zero() {
        let form = FormState::new();
        let config = ConfigState::default();
        set_cost(&form, "twelve");
        set_round_tip(&form, true);

        let response = calculate(&form, &config);
        assert_eq!(response.tip, Money::zero());
        assert_eq!(response.formatted_total, "$0.00");
    }

    #[test]
    fn test_last_result() {
        let form = FormState::new();
        let config = ConfigState::default();
        assert_eq!(last_result(&form, &config), None);

        set_cost(&form, "20");
        let calculated = calculate(&form, &config);
        assert_eq!(last_result(&form, &config), Some(calculated));
    }

    #[test]
    fn test_response_json_shape() {
        let form = FormState::new();
        let config = ConfigState::default();
        set_cost(&form, "51");
        select_tier(&form, "poor").unwrap();
        set_round_total(&form, true);

        let json = serde_json::to_value(calculate(&form, &config)).unwrap();
        assert_eq!(json["tier"], "poor");
        assert_eq!(json["rounding"], "round_total");
        assert_eq!(json["tip"], 510);
        assert_eq!(json["total"], 5700);
        assert_eq!(json["formattedTip"], "$5.10");
    }
}
