//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command-line flags (`--currency-symbol`)
//! 2. Environment variables (`TIPTIME_*`)
//! 3. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use serde::{Deserialize, Serialize};
use tiptime_core::{Money, CENTS_PER_UNIT};

/// Environment variable for the currency symbol.
pub const ENV_CURRENCY_SYMBOL: &str = "TIPTIME_CURRENCY_SYMBOL";
/// Environment variable for the ISO 4217 currency code.
pub const ENV_CURRENCY_CODE: &str = "TIPTIME_CURRENCY_CODE";
/// Environment variable toggling thousands separators.
pub const ENV_DIGIT_GROUPING: &str = "TIPTIME_DIGIT_GROUPING";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Currency code (ISO 4217)
    pub currency_code: String,

    /// Group whole units in threes ("$1,234.50")
    pub digit_grouping: bool,
}

impl Default for ConfigState {
    /// Returns default configuration.
    ///
    /// ## Default Values
    /// - Currency: USD ($)
    /// - Digit grouping: on
    fn default() -> Self {
        ConfigState {
            currency_symbol: "$".to_string(),
            currency_code: "USD".to_string(),
            digit_grouping: true,
        }
    }
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `TIPTIME_CURRENCY_SYMBOL`: Override currency symbol
    /// - `TIPTIME_CURRENCY_CODE`: Override currency code (three letters)
    /// - `TIPTIME_DIGIT_GROUPING`: `true` / `false`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup (environment, test map).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(symbol) = lookup(ENV_CURRENCY_SYMBOL) {
            config.currency_symbol = symbol;
        }

        if let Some(code) = lookup(ENV_CURRENCY_CODE) {
            let code = code.trim().to_ascii_uppercase();
            if code.len() != 3 || !code.bytes().all(|b| b.is_ascii_alphabetic()) {
                return Err(ConfigError::InvalidValue(ENV_CURRENCY_CODE.to_string()));
            }
            config.currency_code = code;
        }

        if let Some(grouping) = lookup(ENV_DIGIT_GROUPING) {
            config.digit_grouping = grouping
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue(ENV_DIGIT_GROUPING.to_string()))?;
        }

        Ok(config)
    }

    /// Formats an amount as a currency string.
    ///
    /// ## Example
    /// ```rust
    /// use tiptime_cli::state::ConfigState;
    /// use tiptime_core::Money;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(Money::from_cents(123456)), "$1,234.56");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        let cents = amount.cents();
        let whole = (cents / CENTS_PER_UNIT).unsigned_abs();
        let frac = (cents % CENTS_PER_UNIT).unsigned_abs();

        let whole = if self.digit_grouping {
            group_thousands(whole)
        } else {
            whole.to_string()
        };

        format!(
            "{}{}{}.{:02}",
            if cents < 0 { "-" } else { "" },
            self.currency_symbol,
            whole,
            frac
        )
    }
}

/// Inserts a comma between every group of three digits.
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_format_currency_positive() {
        let config = ConfigState::default();
        assert_eq!(config.format_currency(Money::from_cents(1234)), "$12.34");
        assert_eq!(config.format_currency(Money::from_cents(100)), "$1.00");
        assert_eq!(config.format_currency(Money::from_cents(1)), "$0.01");
        assert_eq!(config.format_currency(Money::from_cents(0)), "$0.00");
    }

    #[test]
    fn test_format_currency_negative() {
        let config = ConfigState::default();
        assert_eq!(config.format_currency(Money::from_cents(-1234)), "-$12.34");
    }

    #[test]
    fn test_format_currency_large() {
        let config = ConfigState::default();
        assert_eq!(
            config.format_currency(Money::from_cents(123456789)),
            "$1,234,567.89"
        );
        assert_eq!(config.format_currency(Money::from_cents(100000)), "$1,000.00");
        assert_eq!(config.format_currency(Money::from_cents(99999)), "$999.99");
    }

    #[test]
    fn test_format_currency_without_grouping() {
        let config = ConfigState {
            digit_grouping: false,
            ..ConfigState::default()
        };
        assert_eq!(
            config.format_currency(Money::from_cents(123456789)),
            "$1234567.89"
        );
    }

    #[test]
    fn test_from_lookup_defaults() {
        let config = ConfigState::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, ConfigState::default());
    }

    #[test]
    fn test_from_lookup_overrides() {
        let config = ConfigState::from_lookup(lookup_from(&[
            (ENV_CURRENCY_SYMBOL, "€"),
            (ENV_CURRENCY_CODE, "eur"),
            (ENV_DIGIT_GROUPING, "false"),
        ]))
        .unwrap();

        assert_eq!(config.currency_symbol, "€");
        assert_eq!(config.currency_code, "EUR");
        assert!(!config.digit_grouping);
        assert_eq!(config.format_currency(Money::from_cents(510)), "€5.10");
    }

    #[test]
    fn test_from_lookup_invalid_values() {
        let err = ConfigState::from_lookup(lookup_from(&[(ENV_DIGIT_GROUPING, "maybe")]))
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for TIPTIME_DIGIT_GROUPING");

        let err =
            ConfigState::from_lookup(lookup_from(&[(ENV_CURRENCY_CODE, "DOLLARS")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(ref v) if v == ENV_CURRENCY_CODE));
    }
}
