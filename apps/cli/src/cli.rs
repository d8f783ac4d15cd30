//! Command-line interface for Tip Time.
//!
//! Without calculation flags the binary starts an interactive session.
//! With any of `--cost`, `--tier`, `--round-tip` or `--round-total` it
//! calculates once and exits.
//!
//! ```sh
//! # Interactive session
//! tiptime
//!
//! # One-shot calculation
//! tiptime --cost 51 --tier poor --round-tip
//!
//! # JSON output, euro symbol
//! tiptime --cost 51 --round-total --json --currency-symbol €
//! ```

use clap::Parser;

/// Tip Time: tip and total bill calculator.
#[derive(Parser, Debug, Clone, Default)]
#[command(
    name = "tiptime",
    version,
    about = "Calculate a tip and total bill from a cost of service",
    long_about = "Calculate a tip and total bill from a cost of service and how good \
                  the service was, optionally rounding the tip or the total up to a \
                  whole currency unit.\n\n\
                  Run without calculation flags for an interactive session."
)]
pub struct Cli {
    /// Cost of service, e.g. 51 or 42.50.
    #[arg(long, value_name = "AMOUNT")]
    pub cost: Option<String>,

    /// Service tier: poor, average, good or excellent (default: average).
    #[arg(long, value_name = "TIER")]
    pub tier: Option<String>,

    /// Round the tip up to the next whole currency unit.
    #[arg(long)]
    pub round_tip: bool,

    /// Round the total up to the next whole currency unit.
    #[arg(long)]
    pub round_total: bool,

    /// Print responses as JSON, one document per line.
    #[arg(long)]
    pub json: bool,

    /// Override the currency symbol.
    #[arg(long, value_name = "SYMBOL")]
    pub currency_symbol: Option<String>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    pub log_level: Option<String>,

    /// Print the resolved configuration and exit.
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// Whether any calculation flag was given.
    pub fn is_one_shot(&self) -> bool {
        self.cost.is_some() || self.tier.is_some() || self.round_tip || self.round_total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_one_shot_flags() {
        let cli = Cli::parse_from(["tiptime", "--cost", "51", "--tier", "poor", "--round-tip"]);
        assert_eq!(cli.cost.as_deref(), Some("51"));
        assert_eq!(cli.tier.as_deref(), Some("poor"));
        assert!(cli.round_tip);
        assert!(!cli.round_total);
        assert!(cli.is_one_shot());
    }

    #[test]
    fn test_no_flags_is_interactive() {
        let cli = Cli::parse_from(["tiptime", "--json", "-l", "debug"]);
        assert!(!cli.is_one_shot());
        assert!(cli.json);
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
