//! # Tip Time Terminal Library
//!
//! The UI layer of Tip Time. It owns every piece of mutable state (the cost
//! text, the selected tier and the rounding switches) and hands plain values
//! to `tiptime-core` for the arithmetic.
//!
//! ## Module Organization
//! ```text
//! tiptime_cli/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── cli.rs          ◄─── clap flags
//! ├── session.rs      ◄─── Line-oriented event loop
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── form.rs     ◄─── Calculator screen state
//! │   └── config.rs   ◄─── Configuration & currency formatting
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── form.rs     ◄─── Cost / tier / rounding switch commands
//! │   ├── calculate.rs◄─── Calculation commands
//! │   └── config.rs   ◄─── Configuration commands
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod session;
pub mod state;

use std::error::Error;
use std::io::{self, IsTerminal, Write};

use tiptime_core::RoundingMode;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::commands::form;
use crate::session::{Command, OutputFormat, Session};
use crate::state::ConfigState;

/// Log filter used when neither `RUST_LOG` nor `--log-level` is set.
const DEFAULT_LOG_FILTER: &str = "warn";

/// Runs the application.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │     • Default: WARN, overridden by --log-level or RUST_LOG              │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • TIPTIME_* environment variables, then CLI overrides               │
/// │                                                                         │
/// │  3. Create Session ───────────────────────────────────────────────────► │
/// │     • Empty form, text or JSON output                                   │
/// │                                                                         │
/// │  4. Run ──────────────────────────────────────────────────────────────► │
/// │     • --show-config: print configuration                                │
/// │     • calculation flags: calculate once                                 │
/// │     • otherwise: interactive session on stdin                           │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    init_tracing(cli.log_level.as_deref());

    info!("Starting Tip Time");

    let mut config = ConfigState::from_env()?;
    if let Some(symbol) = &cli.currency_symbol {
        info!("CLI override: currency_symbol = {}", symbol);
        config.currency_symbol = symbol.clone();
    }
    info!(currency = %config.currency_code, "Configuration loaded");

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    let session = Session::new(config, format);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.show_config {
        return show_config(&session, &mut out);
    }

    if cli.is_one_shot() {
        return run_once(&session, &cli, &mut out);
    }

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    if interactive {
        writeln!(out, "Tip Time. Type 'help' for commands.")?;
    }
    session.run(stdin.lock(), out, interactive)?;
    Ok(())
}

/// Writes the resolved configuration in the session's output format.
pub fn show_config<W: Write>(session: &Session, out: &mut W) -> Result<(), Box<dyn Error>> {
    if let Some(response) = session.dispatch(Command::Config)? {
        session.write_response(out, &response)?;
    }
    Ok(())
}

/// Fills the form from command-line flags, calculates once and writes the
/// result.
///
/// An unknown tier is written as an error and returned, so the process
/// exits with a failure status.
pub fn run_once<W: Write>(session: &Session, cli: &Cli, out: &mut W) -> Result<(), Box<dyn Error>> {
    let state = session.form();

    if let Some(cost) = &cli.cost {
        form::set_cost(state, cost);
    }

    if let Some(tier) = &cli.tier {
        if let Err(err) = form::select_tier(state, tier) {
            session.write_error(out, &err)?;
            return Err(err.into());
        }
    }

    if cli.round_tip && cli.round_total {
        warn!("--round-tip and --round-total are exclusive, rounding the tip only");
    }
    match RoundingMode::from_toggles(cli.round_tip, cli.round_total) {
        RoundingMode::RoundTip => {
            form::set_round_tip(state, true);
        }
        RoundingMode::RoundTotal => {
            form::set_round_total(state, true);
        }
        RoundingMode::None => {}
    }

    if let Some(response) = session.dispatch(Command::Calculate)? {
        session.write_response(out, &response)?;
    }
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `--log-level debug` - Debug messages from this crate
/// - `RUST_LOG=tiptime_cli=trace` - Any filter directive
/// - Default: WARN level
///
/// Logs go to stderr so that stdout carries only results.
fn init_tracing(level: Option<&str>) {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(level))
        .with_writer(io::stderr)
        .init();
}

/// Resolves the log filter: `--log-level` first, then `RUST_LOG`, then the
/// default. An unparsable directive falls back to the default.
fn log_filter(level: Option<&str>) -> EnvFilter {
    match level {
        Some(level) => {
            EnvFilter::try_new(format!("{},tiptime_cli={}", DEFAULT_LOG_FILTER, level)).ok()
        }
        None => EnvFilter::try_from_default_env().ok(),
    }
    .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}
