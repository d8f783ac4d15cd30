//! # Interactive Session
//!
//! Reads one command per line and runs it against the form.
//!
//! ## Event Loop
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │   read line ──► parse_command ──► dispatch ──► render ──► write         │
//! │       ▲                                                     │           │
//! │       └─────────────────────────────────────────────────────┘           │
//! │                                                                         │
//! │   One line is fully handled before the next is read. A bad line         │
//! │   prints an error and the loop continues. `quit` or EOF ends it.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{self, BufRead, Write};

use serde::Serialize;
use tracing::{debug, info};

use crate::commands::calculate::{self, CalculationResponse};
use crate::commands::config::get_config;
use crate::commands::form::{self, FormResponse};
use crate::error::ApiError;
use crate::state::{ConfigState, FormState};

const HELP: &str = "\
Commands:
  cost <amount>          set the cost of service (e.g. cost 51.25)
  tier <name>            poor (10%), average (15%), good (18%), excellent (20%)
  round-tip [on|off]     round the tip up to a whole unit (clears round-total)
  round-total [on|off]   round the total up to a whole unit (clears round-tip)
  calculate | calc       show tip and total
  show                   show the form and the last result
  clear                  reset the form
  config                 show configuration
  help                   show this help
  quit | exit            leave";

/// How responses are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON document per response
    Json,
}

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Cost(String),
    Tier(String),
    /// `None` flips the switch
    RoundTip(Option<bool>),
    /// `None` flips the switch
    RoundTotal(Option<bool>),
    Calculate,
    Show,
    Clear,
    Config,
    Help,
    Quit,
}

/// Parses one input line. Blank lines yield `Ok(None)`.
///
/// ## Example
/// ```rust
/// use tiptime_cli::session::{parse_command, Command};
///
/// assert_eq!(parse_command("cost 51").unwrap(), Some(Command::Cost("51".into())));
/// assert_eq!(parse_command("round-tip off").unwrap(), Some(Command::RoundTip(Some(false))));
/// assert!(parse_command("tipp").is_err());
/// ```
pub fn parse_command(line: &str) -> Result<Option<Command>, ApiError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "cost" => Command::Cost(rest.to_string()),
        "tier" | "service" => {
            if rest.is_empty() {
                return Err(ApiError::validation("tier needs a name, e.g. 'tier good'"));
            }
            Command::Tier(rest.to_string())
        }
        "round-tip" | "round_tip" => Command::RoundTip(parse_switch(rest)?),
        "round-total" | "round_total" => Command::RoundTotal(parse_switch(rest)?),
        "calculate" | "calc" => Command::Calculate,
        "show" => Command::Show,
        "clear" => Command::Clear,
        "config" => Command::Config,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(ApiError::unknown_command(other)),
    };

    Ok(Some(command))
}

fn parse_switch(arg: &str) -> Result<Option<bool>, ApiError> {
    match arg.to_ascii_lowercase().as_str() {
        "" => Ok(None),
        "on" | "true" | "yes" | "1" => Ok(Some(true)),
        "off" | "false" | "no" | "0" => Ok(Some(false)),
        other => Err(ApiError::validation(format!(
            "expected 'on' or 'off', got '{}'",
            other
        ))),
    }
}

/// Outcome of running one command.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Response {
    Form(FormResponse),
    Calculation(CalculationResponse),
    Show {
        form: FormResponse,
        #[serde(rename = "lastResult")]
        last_result: Option<CalculationResponse>,
    },
    Config(ConfigState),
    Help(&'static str),
}

/// A calculator session: the form, the configuration and an output format.
#[derive(Debug)]
pub struct Session {
    form: FormState,
    config: ConfigState,
    format: OutputFormat,
}

impl Session {
    /// Creates a session with an empty form.
    pub fn new(config: ConfigState, format: OutputFormat) -> Self {
        Session {
            form: FormState::new(),
            config,
            format,
        }
    }

    /// The form state, for callers that pre-fill it.
    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// Runs one command. `Quit` is handled by the loop and yields `None`.
    pub fn dispatch(&self, command: Command) -> Result<Option<Response>, ApiError> {
        let response = match command {
            Command::Cost(text) => Response::Form(form::set_cost(&self.form, &text)),
            Command::Tier(name) => Response::Form(form::select_tier(&self.form, &name)?),
            Command::RoundTip(on) => {
                let on = on.unwrap_or_else(|| !self.form.with_form(|f| f.rounding.round_tip()));
                Response::Form(form::set_round_tip(&self.form, on))
            }
            Command::RoundTotal(on) => {
                let on =
                    on.unwrap_or_else(|| !self.form.with_form(|f| f.rounding.round_total()));
                Response::Form(form::set_round_total(&self.form, on))
            }
            Command::Calculate => {
                Response::Calculation(calculate::calculate(&self.form, &self.config))
            }
            Command::Show => Response::Show {
                form: form::get_form(&self.form),
                last_result: calculate::last_result(&self.form, &self.config),
            },
            Command::Clear => Response::Form(form::clear_form(&self.form)),
            Command::Config => Response::Config(get_config(&self.config)),
            Command::Help => Response::Help(HELP),
            Command::Quit => return Ok(None),
        };
        Ok(Some(response))
    }

    /// Reads commands from `input` until `quit` or EOF, writing responses to
    /// `out`.
    ///
    /// With `prompt` set, a `> ` prompt is written before each read.
    pub fn run<R: BufRead, W: Write>(&self, input: R, mut out: W, prompt: bool) -> io::Result<()> {
        info!(format = ?self.format, "session started");

        let mut lines = input.lines();
        loop {
            if prompt {
                write!(out, "> ")?;
                out.flush()?;
            }

            let Some(line) = lines.next().transpose()? else {
                break;
            };

            let command = match parse_command(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(err) => {
                    self.write_error(&mut out, &err)?;
                    continue;
                }
            };

            debug!(?command, "command received");
            match self.dispatch(command) {
                Ok(Some(response)) => self.write_response(&mut out, &response)?,
                Ok(None) => break,
                Err(err) => self.write_error(&mut out, &err)?,
            }
        }

        info!("session ended");
        Ok(())
    }

    /// Writes a response in the session's format.
    pub fn write_response<W: Write>(&self, out: &mut W, response: &Response) -> io::Result<()> {
        match self.format {
            OutputFormat::Json => write_json(out, response),
            OutputFormat::Text => write_text(out, response),
        }
    }

    /// Writes an error in the session's format.
    pub fn write_error<W: Write>(&self, out: &mut W, err: &ApiError) -> io::Result<()> {
        match self.format {
            OutputFormat::Json => write_json(out, err),
            OutputFormat::Text => writeln!(out, "error: {}", err.message),
        }
    }
}

fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer(&mut *out, value)?;
    writeln!(out)
}

fn write_text<W: Write>(out: &mut W, response: &Response) -> io::Result<()> {
    match response {
        Response::Form(form) => write_form(out, form),
        Response::Calculation(calc) => write_calculation(out, calc),
        Response::Show { form, last_result } => {
            write_form(out, form)?;
            match last_result {
                Some(calc) => write_calculation(out, calc),
                None => writeln!(out, "(not calculated yet)"),
            }
        }
        Response::Config(config) => {
            writeln!(out, "Currency: {} ({})", config.currency_code, config.currency_symbol)?;
            writeln!(
                out,
                "Digit grouping: {}",
                if config.digit_grouping { "on" } else { "off" }
            )
        }
        Response::Help(text) => writeln!(out, "{}", text),
    }
}

fn write_form<W: Write>(out: &mut W, form: &FormResponse) -> io::Result<()> {
    let switch = |on: bool| if on { "on" } else { "off" };
    writeln!(out, "Cost of Service: {}", form.cost_text)?;
    writeln!(
        out,
        "Service: {} ({}){}",
        form.tier,
        form.tip_rate,
        if form.tier_selected { "" } else { " [default]" }
    )?;
    writeln!(out, "Round up tip? {}", switch(form.round_tip))?;
    writeln!(out, "Round up total? {}", switch(form.round_total))
}

fn write_calculation<W: Write>(out: &mut W, calc: &CalculationResponse) -> io::Result<()> {
    writeln!(out, "{}", calc.tip_line())?;
    writeln!(out, "{}", calc.total_line())
}
