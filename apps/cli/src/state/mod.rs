//! # State Module
//!
//! Manages application state for the terminal app.
//!
//! The calculator in `tiptime-core` holds no state at all. Everything that
//! survives between two events lives here, split by concern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │          ┌──────────────────────────┬──────────────────────┐            │
//! │          ▼                          ▼                                   │
//! │  ┌──────────────────────┐  ┌──────────────────────┐                     │
//! │  │      FormState       │  │     ConfigState      │                     │
//! │  │                      │  │                      │                     │
//! │  │  Mutex<TipForm>      │  │  currency_symbol     │                     │
//! │  │  • cost_text         │  │  currency_code       │                     │
//! │  │  • tier              │  │  digit_grouping      │                     │
//! │  │  • rounding          │  │                      │                     │
//! │  │  • last_result       │  │                      │                     │
//! │  └──────────────────────┘  └──────────────────────┘                     │
//! │                                                                         │
//! │  • FormState: one event at a time, guarded by a Mutex                   │
//! │  • ConfigState: read-only after startup                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod form;

pub use config::{ConfigError, ConfigState};
pub use form::{FormState, TipForm};
