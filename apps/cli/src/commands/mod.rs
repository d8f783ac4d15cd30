//! # Commands Module
//!
//! All operations the session can perform on the calculator screen.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs        ◄─── You are here (exports)
//! ├── form.rs       ◄─── Cost field, tier picker, rounding switches
//! ├── calculate.rs  ◄─── Run the calculator, redisplay the result
//! └── config.rs     ◄─── Configuration retrieval
//! ```
//!
//! ## How Commands Work
//! Each command declares only the state it needs and returns a serializable
//! response, so the session can print it as text or as JSON:
//! ```rust,ignore
//! // Only needs the form
//! fn set_round_tip(form: &FormState, on: bool) -> FormResponse
//!
//! // Needs both
//! fn calculate(form: &FormState, config: &ConfigState) -> CalculationResponse
//! ```

pub mod calculate;
pub mod config;
pub mod form;
