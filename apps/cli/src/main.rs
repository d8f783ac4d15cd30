//! # Tip Time Entry Point
//!
//! Parses flags and hands over to [`tiptime_cli::run`].
//!
//! ## Startup Sequence
//! 1. Parse command-line flags
//! 2. Initialize tracing (logging)
//! 3. Load configuration
//! 4. Calculate once, or start an interactive session

use clap::Parser;

use tiptime_cli::cli::Cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tiptime_cli::run(Cli::parse())
}
