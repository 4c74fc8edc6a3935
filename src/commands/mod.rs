//! Command implementations for papermill.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. Every command starts by resolving a [`BatchContext`]
//! from its `--config` flag; path overrides from the command line are
//! applied on top of that before any work happens.
//!
//! [`BatchContext`]: crate::context::BatchContext

mod check;
mod clean;
mod combine;
mod generate;
mod params;
mod preview;

use crate::cli::Command;
use crate::error::Result;

/// Dispatch a command to its implementation.
///
/// This is the main entry point for command execution. Each command
/// is routed to its handler function.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Generate(args) => generate::cmd_generate(args),
        Command::Combine(args) => combine::cmd_combine(args),
        Command::Preview(args) => preview::cmd_preview(args),
        Command::Params(args) => params::cmd_params(args),
        Command::Check(args) => check::cmd_check(args),
        Command::Clean(args) => clean::cmd_clean(args),
    }
}
