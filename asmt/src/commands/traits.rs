//! Command trait for the asmt CLI.
//!
//! This module defines the standard command trait that all commands
//! implement to ensure consistency across the application.

use std::io::Write;

use crate::config::Config;
use crate::error::Result;

/// Standard command trait that all asmt commands implement.
///
/// Commands write their output to the given writer rather than to stdout
/// directly, so they can be exercised in tests.
///
/// # Type Parameters
/// * `Args` - The arguments type for this command
/// * `Output` - The summary returned by this command
pub trait Command {
    /// The arguments type for this command.
    type Args;

    /// The summary returned by this command.
    type Output;

    /// Create a new command instance from its arguments and the loaded
    /// configuration.
    fn new(args: Self::Args, config: &Config) -> Self;

    /// Execute the command, writing its output to `out`.
    fn execute(&self, out: &mut dyn Write) -> Result<Self::Output>;

    /// Get the command name.
    fn name() -> &'static str;
}
