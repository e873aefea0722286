//! `completions` command handler

use std::io::Write;

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::{Cli, CompletionsArgs};
use crate::error::FwGuardError;

/// Renders the completion script for `shell`.
#[must_use]
pub fn render(shell: Shell) -> Vec<u8> {
    let mut cmd = Cli::command();
    let bin = cmd.get_name().to_string();
    let mut script = Vec::new();
    clap_complete::generate(shell, &mut cmd, bin, &mut script);
    script
}

/// Writes the completion script to stdout.
///
/// # Errors
///
/// Returns an I/O error if stdout is closed.
pub fn run(args: &CompletionsArgs) -> Result<(), FwGuardError> {
    std::io::stdout().lock().write_all(&render(args.shell))?;
    Ok(())
}
