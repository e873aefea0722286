//! CLI command dispatch and handlers
//!
//! Routes parsed CLI arguments to the appropriate command handler.

pub mod build;
pub mod completions;
pub mod validate;
pub mod version;

use crate::cli::args::{Cli, Commands};
use crate::error::FwGuardError;

/// Dispatch a parsed CLI invocation to the appropriate command handler.
///
/// # Errors
///
/// Returns an error if the dispatched command handler fails, including
/// `FwGuardError::ValidationFailed` when error findings were reported.
pub fn dispatch(cli: Cli) -> Result<(), FwGuardError> {
    match cli.command {
        Commands::Validate(args) => validate::run(&args),
        Commands::Prebuild(args) => build::prebuild(&args),
        Commands::Postbuild(args) => build::postbuild(&args),
        Commands::Completions(args) => completions::run(&args),
        Commands::Version(args) => version::run(&args),
    }
}
