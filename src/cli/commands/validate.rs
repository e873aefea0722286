//! `validate` command handler

use std::path::Path;

use crate::cli::args::{OutputFormat, ValidateArgs};
use crate::config::HeaderLoader;
use crate::error::{ConfigError, Finding, FwGuardError};
use crate::project::ProjectLayout;
use crate::project::checks::{check_build_settings, check_secrets};
use crate::report::Report;
use crate::validation::{ValidationResult, Validator};

/// Validate the configuration header and print the findings.
///
/// # Errors
///
/// Returns a config error if the header is too large or not UTF-8, an I/O
/// error if a project file cannot be read, or `ValidationFailed` if any
/// error findings were reported. A missing header is one of those findings.
pub fn run(args: &ValidateArgs) -> Result<(), FwGuardError> {
    let layout = ProjectLayout::new(&args.root);
    let header = args
        .header
        .clone()
        .unwrap_or_else(|| layout.config_header());

    tracing::info!(header = %header.display(), "validating configuration");
    let mut result = match HeaderLoader::with_defaults().load(&header) {
        Ok(config) => Validator::new().validate(&config),
        Err(ConfigError::MissingFile { path }) => missing_header(&path),
        Err(e) => return Err(e.into()),
    };
    if args.skip_project_checks {
        tracing::debug!("project checks skipped");
    } else {
        result.merge(check_build_settings(&layout)?);
        result.merge(check_secrets(&layout)?);
    }

    print_report(&result, args.format)?;
    into_outcome(&result)
}

/// A missing header is reported like any other finding so the project
/// checks still run.
fn missing_header(path: &Path) -> ValidationResult {
    let name = path
        .file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
    tracing::warn!(header = %path.display(), "configuration header not found");
    ValidationResult {
        errors: vec![Finding::Error(format!("{name} file not found"))],
        warnings: Vec::new(),
    }
}

/// Prints a result in the requested format.
///
/// # Errors
///
/// Returns a JSON error if serialization fails.
pub(crate) fn print_report(
    result: &ValidationResult,
    format: OutputFormat,
) -> Result<(), FwGuardError> {
    let report = Report::from_result(result);
    match format {
        OutputFormat::Human => print!("{}", report.to_human()),
        OutputFormat::Json => println!("{}", report.to_json()?),
    }
    Ok(())
}

/// Maps a finished result to the command outcome.
pub(crate) fn into_outcome(result: &ValidationResult) -> Result<(), FwGuardError> {
    tracing::info!(
        errors = result.error_count(),
        warnings = result.warning_count(),
        "validation finished"
    );
    if result.has_errors() {
        return Err(FwGuardError::ValidationFailed {
            errors: result.error_count(),
            warnings: result.warning_count(),
        });
    }
    Ok(())
}
