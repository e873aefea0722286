//! `prebuild` and `postbuild` command handlers

use crate::cli::args::{OutputFormat, PostbuildArgs, PrebuildArgs};
use crate::cli::commands::validate::{into_outcome, print_report};
use crate::error::FwGuardError;
use crate::project::ProjectLayout;
use crate::project::checks::{check_build_environment, check_secrets_for_build};
use crate::project::generate::{write_build_info, write_build_report};

/// Check the build environment and generate `build_info.h`.
///
/// The header is generated even when checks fail so a later build sees
/// fresh timestamps.
///
/// # Errors
///
/// Returns `ValidationFailed` if the environment or secrets checks report
/// errors, or a project/I/O error if a file cannot be read or written.
pub fn prebuild(args: &PrebuildArgs) -> Result<(), FwGuardError> {
    let layout = ProjectLayout::new(&args.root);
    tracing::info!(root = %layout.root().display(), "pre-build checks");

    let mut result = check_build_environment(&layout);
    result.merge(check_secrets_for_build(&layout)?);
    print_report(&result, OutputFormat::Human)?;

    if !args.no_build_info {
        let path = write_build_info(&layout)?;
        println!("Generated {}", path.display());
    }

    into_outcome(&result)
}

/// Write the post-build report.
///
/// # Errors
///
/// Returns a project error if the report cannot be written.
pub fn postbuild(args: &PostbuildArgs) -> Result<(), FwGuardError> {
    let layout = ProjectLayout::new(&args.root);
    let path = write_build_report(&layout)?;
    println!("Build report generated: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExitCode;

    #[test]
    fn test_prebuild_empty_dir_fails_but_writes_header() {
        let dir = tempfile::tempdir().unwrap();
        let args = PrebuildArgs {
            root: dir.path().to_path_buf(),
            no_build_info: false,
        };

        let err = prebuild(&args).unwrap_err();
        assert_eq!(err.exit_code(), ExitCode::VALIDATION_FAILED);
        assert!(dir.path().join("include/build_info.h").exists());
    }

    #[test]
    fn test_prebuild_no_build_info() {
        let dir = tempfile::tempdir().unwrap();
        let args = PrebuildArgs {
            root: dir.path().to_path_buf(),
            no_build_info: true,
        };

        assert!(prebuild(&args).is_err());
        assert!(!dir.path().join("include/build_info.h").exists());
    }

    #[test]
    fn test_postbuild_writes_report() {
        let dir = tempfile::tempdir().unwrap();
        let args = PostbuildArgs {
            root: dir.path().to_path_buf(),
        };
        postbuild(&args).unwrap();
        assert!(dir.path().join(".pio/reports/build_report.txt").exists());
    }
}
