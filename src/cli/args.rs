//! CLI argument definitions
//!
//! All Clap derive structs for `fwguard` command-line parsing.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

use crate::observability::LogFormat;

// ============================================================================
// Root CLI
// ============================================================================

/// Pre-build configuration validator for ESP32 firmware projects.
#[derive(Parser, Debug)]
#[command(name = "fwguard", author, version, about)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress diagnostic logging.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output control.
    #[arg(long, default_value = "auto", global = true, env = "FWGUARD_COLOR")]
    pub color: ColorChoice,

    /// Diagnostic log format.
    #[arg(long, default_value = "human", global = true)]
    pub log_format: LogFormat,
}

// ============================================================================
// Commands
// ============================================================================

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate the firmware configuration header.
    Validate(ValidateArgs),

    /// Check the project before a build and generate build_info.h.
    Prebuild(PrebuildArgs),

    /// Write the post-build report.
    Postbuild(PostbuildArgs),

    /// Generate shell completion scripts.
    Completions(CompletionsArgs),

    /// Display version information.
    Version(VersionArgs),
}

/// Arguments for `validate`.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Project root directory.
    #[arg(long, default_value = ".", env = "FWGUARD_ROOT")]
    pub root: PathBuf,

    /// Configuration header [default: <ROOT>/include/config.h].
    #[arg(long, env = "FWGUARD_HEADER")]
    pub header: Option<PathBuf>,

    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,

    /// Only run the configuration rules; skip platformio.ini and secrets.h.
    #[arg(long)]
    pub skip_project_checks: bool,
}

/// Arguments for `prebuild`.
#[derive(Args, Debug)]
pub struct PrebuildArgs {
    /// Project root directory.
    #[arg(long, default_value = ".", env = "FWGUARD_ROOT")]
    pub root: PathBuf,

    /// Do not write include/build_info.h.
    #[arg(long)]
    pub no_build_info: bool,
}

/// Arguments for `postbuild`.
#[derive(Args, Debug)]
pub struct PostbuildArgs {
    /// Project root directory.
    #[arg(long, default_value = ".", env = "FWGUARD_ROOT")]
    pub root: PathBuf,
}

/// Arguments for `completions`.
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Target shell.
    pub shell: clap_complete::Shell,
}

/// Arguments for version display.
#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

// ============================================================================
// CLI-Local Enums
// ============================================================================

/// Color output choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal support.
    #[default]
    Auto,
    /// Always use color.
    Always,
    /// Never use color.
    Never,
}

/// Output format for structured output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output.
    #[default]
    Human,
    /// JSON output.
    Json,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_defaults() {
        let cli = Cli::try_parse_from(["fwguard", "validate"]).unwrap();
        let Commands::Validate(args) = cli.command else {
            panic!("Expected ValidateArgs");
        };
        assert_eq!(args.format, OutputFormat::Human);
        assert!(args.header.is_none());
        assert!(!args.skip_project_checks);
    }

    #[test]
    fn test_validate_with_options() {
        let cli = Cli::try_parse_from([
            "fwguard",
            "validate",
            "--root",
            "firmware",
            "--header",
            "firmware/include/config.h",
            "--format",
            "json",
            "--skip-project-checks",
        ])
        .unwrap();
        let Commands::Validate(args) = cli.command else {
            panic!("Expected ValidateArgs");
        };
        assert_eq!(args.root, PathBuf::from("firmware"));
        assert_eq!(
            args.header,
            Some(PathBuf::from("firmware/include/config.h"))
        );
        assert_eq!(args.format, OutputFormat::Json);
        assert!(args.skip_project_checks);
    }

    #[test]
    fn test_prebuild_flags() {
        let cli = Cli::try_parse_from(["fwguard", "prebuild", "--no-build-info"]).unwrap();
        let Commands::Prebuild(args) = cli.command else {
            panic!("Expected PrebuildArgs");
        };
        assert!(args.no_build_info);
    }

    #[test]
    fn test_help_output() {
        let err = Cli::try_parse_from(["fwguard", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_output() {
        let err = Cli::try_parse_from(["fwguard", "--version"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_unknown_format_rejected() {
        let result = Cli::try_parse_from(["fwguard", "validate", "--format", "xml"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_color_choices_parse() {
        for variant in ["auto", "always", "never"] {
            let cli = Cli::try_parse_from(["fwguard", "--color", variant, "validate"]);
            assert!(cli.is_ok(), "Failed to parse color={variant}");
        }
    }

    #[test]
    fn test_log_formats_parse() {
        let cli = Cli::try_parse_from(["fwguard", "--log-format", "json", "validate"]).unwrap();
        assert_eq!(cli.log_format, LogFormat::Json);
    }

    #[test]
    fn test_completions_shells_parse() {
        for shell in ["bash", "zsh", "fish", "powershell", "elvish"] {
            let cli = Cli::try_parse_from(["fwguard", "completions", shell]);
            assert!(cli.is_ok(), "Failed to parse shell={shell}");
        }
    }

    #[test]
    fn test_verbose_count_and_quiet() {
        let cli = Cli::try_parse_from(["fwguard", "-vvv", "--quiet", "validate"]).unwrap();
        assert_eq!(cli.verbose, 3);
        assert!(cli.quiet);
    }
}
