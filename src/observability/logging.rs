//! Diagnostic logging setup.
//!
//! `-v` raises only fwguard's own targets; everything else stays at `warn`.
//! `FWGUARD_LOG_LEVEL` replaces the whole filter, e.g.
//! `FWGUARD_LOG_LEVEL=fwguard::validation=trace` to follow every finding.

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

use crate::cli::args::ColorChoice;

const LOG_LEVEL_ENV: &str = "FWGUARD_LOG_LEVEL";

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum LogFormat {
    /// Compact single-line records.
    #[default]
    Human,
    /// Newline-delimited JSON.
    Json,
}

/// Filter directives for a `-v` count.
#[must_use]
pub fn default_directives(verbosity: u8) -> String {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    format!("warn,fwguard={level}")
}

fn use_ansi(color: ColorChoice) -> bool {
    match color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => {
            std::env::var_os("NO_COLOR").is_none() && std::io::stderr().is_terminal()
        }
    }
}

/// Installs the global subscriber, writing to stderr.
///
/// A second call is a no-op.
pub fn init_logging(format: LogFormat, verbosity: u8, color: ColorChoice) {
    let filter = EnvFilter::try_from_env(LOG_LEVEL_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbosity)));

    // runs are short; timestamps are noise next to the report
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbosity >= 2)
        .without_time();

    let _ = match format {
        LogFormat::Human => builder.compact().with_ansi(use_ansi(color)).try_init(),
        LogFormat::Json => builder.json().flatten_event(true).try_init(),
    };
}
