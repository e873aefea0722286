//! Error types for `fwguard`
//!
//! Two kinds of failure live here and they must not be confused. Process
//! failures (`FwGuardError` and friends) mean the tool itself could not do its
//! job: a header is missing, a report could not be written. Findings
//! (`Finding`) are the *output* of validation; a malformed configuration value
//! is never a Rust error.

use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// Exit Codes
// ============================================================================

/// Exit codes for `fwguard` CLI operations.
pub struct ExitCode;

impl ExitCode {
    /// No error findings (warnings allowed).
    pub const SUCCESS: i32 = 0;

    /// At least one error finding; the build must not proceed.
    pub const VALIDATION_FAILED: i32 = 1;

    /// The configuration header could not be loaded.
    pub const CONFIG_ERROR: i32 = 2;

    /// I/O error (permission denied, unwritable output)
    pub const IO_ERROR: i32 = 3;

    /// Usage error (invalid arguments)
    pub const USAGE_ERROR: i32 = 64;
}

// ============================================================================
// Top-Level Error
// ============================================================================

/// Top-level error type for `fwguard` operations.
#[derive(Debug, Error)]
pub enum FwGuardError {
    /// Header loading error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Project layout or generated-file error
    #[error(transparent)]
    Project(#[from] ProjectError),

    /// Validation completed and reported error findings
    #[error("validation failed: {errors} error(s), {warnings} warning(s)")]
    ValidationFailed {
        /// Number of error findings
        errors: usize,
        /// Number of warning findings
        warnings: usize,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl FwGuardError {
    /// Returns the process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) => ExitCode::CONFIG_ERROR,
            Self::ValidationFailed { .. } => ExitCode::VALIDATION_FAILED,
            Self::Project(_) | Self::Io(_) | Self::Json(_) => ExitCode::IO_ERROR,
        }
    }
}

// ============================================================================
// Configuration Errors
// ============================================================================

/// Errors raised while reading a configuration header.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Header file does not exist or cannot be read
    #[error("config header not found: {path}")]
    MissingFile {
        /// Path to the missing header
        path: PathBuf,
    },

    /// Header exceeds the configured size limit
    #[error("config header {path} is {size} bytes (limit: {limit})")]
    TooLarge {
        /// Path to the header
        path: PathBuf,
        /// Actual size in bytes
        size: u64,
        /// Configured limit in bytes
        limit: u64,
    },

    /// Header is not valid UTF-8
    #[error("config header {path} is not valid UTF-8")]
    InvalidEncoding {
        /// Path to the header
        path: PathBuf,
    },
}

// ============================================================================
// Project Errors
// ============================================================================

/// Errors raised by the pre/post-build project helpers.
#[derive(Debug, Error)]
pub enum ProjectError {
    /// A generated file could not be written
    #[error("failed to write {path}: {source}")]
    Write {
        /// Output path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

// ============================================================================
// Findings
// ============================================================================

/// Severity of a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Configuration is invalid or unsafe; the build must not proceed
    Error,
    /// Configuration is unusual but operable
    Warning,
}

/// A classified validation message.
///
/// Findings carry no identity beyond their text, so two identical findings
/// compare equal and are both kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Finding {
    /// Build-blocking problem
    Error(String),
    /// Advisory problem
    Warning(String),
}

impl Finding {
    /// Builds a finding of the given severity.
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        match severity {
            Severity::Error => Self::Error(message.into()),
            Severity::Warning => Self::Warning(message.into()),
        }
    }

    /// Returns the severity of this finding.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        match self {
            Self::Error(_) => Severity::Error,
            Self::Warning(_) => Severity::Warning,
        }
    }

    /// Returns the human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Error(msg) | Self::Warning(msg) => msg,
        }
    }
}

impl std::fmt::Display for Finding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error(msg) => write!(f, "error: {msg}"),
            Self::Warning(msg) => write!(f, "warning: {msg}"),
        }
    }
}

// ============================================================================
// Result Type Alias
// ============================================================================

/// Result type alias for `fwguard` operations.
pub type Result<T> = std::result::Result<T, FwGuardError>;

// ============================================================================
// Tests
// ============================================================================
