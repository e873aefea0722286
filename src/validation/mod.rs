//! Configuration validation
//!
//! The rule engine turns a `ConfigurationSet` into classified findings. Rule
//! groups run in a fixed order (pins, timing, memory, network, messaging,
//! compatibility) and append to two lists: errors and warnings. Within a
//! group, findings appear in the order of that group's rule table.
//!
//! Validation collects ALL findings. A malformed value becomes a finding and
//! every remaining rule still runs.

pub mod compat;
pub mod limits;
pub mod pins;
pub mod timing;

use std::num::IntErrorKind;

use crate::config::ConfigurationSet;
use crate::error::{Finding, Severity};

// ============================================================================
// Public API
// ============================================================================

/// Result of a validation run.
///
/// Success means no error findings; warnings never affect it.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    /// Build-blocking findings, in emission order.
    pub errors: Vec<Finding>,

    /// Advisory findings, in emission order.
    pub warnings: Vec<Finding>,
}

impl ValidationResult {
    /// Number of error findings.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Number of warning findings.
    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }

    /// Returns `true` if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns `true` if validation passed (no errors).
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns `true` if there are neither errors nor warnings.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }

    /// Appends another result's findings after this one's.
    pub fn merge(&mut self, other: Self) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }

    /// Iterates over all findings, errors first.
    pub fn findings(&self) -> impl Iterator<Item = &Finding> {
        self.errors.iter().chain(self.warnings.iter())
    }
}

/// A group of related rules, listed in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleGroup {
    /// GPIO assignment conflicts and hardware constraints
    Pins,
    /// Millisecond timing bounds
    Timing,
    /// Free-memory threshold
    Memory,
    /// `WiFi` retry and signal thresholds
    Network,
    /// Bot message length limits
    Messaging,
    /// Risky feature combinations
    Compatibility,
}

impl RuleGroup {
    /// All groups in the order they run.
    pub const ALL: [Self; 6] = [
        Self::Pins,
        Self::Timing,
        Self::Memory,
        Self::Network,
        Self::Messaging,
        Self::Compatibility,
    ];

    /// Short name used in logs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pins => "pins",
            Self::Timing => "timing",
            Self::Memory => "memory",
            Self::Network => "network",
            Self::Messaging => "messaging",
            Self::Compatibility => "compatibility",
        }
    }

    fn run(self, config: &ConfigurationSet, out: &mut Validator) {
        match self {
            Self::Pins => pins::check(config, out),
            Self::Timing => timing::check(config, out),
            Self::Memory => limits::check(&limits::MEMORY_LIMITS, config, out),
            Self::Network => limits::check(&limits::NETWORK_LIMITS, config, out),
            Self::Messaging => limits::check(&limits::MESSAGING_LIMITS, config, out),
            Self::Compatibility => compat::check(config, out),
        }
    }
}

/// Configuration validator.
///
/// Holds the finding lists while a run is in progress. Each call to
/// [`Validator::validate`] starts from empty lists, so a validator can be
/// reused without carrying anything over between runs.
#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<Finding>,
    warnings: Vec<Finding>,
}

impl Validator {
    /// Creates a new validator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates a configuration and returns the result.
    pub fn validate(&mut self, config: &ConfigurationSet) -> ValidationResult {
        self.errors.clear();
        self.warnings.clear();

        for group in RuleGroup::ALL {
            let (errors_before, warnings_before) = (self.errors.len(), self.warnings.len());
            group.run(config, self);
            tracing::debug!(
                group = group.name(),
                errors = self.errors.len() - errors_before,
                warnings = self.warnings.len() - warnings_before,
                "rule group complete"
            );
        }

        ValidationResult {
            errors: std::mem::take(&mut self.errors),
            warnings: std::mem::take(&mut self.warnings),
        }
    }

    pub(crate) fn add(&mut self, severity: Severity, message: impl Into<String>) {
        let finding = Finding::new(severity, message);
        tracing::trace!(%finding, "finding");
        match severity {
            Severity::Error => self.errors.push(finding),
            Severity::Warning => self.warnings.push(finding),
        }
    }

    pub(crate) fn add_error(&mut self, message: impl Into<String>) {
        self.add(Severity::Error, message);
    }

    pub(crate) fn add_warning(&mut self, message: impl Into<String>) {
        self.add(Severity::Warning, message);
    }
}

/// Validates a configuration with a fresh validator.
#[must_use]
pub fn validate(config: &ConfigurationSet) -> ValidationResult {
    Validator::new().validate(config)
}

/// Parses a raw value as a decimal integer.
///
/// Accepts surrounding whitespace and a leading sign. Anything else,
/// including C suffixes like `10000UL`, is rejected. Well-formed values
/// beyond the `i64` range saturate, so they still compare as out of range.
pub(crate) fn parse_int(raw: &str) -> Option<i64> {
    match raw.trim().parse::<i64>() {
        Ok(value) => Some(value),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Some(i64::MAX),
            IntErrorKind::NegOverflow => Some(i64::MIN),
            _ => None,
        },
    }
}

/// Canonical decimal text of a value accepted by [`parse_int`].
///
/// Drops whitespace, a `+` sign and leading zeros without going through
/// `i64`, so saturated values are shown as written.
pub(crate) fn decimal_text(raw: &str) -> String {
    let raw = raw.trim();
    let (negative, digits) = match raw.strip_prefix('-') {
        Some(digits) => (true, digits),
        None => (false, raw.strip_prefix('+').unwrap_or(raw)),
    };
    match digits.trim_start_matches('0') {
        "" => "0".to_string(),
        digits if negative => format!("-{digits}"),
        digits => digits.to_string(),
    }
}

// ============================================================================
// Tests
// ============================================================================
