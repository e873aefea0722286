//! Rendering of validation results.

use std::fmt::Write as _;

use serde::Serialize;

use crate::error::Finding;
use crate::validation::ValidationResult;

const RULE: &str = "============================================================";

/// Serializable view of a validation run.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    /// `true` when there are no errors.
    pub success: bool,
    /// Error messages in emission order.
    pub errors: Vec<&'a str>,
    /// Warning messages in emission order.
    pub warnings: Vec<&'a str>,
    /// Finding counts.
    pub summary: Summary,
}

/// Finding counts.
#[derive(Debug, Serialize)]
pub struct Summary {
    /// Number of errors.
    pub errors: usize,
    /// Number of warnings.
    pub warnings: usize,
}

impl<'a> Report<'a> {
    /// Builds a report borrowing messages from `result`.
    #[must_use]
    pub fn from_result(result: &'a ValidationResult) -> Self {
        Self {
            success: result.is_valid(),
            errors: result.errors.iter().map(Finding::message).collect(),
            warnings: result.warnings.iter().map(Finding::message).collect(),
            summary: Summary {
                errors: result.error_count(),
                warnings: result.warning_count(),
            },
        }
    }

    /// Renders the report as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Renders the report for a terminal.
    #[must_use]
    pub fn to_human(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{RULE}");
        let _ = writeln!(out, "VALIDATION RESULTS");
        let _ = writeln!(out, "{RULE}");

        render_section(&mut out, "ERRORS", &self.errors);
        render_section(&mut out, "WARNINGS", &self.warnings);

        let (errors, warnings) = (self.summary.errors, self.summary.warnings);
        if errors == 0 && warnings == 0 {
            let _ = writeln!(out, "\nAll validations passed! Configuration looks good.");
        } else if errors == 0 {
            let _ = writeln!(
                out,
                "\nNo critical errors found. {warnings} warnings to review."
            );
        } else {
            let _ = writeln!(out, "\n{errors} errors must be fixed before building.");
        }

        let _ = writeln!(out, "{RULE}");
        out
    }
}

fn render_section(out: &mut String, title: &str, messages: &[&str]) {
    if messages.is_empty() {
        return;
    }
    let _ = writeln!(out, "\n{title} ({}):", messages.len());
    for (i, message) in messages.iter().enumerate() {
        let _ = writeln!(out, "  {}. {message}", i + 1);
    }
}
