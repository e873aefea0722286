//! `version` command handler

use serde::Serialize;

use crate::cli::args::{OutputFormat, VersionArgs};
use crate::error::FwGuardError;
use crate::validation::RuleGroup;

/// Build metadata plus the rule groups this binary enforces.
#[derive(Debug, Serialize)]
pub struct VersionInfo {
    /// Package name.
    pub name: &'static str,
    /// Package version.
    pub version: &'static str,
    /// Rule groups in evaluation order.
    pub rule_groups: Vec<&'static str>,
}

impl VersionInfo {
    /// Metadata for the running binary.
    #[must_use]
    pub fn current() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            rule_groups: RuleGroup::ALL.iter().map(|g| g.name()).collect(),
        }
    }

    fn to_human(&self) -> String {
        format!(
            "{} {}\nrule groups: {}",
            self.name,
            self.version,
            self.rule_groups.join(", ")
        )
    }
}

/// Prints version information.
///
/// # Errors
///
/// Returns a JSON error if serialization fails.
pub fn run(args: &VersionArgs) -> Result<(), FwGuardError> {
    let info = VersionInfo::current();
    match args.format {
        OutputFormat::Human => println!("{}", info.to_human()),
        OutputFormat::Json => println!("{}", serde_json::to_string(&info)?),
    }
    Ok(())
}
