//! Configuration header loader
//!
//! Loading is a two-step pipeline:
//! 1. Read the header (size limit, UTF-8, BOM stripping)
//! 2. Extract object-like `#define NAME VALUE` directives
//!
//! Nothing is evaluated. Values are kept as raw text with `//` comments
//! removed, so `(!PRODUCTION_MODE)` stays `(!PRODUCTION_MODE)`.

use crate::config::schema::ConfigurationSet;
use crate::error::ConfigError;

use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Matches a single object-like `#define` line.
///
/// Function-like macros (`#define F(x) ...`) do not match because the name
/// must be followed by whitespace or end of line.
static DEFINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*#\s*define\s+(\w+)(?:\s+(.*))?$").expect("valid regex")
});

// ============================================================================
// Public API
// ============================================================================

/// Options for the header loader.
#[derive(Debug, Clone, Default)]
pub struct LoaderOptions {
    /// Size limits applied before parsing.
    pub limits: HeaderLimits,
}

/// Limits applied to header files.
#[derive(Debug, Clone)]
pub struct HeaderLimits {
    /// Maximum header size in bytes.
    pub max_header_size: u64,
}

impl Default for HeaderLimits {
    fn default() -> Self {
        Self {
            max_header_size: env_or("FWGUARD_MAX_HEADER_SIZE", 1024 * 1024),
        }
    }
}

/// Loads configuration headers from disk.
#[derive(Debug, Default)]
pub struct HeaderLoader {
    options: LoaderOptions,
}

impl HeaderLoader {
    /// Creates a loader with the given options.
    #[must_use]
    pub const fn new(options: LoaderOptions) -> Self {
        Self { options }
    }

    /// Creates a loader with default options.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(LoaderOptions::default())
    }

    /// Reads `path` and extracts its directives.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file does not exist or cannot be read
    /// - The file exceeds `max_header_size`
    /// - The file is not valid UTF-8
    pub fn load(&self, path: &Path) -> Result<ConfigurationSet, ConfigError> {
        let metadata = std::fs::metadata(path).map_err(|_| ConfigError::MissingFile {
            path: path.to_path_buf(),
        })?;

        let limit = self.options.limits.max_header_size;
        if metadata.len() > limit {
            return Err(ConfigError::TooLarge {
                path: path.to_path_buf(),
                size: metadata.len(),
                limit,
            });
        }

        let bytes = std::fs::read(path).map_err(|_| ConfigError::MissingFile {
            path: path.to_path_buf(),
        })?;
        let text = String::from_utf8(bytes).map_err(|_| ConfigError::InvalidEncoding {
            path: path.to_path_buf(),
        })?;

        let config = parse_header(&text);
        tracing::debug!(
            header = %path.display(),
            directives = config.len(),
            "loaded configuration header"
        );
        Ok(config)
    }
}

/// Returns the conventional header location under a project root.
#[must_use]
pub fn default_header_path(root: &Path) -> PathBuf {
    root.join("include").join("config.h")
}

/// Extracts `#define` directives from header text.
///
/// A later definition of a name replaces the earlier value. Directives
/// without a value are recorded with an empty value.
#[must_use]
pub fn parse_header(text: &str) -> ConfigurationSet {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut config = ConfigurationSet::new();

    for line in text.lines() {
        let Some(caps) = DEFINE_RE.captures(line.trim_end()) else {
            continue;
        };
        let name = &caps[1];
        let value = caps.get(2).map_or("", |m| strip_comment(m.as_str()));
        if let Some(previous) = config.insert(name, value) {
            tracing::trace!(name, previous, value, "directive redefined");
        }
    }

    config
}

/// Removes a trailing `//` comment and surrounding whitespace.
fn strip_comment(value: &str) -> &str {
    value.split("//").next().unwrap_or(value).trim()
}

/// Reads an environment variable, falling back to `default` when unset or
/// unparseable.
fn env_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

// ============================================================================
// Tests
// ============================================================================
