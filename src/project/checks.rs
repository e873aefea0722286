//! Project-level checks run alongside the rule engine.
//!
//! These are plain file-presence and substring checks. They do not interact
//! with the configuration rules and their findings are appended after the
//! engine's.

use std::io::ErrorKind;

use crate::error::Finding;
use crate::project::ProjectLayout;
use crate::validation::ValidationResult;

/// Libraries the firmware links against, as named in `platformio.ini`.
pub const REQUIRED_LIBRARIES: [&str; 4] = [
    "ArduinoJson",
    "UniversalTelegramBot",
    "WiFiClientSecure",
    "NTPClient",
];

/// Template placeholders that must be replaced in `secrets.h`, with the
/// credential each stands for.
pub const SECRET_PLACEHOLDERS: [(&str, &str); 4] = [
    ("Your_WiFi_Network_Name", "WiFi SSID"),
    ("Your_WiFi_Password", "WiFi password"),
    ("1234567890:ABCdefGHIjklMNOpqrSTUvwxYZ123456789", "Bot token"),
    ("-1001234567890", "Chat ID"),
];

/// Outcome of scanning the secrets header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecretsScan {
    /// `secrets.h` does not exist.
    Missing,
    /// `secrets.h` exists; lists the credentials still at their placeholder.
    Present {
        /// Descriptions of unconfigured credentials, in table order.
        placeholders: Vec<&'static str>,
    },
}

/// Checks `platformio.ini` for the libraries the firmware needs.
///
/// # Errors
///
/// Returns an I/O error if the file exists but cannot be read.
pub fn check_build_settings(layout: &ProjectLayout) -> std::io::Result<ValidationResult> {
    let mut result = ValidationResult::default();

    let content = match std::fs::read_to_string(layout.platformio_ini()) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            result
                .errors
                .push(Finding::Error("platformio.ini not found".to_string()));
            return Ok(result);
        }
        Err(e) => return Err(e),
    };

    for lib in REQUIRED_LIBRARIES {
        if !content.contains(lib) {
            result.warnings.push(Finding::Warning(format!(
                "Library {lib} not found in platformio.ini"
            )));
        }
    }

    Ok(result)
}

/// Scans `secrets.h` for template placeholders.
///
/// # Errors
///
/// Returns an I/O error if the file exists but cannot be read.
pub fn scan_secrets(layout: &ProjectLayout) -> std::io::Result<SecretsScan> {
    let content = match std::fs::read_to_string(layout.secrets_header()) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(SecretsScan::Missing),
        Err(e) => return Err(e),
    };

    let placeholders = SECRET_PLACEHOLDERS
        .iter()
        .filter(|(placeholder, _)| content.contains(placeholder))
        .map(|(_, description)| *description)
        .collect();

    Ok(SecretsScan::Present { placeholders })
}

/// Secrets check for `validate`: everything is advisory.
///
/// # Errors
///
/// Returns an I/O error if `secrets.h` exists but cannot be read.
pub fn check_secrets(layout: &ProjectLayout) -> std::io::Result<ValidationResult> {
    let mut result = ValidationResult::default();
    match scan_secrets(layout)? {
        SecretsScan::Missing => result.warnings.push(Finding::Warning(
            "secrets.h not found - copy from template and configure".to_string(),
        )),
        SecretsScan::Present { placeholders } => {
            result.warnings.extend(placeholders.into_iter().map(|description| {
                Finding::Warning(format!(
                    "Default {description} found in secrets.h - please configure"
                ))
            }));
        }
    }
    Ok(result)
}

/// Secrets check for `prebuild`: a missing file blocks the build.
///
/// # Errors
///
/// Returns an I/O error if `secrets.h` exists but cannot be read.
pub fn check_secrets_for_build(layout: &ProjectLayout) -> std::io::Result<ValidationResult> {
    if scan_secrets(layout)? == SecretsScan::Missing {
        let mut result = ValidationResult::default();
        result.errors.push(Finding::Error(format!(
            "secrets.h not found - copy {} to {} and fill in your WiFi and Telegram credentials",
            layout.secrets_template().display(),
            layout.secrets_header().display()
        )));
        return Ok(result);
    }
    check_secrets(layout)
}

/// Checks that the project root looks like a PlatformIO project.
#[must_use]
pub fn check_build_environment(layout: &ProjectLayout) -> ValidationResult {
    let mut result = ValidationResult::default();
    if !layout.platformio_ini().exists() {
        result.errors.push(Finding::Error(
            "platformio.ini not found. Are you in the project root?".to_string(),
        ));
    }
    if !layout.main_source().exists() {
        result.errors.push(Finding::Error(
            "main.cpp not found in src/ directory".to_string(),
        ));
    }
    result
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    const FULL_INI: &str = "[env:esp32dev]\n\
        platform = espressif32\n\
        lib_deps =\n    \
            bblanchon/ArduinoJson\n    \
            witnessmenow/UniversalTelegramBot\n    \
            WiFiClientSecure\n    \
            arduino-libraries/NTPClient\n";

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }

    fn messages(findings: &[Finding]) -> Vec<&str> {
        findings.iter().map(Finding::message).collect()
    }

    #[test]
    fn test_build_settings_missing_ini() {
        let dir = tempfile::tempdir().unwrap();
        let result = check_build_settings(&ProjectLayout::new(dir.path())).unwrap();
        assert_eq!(messages(&result.errors), vec!["platformio.ini not found"]);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_build_settings_all_libraries_present() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "platformio.ini", FULL_INI);
        let result = check_build_settings(&ProjectLayout::new(dir.path())).unwrap();
        assert!(result.is_clean());
    }

    #[test]
    fn test_build_settings_missing_libraries_in_order() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "platformio.ini", "lib_deps = ArduinoJson\n");
        let result = check_build_settings(&ProjectLayout::new(dir.path())).unwrap();
        assert!(result.errors.is_empty());
        assert_eq!(
            messages(&result.warnings),
            vec![
                "Library UniversalTelegramBot not found in platformio.ini",
                "Library WiFiClientSecure not found in platformio.ini",
                "Library NTPClient not found in platformio.ini",
            ]
        );
    }

    #[test]
    fn test_secrets_missing_is_warning() {
        let dir = tempfile::tempdir().unwrap();
        let layout = ProjectLayout::new(dir.path());
        assert_eq!(scan_secrets(&layout).unwrap(), SecretsScan::Missing);

        let result = check_secrets(&layout).unwrap();
        assert!(result.errors.is_empty());
        assert_eq!(
            messages(&result.warnings),
            vec!["secrets.h not found - copy from template and configure"]
        );
    }

    #[test]
    fn test_secrets_placeholders_reported() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "include/secrets.h",
            "#define WIFI_SSID \"Your_WiFi_Network_Name\"\n\
             #define WIFI_PASSWORD \"hunter2\"\n\
             #define CHAT_ID_SECRET \"-1001234567890\"\n",
        );
        let result = check_secrets(&ProjectLayout::new(dir.path())).unwrap();
        assert_eq!(
            messages(&result.warnings),
            vec![
                "Default WiFi SSID found in secrets.h - please configure",
                "Default Chat ID found in secrets.h - please configure",
            ]
        );
    }

    #[test]
    fn test_configured_secrets_clean() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "include/secrets.h",
            "#define WIFI_SSID \"home\"\n#define WIFI_PASSWORD \"hunter2\"\n",
        );
        let layout = ProjectLayout::new(dir.path());
        assert!(check_secrets(&layout).unwrap().is_clean());
        assert!(check_secrets_for_build(&layout).unwrap().is_clean());
    }

    #[test]
    fn test_secrets_missing_blocks_build() {
        let dir = tempfile::tempdir().unwrap();
        let result = check_secrets_for_build(&ProjectLayout::new(dir.path())).unwrap();
        assert_eq!(result.error_count(), 1);
        assert!(result.errors[0].message().contains("secrets.h.template"));
    }

    #[test]
    fn test_build_environment() {
        let dir = tempfile::tempdir().unwrap();
        let layout = ProjectLayout::new(dir.path());
        assert_eq!(
            messages(&check_build_environment(&layout).errors),
            vec![
                "platformio.ini not found. Are you in the project root?",
                "main.cpp not found in src/ directory",
            ]
        );

        write(dir.path(), "platformio.ini", FULL_INI);
        write(dir.path(), "src/main.cpp", "void setup() {}\nvoid loop() {}\n");
        assert!(check_build_environment(&layout).is_clean());
    }
}
