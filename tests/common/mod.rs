//! Shared integration-test harness for running the `fwguard` binary.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Helpers for spawning `fwguard` and building scratch projects.
pub struct FwGuardProcess;

impl FwGuardProcess {
    /// Path to a fixture under `tests/fixtures/`.
    pub fn fixture_path(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("fixtures")
            .join(name)
    }

    /// Runs `fwguard` with `args` and waits for it to exit.
    ///
    /// Environment overrides are cleared so the host shell cannot leak in.
    #[allow(clippy::missing_panics_doc)]
    pub fn spawn_command(args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_fwguard"))
            .args(args)
            .env_remove("FWGUARD_ROOT")
            .env_remove("FWGUARD_HEADER")
            .env_remove("FWGUARD_LOG_LEVEL")
            .env_remove("FWGUARD_MAX_HEADER_SIZE")
            .env("NO_COLOR", "1")
            .output()
            .expect("failed to spawn fwguard")
    }

    /// Runs `fwguard validate` against a project root with extra args.
    pub fn validate(root: &Path, extra: &[&str]) -> Output {
        let root = root.to_str().expect("non-UTF-8 project path");
        let mut args = vec!["--quiet", "validate", "--root", root];
        args.extend_from_slice(extra);
        Self::spawn_command(&args)
    }

    /// Creates a temporary project containing `files` (relative path, content).
    #[allow(clippy::missing_panics_doc)]
    pub fn scratch_project(files: &[(&str, &str)]) -> TempDir {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        for (rel, content) in files {
            let path = dir.path().join(rel);
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).expect("failed to create dirs");
            }
            std::fs::write(path, content).expect("failed to write file");
        }
        dir
    }
}

/// `platformio.ini` naming every required library.
pub const COMPLETE_PLATFORMIO_INI: &str = "[env:esp32dev]
platform = espressif32
board = esp32dev
framework = arduino
lib_deps =
    bblanchon/ArduinoJson
    witnessmenow/UniversalTelegramBot
    WiFiClientSecure
    arduino-libraries/NTPClient
";

/// `secrets.h` with real-looking credentials.
pub const CONFIGURED_SECRETS: &str = "#define WIFI_SSID \"workshop\"
#define WIFI_PASSWORD \"correct-horse\"
#define BOT_TOKEN_SECRET \"555:abc\"
#define CHAT_ID_SECRET \"-42\"
";
