//! Generated build artifacts.

use std::path::Path;

use chrono::{DateTime, Datelike, Local, TimeZone};

use crate::error::ProjectError;
use crate::project::ProjectLayout;

/// Renders `build_info.h` for a build started at `now`.
#[must_use]
pub fn render_build_info<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!(
        r#"// Auto-generated build information
// Generated at: {generated}

#ifndef BUILD_INFO_H
#define BUILD_INFO_H

#define BUILD_TIMESTAMP "{timestamp}"
#define BUILD_DATE "{date}"
#define BUILD_TIME "{time}"
#define BUILD_YEAR {year}
#define BUILD_MONTH {month}
#define BUILD_DAY {day}

// Git information (if available)
#ifdef GIT_COMMIT_HASH
#define BUILD_GIT_HASH GIT_COMMIT_HASH
#else
#define BUILD_GIT_HASH "unknown"
#endif

#ifdef GIT_BRANCH
#define BUILD_GIT_BRANCH GIT_BRANCH
#else
#define BUILD_GIT_BRANCH "unknown"
#endif

#endif // BUILD_INFO_H
"#,
        generated = now.format("%Y-%m-%dT%H:%M:%S%.6f"),
        timestamp = now.format("%Y-%m-%d %H:%M:%S"),
        date = now.format("%Y-%m-%d"),
        time = now.format("%H:%M:%S"),
        year = now.year(),
        month = now.month(),
        day = now.day(),
    )
}

/// Renders the post-build report for a build finished at `now`.
#[must_use]
pub fn render_build_report<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!(
        "
ESP32 Motion Detection System - Build Report
============================================
Build Time: {generated}
Platform: ESP32
Framework: Arduino

Build Status: SUCCESS

Features Enabled:
- Motion Detection
- Telegram Notifications
- WiFi Management
- NTP Time Sync
- System Monitoring
- Debug Logging

Configuration Files:
- config.h: System configuration
- secrets.h: Credentials (not in git)
- platformio.ini: Build configuration

Next Steps:
1. Copy secrets.h.template to secrets.h
2. Configure WiFi and Telegram credentials
3. Upload to ESP32 device
4. Monitor serial output for status

For help, see README.md or QUICK_SETUP.md
",
        generated = now.format("%Y-%m-%dT%H:%M:%S%.6f"),
    )
}

/// Writes `include/build_info.h` and returns its path.
///
/// # Errors
///
/// Returns `ProjectError::Write` if the directory or file cannot be written.
pub fn write_build_info(layout: &ProjectLayout) -> Result<std::path::PathBuf, ProjectError> {
    let path = layout.build_info_header();
    write_file(&path, &render_build_info(&Local::now()))?;
    tracing::info!(path = %path.display(), "generated build information");
    Ok(path)
}

/// Writes `.pio/reports/build_report.txt` and returns its path.
///
/// # Errors
///
/// Returns `ProjectError::Write` if the directory or file cannot be written.
pub fn write_build_report(layout: &ProjectLayout) -> Result<std::path::PathBuf, ProjectError> {
    let path = layout.build_report();
    write_file(&path, &render_build_report(&Local::now()))?;
    tracing::info!(path = %path.display(), "generated build report");
    Ok(path)
}

fn write_file(path: &Path, content: &str) -> Result<(), ProjectError> {
    let to_error = |source| ProjectError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(to_error)?;
    }
    std::fs::write(path, content).map_err(to_error)
}
