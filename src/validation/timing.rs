//! Timing parameter bounds.
//!
//! Out-of-range timing is advisory: the firmware still builds and runs, just
//! badly. Unparseable values are errors.

use crate::config::ConfigurationSet;
use crate::config::schema::keys;
use crate::validation::{Validator, decimal_text, parse_int};

/// Recommended range for one timing parameter, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimingBound {
    /// Directive name in the header.
    pub key: &'static str,
    /// Smallest recommended value (inclusive).
    pub min_ms: i64,
    /// Largest recommended value (inclusive).
    pub max_ms: i64,
    /// Advice appended to the warning.
    pub advice: &'static str,
}

impl TimingBound {
    const fn new(key: &'static str, min_ms: i64, max_ms: i64, advice: &'static str) -> Self {
        Self {
            key,
            min_ms,
            max_ms,
            advice,
        }
    }

    /// Returns `true` if `value` lies within the bound.
    #[must_use]
    pub const fn contains(&self, value: i64) -> bool {
        value >= self.min_ms && value <= self.max_ms
    }
}

/// Timing bounds in processing order.
pub const TIMING_BOUNDS: [TimingBound; 7] = [
    TimingBound::new(
        keys::NOTIFICATION_INTERVAL,
        1000,
        3_600_000,
        "Notification interval should be 1s-1h",
    ),
    TimingBound::new(keys::WIFI_TIMEOUT, 5000, 60000, "WiFi timeout should be 5s-60s"),
    TimingBound::new(keys::BOT_MTBS, 500, 10000, "Bot scan interval should be 0.5s-10s"),
    TimingBound::new(
        keys::SENSOR_STABILIZATION_TIME,
        10000,
        300_000,
        "Sensor stabilization should be 10s-5min",
    ),
    TimingBound::new(
        keys::MOTION_DEBOUNCE_DELAY,
        10,
        1000,
        "Motion debounce should be 10ms-1s",
    ),
    TimingBound::new(
        keys::WATCHDOG_TIMEOUT,
        1000,
        30000,
        "Watchdog timeout should be 1s-30s",
    ),
    TimingBound::new(keys::LOOP_DELAY, 10, 1000, "Loop delay should be 10ms-1s"),
];

pub(super) fn check(config: &ConfigurationSet, out: &mut Validator) {
    for bound in &TIMING_BOUNDS {
        let Some(raw) = config.get(bound.key) else {
            continue;
        };
        match parse_int(raw) {
            Some(value) if !bound.contains(value) => {
                out.add_warning(format!(
                    "{}={}: {}",
                    bound.key,
                    decimal_text(raw),
                    bound.advice
                ));
            }
            Some(_) => {}
            None => out.add_error(format!("Invalid numeric value for {}: {raw}", bound.key)),
        }
    }
}
