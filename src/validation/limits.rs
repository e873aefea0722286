//! Scalar resource limits for memory, network and messaging settings.
//!
//! Each rule looks up one directive and compares it against an optional
//! ceiling and an optional floor. A value can trip at most one of them.

use crate::config::ConfigurationSet;
use crate::config::schema::keys;
use crate::error::Severity;
use crate::validation::{Validator, parse_int};

/// Telegram rejects messages longer than this many characters.
pub const TELEGRAM_MAX_MESSAGE_LENGTH: i64 = 4096;

/// A threshold and the finding emitted when it is crossed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Threshold {
    /// Boundary value (not itself a violation).
    pub value: i64,
    /// Classification of the finding.
    pub severity: Severity,
    /// Finding text.
    pub message: &'static str,
}

/// Limit rule for a single directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LimitRule {
    /// Directive name in the header.
    pub key: &'static str,
    /// Triggered when the value is strictly greater.
    pub above: Option<Threshold>,
    /// Triggered when the value is strictly smaller.
    pub below: Option<Threshold>,
}

impl LimitRule {
    /// Returns the threshold crossed by `value`, if any.
    #[must_use]
    pub fn crossed(&self, value: i64) -> Option<&Threshold> {
        self.above
            .as_ref()
            .filter(|t| value > t.value)
            .or_else(|| self.below.as_ref().filter(|t| value < t.value))
    }
}

const fn warning(value: i64, message: &'static str) -> Option<Threshold> {
    Some(Threshold {
        value,
        severity: Severity::Warning,
        message,
    })
}

/// Free-heap alarm threshold.
pub const MEMORY_LIMITS: [LimitRule; 1] = [LimitRule {
    key: keys::MIN_FREE_MEMORY,
    above: warning(
        100_000,
        "MIN_FREE_MEMORY is very high - may trigger false alarms",
    ),
    below: warning(5000, "MIN_FREE_MEMORY is very low - may cause instability"),
}];

/// `WiFi` connection settings.
pub const NETWORK_LIMITS: [LimitRule; 2] = [
    LimitRule {
        key: keys::WIFI_MAX_RETRIES,
        above: warning(
            10,
            "WIFI_MAX_RETRIES is high - may cause long startup delays",
        ),
        below: None,
    },
    LimitRule {
        key: keys::MIN_WIFI_SIGNAL_STRENGTH,
        above: warning(-30, "MIN_WIFI_SIGNAL_STRENGTH seems too high"),
        below: warning(-100, "MIN_WIFI_SIGNAL_STRENGTH seems too low"),
    },
];

/// Bot message settings.
pub const MESSAGING_LIMITS: [LimitRule; 1] = [LimitRule {
    key: keys::BOT_MAX_MESSAGE_LENGTH,
    above: Some(Threshold {
        value: TELEGRAM_MAX_MESSAGE_LENGTH,
        severity: Severity::Error,
        message: "BOT_MAX_MESSAGE_LENGTH exceeds Telegram limit of 4096",
    }),
    below: warning(100, "BOT_MAX_MESSAGE_LENGTH is very small"),
}];

pub(super) fn check(rules: &[LimitRule], config: &ConfigurationSet, out: &mut Validator) {
    for rule in rules {
        let Some(raw) = config.get(rule.key) else {
            continue;
        };
        let Some(value) = parse_int(raw) else {
            out.add_error(format!("Invalid {} value", rule.key));
            continue;
        };
        if let Some(threshold) = rule.crossed(value) {
            out.add(threshold.severity, threshold.message);
        }
    }
}
