//! Configuration set and well-known directive names.

use indexmap::IndexMap;

// ============================================================================
// Directive Names
// ============================================================================

/// Directive names the validation rules look up.
///
/// Names are case-sensitive and match the header's `#define` identifiers.
pub mod keys {
    pub const LED_PIN: &str = "LED_PIN";
    pub const MOTION_SENSOR_PIN: &str = "MOTION_SENSOR_PIN";
    pub const EXTERNAL_LED_PIN: &str = "EXTERNAL_LED_PIN";
    pub const BUZZER_PIN: &str = "BUZZER_PIN";
    pub const RESET_BUTTON_PIN: &str = "RESET_BUTTON_PIN";
    pub const CONFIG_BUTTON_PIN: &str = "CONFIG_BUTTON_PIN";
    pub const TEMPERATURE_SENSOR_PIN: &str = "TEMPERATURE_SENSOR_PIN";
    pub const LIGHT_SENSOR_PIN: &str = "LIGHT_SENSOR_PIN";
    pub const BATTERY_VOLTAGE_PIN: &str = "BATTERY_VOLTAGE_PIN";

    pub const NOTIFICATION_INTERVAL: &str = "NOTIFICATION_INTERVAL";
    pub const WIFI_TIMEOUT: &str = "WIFI_TIMEOUT";
    pub const BOT_MTBS: &str = "BOT_MTBS";
    pub const SENSOR_STABILIZATION_TIME: &str = "SENSOR_STABILIZATION_TIME";
    pub const MOTION_DEBOUNCE_DELAY: &str = "MOTION_DEBOUNCE_DELAY";
    pub const WATCHDOG_TIMEOUT: &str = "WATCHDOG_TIMEOUT";
    pub const LOOP_DELAY: &str = "LOOP_DELAY";

    pub const MIN_FREE_MEMORY: &str = "MIN_FREE_MEMORY";
    pub const WIFI_MAX_RETRIES: &str = "WIFI_MAX_RETRIES";
    pub const MIN_WIFI_SIGNAL_STRENGTH: &str = "MIN_WIFI_SIGNAL_STRENGTH";
    pub const BOT_MAX_MESSAGE_LENGTH: &str = "BOT_MAX_MESSAGE_LENGTH";

    pub const DEBUG_LEVEL: &str = "DEBUG_LEVEL";
    pub const ENABLE_PERFORMANCE_MONITORING: &str = "ENABLE_PERFORMANCE_MONITORING";
    pub const ENABLE_DEEP_SLEEP: &str = "ENABLE_DEEP_SLEEP";
    pub const ENABLE_TELEGRAM_NOTIFICATIONS: &str = "ENABLE_TELEGRAM_NOTIFICATIONS";
}

// ============================================================================
// Configuration Set
// ============================================================================

/// Mapping from directive name to its raw, comment-stripped value.
///
/// Iteration follows first-definition order. Re-inserting a name replaces
/// its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigurationSet {
    values: IndexMap<String, String>,
}

impl ConfigurationSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a value, replacing any earlier definition of `name`.
    ///
    /// Returns the previous value if there was one.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.values.insert(name.into(), value.into())
    }

    /// Returns the raw value for `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Returns `true` if `name` is configured.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Number of configured names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if nothing is configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over `(name, value)` pairs in definition order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for ConfigurationSet
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (name, value) in iter {
            set.insert(name, value);
        }
        set
    }
}
