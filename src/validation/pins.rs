//! GPIO assignment rules for ESP32 targets.
//!
//! Roles are checked in [`PIN_ROLES`] order. The first role to claim a pin
//! owns it; any later role on the same pin is reported as a conflict naming
//! both. The order is therefore observable and must not be changed casually.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::ops::RangeInclusive;

use crate::config::ConfigurationSet;
use crate::config::schema::keys;
use crate::validation::{Validator, decimal_text, parse_int};

/// Pins that have no output driver.
pub const INPUT_ONLY_PINS: [i64; 6] = [34, 35, 36, 37, 38, 39];

/// Pins sampled at reset to select the boot mode.
pub const STRAPPING_PINS: [i64; 5] = [0, 2, 5, 12, 15];

/// Pins wired to the on-module SPI flash.
pub const FLASH_PINS: [i64; 6] = [6, 7, 8, 9, 10, 11];

/// Valid GPIO numbers.
pub const PIN_RANGE: RangeInclusive<i64> = 0..=39;

/// Value that marks a pin role as disabled.
pub const DISABLED: &str = "-1";

/// A configuration directive that assigns a physical pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinRole {
    /// Directive name in the header.
    pub key: &'static str,
    /// Role name used in findings.
    pub description: &'static str,
    /// Whether the role drives the pin as an output.
    pub drives_output: bool,
}

impl PinRole {
    const fn input(key: &'static str, description: &'static str) -> Self {
        Self {
            key,
            description,
            drives_output: false,
        }
    }

    const fn output(key: &'static str, description: &'static str) -> Self {
        Self {
            key,
            description,
            drives_output: true,
        }
    }
}

/// Pin roles in processing order.
pub const PIN_ROLES: [PinRole; 9] = [
    PinRole::output(keys::LED_PIN, "LED"),
    PinRole::input(keys::MOTION_SENSOR_PIN, "Motion Sensor"),
    PinRole::output(keys::EXTERNAL_LED_PIN, "External LED"),
    PinRole::output(keys::BUZZER_PIN, "Buzzer"),
    PinRole::input(keys::RESET_BUTTON_PIN, "Reset Button"),
    PinRole::input(keys::CONFIG_BUTTON_PIN, "Config Button"),
    PinRole::input(keys::TEMPERATURE_SENSOR_PIN, "Temperature Sensor"),
    PinRole::input(keys::LIGHT_SENSOR_PIN, "Light Sensor"),
    PinRole::input(keys::BATTERY_VOLTAGE_PIN, "Battery Monitor"),
];

pub(super) fn check(config: &ConfigurationSet, out: &mut Validator) {
    // pin -> role that claimed it; lives for this call only
    let mut claimed: HashMap<i64, &'static str> = HashMap::new();

    for role in &PIN_ROLES {
        let Some(raw) = config.get(role.key) else {
            continue;
        };
        if raw == DISABLED {
            continue;
        }

        let Some(pin) = parse_int(raw) else {
            out.add_error(format!("Invalid pin value for {}: {raw}", role.key));
            continue;
        };

        if !PIN_RANGE.contains(&pin) {
            out.add_error(format!(
                "Invalid pin number for {}: {}",
                role.description,
                decimal_text(raw)
            ));
            continue;
        }

        match claimed.entry(pin) {
            Entry::Occupied(owner) => out.add_error(format!(
                "Pin conflict: GPIO{pin} used for both {} and {}",
                role.description,
                owner.get()
            )),
            Entry::Vacant(slot) => {
                slot.insert(role.description);
            }
        }

        if role.drives_output && INPUT_ONLY_PINS.contains(&pin) {
            out.add_error(format!(
                "GPIO{pin} is input-only, cannot be used for {}",
                role.description
            ));
        }

        if STRAPPING_PINS.contains(&pin) {
            out.add_warning(format!(
                "GPIO{pin} ({}) is a strapping pin - may cause boot issues",
                role.description
            ));
        }

        if FLASH_PINS.contains(&pin) {
            out.add_error(format!(
                "GPIO{pin} ({}) is connected to flash - do not use",
                role.description
            ));
        }
    }
}
