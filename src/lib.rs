//! `fwguard` - Pre-build configuration validator for ESP32 firmware
//!
//! Reads a firmware `config.h`, checks pin assignments, timing bounds,
//! resource limits and feature combinations, and classifies every problem
//! as a build-blocking error or an advisory warning.
//!
//! ```
//! use fwguard::config::ConfigurationSet;
//! use fwguard::validation::validate;
//!
//! let config: ConfigurationSet = [("LED_PIN", "2"), ("BUZZER_PIN", "2")]
//!     .into_iter()
//!     .collect();
//! let result = validate(&config);
//! assert_eq!(result.error_count(), 1);
//! assert!(!result.is_valid());
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod observability;
pub mod project;
pub mod report;
pub mod validation;
