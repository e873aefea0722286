//! Feature combinations that build fine but behave poorly.

use crate::config::ConfigurationSet;
use crate::config::schema::keys;
use crate::validation::{Validator, parse_int};

/// Debug levels above this are considered verbose.
pub const VERBOSE_DEBUG_LEVEL: i64 = 3;

pub(super) fn check(config: &ConfigurationSet, out: &mut Validator) {
    // A bad DEBUG_LEVEL is not this rule's concern
    let debug_level = parse_int(config.get(keys::DEBUG_LEVEL).unwrap_or("0"));
    if debug_level.is_some_and(|level| level > VERBOSE_DEBUG_LEVEL)
        && flag(config, keys::ENABLE_PERFORMANCE_MONITORING, false)
    {
        out.add_warning("High debug level + performance monitoring may impact performance");
    }

    if flag(config, keys::ENABLE_DEEP_SLEEP, false)
        && flag(config, keys::ENABLE_TELEGRAM_NOTIFICATIONS, true)
    {
        out.add_warning("Deep sleep enabled with Telegram notifications - may miss messages");
    }
}

/// Reads a boolean directive. Only a case-insensitive `true` is true.
fn flag(config: &ConfigurationSet, key: &str, default: bool) -> bool {
    config
        .get(key)
        .map_or(default, |value| value.eq_ignore_ascii_case("true"))
}

#[cfg(test)]
mod tests {
    use crate::config::ConfigurationSet;
    use crate::validation::{ValidationResult, validate};

    use super::*;

    const DEBUG_WARNING: &str = "High debug level + performance monitoring may impact performance";
    const SLEEP_WARNING: &str = "Deep sleep enabled with Telegram notifications - may miss messages";

    fn run(pairs: &[(&str, &str)]) -> ValidationResult {
        validate(&pairs.iter().copied().collect())
    }

    fn warned(result: &ValidationResult, message: &str) -> bool {
        result.warnings.iter().any(|w| w.message() == message)
    }

    #[test]
    fn test_verbose_debug_with_monitoring() {
        let result = run(&[
            ("DEBUG_LEVEL", "4"),
            ("ENABLE_PERFORMANCE_MONITORING", "TRUE"),
        ]);
        assert!(warned(&result, DEBUG_WARNING));
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_debug_level_at_threshold_is_fine() {
        let result = run(&[
            ("DEBUG_LEVEL", "3"),
            ("ENABLE_PERFORMANCE_MONITORING", "true"),
        ]);
        assert!(result.is_clean());
    }

    #[test]
    fn test_verbose_debug_without_monitoring() {
        assert!(run(&[("DEBUG_LEVEL", "4")]).is_clean());
        assert!(
            run(&[
                ("DEBUG_LEVEL", "4"),
                ("ENABLE_PERFORMANCE_MONITORING", "1"),
            ])
            .is_clean()
        );
    }

    #[test]
    fn test_oversized_debug_level_counts_as_verbose() {
        let result = run(&[
            ("DEBUG_LEVEL", "99999999999999999999"),
            ("ENABLE_PERFORMANCE_MONITORING", "true"),
        ]);
        assert!(warned(&result, DEBUG_WARNING));
    }

    #[test]
    fn test_unparseable_debug_level_silently_ignored() {
        let result = run(&[
            ("DEBUG_LEVEL", "VERBOSE"),
            ("ENABLE_PERFORMANCE_MONITORING", "true"),
        ]);
        assert!(result.is_clean());
    }

    #[test]
    fn test_deep_sleep_with_default_notifications() {
        let result = run(&[("ENABLE_DEEP_SLEEP", "true")]);
        assert!(warned(&result, SLEEP_WARNING));
        assert_eq!(result.warning_count(), 1);
    }

    #[test]
    fn test_deep_sleep_with_notifications_disabled() {
        assert!(
            run(&[
                ("ENABLE_DEEP_SLEEP", "true"),
                ("ENABLE_TELEGRAM_NOTIFICATIONS", "false"),
            ])
            .is_clean()
        );
        // An unevaluated expression is not "true"
        assert!(
            run(&[
                ("ENABLE_DEEP_SLEEP", "True"),
                ("ENABLE_TELEGRAM_NOTIFICATIONS", "(!SENSOR_TESTING_MODE)"),
            ])
            .is_clean()
        );
    }

    #[test]
    fn test_no_deep_sleep_never_warns() {
        for notifications in [None, Some("true"), Some("false")] {
            let mut pairs = vec![("ENABLE_DEEP_SLEEP", "false")];
            if let Some(value) = notifications {
                pairs.push(("ENABLE_TELEGRAM_NOTIFICATIONS", value));
            }
            assert!(run(&pairs).is_clean(), "notifications={notifications:?}");
        }
    }

    #[test]
    fn test_flag_defaults() {
        let config = ConfigurationSet::new();
        assert!(!flag(&config, "ENABLE_DEEP_SLEEP", false));
        assert!(flag(&config, "ENABLE_TELEGRAM_NOTIFICATIONS", true));
    }
}
