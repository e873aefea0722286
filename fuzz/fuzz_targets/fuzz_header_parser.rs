#![no_main]

use fwguard::config::parse_header;
use fwguard::validation::validate;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let config = parse_header(text);
        let result = validate(&config);
        assert_eq!(result.is_valid(), result.error_count() == 0);
    }
});
