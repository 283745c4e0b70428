#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic; rejection is reported in the result.
        let result = clabe::validate(s);
        assert_eq!(result.is_error, result.failure.is_some());
        assert_eq!(s.parse::<clabe::Clabe>().is_ok(), !result.is_error);
    }
});
