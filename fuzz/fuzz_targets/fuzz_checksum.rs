#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Some(digit) = clabe::compute_checksum(s) {
            assert!(digit <= 9);
        }
    }
});
