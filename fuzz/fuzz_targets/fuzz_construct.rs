#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|fields: (&str, &str, &str)| {
    let (bank, city, account) = fields;
    let code = clabe::construct(bank, city, account);
    assert_eq!(code.chars().count(), clabe::CLABE_LENGTH);
    let _ = clabe::validate(&code);
});
