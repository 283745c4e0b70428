//! Edge cases around malformed input, truncation and concurrent first use.

use std::thread;

use clabe::*;

// ---------------------------------------------------------------------------
// Checksum input
// ---------------------------------------------------------------------------

#[test]
fn checksum_digit_weights() {
    assert_eq!(compute_checksum("12345678901234567"), Some(3));
    assert_eq!(compute_checksum("99999999999999999"), Some(5));
    assert_eq!(compute_checksum("00000000000000001"), Some(3));
}

#[test]
fn checksum_rejects_sign_and_fullwidth_digits() {
    assert_eq!(compute_checksum("+0201007777777777"), None);
    assert_eq!(compute_checksum("０0201007777777777"), None);
}

#[test]
fn non_digit_checksum_never_matches() {
    // A letter inside the first 17 characters would be a checksum mismatch
    // at this layer, but validate() reports it as non-numeric first.
    let code = "0020100777777777A1";
    assert_eq!(compute_checksum(code), None);
    assert_eq!(validate(code).failure, Some(ValidationFailure::NonNumeric));
}

// ---------------------------------------------------------------------------
// Length is counted in characters
// ---------------------------------------------------------------------------

#[test]
fn seventeen_characters() {
    assert_eq!(
        validate("00201007777777777").failure,
        Some(ValidationFailure::Length)
    );
}

#[test]
fn multibyte_code_of_eighteen_characters() {
    let code = "ñ02010077777777771";
    assert_eq!(code.chars().count(), 18);
    assert_eq!(validate(code).failure, Some(ValidationFailure::NonNumeric));
}

#[test]
fn multibyte_code_of_eighteen_bytes() {
    let code = "ñ0201007777777777";
    assert_eq!(code.len(), 18);
    assert_eq!(validate(code).failure, Some(ValidationFailure::Length));
}

// ---------------------------------------------------------------------------
// Construction never fails
// ---------------------------------------------------------------------------

#[test]
fn construct_with_empty_fields() {
    let code = construct("", "", "");
    assert_eq!(code, "000000000000000000");
    assert_eq!(validate(&code).failure, Some(ValidationFailure::UnknownBank));
}

#[test]
fn construct_with_negative_number() {
    let code = construct(-2, 10, 1);
    assert_eq!(code.chars().count(), CLABE_LENGTH);
    assert!(code.starts_with("0-2"));
    assert_eq!(validate(&code).failure, Some(ValidationFailure::NonNumeric));
}

#[test]
fn construct_with_multibyte_field() {
    let code = construct("ñ", 10, 1);
    assert_eq!(code.chars().count(), CLABE_LENGTH);
    assert!(code.starts_with("00ñ"));
}

#[test]
fn construct_with_u64_max_account() {
    // u64::MAX = 18446744073709551615; only the last 11 digits survive.
    let code = construct(2, 10, u64::MAX);
    assert_eq!(&code[6..17], "73709551615");
    assert!(!validate(&code).is_error);
}

// ---------------------------------------------------------------------------
// Shared city index
// ---------------------------------------------------------------------------

#[test]
fn concurrent_first_use_sees_one_index() {
    let handles: Vec<_> = (0..8)
        .map(|_| thread::spawn(|| city_index() as *const CityIndex as usize))
        .collect();
    let addrs: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(addrs.windows(2).all(|w| w[0] == w[1]));
    assert_eq!(city_index().len(), 407);
}

#[test]
fn concurrent_validation_agrees() {
    let handles: Vec<_> = (0..4)
        .map(|_| thread::spawn(|| validate("002028000000000019")))
        .collect();
    for handle in handles {
        let result = handle.join().unwrap();
        assert_eq!(
            result.city_name,
            Some("La Mesa, Rosarito, Tijuana [alternate]")
        );
    }
}
