#![cfg(feature = "json")]

use clabe::ClabeError;
use clabe::json::*;
use serde_json::json;

#[test]
fn string_value_is_validated() {
    let result = validate_value(&json!("002010077777777771")).unwrap();
    assert!(!result.is_error);
    assert_eq!(result.bank_short_name, Some("BANAMEX"));
}

#[test]
fn invalid_string_is_a_result_not_an_error() {
    let result = validate_value(&json!("12345")).unwrap();
    assert!(result.is_error);
    assert!(result.message.contains("18 digits"));
}

#[test]
fn number_is_a_programmer_error() {
    let err = validate_value(&json!(12345)).unwrap_err();
    assert!(matches!(err, ClabeError::ExpectedString { got: "number" }));
    insta::assert_snapshot!(
        err.to_string(),
        @"clabe::validate(code) -- expected string, got: number"
    );
}

#[test]
fn result_serializes_to_camel_case() {
    let body = validate_to_json("002001077777777777").unwrap();
    assert_eq!(
        body,
        json!({
            "isError": true,
            "message": "Invalid city code",
            "bankFullName": "Banco Nacional de México, S.A.",
            "bankShortName": "BANAMEX",
        })
    );
}

#[test]
fn registries_serialize() {
    let bank = clabe::lookup_bank(2).unwrap();
    assert_eq!(
        serde_json::to_value(bank).unwrap(),
        json!({
            "code": 2,
            "shortName": "BANAMEX",
            "fullName": "Banco Nacional de México, S.A.",
        })
    );
    let city = &clabe::cities()[0];
    assert_eq!(
        serde_json::to_value(city).unwrap(),
        json!({ "code": 10, "name": "Aguascalientes" })
    );
}
