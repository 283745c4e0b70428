//! Validation of dynamically typed input.
//!
//! Codes that arrive as JSON (form posts, API payloads) are not guaranteed
//! to be strings. A non-string value is a caller bug rather than an invalid
//! code, so it is returned as [`ClabeError`] instead of a failed
//! [`ValidationResult`].
//!
//! # Example
//!
//! ```
//! use clabe::json::validate_value;
//! use serde_json::json;
//!
//! let result = validate_value(&json!("002010077777777771")).unwrap();
//! assert!(!result.is_error);
//!
//! assert!(validate_value(&json!(12345)).is_err());
//! ```

use serde_json::Value;

use crate::core::{ClabeError, ValidationResult, validate};

/// Validate a JSON value that should hold a CLABE string.
pub fn validate_value(value: &Value) -> Result<ValidationResult, ClabeError> {
    match value {
        Value::String(code) => Ok(validate(code)),
        other => Err(ClabeError::ExpectedString {
            got: json_type_name(other),
        }),
    }
}

/// Serialize the result of [`validate`] for a JSON response body.
pub fn validate_to_json(code: &str) -> Result<Value, serde_json::Error> {
    serde_json::to_value(validate(code))
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn string_is_validated() {
        let result = validate_value(&json!("12345")).unwrap();
        assert!(result.is_error);
    }

    #[test]
    fn number_is_rejected() {
        let err = validate_value(&json!(12345)).unwrap_err();
        assert_eq!(err, ClabeError::ExpectedString { got: "number" });
    }

    #[test]
    fn other_types_are_rejected() {
        for (value, name) in [
            (json!(null), "null"),
            (json!(true), "boolean"),
            (json!(["002010077777777771"]), "array"),
            (json!({"clabe": "002010077777777771"}), "object"),
        ] {
            assert_eq!(
                validate_value(&value),
                Err(ClabeError::ExpectedString { got: name })
            );
        }
    }

    #[test]
    fn json_body_uses_camel_case() {
        let body = validate_to_json("002010077777777771").unwrap();
        assert_eq!(body["isError"], json!(false));
        assert_eq!(body["bankShortName"], json!("BANAMEX"));
        assert_eq!(body["cityName"], json!("Aguascalientes"));
        assert!(body.get("failure").is_none());
    }

    #[test]
    fn json_body_omits_unresolved_fields() {
        let body = validate_to_json("001010077777777772").unwrap();
        assert_eq!(body["isError"], json!(true));
        assert_eq!(body["message"], json!("Invalid bank code"));
        assert!(body.get("bankFullName").is_none());
        assert!(body.get("cityName").is_none());
    }
}
