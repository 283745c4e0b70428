use thiserror::Error;

/// Misuse of the API that the caller must fix at the call site.
///
/// These are never produced for a malformed or unregistered code; those are
/// reported through [`ValidationResult`](super::ValidationResult).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ClabeError {
    /// A dynamically typed input was not a string.
    #[error("clabe::validate(code) -- expected string, got: {got}")]
    ExpectedString {
        /// Type name of the value that was supplied.
        got: &'static str,
    },
}

/// Why a code failed validation.
///
/// Checks run in declaration order and the first failure wins, so a code
/// has at most one failure. The `Display` text is the message shown to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationFailure {
    /// Not exactly 18 characters.
    #[error("Must be exactly 18 digits long")]
    Length,

    /// Contains a character other than `0`–`9`.
    #[error("Must be only numeric digits (no letters)")]
    NonNumeric,

    /// The 18th digit does not match the digit computed from the first 17.
    #[error("Invalid checksum, last digit should be: {expected}")]
    Checksum {
        /// The check digit the code should end with.
        expected: u8,
    },

    /// The bank code (digits 1–3) is not registered.
    #[error("Invalid bank code")]
    UnknownBank,

    /// The city code (digits 4–6) is not registered.
    #[error("Invalid city code")]
    UnknownCity,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_messages() {
        assert_eq!(
            ValidationFailure::Length.to_string(),
            "Must be exactly 18 digits long"
        );
        assert_eq!(
            ValidationFailure::Checksum { expected: 7 }.to_string(),
            "Invalid checksum, last digit should be: 7"
        );
        assert_eq!(ValidationFailure::UnknownCity.to_string(), "Invalid city code");
    }

    #[test]
    fn expected_string_message() {
        let err = ClabeError::ExpectedString { got: "number" };
        assert_eq!(
            err.to_string(),
            "clabe::validate(code) -- expected string, got: number"
        );
    }
}
