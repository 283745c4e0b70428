use serde::Serialize;

use super::banks::{Bank, lookup_bank};
use super::checksum::compute_checksum;
use super::cities::lookup_city;
use super::clabe::{BANK_CODE, CITY_CODE, CLABE_LENGTH, numeric_field};
use super::error::ValidationFailure;

/// Outcome of [`validate`].
///
/// `bank_*` and `city_name` are filled for every check that passed before
/// the first failure: a code rejected for an unknown city still reports its
/// bank, while a code rejected for an unknown bank has no city.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    /// `true` when the code was rejected.
    pub is_error: bool,
    /// Human-readable verdict: the failure reason, or the bank and city names.
    pub message: String,
    /// Registered legal name of the bank, once the bank code has resolved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_full_name: Option<&'static str>,
    /// Commercial short name of the bank, once the bank code has resolved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_short_name: Option<&'static str>,
    /// Joined city name(s), only when the whole code is valid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city_name: Option<&'static str>,
    /// Typed failure reason, `None` when valid.
    #[serde(skip)]
    pub failure: Option<ValidationFailure>,
}

impl ValidationResult {
    fn valid(bank: &'static Bank, city: &'static str) -> Self {
        Self {
            is_error: false,
            message: format!("Valid: {} ({})", bank.full_name, city),
            bank_full_name: Some(bank.full_name),
            bank_short_name: Some(bank.short_name),
            city_name: Some(city),
            failure: None,
        }
    }

    fn invalid(failure: ValidationFailure, bank: Option<&'static Bank>) -> Self {
        Self {
            is_error: true,
            message: failure.to_string(),
            bank_full_name: bank.map(|b| b.full_name),
            bank_short_name: bank.map(|b| b.short_name),
            city_name: None,
            failure: Some(failure),
        }
    }

    /// `true` when every check passed.
    pub fn is_valid(&self) -> bool {
        !self.is_error
    }
}

/// Validate a CLABE.
///
/// Checks run in a fixed order and stop at the first failure:
///
/// 1. exactly 18 characters
/// 2. only ASCII digits
/// 3. the 18th digit matches [`compute_checksum`] over the first 17
/// 4. the bank code (digits 1–3) is registered
/// 5. the city code (digits 4–6) is registered
///
/// Rejection is reported in the result, never as a panic or `Err`.
///
/// ```
/// let result = clabe::validate("002010077777777771");
/// assert!(!result.is_error);
/// assert_eq!(result.bank_short_name, Some("BANAMEX"));
///
/// let result = clabe::validate("12345");
/// assert!(result.is_error);
/// assert_eq!(result.message, "Must be exactly 18 digits long");
/// ```
pub fn validate(code: &str) -> ValidationResult {
    let mut partial_bank = None;
    match check(code, &mut partial_bank) {
        Ok((bank, city)) => ValidationResult::valid(bank, city),
        Err(failure) => {
            tracing::trace!(%failure, "CLABE rejected");
            ValidationResult::invalid(failure, partial_bank)
        }
    }
}

/// Shorthand for `!validate(code).is_error`.
pub fn is_valid(code: &str) -> bool {
    let mut partial_bank = None;
    check(code, &mut partial_bank).is_ok()
}

/// Run all checks in order. `bank` is set as soon as the bank code resolves,
/// so it is available even when the city check fails afterwards.
pub(crate) fn check(
    code: &str,
    bank: &mut Option<&'static Bank>,
) -> Result<(&'static Bank, &'static str), ValidationFailure> {
    if code.chars().count() != CLABE_LENGTH {
        return Err(ValidationFailure::Length);
    }
    if !code.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationFailure::NonNumeric);
    }

    let declared = code.as_bytes()[CLABE_LENGTH - 1] - b'0';
    let expected = compute_checksum(code).ok_or(ValidationFailure::NonNumeric)?;
    if expected != declared {
        return Err(ValidationFailure::Checksum { expected });
    }

    let found =
        lookup_bank(numeric_field(code, BANK_CODE)).ok_or(ValidationFailure::UnknownBank)?;
    *bank = Some(found);

    let city =
        lookup_city(numeric_field(code, CITY_CODE)).ok_or(ValidationFailure::UnknownCity)?;
    Ok((found, city))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_banamex() {
        let result = validate("002010077777777771");
        assert!(result.is_valid());
        assert_eq!(
            result.message,
            "Valid: Banco Nacional de México, S.A. (Aguascalientes)"
        );
        assert_eq!(result.bank_full_name, Some("Banco Nacional de México, S.A."));
        assert_eq!(result.bank_short_name, Some("BANAMEX"));
        assert_eq!(result.city_name, Some("Aguascalientes"));
        assert!(result.failure.is_none());
    }

    #[test]
    fn too_short() {
        let result = validate("12345");
        assert!(result.is_error);
        assert_eq!(result.failure, Some(ValidationFailure::Length));
        assert!(result.message.contains("18 digits"));
        assert!(result.bank_short_name.is_none());
    }

    #[test]
    fn too_long() {
        let result = validate("0020100777777777710");
        assert_eq!(result.failure, Some(ValidationFailure::Length));
    }

    #[test]
    fn letter_fails_numeric_check_before_checksum() {
        let result = validate("00201007777777A771");
        assert_eq!(result.failure, Some(ValidationFailure::NonNumeric));
        assert_eq!(result.message, "Must be only numeric digits (no letters)");
    }

    #[test]
    fn multibyte_character_counts_once() {
        // 18 characters, 19 bytes.
        let result = validate("00201007777777é771");
        assert_eq!(result.failure, Some(ValidationFailure::NonNumeric));
    }

    #[test]
    fn wrong_check_digit() {
        let result = validate("002010077777777775");
        assert_eq!(
            result.failure,
            Some(ValidationFailure::Checksum { expected: 1 })
        );
        assert_eq!(result.message, "Invalid checksum, last digit should be: 1");
        assert!(result.bank_full_name.is_none());
    }

    #[test]
    fn unknown_bank_skips_city() {
        let result = validate("001010077777777772");
        assert_eq!(result.failure, Some(ValidationFailure::UnknownBank));
        assert_eq!(result.message, "Invalid bank code");
        assert!(result.bank_short_name.is_none());
        assert!(result.city_name.is_none());
    }

    #[test]
    fn unknown_city_keeps_bank() {
        let result = validate("002001077777777777");
        assert_eq!(result.failure, Some(ValidationFailure::UnknownCity));
        assert_eq!(result.message, "Invalid city code");
        assert_eq!(result.bank_short_name, Some("BANAMEX"));
        assert!(result.city_name.is_none());
    }

    #[test]
    fn is_valid_shorthand() {
        assert!(is_valid("002010077777777771"));
        assert!(!is_valid("002010077777777772"));
        assert!(!is_valid(""));
    }
}
