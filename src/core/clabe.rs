use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Range;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::banks::Bank;
use super::error::ValidationFailure;
use super::validation::check;

/// Total length of a CLABE.
pub const CLABE_LENGTH: usize = 18;
/// Width of the bank code field (digits 1–3).
pub const BANK_CODE_WIDTH: usize = 3;
/// Width of the city code field (digits 4–6).
pub const CITY_CODE_WIDTH: usize = 3;
/// Width of the account number field (digits 7–17).
pub const ACCOUNT_NUMBER_WIDTH: usize = 11;

pub(crate) const BANK_CODE: Range<usize> = 0..BANK_CODE_WIDTH;
pub(crate) const CITY_CODE: Range<usize> = BANK_CODE.end..BANK_CODE.end + CITY_CODE_WIDTH;
pub(crate) const ACCOUNT_NUMBER: Range<usize> =
    CITY_CODE.end..CITY_CODE.end + ACCOUNT_NUMBER_WIDTH;

/// Parse a digit field of an all-ASCII-digit code.
pub(crate) fn numeric_field(code: &str, range: Range<usize>) -> u16 {
    code.as_bytes()[range]
        .iter()
        .fold(0u16, |acc, b| acc * 10 + u16::from(b - b'0'))
}

/// A CLABE that passed every check: length, digits, checksum, and
/// registered bank and city codes.
///
/// ```
/// use clabe::Clabe;
///
/// let clabe: Clabe = "002010077777777771".parse().unwrap();
/// assert_eq!(clabe.bank().short_name, "BANAMEX");
/// assert_eq!(clabe.city(), "Aguascalientes");
/// assert_eq!(clabe.account_number(), "07777777777");
/// ```
#[derive(Debug, Clone)]
pub struct Clabe {
    code: String,
    bank: &'static Bank,
    city: &'static str,
}

impl Clabe {
    /// Parse and fully validate a code.
    pub fn parse(code: &str) -> Result<Self, ValidationFailure> {
        let mut partial_bank = None;
        let (bank, city) = check(code, &mut partial_bank)?;
        Ok(Self {
            code: code.to_string(),
            bank,
            city,
        })
    }

    /// Build a code from its fields and validate the result.
    ///
    /// Fails when the bank or city code is not registered, or when the
    /// fields contain non-digit characters.
    pub fn from_parts(
        bank_code: impl fmt::Display,
        city_code: impl fmt::Display,
        account_number: impl fmt::Display,
    ) -> Result<Self, ValidationFailure> {
        Self::parse(&super::construct(bank_code, city_code, account_number))
    }

    /// The full 18-digit code.
    pub fn as_str(&self) -> &str {
        &self.code
    }

    /// Numeric bank code (digits 1–3).
    pub fn bank_code(&self) -> u16 {
        self.bank.code
    }

    /// Numeric city (plaza) code (digits 4–6).
    pub fn city_code(&self) -> u16 {
        numeric_field(&self.code, CITY_CODE)
    }

    /// The 11-digit account number, zero-padded.
    pub fn account_number(&self) -> &str {
        &self.code[ACCOUNT_NUMBER]
    }

    /// The trailing check digit.
    pub fn check_digit(&self) -> u8 {
        self.code.as_bytes()[CLABE_LENGTH - 1] - b'0'
    }

    /// The issuing institution.
    pub fn bank(&self) -> &'static Bank {
        self.bank
    }

    /// Joined city name(s) for the plaza code.
    pub fn city(&self) -> &'static str {
        self.city
    }

    /// Consume the code, returning its string form.
    pub fn into_string(self) -> String {
        self.code
    }
}

impl PartialEq for Clabe {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Clabe {}

impl Hash for Clabe {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl fmt::Display for Clabe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

impl FromStr for Clabe {
    type Err = ValidationFailure;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Clabe {
    fn as_ref(&self) -> &str {
        &self.code
    }
}

impl Serialize for Clabe {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.code)
    }
}

impl<'de> Deserialize<'de> for Clabe {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Self::parse(&code).map_err(serde::de::Error::custom)
    }
}
