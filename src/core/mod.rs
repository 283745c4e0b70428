//! CLABE checksum, validation, construction and reference registries.
//!
//! A CLABE is the 18-digit standardized bank account code used for
//! interbank transfers in Mexico:
//!
//! | Digits | Field |
//! |--------|-------|
//! | 1–3 | bank code |
//! | 4–6 | city (plaza) code |
//! | 7–17 | account number |
//! | 18 | check digit |

mod banks;
mod checksum;
mod cities;
mod clabe;
mod construct;
mod error;
mod validation;

pub use banks::{Bank, banks, lookup_bank};
pub use checksum::{CHECKSUM_SPAN, compute_checksum};
pub use cities::{City, CityIndex, cities, city_index, lookup_city};
pub use clabe::{ACCOUNT_NUMBER_WIDTH, BANK_CODE_WIDTH, CITY_CODE_WIDTH, CLABE_LENGTH, Clabe};
pub use construct::construct;
pub use error::*;
pub use validation::{ValidationResult, is_valid, validate};
