//! # clabe
//!
//! Validation and construction of CLABE codes, the 18-digit standardized
//! bank account numbers used for interbank transfers in Mexico (SPEI).
//!
//! Validation checks structure and the check digit, then resolves the bank
//! and city (plaza) codes against compiled-in registries. It does not
//! confirm that an account exists.
//!
//! ## Quick Start
//!
//! ```rust
//! use clabe::*;
//!
//! let code = construct(2, 10, 7777777777_u64);
//! assert_eq!(code, "002010077777777771");
//! assert_eq!(compute_checksum(&code), Some(1));
//!
//! let result = validate(&code);
//! assert!(!result.is_error);
//! assert_eq!(result.bank_short_name, Some("BANAMEX"));
//! assert_eq!(result.city_name, Some("Aguascalientes"));
//!
//! let clabe: Clabe = code.parse().unwrap();
//! assert_eq!(clabe.bank().full_name, "Banco Nacional de México, S.A.");
//! ```
//!
//! ## Errors
//!
//! An invalid code is an ordinary outcome: [`validate`] returns a
//! [`ValidationResult`] with `is_error` set and a reason in `message`.
//! Misusing the API, such as passing a non-string JSON value to
//! `json::validate_value` (feature `json`), is reported as a [`ClabeError`].
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Checksum, validation, construction, bank & city registries |
//! | `json` | Validation of `serde_json::Value` input |
//! | `all` | Everything |

#![warn(missing_docs)]

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "json")]
pub mod json;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
