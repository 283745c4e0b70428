use std::fmt::Display;

use super::checksum::compute_checksum;
use super::clabe::{ACCOUNT_NUMBER_WIDTH, BANK_CODE_WIDTH, CITY_CODE_WIDTH, CLABE_LENGTH};

/// Build an 18-character CLABE from its fields and append the check digit.
///
/// Each field is left-padded with zeros to its width (3, 3, 11) and then
/// cut to its last `width` characters, so an oversized field keeps only its
/// trailing digits. No validation is done: non-digit input produces a code
/// of the right shape that [`validate`](super::validate) will reject, with
/// `0` standing in for the check digit that cannot be computed.
///
/// ```
/// assert_eq!(clabe::construct(2, 10, 7777777777_u64), "002010077777777771");
/// assert_eq!(clabe::construct("2", "10", "7777777777"), "002010077777777771");
/// ```
pub fn construct(
    bank_code: impl Display,
    city_code: impl Display,
    account_number: impl Display,
) -> String {
    let mut code = String::with_capacity(CLABE_LENGTH);
    push_fitted(&mut code, &bank_code.to_string(), BANK_CODE_WIDTH);
    push_fitted(&mut code, &city_code.to_string(), CITY_CODE_WIDTH);
    push_fitted(&mut code, &account_number.to_string(), ACCOUNT_NUMBER_WIDTH);

    // TODO: oversized fields are silently truncated; consider a checked
    // variant that reports them once callers need it.
    let check_digit = compute_checksum(&code).unwrap_or(0);
    code.push(char::from(b'0' + check_digit));
    code
}

/// Pad `value` with leading zeros to `width`, then keep the last `width` chars.
fn push_fitted(out: &mut String, value: &str, width: usize) {
    let len = value.chars().count();
    if len < width {
        out.extend(std::iter::repeat_n('0', width - len));
        out.push_str(value);
    } else {
        out.extend(value.chars().skip(len - width));
    }
}
