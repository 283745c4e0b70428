//! CLABE check digit.

/// Number of leading characters covered by the check digit.
pub const CHECKSUM_SPAN: usize = 17;

/// Weights applied cyclically to each position.
const WEIGHTS: [u32; 3] = [3, 7, 1];

/// Compute the check digit over the first 17 characters of `code`.
///
/// Characters past the 17th are ignored and shorter input is summed over
/// what is present; length is not checked here. Each position contributes
/// `(digit * weight) mod 10` with weights `3, 7, 1` repeating, and the
/// check digit is `(10 - sum mod 10) mod 10`.
///
/// Returns `None` if any covered character is not an ASCII digit. Such a
/// code can never match a declared check digit, so callers that compare
/// against the 18th digit reject it as a checksum mismatch.
///
/// ```
/// use clabe::compute_checksum;
///
/// assert_eq!(compute_checksum("00201007777777777"), Some(1));
/// assert_eq!(compute_checksum("0020100777777777A"), None);
/// ```
pub fn compute_checksum(code: &str) -> Option<u8> {
    let mut sum = 0u32;
    for (i, c) in code.chars().take(CHECKSUM_SPAN).enumerate() {
        let digit = c.to_digit(10)?;
        sum += (digit * WEIGHTS[i % WEIGHTS.len()]) % 10;
    }
    Some(((10 - sum % 10) % 10) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banamex_reference() {
        assert_eq!(compute_checksum("00201007777777777"), Some(1));
    }

    #[test]
    fn ignores_trailing_characters() {
        assert_eq!(compute_checksum("002010077777777771"), Some(1));
        assert_eq!(compute_checksum("00201007777777777XYZ"), Some(1));
    }

    #[test]
    fn all_zeros() {
        assert_eq!(compute_checksum("00000000000000000"), Some(0));
    }

    #[test]
    fn short_input_is_summed() {
        // 1*3 + 2*7 + 3*1 + 4*3 + 5*7 (each mod 10) = 3 + 4 + 3 + 2 + 5 = 17
        assert_eq!(compute_checksum("12345"), Some(3));
        assert_eq!(compute_checksum(""), Some(0));
    }

    #[test]
    fn non_digit_has_no_checksum() {
        assert_eq!(compute_checksum("00201007777A77777"), None);
        assert_eq!(compute_checksum("-0201007777777777"), None);
        assert_eq!(compute_checksum("٣0201007777777777"), None);
    }

    #[test]
    fn non_digit_past_span_is_ignored() {
        assert_eq!(compute_checksum("00201007777777777A"), Some(1));
    }
}
