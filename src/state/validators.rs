//! Format checks for individual field values

use regex::Regex;
use std::sync::LazyLock;

/// 10-11 digit mobile number, or a landline written as
/// `0<std code><phone number>` of at most 13 digits.
static PHONE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[0-9]{10,11}|0[1-9][0-9]{8,11})$").expect("valid phone regex")
});

/// Signed decimal numeral with up to three integer digits
static COORDINATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[-+]?[0-9]{1,3}(?:\.[0-9]+)?$").expect("valid coordinate regex")
});

/// Largest absolute value accepted for a longitude
const COORDINATE_BOUND: f64 = 180.0;

/// Largest absolute value accepted for a latitude
const LATITUDE_BOUND: f64 = 90.0;

/// Check whether `s` is an acceptable contact number
pub fn is_valid_phone(s: &str) -> bool {
    PHONE_PATTERN.is_match(s)
}

fn is_coordinate_within(s: &str, bound: f64) -> bool {
    if !COORDINATE_PATTERN.is_match(s) {
        return false;
    }
    s.parse::<f64>().map(|v| v.abs() <= bound).unwrap_or(false)
}

/// Check whether `s` is an acceptable longitude
pub fn is_valid_coordinate(s: &str) -> bool {
    is_coordinate_within(s, COORDINATE_BOUND)
}

/// Check whether `s` is an acceptable latitude
pub fn is_valid_latitude(s: &str) -> bool {
    is_coordinate_within(s, LATITUDE_BOUND)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_accepts_ten_and_eleven_digit_mobiles() {
        assert!(is_valid_phone("9876543210"));
        assert!(is_valid_phone("91987654321"));
    }

    #[test]
    fn test_phone_accepts_landline_with_std_code() {
        assert!(is_valid_phone("04842345678"));
        assert!(is_valid_phone("0471234567890"));
    }

    #[test]
    fn test_phone_rejects_empty_and_non_digits() {
        assert!(!is_valid_phone(""));
        assert!(!is_valid_phone("98765abcde"));
        assert!(!is_valid_phone("+919876543210"));
        assert!(!is_valid_phone("98765 43210"));
        assert!(!is_valid_phone("0484-2345678"));
    }

    #[test]
    fn test_phone_rejects_wrong_lengths() {
        assert!(!is_valid_phone("987654321"));
        assert!(!is_valid_phone("987654321012"));
        assert!(!is_valid_phone("04712345678901"));
    }

    #[test]
    fn test_phone_is_pure() {
        for input in ["9876543210", "abc", ""] {
            assert_eq!(is_valid_phone(input), is_valid_phone(input));
        }
    }

    #[test]
    fn test_coordinate_accepts_signed_decimals() {
        assert!(is_valid_coordinate("9.9312"));
        assert!(is_valid_coordinate("-76.2673"));
        assert!(is_valid_coordinate("+12.5"));
        assert!(is_valid_coordinate("76"));
        assert!(is_valid_coordinate("180"));
        assert!(is_valid_coordinate("-180.0"));
    }

    #[test]
    fn test_coordinate_rejects_non_numeric() {
        assert!(!is_valid_coordinate(""));
        assert!(!is_valid_coordinate("north"));
        assert!(!is_valid_coordinate("9.93N"));
        assert!(!is_valid_coordinate("9."));
        assert!(!is_valid_coordinate(".5"));
        assert!(!is_valid_coordinate("9,93"));
    }

    #[test]
    fn test_coordinate_rejects_out_of_range() {
        assert!(!is_valid_coordinate("180.0001"));
        assert!(!is_valid_coordinate("-999"));
        assert!(!is_valid_coordinate("1234.5"));
    }

    #[test]
    fn test_latitude_is_limited_to_ninety_degrees() {
        assert!(is_valid_latitude("9.9312"));
        assert!(is_valid_latitude("-90"));
        assert!(is_valid_latitude("90.0"));
        assert!(!is_valid_latitude("90.5"));
        assert!(!is_valid_latitude("120"));
        assert!(!is_valid_latitude("north"));
        // Still a valid longitude
        assert!(is_valid_coordinate("120"));
    }
}
