//! GTIN (Global Trade Item Number) value object.
//!
//! Format check only: 13 or 14 ASCII digits. The GS1 check digit is
//! not verified.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::GTIN_PATTERN;
use crate::errors::{AppError, AppResult};

static GTIN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(GTIN_PATTERN).expect("GTIN pattern is a valid regex"));

/// Returns true iff `value` is exactly 13 or 14 ASCII decimal digits.
pub fn validate_gtin(value: &str) -> bool {
    GTIN_RE.is_match(value)
}

/// A GTIN that passed [`validate_gtin`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Gtin(String);

impl Gtin {
    /// Validate and wrap a GTIN.
    ///
    /// # Errors
    /// Returns a validation error if the format is wrong.
    pub fn parse(value: &str) -> AppResult<Self> {
        if validate_gtin(value) {
            Ok(Self(value.to_string()))
        } else {
            Err(AppError::validation(
                "Invalid GTIN format - must be 13 or 14 digits",
            ))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for Gtin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Gtin {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_13_and_14_digits() {
        assert!(validate_gtin("4006381333931"));
        assert!(validate_gtin("03000123456789"));
    }

    #[test]
    fn test_rejects_wrong_lengths() {
        assert!(!validate_gtin(""));
        assert!(!validate_gtin("400638133393"));
        assert!(!validate_gtin("400638133393100"));
    }

    #[test]
    fn test_rejects_non_digits() {
        assert!(!validate_gtin("400638133393A"));
        assert!(!validate_gtin("4006-38133393"));
        assert!(!validate_gtin(" 4006381333931"));
        assert!(!validate_gtin("4006381333931\n"));
    }

    #[test]
    fn test_rejects_non_ascii_digits() {
        // Arabic-Indic and fullwidth digits are Unicode \d but not GTIN digits
        assert!(!validate_gtin("٤٠٠٦٣٨١٣٣٣٩٣١"));
        assert!(!validate_gtin("４００６３８１３３３９３１"));
    }

    #[test]
    fn test_check_digit_is_not_verified() {
        // Wrong GS1 check digit is still a well-formed GTIN
        assert!(validate_gtin("4006381333932"));
    }

    #[test]
    fn test_exhaustive_lengths() {
        for len in 0..20 {
            let candidate = "7".repeat(len);
            assert_eq!(validate_gtin(&candidate), len == 13 || len == 14, "len {len}");
        }
    }

    #[test]
    fn test_parse() {
        let gtin = Gtin::parse("03000123456789").unwrap();
        assert_eq!(gtin.as_str(), "03000123456789");
        assert!(matches!(Gtin::parse("abc"), Err(AppError::Validation(_))));
    }
}
