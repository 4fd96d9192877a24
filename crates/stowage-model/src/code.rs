// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Container codes in an ISO 6346-like format.
//!
//! A code is eleven ASCII characters: a three-letter owner code, the category
//! identifier `U` (freight container), a six-digit serial number, and a single
//! check digit. The check digit uses a simplified scheme rather than the ISO
//! weighting: digits count at face value, letters `A` to `Z` count as `0` to
//! `25`, and the check digit is the last decimal digit of the sum over the
//! first ten characters.
//!
//! ```rust
//! use stowage_model::code::ContainerCode;
//!
//! let code: ContainerCode = "MSCU6639871".parse().unwrap();
//! assert_eq!(code.owner_code(), "MSC");
//! assert_eq!(code.serial_number(), "663987");
//! assert_eq!(code.check_digit(), 1);
//! ```

use std::str::FromStr;
use thiserror::Error;

/// The number of characters in a container code.
pub const CODE_LENGTH: usize = 11;

/// The only category identifier accepted for freight containers.
pub const FREIGHT_CATEGORY_IDENTIFIER: char = 'U';

const OWNER_CODE_END: usize = 3;
const SERIAL_START: usize = 4;
const SERIAL_END: usize = 10;
const MAX_SERIAL_NUMBER: u32 = 999_999;

/// The reasons a string is rejected as a container code.
///
/// Checks run in declaration order; the first failing check is reported.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodeError {
    #[error("container code must be 11 characters long, got {0}")]
    InvalidLength(usize),
    #[error("owner code '{0}' does not consist of three upper-case letters")]
    InvalidOwnerCode(String),
    #[error("category identifier '{0}' is not 'U'")]
    InvalidCategoryIdentifier(char),
    #[error("serial number '{0}' does not consist of six digits")]
    InvalidSerialNumber(String),
    #[error("check digit '{found}' is incorrect, expected {expected}")]
    InvalidCheckDigit { expected: u8, found: char },
}

/// A validated container code.
///
/// Two codes are equal exactly when their strings are equal.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct ContainerCode {
    code: String,
}

/// Returns the value a single code character contributes to the check sum.
#[inline]
fn char_value(c: char) -> u32 {
    match c {
        '0'..='9' => c as u32 - '0' as u32,
        'A'..='Z' => c as u32 - 'A' as u32,
        _ => 0,
    }
}

impl ContainerCode {
    /// Validates `code` and wraps it.
    ///
    /// # Errors
    ///
    /// Returns a [`CodeError`] describing the first rule the string breaks.
    pub fn new(code: &str) -> Result<Self, CodeError> {
        let chars: Vec<char> = code.chars().collect();
        if chars.len() != CODE_LENGTH {
            return Err(CodeError::InvalidLength(chars.len()));
        }

        let owner = &chars[..OWNER_CODE_END];
        if !owner.iter().all(char::is_ascii_uppercase) {
            return Err(CodeError::InvalidOwnerCode(owner.iter().collect()));
        }

        let category = chars[OWNER_CODE_END];
        if category != FREIGHT_CATEGORY_IDENTIFIER {
            return Err(CodeError::InvalidCategoryIdentifier(category));
        }

        let serial = &chars[SERIAL_START..SERIAL_END];
        if !serial.iter().all(char::is_ascii_digit) {
            return Err(CodeError::InvalidSerialNumber(serial.iter().collect()));
        }

        let expected = Self::compute_check_digit(&chars[..SERIAL_END]);
        let found = chars[SERIAL_END];
        if found.to_digit(10) != Some(u32::from(expected)) {
            return Err(CodeError::InvalidCheckDigit { expected, found });
        }

        Ok(Self {
            code: code.to_owned(),
        })
    }

    /// Builds a code from an owner code and a serial number, appending the
    /// freight category identifier and the matching check digit.
    ///
    /// # Errors
    ///
    /// Returns [`CodeError::InvalidSerialNumber`] if `serial_number` has more
    /// than six digits, or any error [`ContainerCode::new`] reports for the
    /// owner code.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stowage_model::code::ContainerCode;
    ///
    /// let code = ContainerCode::from_parts("MSC", 663987).unwrap();
    /// assert_eq!(code.as_str(), "MSCU6639871");
    /// ```
    pub fn from_parts(owner_code: &str, serial_number: u32) -> Result<Self, CodeError> {
        if serial_number > MAX_SERIAL_NUMBER {
            return Err(CodeError::InvalidSerialNumber(serial_number.to_string()));
        }

        let body = format!("{owner_code}{FREIGHT_CATEGORY_IDENTIFIER}{serial_number:06}");
        let chars: Vec<char> = body.chars().collect();
        let check = if chars.len() == SERIAL_END {
            Self::compute_check_digit(&chars)
        } else {
            0
        };

        Self::new(&format!("{body}{check}"))
    }

    /// Computes the check digit for the ten leading characters of a code.
    ///
    /// Characters outside `0-9` and `A-Z` contribute nothing; validation
    /// rejects them before the check digit is ever consulted.
    pub fn compute_check_digit(body: &[char]) -> u8 {
        let sum: u32 = body.iter().copied().map(char_value).sum();
        (sum % 10) as u8
    }

    /// Returns the full code as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.code
    }

    /// Returns the three-letter owner code.
    #[inline]
    pub fn owner_code(&self) -> &str {
        &self.code[..OWNER_CODE_END]
    }

    /// Returns the six-digit serial number.
    #[inline]
    pub fn serial_number(&self) -> &str {
        &self.code[SERIAL_START..SERIAL_END]
    }

    /// Returns the check digit.
    #[inline]
    pub fn check_digit(&self) -> u8 {
        self.code.as_bytes()[SERIAL_END] - b'0'
    }
}

impl FromStr for ContainerCode {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for ContainerCode {
    type Error = CodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<ContainerCode> for String {
    fn from(code: ContainerCode) -> Self {
        code.code
    }
}

impl AsRef<str> for ContainerCode {
    fn as_ref(&self) -> &str {
        &self.code
    }
}

impl std::fmt::Display for ContainerCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.code)
    }
}

impl std::fmt::Debug for ContainerCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ContainerCode({})", self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_code_and_accessors() {
        let code = ContainerCode::new("MSCU6639871").unwrap();
        assert_eq!(code.as_str(), "MSCU6639871");
        assert_eq!(code.owner_code(), "MSC");
        assert_eq!(code.serial_number(), "663987");
        assert_eq!(code.check_digit(), 1);
        assert_eq!(code.to_string(), "MSCU6639871");
        assert_eq!(format!("{:?}", code), "ContainerCode(MSCU6639871)");
    }

    #[test]
    fn test_check_digit_example_sum() {
        // 12 + 18 + 2 + 20 + 6 + 6 + 3 + 9 + 8 + 7 = 91
        let body: Vec<char> = "MSCU663987".chars().collect();
        assert_eq!(ContainerCode::compute_check_digit(&body), 1);
    }

    #[test]
    fn test_wrong_length_is_rejected() {
        assert_eq!(
            ContainerCode::new("MSCU63988"),
            Err(CodeError::InvalidLength(9))
        );
        assert_eq!(
            ContainerCode::new("MSCU66398712"),
            Err(CodeError::InvalidLength(12))
        );
        assert_eq!(ContainerCode::new(""), Err(CodeError::InvalidLength(0)));
    }

    #[test]
    fn test_owner_code_must_be_upper_case_letters() {
        for bad in ["mscu6639871", "msCU6639871", "mSCU6639871", "282U6639871"] {
            assert!(
                matches!(ContainerCode::new(bad), Err(CodeError::InvalidOwnerCode(_))),
                "{bad} should be rejected"
            );
        }
        // Too few letters shifts a serial digit into the category position.
        assert_eq!(
            ContainerCode::new("MSU62639871"),
            Err(CodeError::InvalidCategoryIdentifier('6'))
        );
    }

    #[test]
    fn test_category_identifier_must_be_u() {
        assert_eq!(
            ContainerCode::new("MSCV6639872"),
            Err(CodeError::InvalidCategoryIdentifier('V'))
        );
        assert_eq!(
            ContainerCode::new("MSC<6639871"),
            Err(CodeError::InvalidCategoryIdentifier('<'))
        );
        assert_eq!(
            ContainerCode::new("MSCu6639871"),
            Err(CodeError::InvalidCategoryIdentifier('u'))
        );
    }

    #[test]
    fn test_serial_number_must_be_digits() {
        assert_eq!(
            ContainerCode::new("MSCUKKKKKK2"),
            Err(CodeError::InvalidSerialNumber("KKKKKK".to_string()))
        );
        assert!(matches!(
            ContainerCode::new("MSCU}}}}}}2"),
            Err(CodeError::InvalidSerialNumber(_))
        ));
        assert!(matches!(
            ContainerCode::new("MSCUU669870"),
            Err(CodeError::InvalidSerialNumber(_))
        ));
    }

    #[test]
    fn test_check_digit_must_match() {
        assert_eq!(
            ContainerCode::new("MSCU6639873"),
            Err(CodeError::InvalidCheckDigit {
                expected: 1,
                found: '3'
            })
        );
        assert_eq!(
            ContainerCode::new("MSCU663987~"),
            Err(CodeError::InvalidCheckDigit {
                expected: 1,
                found: '~'
            })
        );
    }

    #[test]
    fn test_from_parts_appends_check_digit() {
        let code = ContainerCode::from_parts("ABC", 123456).unwrap();
        // 0 + 1 + 2 + 20 + 1 + 2 + 3 + 4 + 5 + 6 = 44
        assert_eq!(code.as_str(), "ABCU1234564");

        let padded = ContainerCode::from_parts("XYZ", 7).unwrap();
        assert_eq!(padded.serial_number(), "000007");
    }

    #[test]
    fn test_from_parts_rejects_bad_parts() {
        assert!(matches!(
            ContainerCode::from_parts("ABC", 1_000_000),
            Err(CodeError::InvalidSerialNumber(_))
        ));
        assert!(matches!(
            ContainerCode::from_parts("abc", 1),
            Err(CodeError::InvalidOwnerCode(_))
        ));
        assert!(matches!(
            ContainerCode::from_parts("ABCD", 1),
            Err(CodeError::InvalidLength(12))
        ));
    }

    #[test]
    fn test_equality_is_by_string_value() {
        let a: ContainerCode = "MSCU6639871".parse().unwrap();
        let b = ContainerCode::try_from("MSCU6639871".to_string()).unwrap();
        let c = ContainerCode::from_parts("ABC", 123456).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(String::from(a), "MSCU6639871");
    }
}
