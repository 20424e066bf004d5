use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of digits in an Aadhar number.
pub const IDENTITY_NUMBER_LENGTH: usize = 12;

/// Check whether the given string is a structurally valid Aadhar number:
/// exactly [`IDENTITY_NUMBER_LENGTH`] ASCII digits.
///
/// No checksum is verified.
pub fn is_valid_identity_number(candidate: &str) -> bool {
    candidate.len() == IDENTITY_NUMBER_LENGTH && candidate.bytes().all(|b| b.is_ascii_digit())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("not a 12-digit identity number")]
pub struct InvalidIdentityNumber;

/// A voter's Aadhar number. Only constructible from a valid string, so
/// holding one is proof that validation already happened.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct IdentityNumber(String);

impl IdentityNumber {
    /// Validate an optional, possibly-empty field from a request.
    pub fn parse(candidate: Option<&str>) -> Result<Self, InvalidIdentityNumber> {
        candidate.ok_or(InvalidIdentityNumber)?.parse()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for IdentityNumber {
    type Err = InvalidIdentityNumber;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if is_valid_identity_number(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(InvalidIdentityNumber)
        }
    }
}

impl TryFrom<String> for IdentityNumber {
    type Error = InvalidIdentityNumber;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if is_valid_identity_number(&value) {
            Ok(Self(value))
        } else {
            Err(InvalidIdentityNumber)
        }
    }
}

impl From<IdentityNumber> for String {
    fn from(id: IdentityNumber) -> Self {
        id.0
    }
}

/// Example data for tests.
#[cfg(test)]
mod examples {
    use super::*;

    impl IdentityNumber {
        pub fn example() -> Self {
            Self("123456789012".to_string())
        }

        pub fn example2() -> Self {
            Self("111111111111".to_string())
        }

        pub fn example3() -> Self {
            Self("987654321098".to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_twelve_digits() {
        assert!(is_valid_identity_number("123456789012"));
        assert!(is_valid_identity_number("000000000000"));
        assert_eq!(
            "123456789012".parse::<IdentityNumber>().unwrap().as_str(),
            "123456789012"
        );
    }

    #[test]
    fn rejects_wrong_length() {
        for candidate in ["", "12345", "12345678901", "1234567890123"] {
            assert!(!is_valid_identity_number(candidate), "{candidate:?}");
            assert_eq!(candidate.parse::<IdentityNumber>(), Err(InvalidIdentityNumber));
        }
    }

    #[test]
    fn rejects_non_digits() {
        for candidate in [
            "12345678901a",
            "1234 5678901",
            "-12345678901",
            "12345678901.",
            // Twelve characters but not ASCII digits.
            "١٢٣٤٥٦٧٨٩٠١٢",
            "１２３４５６７８９０１２",
        ] {
            assert!(!is_valid_identity_number(candidate), "{candidate:?}");
        }
    }

    #[test]
    fn missing_is_invalid() {
        assert_eq!(IdentityNumber::parse(None), Err(InvalidIdentityNumber));
        assert_eq!(IdentityNumber::parse(Some("")), Err(InvalidIdentityNumber));
        assert_eq!(
            IdentityNumber::parse(Some("111111111111")),
            Ok(IdentityNumber::example2())
        );
    }

    #[test]
    fn deserialization_validates() {
        let valid: Result<IdentityNumber, _> =
            mongodb::bson::from_bson(mongodb::bson::Bson::String("987654321098".into()));
        assert_eq!(valid.unwrap(), IdentityNumber::example3());

        let invalid: Result<IdentityNumber, _> =
            mongodb::bson::from_bson(mongodb::bson::Bson::String("98765".into()));
        assert!(invalid.is_err());
    }
}
