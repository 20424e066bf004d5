use rocket::serde::json::Value;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::{
    api::message::{AADHAR_NOT_TWELVE_DIGITS, INVALID_AADHAR},
    common::identity::IdentityNumber,
    db::vote::Vote,
};

/// Request to check whether an Aadhar number may still vote.
///
/// Fields are kept as raw JSON so a value of the wrong type is reported as
/// bad input rather than rejected by the body parser.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CheckRequest {
    #[serde(default)]
    pub aadhar: Option<Value>,
}

impl CheckRequest {
    /// Validate the Aadhar number. Absent, empty, non-string and malformed
    /// values are all the same failure here.
    pub fn identity_number(&self) -> Result<IdentityNumber> {
        IdentityNumber::parse(self.aadhar.as_ref().and_then(Value::as_str))
            .map_err(|_| Error::InvalidInput(INVALID_AADHAR))
    }
}

/// Request to cast a vote.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct VoteRequest {
    #[serde(default)]
    pub aadhar: Option<Value>,
    #[serde(default)]
    pub party: Option<Value>,
}

impl TryFrom<VoteRequest> for Vote {
    type Error = Error;

    /// Presence of both fields is checked before the Aadhar number format.
    /// A present `aadhar` of any other JSON type fails the format check; a
    /// scalar `party` is stored as its string form.
    fn try_from(request: VoteRequest) -> Result<Self> {
        let (aadhar, party) = match (present(request.aadhar), present(request.party)) {
            (Some(aadhar), Some(party)) => (aadhar, party),
            _ => return Err(Error::MissingField),
        };
        let party = match party {
            Value::String(party) => party,
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            // Arrays and objects have no sensible party name.
            _ => return Err(Error::MissingField),
        };
        let identity_number = match aadhar {
            Value::String(aadhar) => IdentityNumber::try_from(aadhar).ok(),
            _ => None,
        }
        .ok_or(Error::InvalidInput(AADHAR_NOT_TWELVE_DIGITS))?;
        Ok(Vote::new(identity_number, party))
    }
}

/// Drop values that count as not sent: `null` and the empty string.
/// Absent fields are already `None`.
fn present(value: Option<Value>) -> Option<Value> {
    match value {
        Some(Value::Null) => None,
        Some(Value::String(s)) if s.is_empty() => None,
        other => other,
    }
}

/// Example data for tests.
#[cfg(test)]
mod examples {
    use super::*;

    impl CheckRequest {
        pub fn example() -> Self {
            Self {
                aadhar: Some(Value::from("123456789012")),
            }
        }
    }

    impl VoteRequest {
        pub fn example() -> Self {
            Self {
                aadhar: Some(Value::from("123456789012")),
                party: Some(Value::from("A")),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rocket::serde::json::serde_json;

    use super::*;

    fn vote_from(body: &str) -> Result<Vote> {
        let request: VoteRequest = serde_json::from_str(body).unwrap();
        Vote::try_from(request)
    }

    #[test]
    fn check_request_validation() {
        assert_eq!(
            CheckRequest::example().identity_number().unwrap(),
            IdentityNumber::example()
        );

        for body in [
            r#"{}"#,
            r#"{"aadhar": null}"#,
            r#"{"aadhar": ""}"#,
            r#"{"aadhar": "12345"}"#,
            r#"{"aadhar": 123456789012}"#,
            r#"{"aadhar": ["123456789012"]}"#,
            r#"{"aadhar": "12345678901x"}"#,
        ] {
            let request: CheckRequest = serde_json::from_str(body).unwrap();
            let err = request.identity_number().unwrap_err();
            assert_eq!(err.to_string(), INVALID_AADHAR, "{body}");
        }
    }

    #[test]
    fn vote_request_to_vote() {
        let vote = Vote::try_from(VoteRequest::example()).unwrap();
        assert_eq!(vote, Vote::example());
    }

    #[test]
    fn missing_fields_checked_first() {
        for body in [
            r#"{}"#,
            r#"{"aadhar": "111111111111"}"#,
            r#"{"party": "A"}"#,
            r#"{"aadhar": "111111111111", "party": ""}"#,
            r#"{"aadhar": "111111111111", "party": null}"#,
            r#"{"aadhar": "", "party": "A"}"#,
            r#"{"aadhar": null, "party": "A"}"#,
            r#"{"aadhar": "12345"}"#,
        ] {
            assert!(matches!(vote_from(body), Err(Error::MissingField)), "{body}");
        }
    }

    #[test]
    fn malformed_aadhar_after_presence() {
        for body in [
            r#"{"aadhar": "12345", "party": "A"}"#,
            r#"{"aadhar": "1234567890123", "party": "A"}"#,
            r#"{"aadhar": "abcdefghijkl", "party": "A"}"#,
            r#"{"aadhar": 123456789012, "party": "A"}"#,
            r#"{"aadhar": true, "party": "A"}"#,
            r#"{"aadhar": "12345", "party": 7}"#,
        ] {
            let err = vote_from(body).unwrap_err();
            assert_eq!(err.to_string(), AADHAR_NOT_TWELVE_DIGITS, "{body}");
        }
    }

    #[test]
    fn scalar_party_is_stringified() {
        let vote = vote_from(r#"{"aadhar": "111111111111", "party": 7}"#).unwrap();
        assert_eq!(vote, Vote::new(IdentityNumber::example2(), "7"));

        let vote = vote_from(r#"{"aadhar": "111111111111", "party": false}"#).unwrap();
        assert_eq!(vote.party, "false");

        assert!(matches!(
            vote_from(r#"{"aadhar": "111111111111", "party": {"name": "A"}}"#),
            Err(Error::MissingField)
        ));
    }
}
