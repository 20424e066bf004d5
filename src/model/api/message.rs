use serde::{Deserialize, Serialize};

/// The body of every non-tally response: a single human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

pub const ELIGIBLE: &str = "Aadhar number is valid";
pub const VOTE_RECORDED: &str = "Vote recorded successfully";
pub const INVALID_AADHAR: &str = "Invalid Aadhar number";
pub const AADHAR_NOT_TWELVE_DIGITS: &str = "Aadhar number must be 12 digits";
