use serde::{Deserialize, Serialize};

use crate::model::common::identity::IdentityNumber;

/// A single recorded vote. Created exactly once per identity number and
/// never modified afterwards.
///
/// The MongoDB `_id` is not needed by anything and is ignored on read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vote {
    #[serde(rename = "aadhar")]
    pub identity_number: IdentityNumber,
    pub party: String,
}

impl Vote {
    pub fn new(identity_number: IdentityNumber, party: impl Into<String>) -> Self {
        Self {
            identity_number,
            party: party.into(),
        }
    }
}

/// The number of votes cast for one party, as produced by the tally
/// aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartyTally {
    #[serde(rename = "_id")]
    pub party: String,
    pub count: u64,
}
