use log::{debug, warn};
use mongodb::{
    bson::{doc, from_document, Document},
    error::Error as DbError,
    Database,
};
use rocket::{
    futures::TryStreamExt,
    request::{self, FromRequest, Request},
    State,
};

use crate::error::{Error, Result};
use crate::model::{
    common::identity::IdentityNumber,
    db::vote::{PartyTally, Vote},
    mongodb::{is_duplicate_key_error, Coll},
};

/// Handle on the persisted votes.
///
/// Cheap to construct: it wraps a collection handle that shares the
/// connection pool of the managed [`mongodb::Client`]. No state is kept
/// between requests.
#[derive(Clone)]
pub struct VoteStore {
    votes: Coll<Vote>,
}

impl VoteStore {
    pub fn from_db(db: &Database) -> Self {
        Self {
            votes: Coll::from_db(db),
        }
    }

    /// Look up the vote cast under the given identity number, if any.
    pub async fn find(&self, identity_number: &IdentityNumber) -> Result<Option<Vote>> {
        let filter = doc! { "aadhar": identity_number.as_str() };
        Ok(self.votes.find_one(filter, None).await?)
    }

    /// Succeed iff no vote has been cast under the given identity number yet.
    pub async fn ensure_eligible(&self, identity_number: &IdentityNumber) -> Result<()> {
        match self.find(identity_number).await? {
            Some(_) => Err(Error::AlreadyVoted),
            None => Ok(()),
        }
    }

    /// Record a new vote.
    ///
    /// The lookup beforehand only avoids a doomed write. Two concurrent
    /// submissions can both pass it, in which case the unique index on
    /// `aadhar` rejects the second insert and that is reported as
    /// [`Error::AlreadyVoted`] too.
    pub async fn record(&self, vote: &Vote) -> Result<()> {
        self.ensure_eligible(&vote.identity_number).await?;
        self.insert(vote).await
    }

    /// Insert without the eligibility pre-check, relying on the unique index alone.
    pub async fn insert(&self, vote: &Vote) -> Result<()> {
        match self.votes.insert_one(vote, None).await {
            Ok(_) => {
                debug!("Recorded vote for party {:?}", vote.party);
                Ok(())
            }
            Err(err) if is_duplicate_key_error(&err) => {
                warn!("Concurrent duplicate vote rejected by unique index");
                Err(Error::AlreadyVoted)
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Count the votes per party, most votes first. Parties with equal counts
    /// are ordered by name so the output is deterministic.
    pub async fn tally(&self) -> Result<Vec<PartyTally>> {
        let pipeline = [
            doc! { "$group": { "_id": "$party", "count": { "$sum": 1 } } },
            doc! { "$sort": { "count": -1, "_id": 1 } },
        ];
        let groups: Vec<Document> = self
            .votes
            .aggregate(pipeline, None)
            .await?
            .try_collect()
            .await?;
        groups
            .into_iter()
            .map(|group| from_document(group).map_err(|e| Error::from(DbError::from(e))))
            .collect()
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for VoteStore {
    type Error = ();

    /// Get the database from the managed state and wrap it in a store.
    async fn from_request(req: &'r Request<'_>) -> request::Outcome<Self, Self::Error> {
        req.guard::<&State<Database>>()
            .await
            .map(|db| VoteStore::from_db(db))
    }
}
