use log::info;
use rocket::{serde::json::Json, Route};

use crate::error::Result;
use crate::model::{
    api::{
        message::{Message, ELIGIBLE, VOTE_RECORDED},
        vote::{CheckRequest, VoteRequest},
    },
    db::{
        store::VoteStore,
        vote::{PartyTally, Vote},
    },
};

pub fn routes() -> Vec<Route> {
    routes![check_aadhar, submit_vote, get_counts]
}

#[post("/check-aadhar", data = "<request>")]
async fn check_aadhar(request: Json<CheckRequest>, store: VoteStore) -> Result<Json<Message>> {
    let identity_number = request.identity_number()?;
    store.ensure_eligible(&identity_number).await?;
    Ok(Json(Message::new(ELIGIBLE)))
}

#[post("/vote", data = "<request>")]
async fn submit_vote(request: Json<VoteRequest>, store: VoteStore) -> Result<Json<Message>> {
    let vote = Vote::try_from(request.into_inner())?;
    store.record(&vote).await?;
    info!("Vote recorded for party {:?}", vote.party);
    Ok(Json(Message::new(VOTE_RECORDED)))
}

#[get("/counts")]
async fn get_counts(store: VoteStore) -> Result<Json<Vec<PartyTally>>> {
    Ok(Json(store.tally().await?))
}
