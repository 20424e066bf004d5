use log::error;
use mongodb::error::Error as DbError;
use rocket::{http::Status, response::Responder, serde::json::Json};
use thiserror::Error;

use crate::model::api::message::Message;

pub type Result<T> = std::result::Result<T, Error>;

/// Every way a request can fail.
///
/// The `Display` text of each variant is exactly the message returned to the
/// caller, so nothing driver-specific may ever appear in it.
#[derive(Debug, Error)]
pub enum Error {
    /// The identity number is malformed. Carries the caller-facing message,
    /// which differs between endpoints.
    #[error("{0}")]
    InvalidInput(&'static str),
    #[error("Aadhar number and party are required")]
    MissingField,
    #[error("Aadhar number already used for voting")]
    AlreadyVoted,
    #[error("Server error")]
    StoreUnavailable(#[from] DbError),
}

impl Error {
    /// The HTTP status this error is reported with.
    pub fn status(&self) -> Status {
        match self {
            Self::InvalidInput(_) | Self::MissingField | Self::AlreadyVoted => Status::BadRequest,
            Self::StoreUnavailable(_) => Status::InternalServerError,
        }
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for Error {
    fn respond_to(self, req: &'r rocket::Request<'_>) -> rocket::response::Result<'o> {
        if let Self::StoreUnavailable(ref err) = self {
            error!("Database error: {err}");
        }
        let status = self.status();
        (status, Json(Message::new(self.to_string()))).respond_to(req)
    }
}
