use rocket::{
    fairing::{Fairing, Info, Kind},
    http::{Header, Status},
    Request, Response, Route,
};

use crate::Config;

pub fn routes() -> Vec<Route> {
    routes![preflight]
}

/// Answer CORS preflight requests on any path; the headers themselves are
/// added by [`CorsFairing`].
#[options("/<_..>")]
fn preflight() -> Status {
    Status::Ok
}

/// A fairing that adds CORS headers to every response, allowing browsers on
/// the configured origin to call the API.
pub struct CorsFairing;

#[rocket::async_trait]
impl Fairing for CorsFairing {
    fn info(&self) -> Info {
        Info {
            name: "CORS",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, req: &'r Request<'_>, res: &mut Response<'r>) {
        let origin = req
            .rocket()
            .state::<Config>()
            .map(|config| config.cors_allowed_origin().to_string())
            .unwrap_or_else(|| "*".to_string());

        res.set_header(Header::new("Access-Control-Allow-Origin", origin));
        res.set_header(Header::new(
            "Access-Control-Allow-Methods",
            "GET, POST, OPTIONS",
        ));
        res.set_header(Header::new("Access-Control-Allow-Headers", "Content-Type"));
        res.set_header(Header::new("Access-Control-Max-Age", "86400"));
    }
}
