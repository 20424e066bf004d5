//! Errors raised by Rocket itself (unparseable bodies, unknown routes) would
//! otherwise get an HTML page. Keep every response body JSON.

use rocket::{serde::json::Json, Catcher, Request};

use crate::model::api::message::Message;

pub fn catchers() -> Vec<Catcher> {
    catchers![bad_request, not_found, unprocessable_entity, internal_error]
}

#[catch(400)]
fn bad_request(_req: &Request) -> Json<Message> {
    Json(Message::new("Malformed request"))
}

#[catch(404)]
fn not_found(_req: &Request) -> Json<Message> {
    Json(Message::new("Not found"))
}

#[catch(422)]
fn unprocessable_entity(_req: &Request) -> Json<Message> {
    Json(Message::new("Malformed request"))
}

#[catch(500)]
fn internal_error(_req: &Request) -> Json<Message> {
    Json(Message::new("Server error"))
}

#[cfg(test)]
mod tests {
    use rocket::{
        http::{ContentType, Status},
        local::asynchronous::Client,
    };

    use super::*;

    #[backend_test]
    async fn unknown_route_is_json(client: Client) {
        let response = client.get("/elections").dispatch().await;
        assert_eq!(response.status(), Status::NotFound);
        assert_eq!(
            response.into_json::<Message>().await.unwrap(),
            Message::new("Not found")
        );
    }

    #[backend_test]
    async fn wrongly_shaped_body_is_json(client: Client) {
        let response = client
            .post("/check-aadhar")
            .header(ContentType::JSON)
            .body(r#""123456789012""#)
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::UnprocessableEntity);
        assert_eq!(
            response.into_json::<Message>().await.unwrap(),
            Message::new("Malformed request")
        );
    }
}
