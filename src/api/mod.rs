use rocket::{Catcher, Route};

mod catchers;
mod voting;

pub fn routes() -> Vec<Route> {
    let mut routes = Vec::new();
    routes.extend(voting::routes());
    routes.extend(crate::cors::routes());
    routes
}

pub fn catchers() -> Vec<Catcher> {
    catchers::catchers()
}
