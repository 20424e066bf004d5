#[macro_use]
extern crate rocket;

#[cfg(test)]
#[macro_use]
extern crate backend_test;

use rocket::{
    figment::{providers::Env, Figment},
    Build, Rocket,
};

pub mod api;
pub mod config;
pub mod cors;
pub mod error;
pub mod logging;
pub mod model;

pub use config::Config;

use config::{ConfigFairing, DatabaseFairing};
use cors::CorsFairing;
use logging::LoggerFairing;

/// Assemble the server: configuration, database connection, logging, CORS,
/// routes and catchers. Nothing is contacted until the result is ignited.
pub fn build() -> Rocket<Build> {
    rocket::custom(figment())
        .attach(LoggerFairing)
        .attach(ConfigFairing)
        .attach(DatabaseFairing)
        .attach(CorsFairing)
        .mount("/", api::routes())
        .register("/", api::catchers())
}

/// Rocket's usual configuration sources, plus the bare `PORT` environment
/// variable. `PORT` is merged into the global profile last, so it takes
/// precedence over `ROCKET_PORT` and `Rocket.toml`.
pub fn figment() -> Figment {
    rocket::Config::figment().merge(Env::raw().only(&["PORT"]).global())
}
