pub mod store;
pub mod vote;
