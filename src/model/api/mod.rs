pub mod message;
pub mod vote;
