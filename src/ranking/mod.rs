pub mod board;
pub mod engine;

pub use board::{insert_or_update, sort_descending};
pub use engine::{submit, Ranked};
