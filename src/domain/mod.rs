pub mod models;
pub mod validation;

#[cfg(test)]
pub mod fixtures;

pub use models::*;
