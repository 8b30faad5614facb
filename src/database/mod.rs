pub mod connection;
pub mod document;
pub mod games;
pub mod index;
pub mod matches;
pub mod setup;

pub use connection::{begin_write, create_memory_pool, create_pool, get_connection, DbConn, DbPool};
