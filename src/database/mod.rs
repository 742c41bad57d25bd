pub mod connection;
pub mod matches;
mod models;
pub mod profiles;
pub mod setup;
pub mod sink;

pub use connection::{create_memory_pool, create_pool, get_connection, DbConn, DbPool};
pub use sink::{RecordSink, SqliteSink};
