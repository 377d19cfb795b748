//! SQLite helpers.
//!
//! Opens database files and runs single statements against them. Parsing,
//! storage, transactions and locking all stay inside SQLite.

mod connection;
mod options;
mod query;

pub use connection::{connect_to_db, connect_with, with_connection, Connection};
pub use options::ConnectOptions;
pub use query::{execute_query, QueryResult, Value};
