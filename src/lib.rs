//! # corekit
//!
//! Small helpers for working with local SQLite databases. The engine does the
//! real work; this crate only validates inputs before handing them over.

pub mod error;
pub mod sqlite_utils;

// Re-export commonly used types
pub use error::{Error, Result};
pub use sqlite_utils::{connect_to_db, execute_query, Connection, QueryResult, Value};
