//! Opening and closing database connections.

use super::options::ConnectOptions;
use super::query::{self, QueryResult, Value};
use crate::error::{self, Error, Result};
use rusqlite::Connection as SqliteConnection;
use std::path::{Path, PathBuf};
use tracing::debug;

/// An open SQLite database.
///
/// Each value owns its own engine handle, so two connections to the same file
/// are independent. The handle is released when the value is dropped; use
/// [`Connection::close`] to observe close errors instead.
#[derive(Debug)]
pub struct Connection {
    conn: SqliteConnection,
    path: PathBuf,
    read_only: bool,
}

/// Open a connection to the database file at `path`, creating it if missing.
///
/// Fails with [`Error::InvalidArgument`] for an empty path. Anything else,
/// such as a missing parent directory, is reported by SQLite as [`Error::Db`].
pub fn connect_to_db<P: AsRef<Path>>(path: P) -> Result<Connection> {
    connect_with(path, &ConnectOptions::default())
}

/// Same as [`connect_to_db`], with explicit settings.
pub fn connect_with<P: AsRef<Path>>(path: P, options: &ConnectOptions) -> Result<Connection> {
    let path = path.as_ref();
    error::require_non_blank("database path", &path.as_os_str().to_string_lossy())?;

    debug!(path = %path.display(), read_only = options.read_only, "opening database");
    let conn = SqliteConnection::open_with_flags(path, options.open_flags())?;
    conn.busy_timeout(options.busy_timeout())?;

    Ok(Connection {
        conn,
        path: path.to_path_buf(),
        read_only: options.read_only,
    })
}

/// Open `path`, hand the connection to `f`, and close it afterwards.
///
/// The connection is released on every exit path. An error from `f` wins over
/// an error from closing.
pub fn with_connection<P, T, F>(path: P, f: F) -> Result<T>
where
    P: AsRef<Path>,
    F: FnOnce(&mut Connection) -> Result<T>,
{
    let mut conn = connect_to_db(path)?;
    let value = f(&mut conn)?;
    conn.close()?;
    Ok(value)
}

impl Connection {
    // Unit tests only; real callers go through `connect_with`.
    #[cfg(test)]
    pub(crate) fn open_in_memory() -> Result<Self> {
        let conn = SqliteConnection::open_in_memory()?;
        Ok(Self {
            conn,
            path: PathBuf::from(":memory:"),
            read_only: false,
        })
    }

    /// Path this connection was opened with.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the connection was opened without write access.
    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Run a statement on this connection. See [`execute_query`](query::execute_query).
    pub fn execute_query(&self, sql: &str, params: &[Value]) -> Result<QueryResult> {
        query::execute_query(self, sql, params)
    }

    /// The rusqlite handle, for calls this crate does not wrap.
    pub fn as_conn(&self) -> &SqliteConnection {
        &self.conn
    }

    /// Rows inserted, updated or deleted since the connection was opened.
    pub fn total_changes(&self) -> Result<i64> {
        self.conn
            .query_row("SELECT total_changes()", [], |row| row.get(0))
            .map_err(Error::from)
    }

    /// Close the connection, reporting any error SQLite raises while doing so.
    pub fn close(self) -> Result<()> {
        debug!(path = %self.path.display(), "closing database");
        // On failure SQLite hands the handle back; dropping it retries the close.
        self.conn.close().map_err(|(_, e)| Error::Db(e))
    }
}
