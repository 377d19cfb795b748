//! Running statements.

use super::connection::Connection;
use crate::error::{self, Result};
use rusqlite::params_from_iter;
use tracing::{debug, warn};

/// A bound parameter or result cell: null, integer, real, text or blob.
pub use rusqlite::types::Value;

/// What SQLite produced for one statement.
///
/// Rows keep the values the engine returned, in column order. Statements
/// without result columns have no rows; `changes` reports what they modified.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QueryResult {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
    changes: u64,
    last_insert_rowid: i64,
}

impl QueryResult {
    /// Result column names; empty for statements that return no columns.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Every row, in the order SQLite returned them.
    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    /// The first row, if any.
    pub fn first_row(&self) -> Option<&[Value]> {
        self.rows.first().map(Vec::as_slice)
    }

    /// Take ownership of the rows.
    pub fn into_rows(self) -> Vec<Vec<Value>> {
        self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether no rows came back.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows inserted, updated or deleted by the statement.
    pub fn changes(&self) -> u64 {
        self.changes
    }

    /// Rowid of the most recent successful insert on the connection.
    pub fn last_insert_rowid(&self) -> i64 {
        self.last_insert_rowid
    }
}

impl IntoIterator for QueryResult {
    type Item = Vec<Value>;
    type IntoIter = std::vec::IntoIter<Vec<Value>>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

impl<'a> IntoIterator for &'a QueryResult {
    type Item = &'a Vec<Value>;
    type IntoIter = std::slice::Iter<'a, Vec<Value>>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// Execute one SQL statement with positional parameters.
///
/// Fails with [`Error::InvalidArgument`](crate::Error::InvalidArgument) for
/// an empty or whitespace-only statement. Everything else goes to SQLite
/// unchanged, and its errors come back as [`Error::Db`](crate::Error::Db).
/// The connection stays usable after a failed statement.
///
/// The string must hold exactly one statement. More than one is rejected by
/// rusqlite without running any of them. Text with no statement at all, such
/// as a lone comment or `;`, is also handed to SQLite and fails there as
/// [`Error::Db`](crate::Error::Db).
pub fn execute_query(conn: &Connection, sql: &str, params: &[Value]) -> Result<QueryResult> {
    error::require_non_blank("query", sql)?;

    debug!(sql, params = params.len(), "executing query");
    run(conn.as_conn(), sql, params).inspect_err(|e| warn!(sql, error = %e, "query failed"))
}

fn run(conn: &rusqlite::Connection, sql: &str, params: &[Value]) -> Result<QueryResult> {
    let mut stmt = conn.prepare(sql)?;

    if stmt.column_count() == 0 {
        let changes = stmt.execute(params_from_iter(params))?;
        return Ok(QueryResult {
            changes: changes as u64,
            last_insert_rowid: conn.last_insert_rowid(),
            ..QueryResult::default()
        });
    }

    let columns: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();
    let width = columns.len();
    let read_only = stmt.readonly();

    let mut rows = Vec::new();
    let mut cursor = stmt.query(params_from_iter(params))?;
    while let Some(row) = cursor.next()? {
        let values = (0..width)
            .map(|i| row.get::<_, Value>(i))
            .collect::<rusqlite::Result<Vec<_>>>()?;
        rows.push(values);
    }
    drop(cursor);

    // SQLite leaves the previous statement's count in place for reads.
    let changes = if read_only {
        0
    } else {
        conn.changes().try_into().unwrap_or(u64::MAX)
    };

    Ok(QueryResult {
        columns,
        rows,
        changes,
        last_insert_rowid: conn.last_insert_rowid(),
    })
}
