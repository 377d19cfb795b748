//! Error types for corekit.

/// Result type alias for corekit operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error enum for corekit.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Rejected before reaching the database engine.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Database error, exactly as reported by SQLite.
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),
}

impl Error {
    /// The engine error behind this failure, if there is one.
    pub fn engine(&self) -> Option<&rusqlite::Error> {
        match self {
            Error::Db(e) => Some(e),
            Error::InvalidArgument(_) => None,
        }
    }

    /// Whether this error was raised by input validation.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument(_))
    }
}

/// Reject a string argument that is empty or only whitespace.
pub(crate) fn require_non_blank(name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::InvalidArgument(format!("{name} must not be empty")));
    }
    Ok(())
}
