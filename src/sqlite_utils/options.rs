//! Connection settings.

use rusqlite::OpenFlags;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Busy timeout applied when none is configured, in milliseconds.
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

/// Settings applied when a connection is opened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectOptions {
    /// How long SQLite waits on a locked database before giving up.
    pub busy_timeout_ms: u64,
    /// Open without write access. A missing file is not created.
    pub read_only: bool,
}

impl Default for ConnectOptions {
    fn default() -> Self {
        Self {
            busy_timeout_ms: DEFAULT_BUSY_TIMEOUT_MS,
            read_only: false,
        }
    }
}

impl ConnectOptions {
    /// Set the busy timeout.
    pub fn with_busy_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Open read-only.
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    /// Busy timeout as a `Duration`.
    pub fn busy_timeout(&self) -> Duration {
        Duration::from_millis(self.busy_timeout_ms)
    }

    // Paths are plain filenames, never `file:` URIs.
    pub(crate) fn open_flags(&self) -> OpenFlags {
        let access = if self.read_only {
            OpenFlags::SQLITE_OPEN_READ_ONLY
        } else {
            OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_CREATE
        };
        access | OpenFlags::SQLITE_OPEN_NO_MUTEX
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = ConnectOptions::default();
        assert_eq!(opts.busy_timeout(), Duration::from_secs(5));
        assert!(!opts.read_only);
    }

    #[test]
    fn test_builder() {
        let opts = ConnectOptions::default()
            .with_busy_timeout(Duration::from_millis(250))
            .read_only();
        assert_eq!(opts.busy_timeout_ms, 250);
        assert!(opts.read_only);
    }

    #[test]
    fn test_open_flags() {
        let rw = ConnectOptions::default().open_flags();
        assert!(rw.contains(OpenFlags::SQLITE_OPEN_READ_WRITE));
        assert!(rw.contains(OpenFlags::SQLITE_OPEN_CREATE));
        assert!(!rw.contains(OpenFlags::SQLITE_OPEN_URI));

        let ro = ConnectOptions::default().read_only().open_flags();
        assert!(ro.contains(OpenFlags::SQLITE_OPEN_READ_ONLY));
        assert!(!ro.contains(OpenFlags::SQLITE_OPEN_CREATE));
    }

    #[test]
    fn test_deserialize_partial() {
        let opts: ConnectOptions = serde_json::from_str(r#"{"read_only": true}"#).unwrap();
        assert!(opts.read_only);
        assert_eq!(opts.busy_timeout_ms, DEFAULT_BUSY_TIMEOUT_MS);

        let opts: ConnectOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(opts, ConnectOptions::default());
    }
}
