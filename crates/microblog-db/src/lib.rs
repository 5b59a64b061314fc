//! Database layer for the microblog.
//!
//! Provides a `Database` handle that knows where the SQLite file lives and
//! opens one connection per request, plus the `Entries` store that runs
//! queries against a borrowed connection.

mod entries;

pub use entries::{Entries, Entry};

use std::path::{Path, PathBuf};

use rusqlite::Connection;
use thiserror::Error;

/// The one-shot DDL script. Dropping first makes `init-db` a reset, matching
/// the administrative bootstrap flow.
pub const SCHEMA: &str = r#"
DROP TABLE IF EXISTS entries;
CREATE TABLE entries (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    text TEXT NOT NULL
);
"#;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Failed to open database at {path}: {source}")]
    Open {
        path: PathBuf,
        source: rusqlite::Error,
    },

    #[error("Storage error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Handle to the SQLite file backing the blog.
///
/// Holds only the path. Each request opens its own connection via
/// [`Database::connect`] and releases it by dropping it at the end of the
/// handler; connections are never shared across requests or cached beyond
/// the request that opened them.
pub struct Database {
    path: PathBuf,
}

impl Database {
    /// Create a handle for the database at `path`. Does no I/O.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open a new connection for the current request.
    ///
    /// No pooling, no retry: an open failure is fatal to the request. The
    /// returned connection closes when dropped, on every exit path.
    pub fn connect(&self) -> Result<Connection, StorageError> {
        Connection::open(&self.path).map_err(|source| StorageError::Open {
            path: self.path.clone(),
            source,
        })
    }

    /// Create (or reset) the `entries` table.
    ///
    /// Administrative one-shot operation, invoked by the `init-db` command.
    /// The serving runtime assumes the table already exists.
    pub fn init_schema(&self) -> Result<(), StorageError> {
        let conn = self.connect()?;
        conn.execute_batch(SCHEMA)?;
        Ok(())
    }
}
