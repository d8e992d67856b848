//! SQLite connection wrapper (one connection per CLI invocation).

use crate::errors::{AppError, AppResult};
use rusqlite::Connection;
use std::path::Path;

/// Owns the single open connection to the attendance store.
///
/// Foreign keys are enforced on every connection opened through here.
/// The connection is released either by `close()` or on drop.
pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    pub fn new(path: &str) -> AppResult<Self> {
        let conn = Connection::open(Path::new(path))
            .map_err(|e| AppError::StoreUnavailable(format!("cannot open '{path}': {e}")))?;
        Self::from_connection(conn)
    }

    /// In-memory store, mostly for tests.
    pub fn in_memory() -> AppResult<Self> {
        let conn = Connection::open_in_memory()
            .map_err(|e| AppError::StoreUnavailable(format!("cannot open in-memory db: {e}")))?;
        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> AppResult<Self> {
        conn.pragma_update(None, "foreign_keys", true)
            .map_err(|e| AppError::StoreUnavailable(format!("cannot enable foreign keys: {e}")))?;
        Ok(Self { conn })
    }

    /// Close the connection explicitly, surfacing close errors.
    pub fn close(self) -> AppResult<()> {
        self.conn
            .close()
            .map_err(|(_, e)| AppError::StoreUnavailable(format!("cannot close database: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn foreign_keys_are_enabled() {
        let pool = DbPool::in_memory().unwrap();
        let on: i64 = pool
            .conn
            .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
            .unwrap();
        assert_eq!(on, 1);
        pool.close().unwrap();
    }
}
