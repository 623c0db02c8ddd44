//! Database connection management
//!
//! Utilities for opening and configuring SQLite connections. The
//! connection's own transactional discipline is the serialization point
//! for concurrent commands targeting the same row.

use std::path::Path;

use rusqlite::Connection;

use crate::errors::Result;

/// Open a SQLite database at the given path
pub fn open<P: AsRef<Path>>(path: P) -> Result<Connection> {
    Ok(Connection::open(path)?)
}

/// Open an in-memory SQLite database (for testing)
pub fn open_in_memory() -> Result<Connection> {
    Ok(Connection::open_in_memory()?)
}

/// Configure a connection with the settings the catalog expects
pub fn configure(conn: &Connection) -> Result<()> {
    // Source-scoped rows reference the source table
    conn.pragma_update(None, "foreign_keys", &"ON")?;

    // WAL for concurrent readers while a command commits
    conn.pragma_update(None, "journal_mode", &"WAL")?;

    Ok(())
}
