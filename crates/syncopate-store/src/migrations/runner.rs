//! Migration runner
//!
//! Applies embedded migrations idempotently. A migration that has already
//! been applied is verified against its recorded checksum instead of
//! re-run.

use rusqlite::{Connection, OptionalExtension};
use tracing::debug;

use crate::errors::{Result, StoreError};
use crate::migrations::checksums::compute_checksum;
use crate::migrations::embedded::get_migrations;

/// Apply all pending migrations to the database
pub fn apply_migrations(conn: &mut Connection) -> Result<()> {
    create_schema_version_table(conn)?;

    for migration in get_migrations() {
        apply_migration(conn, migration.id, migration.sql)?;
    }

    Ok(())
}

fn create_schema_version_table(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS schema_version (
            id INTEGER PRIMARY KEY,
            migration_id TEXT NOT NULL UNIQUE,
            applied_at INTEGER NOT NULL,
            checksum TEXT NOT NULL
        )",
        [],
    )?;

    Ok(())
}

/// Apply a single migration if not already applied
fn apply_migration(conn: &mut Connection, migration_id: &str, sql: &str) -> Result<()> {
    let checksum = compute_checksum(sql);

    let recorded: Option<String> = conn
        .query_row(
            "SELECT checksum FROM schema_version WHERE migration_id = ?",
            [migration_id],
            |row| row.get(0),
        )
        .optional()?;

    if let Some(expected) = recorded {
        // Already applied: the embedded SQL must not have drifted.
        if expected != checksum {
            return Err(StoreError::ChecksumMismatch {
                id: migration_id.to_string(),
                expected,
                actual: checksum,
            });
        }
        return Ok(());
    }

    let tx = conn.transaction()?;

    tx.execute_batch(sql).map_err(|e| StoreError::Migration {
        id: migration_id.to_string(),
        reason: e.to_string(),
    })?;

    tx.execute(
        "INSERT INTO schema_version (migration_id, applied_at, checksum) VALUES (?, ?, ?)",
        rusqlite::params![migration_id, chrono::Utc::now().timestamp(), checksum],
    )?;

    tx.commit()?;

    debug!(migration_id, "applied migration");
    Ok(())
}
