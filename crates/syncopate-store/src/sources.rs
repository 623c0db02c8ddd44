//! Source registry
//!
//! Remote peers get a stable numeric id the first time they are seen;
//! every later lookup returns the same id. The local source is never a
//! row here - it is the NULL sentinel in source-scoped predicates.

use rusqlite::{params, Connection, OptionalExtension};
use tracing::debug;

use syncopate_core::SourceId;

use crate::errors::Result;

/// Insert-or-get the stable id for a named peer.
pub fn register_peer(
    conn: &Connection,
    name: &str,
    friendly_name: Option<&str>,
) -> Result<SourceId> {
    if let Some(id) = peer_id(conn, name)? {
        return Ok(id);
    }

    conn.execute(
        "INSERT INTO source (name, friendlyname) VALUES (?1, ?2)",
        params![name, friendly_name],
    )?;
    let id = SourceId(conn.last_insert_rowid());
    debug!(name, %id, "registered peer");
    Ok(id)
}

/// Look up a peer's id without registering it.
pub fn peer_id(conn: &Connection, name: &str) -> Result<Option<SourceId>> {
    let id = conn
        .query_row("SELECT id FROM source WHERE name = ?1", [name], |row| {
            row.get::<_, i64>(0)
        })
        .optional()?;
    Ok(id.map(SourceId))
}

/// Replication cursor: opguid of the last logged op acknowledged by this
/// peer, if any.
pub fn last_op(conn: &Connection, id: SourceId) -> Result<Option<String>> {
    let lastop: Option<String> = conn
        .query_row("SELECT lastop FROM source WHERE id = ?1", [id.0], |row| {
            row.get(0)
        })
        .optional()?;
    Ok(lastop.filter(|op| !op.is_empty()))
}

/// Advance a peer's replication cursor.
pub fn set_last_op(conn: &Connection, id: SourceId, opguid: &str) -> Result<()> {
    conn.execute(
        "UPDATE source SET lastop = ?1 WHERE id = ?2",
        params![opguid, id.0],
    )?;
    Ok(())
}
