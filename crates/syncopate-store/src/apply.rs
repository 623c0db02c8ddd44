//! Source-scoped mutation statements and the replication oplog
//!
//! Every statement here filters by guid *and* owning source, so a
//! command from one source can never touch another source's row that
//! happens to share an identifier. The local catalog matches a NULL
//! source column; a remote peer matches its exact registry id. Values
//! are always bound, never interpolated.

use rusqlite::{params, Connection, OptionalExtension, Transaction};
use tracing::debug;
use uuid::Uuid;

use syncopate_core::{LogRecord, Mutation, Source};

use crate::errors::Result;

/// Apply a command's durable mutation inside `tx`.
///
/// Returns the affected-row count. Zero is not an error at this layer:
/// the row may simply not have replicated yet, and the caller decides
/// what that means.
pub fn apply_mutation(
    tx: &Transaction,
    source: Source,
    guid: &str,
    mutation: &Mutation,
) -> Result<usize> {
    let rows = match mutation {
        Mutation::RenamePlaylist { title } => match source {
            Source::Local => tx.execute(
                "UPDATE playlist SET title = ?1 WHERE guid = ?2 AND source IS NULL",
                params![title, guid],
            )?,
            Source::Remote(id) => tx.execute(
                "UPDATE playlist SET title = ?1 WHERE guid = ?2 AND source = ?3",
                params![title, guid, id.0],
            )?,
        },
    };

    debug!(%source, guid, op = mutation.kind(), rows, "applied catalog mutation");
    Ok(rows)
}

/// A logged operation as read back for the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggedOp {
    /// Unique id of the log entry itself, used as a replication cursor
    pub opguid: String,
    /// Source the operation was applied under
    pub source: Source,
    pub record: LogRecord,
}

/// Append a loggable command's record to the oplog.
///
/// Must run in the same transaction as the command's mutation so the
/// durable trace commits atomically with the row it describes. Returns
/// the new entry's opguid.
pub fn append_op(tx: &Transaction, source: Source, record: &LogRecord) -> Result<String> {
    let opguid = Uuid::new_v4().to_string();
    let json = serde_json::to_string(record)?;
    let source_id = source.id().map(|id| id.0);

    tx.execute(
        "INSERT INTO oplog (opguid, source, guid, command, json, logged_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            opguid,
            source_id,
            record.guid,
            record.kind(),
            json,
            chrono::Utc::now().timestamp(),
        ],
    )?;

    debug!(%source, guid = %record.guid, op = record.kind(), opguid, "logged operation");
    Ok(opguid)
}

/// Read logged operations after the given cursor, oldest first.
///
/// `None` reads from the beginning. The transport feeds a peer's
/// `sources::last_op` cursor in here to resume shipping where it left
/// off.
pub fn ops_after(conn: &Connection, cursor: Option<&str>) -> Result<Vec<LoggedOp>> {
    let after_id: i64 = match cursor {
        Some(opguid) => conn
            .query_row(
                "SELECT id FROM oplog WHERE opguid = ?1",
                [opguid],
                |row| row.get(0),
            )
            .optional()?
            .unwrap_or(0),
        None => 0,
    };

    let mut stmt = conn.prepare(
        "SELECT opguid, source, json FROM oplog WHERE id > ?1 ORDER BY id",
    )?;
    let rows: Vec<(String, Option<i64>, String)> = stmt
        .query_map([after_id], |row| {
            Ok((row.get(0)?, row.get(1)?, row.get(2)?))
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let mut ops = Vec::with_capacity(rows.len());
    for (opguid, source_id, json) in rows {
        let record: LogRecord = serde_json::from_str(&json)?;
        let source = match source_id {
            None => Source::Local,
            Some(raw) => Source::Remote(syncopate_core::SourceId(raw)),
        };
        ops.push(LoggedOp {
            opguid,
            source,
            record,
        });
    }

    Ok(ops)
}
