//! Commands and their replication log records
//!
//! A command is the unit of mutation: it carries the owning source, the
//! target guid, and an operation payload. Construction validates input
//! and touches no storage; the store applies it, the oplog records it,
//! and peers reconstruct an equivalent command from the logged record.

use serde::{Deserialize, Serialize};

use crate::errors::CommandError;
use crate::source::Source;

/// Operation payload carried by a command and recorded in the oplog.
///
/// One variant per mutation the catalog supports; the serialized form is
/// internally tagged so a record is self-describing on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Mutation {
    RenamePlaylist { title: String },
}

impl Mutation {
    /// Stable operation name, recorded in the oplog `command` column.
    pub fn kind(&self) -> &'static str {
        match self {
            Mutation::RenamePlaylist { .. } => "rename_playlist",
        }
    }
}

/// Durable trace of a loggable command.
///
/// Together with the oplog row's source column this is sufficient for a
/// remote peer to reconstruct an equivalent command and replay it
/// idempotently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRecord {
    pub guid: String,
    #[serde(flatten)]
    pub mutation: Mutation,
}

impl LogRecord {
    pub fn kind(&self) -> &'static str {
        self.mutation.kind()
    }
}

/// A unit of mutation scoped to one source.
///
/// Discarded after its run; the durable trace is the row update plus, for
/// loggable commands, the appended oplog record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    source: Source,
    guid: String,
    mutation: Mutation,
    loggable: bool,
}

impl Command {
    /// Rename the playlist variant identified by `guid` within `source`'s
    /// namespace. Loggable: the rename ships to peers for replay.
    pub fn rename_playlist(
        source: Source,
        guid: impl Into<String>,
        title: impl Into<String>,
    ) -> Result<Self, CommandError> {
        let guid = guid.into();
        let title = title.into();
        if guid.trim().is_empty() {
            return Err(CommandError::EmptyGuid);
        }
        if title.trim().is_empty() {
            return Err(CommandError::EmptyTitle);
        }
        Ok(Self {
            source,
            guid,
            mutation: Mutation::RenamePlaylist { title },
            loggable: true,
        })
    }

    pub fn source(&self) -> Source {
        self.source
    }

    pub fn guid(&self) -> &str {
        &self.guid
    }

    pub fn mutation(&self) -> &Mutation {
        &self.mutation
    }

    /// Whether the command's effect is recorded for replication.
    pub fn loggable(&self) -> bool {
        self.loggable
    }

    /// The record appended to the oplog when this command commits.
    pub fn to_record(&self) -> LogRecord {
        LogRecord {
            guid: self.guid.clone(),
            mutation: self.mutation.clone(),
        }
    }

    /// Reconstruct a command from a shipped record, re-running the same
    /// validation as the constructors. `source` identifies the peer the
    /// record arrived from.
    pub fn from_record(source: Source, record: &LogRecord) -> Result<Self, CommandError> {
        match &record.mutation {
            Mutation::RenamePlaylist { title } => {
                Self::rename_playlist(source, record.guid.clone(), title.clone())
            }
        }
    }
}
