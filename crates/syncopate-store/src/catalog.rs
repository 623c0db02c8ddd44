//! Catalog row access and view hydration
//!
//! Row creation and deletion are collection lifecycle concerns driven
//! from outside the command executor; the helpers here cover those
//! writes, scoped reads for observation, and building a source's live
//! collection from its rows at startup.

use rusqlite::{params, Connection, OptionalExtension};
use tracing::warn;

use syncopate_core::{AutoPlaylist, Collection, Playlist, PlaylistKind, Source, Station};

use crate::errors::Result;

/// Insert a playlist variant row under the given source.
pub fn insert_playlist(
    conn: &Connection,
    source: Source,
    guid: &str,
    kind: PlaylistKind,
    title: &str,
) -> Result<()> {
    match source {
        Source::Local => conn.execute(
            "INSERT INTO playlist (guid, source, kind, title) VALUES (?1, NULL, ?2, ?3)",
            params![guid, kind.as_str(), title],
        )?,
        Source::Remote(id) => conn.execute(
            "INSERT INTO playlist (guid, source, kind, title) VALUES (?1, ?2, ?3, ?4)",
            params![guid, id.0, kind.as_str(), title],
        )?,
    };
    Ok(())
}

/// Current title of the row matching `(source, guid)`, if present.
pub fn playlist_title(conn: &Connection, source: Source, guid: &str) -> Result<Option<String>> {
    let title = match source {
        Source::Local => conn
            .query_row(
                "SELECT title FROM playlist WHERE guid = ?1 AND source IS NULL",
                [guid],
                |row| row.get(0),
            )
            .optional()?,
        Source::Remote(id) => conn
            .query_row(
                "SELECT title FROM playlist WHERE guid = ?1 AND source = ?2",
                params![guid, id.0],
                |row| row.get(0),
            )
            .optional()?,
    };
    Ok(title)
}

/// Build a source's live collection from its rows.
///
/// Maps the `kind` column to the matching variant. Rows are read in guid
/// order so hydration is deterministic.
pub fn load_collection(conn: &Connection, source: Source) -> Result<Collection> {
    let mut stmt = match source {
        Source::Local => {
            conn.prepare("SELECT guid, kind, title FROM playlist WHERE source IS NULL ORDER BY guid")?
        }
        Source::Remote(_) => {
            conn.prepare("SELECT guid, kind, title FROM playlist WHERE source = ?1 ORDER BY guid")?
        }
    };

    let rows: Vec<(String, String, String)> = match source {
        Source::Local => stmt
            .query_map([], |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)))?
            .collect::<std::result::Result<Vec<_>, _>>()?,
        Source::Remote(id) => stmt
            .query_map([id.0], |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)))?
            .collect::<std::result::Result<Vec<_>, _>>()?,
    };
    drop(stmt);

    let mut collection = Collection::new();
    for (guid, kind, title) in rows {
        match PlaylistKind::parse(&kind) {
            Some(PlaylistKind::Playlist) => {
                collection.insert_playlist(Playlist::new(guid, title))?;
            }
            Some(PlaylistKind::AutoPlaylist) => {
                collection.insert_auto_playlist(AutoPlaylist::new(guid, title))?;
            }
            Some(PlaylistKind::Station) => {
                collection.insert_station(Station::new(guid, title))?;
            }
            None => {
                // Unreachable while the schema CHECK holds
                warn!(%source, guid, kind, "skipping row with unknown playlist kind");
            }
        }
    }

    Ok(collection)
}
