// Integration tests for the source-scoping invariant of apply_mutation

use proptest::prelude::*;
use rusqlite::Connection;
use syncopate_core::{Mutation, PlaylistKind, Source};
use syncopate_store::{apply_mutation, catalog, db, migrations, sources};

fn setup_db() -> Connection {
    let mut conn = db::open_in_memory().unwrap();
    db::configure(&conn).unwrap();
    migrations::apply_migrations(&mut conn).unwrap();
    conn
}

fn rename(conn: &mut Connection, source: Source, guid: &str, title: &str) -> usize {
    let tx = conn.transaction().unwrap();
    let rows = apply_mutation(
        &tx,
        source,
        guid,
        &Mutation::RenamePlaylist {
            title: title.to_string(),
        },
    )
    .unwrap();
    tx.commit().unwrap();
    rows
}

#[test]
fn test_local_rename_leaves_remote_rows_alone() {
    let mut conn = setup_db();
    let peer = Source::Remote(sources::register_peer(&conn, "peer-a", None).unwrap());

    // Same guid under two namespaces
    catalog::insert_playlist(&conn, Source::Local, "guid-1", PlaylistKind::Playlist, "Mine")
        .unwrap();
    catalog::insert_playlist(&conn, peer, "guid-1", PlaylistKind::Playlist, "Theirs").unwrap();

    let rows = rename(&mut conn, Source::Local, "guid-1", "Renamed");

    assert_eq!(rows, 1);
    assert_eq!(
        catalog::playlist_title(&conn, Source::Local, "guid-1").unwrap(),
        Some("Renamed".to_string())
    );
    assert_eq!(
        catalog::playlist_title(&conn, peer, "guid-1").unwrap(),
        Some("Theirs".to_string())
    );
}

#[test]
fn test_remote_rename_leaves_local_rows_alone() {
    let mut conn = setup_db();
    let peer = Source::Remote(sources::register_peer(&conn, "peer-a", None).unwrap());

    catalog::insert_playlist(&conn, Source::Local, "guid-1", PlaylistKind::Playlist, "Mine")
        .unwrap();
    catalog::insert_playlist(&conn, peer, "guid-1", PlaylistKind::Playlist, "Theirs").unwrap();

    let rows = rename(&mut conn, peer, "guid-1", "Renamed");

    assert_eq!(rows, 1);
    assert_eq!(
        catalog::playlist_title(&conn, Source::Local, "guid-1").unwrap(),
        Some("Mine".to_string())
    );
    assert_eq!(
        catalog::playlist_title(&conn, peer, "guid-1").unwrap(),
        Some("Renamed".to_string())
    );
}

#[test]
fn test_zero_affected_rows_is_observable_not_an_error() {
    let mut conn = setup_db();

    // First replication of a not-yet-seen catalog: nothing to update yet
    let rows = rename(&mut conn, Source::Local, "guid-unseen", "Renamed");
    assert_eq!(rows, 0);
}

#[test]
fn test_distinct_peers_do_not_alias() {
    let mut conn = setup_db();
    let peer_a = Source::Remote(sources::register_peer(&conn, "peer-a", None).unwrap());
    let peer_b = Source::Remote(sources::register_peer(&conn, "peer-b", None).unwrap());

    catalog::insert_playlist(&conn, peer_a, "guid-1", PlaylistKind::Playlist, "A").unwrap();
    catalog::insert_playlist(&conn, peer_b, "guid-1", PlaylistKind::Playlist, "B").unwrap();

    rename(&mut conn, peer_a, "guid-1", "A2");

    assert_eq!(
        catalog::playlist_title(&conn, peer_b, "guid-1").unwrap(),
        Some("B".to_string())
    );
}

proptest! {
    // For any guid and titles, a local rename never reaches across the
    // source boundary, and bound parameters keep odd strings inert.
    #[test]
    fn prop_rename_never_crosses_sources(
        guid in "\\PC{1,32}",
        their_title in "\\PC{0,32}",
        new_title in "\\PC{0,64}",
    ) {
        let mut conn = setup_db();
        let peer = Source::Remote(sources::register_peer(&conn, "peer-a", None).unwrap());

        catalog::insert_playlist(&conn, Source::Local, &guid, PlaylistKind::Playlist, "Mine")
            .unwrap();
        catalog::insert_playlist(&conn, peer, &guid, PlaylistKind::Playlist, &their_title)
            .unwrap();

        let rows = rename(&mut conn, Source::Local, &guid, &new_title);

        prop_assert_eq!(rows, 1);
        prop_assert_eq!(
            catalog::playlist_title(&conn, Source::Local, &guid).unwrap(),
            Some(new_title)
        );
        prop_assert_eq!(
            catalog::playlist_title(&conn, peer, &guid).unwrap(),
            Some(their_title)
        );
    }
}
