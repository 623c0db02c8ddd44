// Integration tests for the replication oplog and the source registry

use rusqlite::Connection;
use syncopate_core::{Command, Mutation, PlaylistKind, Source};
use syncopate_store::{append_op, apply_mutation, catalog, db, migrations, ops_after, sources};

fn setup_db() -> Connection {
    let mut conn = db::open_in_memory().unwrap();
    db::configure(&conn).unwrap();
    migrations::apply_migrations(&mut conn).unwrap();
    conn
}

fn local_rename(guid: &str, title: &str) -> Command {
    Command::rename_playlist(Source::Local, guid, title).unwrap()
}

#[test]
fn test_oplog_commits_atomically_with_the_mutation() {
    let mut conn = setup_db();
    catalog::insert_playlist(&conn, Source::Local, "guid-1", PlaylistKind::Playlist, "Old")
        .unwrap();
    let cmd = local_rename("guid-1", "New");

    // Rolled-back transaction leaves no trace at all
    {
        let tx = conn.transaction().unwrap();
        apply_mutation(&tx, cmd.source(), cmd.guid(), cmd.mutation()).unwrap();
        append_op(&tx, cmd.source(), &cmd.to_record()).unwrap();
        // dropped without commit
    }
    assert!(ops_after(&conn, None).unwrap().is_empty());
    assert_eq!(
        catalog::playlist_title(&conn, Source::Local, "guid-1").unwrap(),
        Some("Old".to_string())
    );

    // Committed transaction leaves both
    let tx = conn.transaction().unwrap();
    apply_mutation(&tx, cmd.source(), cmd.guid(), cmd.mutation()).unwrap();
    append_op(&tx, cmd.source(), &cmd.to_record()).unwrap();
    tx.commit().unwrap();

    let ops = ops_after(&conn, None).unwrap();
    assert_eq!(ops.len(), 1);
    assert_eq!(ops[0].source, Source::Local);
    assert_eq!(ops[0].record.guid, "guid-1");
    assert_eq!(ops[0].record.kind(), "rename_playlist");
    assert_eq!(
        catalog::playlist_title(&conn, Source::Local, "guid-1").unwrap(),
        Some("New".to_string())
    );
}

#[test]
fn test_ops_after_resumes_from_cursor() {
    let mut conn = setup_db();

    let first = local_rename("guid-1", "One");
    let second = local_rename("guid-2", "Two");
    for cmd in [&first, &second] {
        let tx = conn.transaction().unwrap();
        append_op(&tx, cmd.source(), &cmd.to_record()).unwrap();
        tx.commit().unwrap();
    }

    let all = ops_after(&conn, None).unwrap();
    assert_eq!(all.len(), 2);

    let rest = ops_after(&conn, Some(&all[0].opguid)).unwrap();
    assert_eq!(rest.len(), 1);
    assert_eq!(rest[0].record.guid, "guid-2");
}

#[test]
fn test_replay_reconstructs_an_equivalent_command() {
    let mut conn = setup_db();
    let cmd = local_rename("guid-1", "New");

    let tx = conn.transaction().unwrap();
    append_op(&tx, cmd.source(), &cmd.to_record()).unwrap();
    tx.commit().unwrap();

    let ops = ops_after(&conn, None).unwrap();
    let peer = Source::Remote(sources::register_peer(&conn, "peer-a", None).unwrap());

    // The receiving peer attributes the op to the sender and replays it
    let replayed = Command::from_record(peer, &ops[0].record).unwrap();
    assert_eq!(replayed.source(), peer);
    assert_eq!(replayed.guid(), "guid-1");
    assert_eq!(
        replayed.mutation(),
        &Mutation::RenamePlaylist {
            title: "New".to_string()
        }
    );
}

#[test]
fn test_register_peer_returns_stable_ids() {
    let conn = setup_db();

    let a = sources::register_peer(&conn, "peer-a", Some("Alice")).unwrap();
    let b = sources::register_peer(&conn, "peer-b", None).unwrap();

    assert_ne!(a, b);
    assert_eq!(sources::register_peer(&conn, "peer-a", None).unwrap(), a);
    assert_eq!(sources::peer_id(&conn, "peer-a").unwrap(), Some(a));
    assert_eq!(sources::peer_id(&conn, "peer-c").unwrap(), None);
}

#[test]
fn test_last_op_cursor_round_trip() {
    let conn = setup_db();
    let id = sources::register_peer(&conn, "peer-a", None).unwrap();

    assert_eq!(sources::last_op(&conn, id).unwrap(), None);

    sources::set_last_op(&conn, id, "op-guid-42").unwrap();
    assert_eq!(
        sources::last_op(&conn, id).unwrap(),
        Some("op-guid-42".to_string())
    );
}
