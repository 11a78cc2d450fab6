use roomshare_core::db::migrations::{apply_migrations, latest_version};
use roomshare_core::db::{open_db_in_memory, DbError};
use roomshare_core::ConnectionProvider;
use rusqlite::Connection;

fn schema_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}

fn assert_table_exists(conn: &Connection, table: &str) {
    let count: u32 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1;",
            [table],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(count, 1, "expected table `{table}` to exist");
}

#[test]
fn open_db_in_memory_applies_all_migrations() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn), latest_version());
    assert_table_exists(&conn, "room");
    assert_table_exists(&conn, "roommate");
    assert_table_exists(&conn, "chore");
    assert_table_exists(&conn, "roommate_chore");
}

#[test]
fn connecting_to_the_same_database_twice_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let provider = ConnectionProvider::new(dir.path().join("roomshare.db"));

    let conn_first = provider.connect().unwrap();
    assert_eq!(schema_version(&conn_first), latest_version());
    drop(conn_first);

    let conn_second = provider.connect().unwrap();
    assert_eq!(schema_version(&conn_second), latest_version());
    assert_table_exists(&conn_second, "room");
}

#[test]
fn data_persists_across_provider_connections() {
    let dir = tempfile::tempdir().unwrap();
    let provider = ConnectionProvider::new(dir.path().join("roomshare.db"));

    let conn = provider.connect().unwrap();
    conn.execute("INSERT INTO chore (name) VALUES ('Sweep');", [])
        .unwrap();
    drop(conn);

    let conn = provider.connect().unwrap();
    let count: u32 = conn
        .query_row("SELECT COUNT(*) FROM chore;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn newer_schema_version_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    let provider = ConnectionProvider::new(&path);
    let err = provider.connect().unwrap_err();
    match err {
        DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } => {
            assert_eq!(db_version, 999);
            assert_eq!(latest_supported, latest_version());
        }
        other => panic!("expected UnsupportedSchemaVersion, got {other}"),
    }
}

#[test]
fn apply_migrations_on_current_version_is_a_noop() {
    let mut conn = open_db_in_memory().unwrap();
    let before = schema_version(&conn);

    apply_migrations(&mut conn).unwrap();
    assert_eq!(schema_version(&conn), before);
}
