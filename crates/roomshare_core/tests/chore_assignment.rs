use roomshare_core::{
    Chore, ChoreRepository, ConnectionProvider, RepoError, SqliteChoreRepository,
};
use rusqlite::params;
use tempfile::TempDir;

fn test_provider() -> (TempDir, ConnectionProvider) {
    let dir = tempfile::tempdir().unwrap();
    let provider = ConnectionProvider::new(dir.path().join("roomshare.db"));
    (dir, provider)
}

/// Seeds one room and one roommate, returning the roommate id.
fn seed_roommate(provider: &ConnectionProvider) -> i64 {
    let conn = provider.connect().unwrap();
    conn.execute(
        "INSERT INTO room (name, max_occupancy) VALUES ('Seed', 2);",
        [],
    )
    .unwrap();
    let room_id = conn.last_insert_rowid();
    conn.execute(
        "INSERT INTO roommate (first_name, last_name, rent_portion, moved_in_at, room_id)
         VALUES (?1, ?2, ?3, ?4, ?5);",
        params!["Alex", "Smith", 600_u32, 1_700_000_000_000_i64, room_id],
    )
    .unwrap();
    conn.last_insert_rowid()
}

fn assignment_rows_for_chore(provider: &ConnectionProvider, chore_id: i64) -> u64 {
    let conn = provider.connect().unwrap();
    conn.query_row(
        "SELECT COUNT(*) FROM roommate_chore WHERE chore_id = ?1;",
        params![chore_id],
        |row| row.get(0),
    )
    .unwrap()
}

#[test]
fn insert_then_get_by_id_round_trips() {
    let (_dir, provider) = test_provider();
    let repo = SqliteChoreRepository::new(&provider);

    let mut chore = Chore::new("Dishes");
    let id = repo.insert(&mut chore).unwrap();

    assert!(id > 0);
    let loaded = repo.get_by_id(id).unwrap().unwrap();
    assert_eq!(loaded.id, id);
    assert_eq!(loaded.name, "Dishes");
}

#[test]
fn get_by_id_missing_returns_none() {
    let (_dir, provider) = test_provider();
    let repo = SqliteChoreRepository::new(&provider);

    assert!(repo.get_by_id(7).unwrap().is_none());
}

#[test]
fn update_then_refetch_sees_new_name() {
    let (_dir, provider) = test_provider();
    let repo = SqliteChoreRepository::new(&provider);

    let mut chore = Chore::new("Mop");
    repo.insert(&mut chore).unwrap();

    chore.name = "Mop kitchen".to_string();
    repo.update(&chore).unwrap();

    let loaded = repo.get_by_id(chore.id).unwrap().unwrap();
    assert_eq!(loaded.name, "Mop kitchen");
}

#[test]
fn update_of_missing_id_is_a_silent_noop() {
    let (_dir, provider) = test_provider();
    let repo = SqliteChoreRepository::new(&provider);

    let ghost = Chore { id: 404, name: "Ghost".to_string() };
    repo.update(&ghost).unwrap();
    assert!(repo.get_all().unwrap().is_empty());
}

#[test]
fn delete_removes_chore_and_missing_delete_is_noop() {
    let (_dir, provider) = test_provider();
    let repo = SqliteChoreRepository::new(&provider);

    let mut chore = Chore::new("Vacuum");
    repo.insert(&mut chore).unwrap();

    repo.delete(chore.id).unwrap();
    assert!(repo.get_all().unwrap().is_empty());

    repo.delete(chore.id).unwrap();
}

#[test]
fn unassigned_excludes_chore_once_assigned() {
    let (_dir, provider) = test_provider();
    let repo = SqliteChoreRepository::new(&provider);
    let roommate_id = seed_roommate(&provider);

    let mut dishes = Chore::new("Dishes");
    let mut trash = Chore::new("Trash");
    repo.insert(&mut dishes).unwrap();
    repo.insert(&mut trash).unwrap();

    // before any assignment both chores are unassigned
    let before = repo.get_unassigned().unwrap();
    assert_eq!(before.len(), 2);

    repo.assign(roommate_id, dishes.id).unwrap();

    let after = repo.get_unassigned().unwrap();
    assert_eq!(after.len(), 1);
    assert_eq!(after[0].id, trash.id);
    assert_eq!(after[0].name, "Trash");
}

#[test]
fn assign_returns_created_record() {
    let (_dir, provider) = test_provider();
    let repo = SqliteChoreRepository::new(&provider);
    let roommate_id = seed_roommate(&provider);

    let mut chore = Chore::new("Laundry");
    repo.insert(&mut chore).unwrap();

    let assignment = repo.assign(roommate_id, chore.id).unwrap();
    assert!(assignment.id > 0);
    assert_eq!(assignment.roommate_id, roommate_id);
    assert_eq!(assignment.chore_id, chore.id);
}

#[test]
fn assigning_the_same_chore_twice_creates_two_rows() {
    let (_dir, provider) = test_provider();
    let repo = SqliteChoreRepository::new(&provider);
    let roommate_id = seed_roommate(&provider);

    let mut chore = Chore::new("Windows");
    repo.insert(&mut chore).unwrap();

    let first = repo.assign(roommate_id, chore.id).unwrap();
    let second = repo.assign(roommate_id, chore.id).unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(assignment_rows_for_chore(&provider, chore.id), 2);
}

#[test]
fn assigning_nonexistent_ids_surfaces_constraint_error() {
    let (_dir, provider) = test_provider();
    let repo = SqliteChoreRepository::new(&provider);

    let err = repo.assign(555, 777).unwrap_err();
    assert!(matches!(err, RepoError::Db(_)));
}

#[test]
fn delete_of_assigned_chore_fails_with_in_use() {
    let (_dir, provider) = test_provider();
    let repo = SqliteChoreRepository::new(&provider);
    let roommate_id = seed_roommate(&provider);

    let mut chore = Chore::new("Garden");
    repo.insert(&mut chore).unwrap();
    repo.assign(roommate_id, chore.id).unwrap();

    let err = repo.delete(chore.id).unwrap_err();
    match err {
        RepoError::InUse { entity, id, dependents } => {
            assert_eq!(entity, "chore");
            assert_eq!(id, chore.id);
            assert_eq!(dependents, 1);
        }
        other => panic!("expected InUse, got {other}"),
    }

    assert!(repo.get_by_id(chore.id).unwrap().is_some());
}
