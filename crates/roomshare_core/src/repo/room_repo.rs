//! Room repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide CRUD over the `room` table.
//! - Keep room SQL inside the persistence boundary.
//!
//! # Invariants
//! - `insert` writes the generated id back into the passed entity.
//! - `delete` refuses to orphan roommates: rooms with residents fail with
//!   `InUse` instead of leaving dangling `room_id` references.

use crate::db::ConnectionProvider;
use crate::model::room::{Room, RoomId};
use crate::repo::{column_to_u32, RepoError, RepoResult};
use log::debug;
use rusqlite::{params, Row};

const ROOM_SELECT_SQL: &str = "SELECT id, name, max_occupancy FROM room";

/// Repository interface for room CRUD operations.
pub trait RoomRepository {
    fn get_all(&self) -> RepoResult<Vec<Room>>;
    fn get_by_id(&self, id: RoomId) -> RepoResult<Option<Room>>;
    fn insert(&self, room: &mut Room) -> RepoResult<RoomId>;
    fn update(&self, room: &Room) -> RepoResult<()>;
    fn delete(&self, id: RoomId) -> RepoResult<()>;
}

/// SQLite-backed room repository.
pub struct SqliteRoomRepository<'p> {
    provider: &'p ConnectionProvider,
}

impl<'p> SqliteRoomRepository<'p> {
    pub fn new(provider: &'p ConnectionProvider) -> Self {
        Self { provider }
    }
}

impl RoomRepository for SqliteRoomRepository<'_> {
    fn get_all(&self) -> RepoResult<Vec<Room>> {
        let conn = self.provider.connect()?;
        let mut stmt = conn.prepare(&format!("{ROOM_SELECT_SQL};"))?;
        let mut rows = stmt.query([])?;

        let mut rooms = Vec::new();
        while let Some(row) = rows.next()? {
            rooms.push(parse_room_row(row)?);
        }
        Ok(rooms)
    }

    fn get_by_id(&self, id: RoomId) -> RepoResult<Option<Room>> {
        let conn = self.provider.connect()?;
        let mut stmt = conn.prepare(&format!("{ROOM_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query(params![id])?;

        if let Some(row) = rows.next()? {
            return Ok(Some(parse_room_row(row)?));
        }
        Ok(None)
    }

    fn insert(&self, room: &mut Room) -> RepoResult<RoomId> {
        let conn = self.provider.connect()?;
        conn.execute(
            "INSERT INTO room (name, max_occupancy) VALUES (?1, ?2);",
            params![room.name.as_str(), room.max_occupancy],
        )?;

        room.id = conn.last_insert_rowid();
        Ok(room.id)
    }

    fn update(&self, room: &Room) -> RepoResult<()> {
        let conn = self.provider.connect()?;
        let changed = conn.execute(
            "UPDATE room SET name = ?1, max_occupancy = ?2 WHERE id = ?3;",
            params![room.name.as_str(), room.max_occupancy, room.id],
        )?;

        if changed == 0 {
            debug!(
                "event=room_update module=repo status=noop id={} reason=not_found",
                room.id
            );
        }
        Ok(())
    }

    fn delete(&self, id: RoomId) -> RepoResult<()> {
        let conn = self.provider.connect()?;
        let dependents: u64 = conn.query_row(
            "SELECT COUNT(*) FROM roommate WHERE room_id = ?1;",
            params![id],
            |row| row.get(0),
        )?;
        if dependents > 0 {
            return Err(RepoError::InUse {
                entity: "room",
                id,
                dependents,
            });
        }

        let changed = conn.execute("DELETE FROM room WHERE id = ?1;", params![id])?;
        if changed == 0 {
            debug!("event=room_delete module=repo status=noop id={id} reason=not_found");
        }
        Ok(())
    }
}

fn parse_room_row(row: &Row<'_>) -> RepoResult<Room> {
    let max_occupancy: i64 = row.get("max_occupancy")?;
    Ok(Room {
        id: row.get("id")?,
        name: row.get("name")?,
        max_occupancy: column_to_u32(max_occupancy, "room.max_occupancy")?,
    })
}
