//! Roommate repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide read access to the `roommate` table.
//! - Resolve the embedded room via a join for by-id lookups.
//!
//! # Invariants
//! - Every read populates all scalar roommate fields; `room` is `Some` only
//!   on the by-id path. Bulk reads never issue per-row room lookups.
//! - No write operations: roommate lifecycle is managed outside this layer.

use crate::db::ConnectionProvider;
use crate::model::room::Room;
use crate::model::roommate::{Roommate, RoommateId};
use crate::repo::{column_to_u32, RepoResult};
use rusqlite::{params, Row};

const ROOMMATE_SELECT_SQL: &str =
    "SELECT id, first_name, last_name, rent_portion, moved_in_at, room_id FROM roommate";

/// Repository interface for roommate read operations.
pub trait RoommateRepository {
    fn get_all(&self) -> RepoResult<Vec<Roommate>>;
    /// Fetches one roommate with the embedded room resolved.
    fn get_by_id(&self, id: RoommateId) -> RepoResult<Option<Roommate>>;
}

/// SQLite-backed roommate repository.
pub struct SqliteRoommateRepository<'p> {
    provider: &'p ConnectionProvider,
}

impl<'p> SqliteRoommateRepository<'p> {
    pub fn new(provider: &'p ConnectionProvider) -> Self {
        Self { provider }
    }
}

impl RoommateRepository for SqliteRoommateRepository<'_> {
    fn get_all(&self) -> RepoResult<Vec<Roommate>> {
        let conn = self.provider.connect()?;
        let mut stmt = conn.prepare(&format!("{ROOMMATE_SELECT_SQL};"))?;
        let mut rows = stmt.query([])?;

        let mut roommates = Vec::new();
        while let Some(row) = rows.next()? {
            roommates.push(parse_roommate_row(row, None)?);
        }
        Ok(roommates)
    }

    fn get_by_id(&self, id: RoommateId) -> RepoResult<Option<Roommate>> {
        let conn = self.provider.connect()?;
        let mut stmt = conn.prepare(
            "SELECT
                rm.id,
                rm.first_name,
                rm.last_name,
                rm.rent_portion,
                rm.moved_in_at,
                rm.room_id,
                r.name AS room_name,
                r.max_occupancy AS room_max_occupancy
             FROM roommate rm
             JOIN room r ON r.id = rm.room_id
             WHERE rm.id = ?1;",
        )?;
        let mut rows = stmt.query(params![id])?;

        if let Some(row) = rows.next()? {
            let room_max: i64 = row.get("room_max_occupancy")?;
            let room = Room {
                id: row.get("room_id")?,
                name: row.get("room_name")?,
                max_occupancy: column_to_u32(room_max, "room.max_occupancy")?,
            };
            return Ok(Some(parse_roommate_row(row, Some(room))?));
        }
        Ok(None)
    }
}

fn parse_roommate_row(row: &Row<'_>, room: Option<Room>) -> RepoResult<Roommate> {
    let rent_portion: i64 = row.get("rent_portion")?;
    Ok(Roommate {
        id: row.get("id")?,
        first_name: row.get("first_name")?,
        last_name: row.get("last_name")?,
        rent_portion: column_to_u32(rent_portion, "roommate.rent_portion")?,
        moved_in_at: row.get("moved_in_at")?,
        room_id: row.get("room_id")?,
        room,
    })
}
