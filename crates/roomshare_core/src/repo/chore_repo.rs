//! Chore repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide CRUD over the `chore` table.
//! - Own the assignment relation: blind insert into `roommate_chore` and
//!   the derived unassigned-chores query.
//!
//! # Invariants
//! - "Unassigned" means zero `roommate_chore` rows reference the chore; the
//!   set is re-derived from the store on every call, never cached.
//! - Assignment does not deduplicate: the same chore may be assigned any
//!   number of times, each call creating a fresh row.

use crate::db::ConnectionProvider;
use crate::model::assignment::Assignment;
use crate::model::chore::{Chore, ChoreId};
use crate::model::roommate::RoommateId;
use crate::repo::{RepoError, RepoResult};
use log::{debug, info};
use rusqlite::{params, Row};

const CHORE_SELECT_SQL: &str = "SELECT id, name FROM chore";

/// Repository interface for chore CRUD and assignment operations.
pub trait ChoreRepository {
    fn get_all(&self) -> RepoResult<Vec<Chore>>;
    fn get_by_id(&self, id: ChoreId) -> RepoResult<Option<Chore>>;
    fn insert(&self, chore: &mut Chore) -> RepoResult<ChoreId>;
    fn update(&self, chore: &Chore) -> RepoResult<()>;
    fn delete(&self, id: ChoreId) -> RepoResult<()>;
    /// Lists chores with no assignment row, in store order.
    fn get_unassigned(&self) -> RepoResult<Vec<Chore>>;
    /// Assigns `chore_id` to `roommate_id` and returns the created record.
    ///
    /// Foreign keys are enforced, so nonexistent ids surface the store's
    /// constraint error. Existing assignments for the chore are untouched.
    fn assign(&self, roommate_id: RoommateId, chore_id: ChoreId) -> RepoResult<Assignment>;
}

/// SQLite-backed chore repository.
pub struct SqliteChoreRepository<'p> {
    provider: &'p ConnectionProvider,
}

impl<'p> SqliteChoreRepository<'p> {
    pub fn new(provider: &'p ConnectionProvider) -> Self {
        Self { provider }
    }
}

impl ChoreRepository for SqliteChoreRepository<'_> {
    fn get_all(&self) -> RepoResult<Vec<Chore>> {
        let conn = self.provider.connect()?;
        let mut stmt = conn.prepare(&format!("{CHORE_SELECT_SQL};"))?;
        let mut rows = stmt.query([])?;

        let mut chores = Vec::new();
        while let Some(row) = rows.next()? {
            chores.push(parse_chore_row(row)?);
        }
        Ok(chores)
    }

    fn get_by_id(&self, id: ChoreId) -> RepoResult<Option<Chore>> {
        let conn = self.provider.connect()?;
        let mut stmt = conn.prepare(&format!("{CHORE_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query(params![id])?;

        if let Some(row) = rows.next()? {
            return Ok(Some(parse_chore_row(row)?));
        }
        Ok(None)
    }

    fn insert(&self, chore: &mut Chore) -> RepoResult<ChoreId> {
        let conn = self.provider.connect()?;
        conn.execute(
            "INSERT INTO chore (name) VALUES (?1);",
            params![chore.name.as_str()],
        )?;

        chore.id = conn.last_insert_rowid();
        Ok(chore.id)
    }

    fn update(&self, chore: &Chore) -> RepoResult<()> {
        let conn = self.provider.connect()?;
        let changed = conn.execute(
            "UPDATE chore SET name = ?1 WHERE id = ?2;",
            params![chore.name.as_str(), chore.id],
        )?;

        if changed == 0 {
            debug!(
                "event=chore_update module=repo status=noop id={} reason=not_found",
                chore.id
            );
        }
        Ok(())
    }

    fn delete(&self, id: ChoreId) -> RepoResult<()> {
        let conn = self.provider.connect()?;
        let dependents: u64 = conn.query_row(
            "SELECT COUNT(*) FROM roommate_chore WHERE chore_id = ?1;",
            params![id],
            |row| row.get(0),
        )?;
        if dependents > 0 {
            return Err(RepoError::InUse {
                entity: "chore",
                id,
                dependents,
            });
        }

        let changed = conn.execute("DELETE FROM chore WHERE id = ?1;", params![id])?;
        if changed == 0 {
            debug!("event=chore_delete module=repo status=noop id={id} reason=not_found");
        }
        Ok(())
    }

    fn get_unassigned(&self) -> RepoResult<Vec<Chore>> {
        let conn = self.provider.connect()?;
        let mut stmt = conn.prepare(
            "SELECT chore.id, chore.name FROM chore
             LEFT JOIN roommate_chore rc ON rc.chore_id = chore.id
             WHERE rc.id IS NULL;",
        )?;
        let mut rows = stmt.query([])?;

        let mut chores = Vec::new();
        while let Some(row) = rows.next()? {
            chores.push(parse_chore_row(row)?);
        }
        Ok(chores)
    }

    fn assign(&self, roommate_id: RoommateId, chore_id: ChoreId) -> RepoResult<Assignment> {
        let conn = self.provider.connect()?;
        conn.execute(
            "INSERT INTO roommate_chore (roommate_id, chore_id) VALUES (?1, ?2);",
            params![roommate_id, chore_id],
        )?;

        let assignment = Assignment {
            id: conn.last_insert_rowid(),
            roommate_id,
            chore_id,
        };
        info!(
            "event=chore_assign module=repo status=ok assignment_id={} roommate_id={} chore_id={}",
            assignment.id, roommate_id, chore_id
        );
        Ok(assignment)
    }
}

fn parse_chore_row(row: &Row<'_>) -> RepoResult<Chore> {
    Ok(Chore {
        id: row.get("id")?,
        name: row.get("name")?,
    })
}
