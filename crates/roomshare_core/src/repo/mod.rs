//! Repository layer contracts and SQLite implementations.
//!
//! # Responsibility
//! - Define per-entity data access contracts (rooms, chores, roommates).
//! - Isolate all SQL text from callers; expose plain domain values.
//!
//! # Invariants
//! - Every operation acquires one scoped connection from the provider and
//!   releases it on all exit paths.
//! - By-id reads report absence as `Ok(None)`, never as a partially
//!   populated entity.
//! - Updates and deletes of a missing id are silent no-ops; deletes blocked
//!   by dependent rows fail with `RepoError::InUse`.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod chore_repo;
pub mod room_repo;
pub mod roommate_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for household persistence operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    /// A delete was refused because dependent rows still reference the row.
    InUse {
        entity: &'static str,
        id: i64,
        dependents: u64,
    },
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InUse {
                entity,
                id,
                dependents,
            } => write!(
                f,
                "{entity} {id} is still in use by {dependents} dependent row(s)"
            ),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InUse { .. } => None,
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Converts a stored integer column to `u32`, rejecting out-of-range values.
pub(crate) fn column_to_u32(value: i64, column: &str) -> RepoResult<u32> {
    u32::try_from(value)
        .map_err(|_| RepoError::InvalidData(format!("value `{value}` out of range in {column}")))
}
