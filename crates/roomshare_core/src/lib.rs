//! Core household-management logic for roomshare.
//! This crate is the single source of truth for storage access.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;

pub use db::{open_db_in_memory, ConnectionProvider, DbError, DbResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::assignment::{Assignment, AssignmentId};
pub use model::chore::{Chore, ChoreId};
pub use model::room::{Room, RoomId};
pub use model::roommate::{Roommate, RoommateId};
pub use repo::chore_repo::{ChoreRepository, SqliteChoreRepository};
pub use repo::room_repo::{RoomRepository, SqliteRoomRepository};
pub use repo::roommate_repo::{RoommateRepository, SqliteRoommateRepository};
pub use repo::{RepoError, RepoResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
