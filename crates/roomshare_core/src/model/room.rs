//! Room domain model.

use serde::{Deserialize, Serialize};

/// Store-assigned row id for a room.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type RoomId = i64;

/// A room in the household.
///
/// `id` is `0` until the record has been persisted; `insert` writes the
/// generated id back into the entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    /// Maximum number of roommates the room can hold. Never negative.
    pub max_occupancy: u32,
}

impl Room {
    /// Creates an unpersisted room with no id yet.
    pub fn new(name: impl Into<String>, max_occupancy: u32) -> Self {
        Self {
            id: 0,
            name: name.into(),
            max_occupancy,
        }
    }
}
