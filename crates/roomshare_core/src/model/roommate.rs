//! Roommate domain model.

use crate::model::room::{Room, RoomId};
use serde::{Deserialize, Serialize};

/// Store-assigned row id for a roommate.
pub type RoommateId = i64;

/// A person living in the household.
///
/// Scalar fields are always populated by every read path. The embedded
/// `room` is an enrichment: `get_by_id` resolves it via a join, bulk reads
/// leave it as `None` rather than issuing N extra lookups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roommate {
    pub id: RoommateId,
    pub first_name: String,
    pub last_name: String,
    /// Share of rent, in whole currency units.
    pub rent_portion: u32,
    /// Move-in timestamp in epoch milliseconds.
    pub moved_in_at: i64,
    pub room_id: RoomId,
    /// Resolved room, populated only by by-id lookups.
    pub room: Option<Room>,
}

impl Roommate {
    /// Returns the roommate's display name, `"First Last"`.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
