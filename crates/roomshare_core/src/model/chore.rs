//! Chore domain model.

use serde::{Deserialize, Serialize};

/// Store-assigned row id for a chore.
pub type ChoreId = i64;

/// A recurring household chore, independent of who (if anyone) owns it.
///
/// Assignment state lives in the `roommate_chore` relation, not here; a
/// chore with zero assignment rows is "unassigned".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chore {
    pub id: ChoreId,
    pub name: String,
}

impl Chore {
    /// Creates an unpersisted chore with no id yet.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
        }
    }
}
