//! Roommate-to-chore assignment record.

use crate::model::chore::ChoreId;
use crate::model::roommate::RoommateId;
use serde::{Deserialize, Serialize};

/// Store-assigned row id for an assignment.
pub type AssignmentId = i64;

/// Join record marking a chore as currently owned by a roommate.
///
/// Nothing deduplicates assignments at this layer: assigning the same chore
/// twice yields two rows, each with its own id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub id: AssignmentId,
    pub roommate_id: RoommateId,
    pub chore_id: ChoreId,
}
