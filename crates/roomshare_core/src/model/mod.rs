//! Domain records for the household: rooms, roommates, chores, assignments.
//!
//! # Responsibility
//! - Define the plain data structures returned by the repository layer.
//! - Keep entities behavior-free: they are detached snapshots of stored rows.
//!
//! # Invariants
//! - Every persisted entity carries a positive, store-assigned id.
//! - Mutating a snapshot never touches the store; only explicit repository
//!   update calls do.

pub mod assignment;
pub mod chore;
pub mod room;
pub mod roommate;
