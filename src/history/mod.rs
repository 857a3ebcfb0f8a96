//! Undo history.
//!
//! Every throw pushes a snapshot of the state it is about to change.
//! Undo pops the latest snapshot and the session restores it wholesale.
//! Snapshots are values, so nothing done to the live state afterwards can
//! alter them.

mod stack;

pub use stack::{HistoryEntry, HistoryStack};
