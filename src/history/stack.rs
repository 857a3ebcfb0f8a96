//! Snapshot stack (LIFO).

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{GameState, Multiplier, ThrowRecord};

/// The state as it was before a throw, plus the throw itself.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Pre-throw state.
    pub state: GameState,

    /// The throw that was applied on top of `state`.
    pub record: ThrowRecord,
}

impl HistoryEntry {
    #[must_use]
    pub fn new(state: GameState, record: ThrowRecord) -> Self {
        Self { state, record }
    }

    /// Multiplier of the throw this entry precedes.
    #[must_use]
    pub fn multiplier(&self) -> Multiplier {
        self.record.throw.multiplier
    }
}

/// Append-only stack of snapshots, one per throw.
///
/// Backed by `im::Vector`, so cloning the whole history is O(1).
///
/// ```
/// use dart_cricket::core::{GameState, PlayerId, Throw, ThrowRecord};
/// use dart_cricket::history::{HistoryEntry, HistoryStack};
///
/// let mut history = HistoryStack::new();
/// assert!(history.pop().is_none());
///
/// let state = GameState::new(&["A", "B"]);
/// let record = ThrowRecord::new(PlayerId::new(0), Throw::miss(), 1, 0);
/// history.push(HistoryEntry::new(state.clone(), record));
///
/// assert_eq!(history.pop().map(|e| e.state), Some(state));
/// assert!(history.is_empty());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryStack {
    /// Oldest first; the top of the stack is the back.
    entries: Vector<HistoryEntry>,
}

impl HistoryStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a snapshot.
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push_back(entry);
    }

    /// Remove and return the most recent snapshot. `None` when empty.
    pub fn pop(&mut self) -> Option<HistoryEntry> {
        self.entries.pop_back()
    }

    /// The most recent snapshot, if any.
    #[must_use]
    pub fn peek(&self) -> Option<&HistoryEntry> {
        self.entries.back()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every snapshot.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Snapshots from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// Throws still on the stack, oldest first.
    pub fn records(&self) -> impl Iterator<Item = &ThrowRecord> {
        self.entries.iter().map(|e| &e.record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CricketNumber, PlayerId, Throw};

    fn entry(round: u32, throw: Throw) -> HistoryEntry {
        let mut state = GameState::new(&["A", "B"]);
        state.round = round;
        HistoryEntry::new(state, ThrowRecord::new(PlayerId::new(0), throw, round, 0))
    }

    #[test]
    fn test_lifo_order() {
        let mut history = HistoryStack::new();
        history.push(entry(1, Throw::miss()));
        history.push(entry(2, Throw::cricket(CricketNumber::Bull, Multiplier::Double)));

        assert_eq!(history.len(), 2);
        assert_eq!(history.peek().map(|e| e.state.round), Some(2));
        assert_eq!(history.pop().map(|e| e.multiplier()), Some(Multiplier::Double));
        assert_eq!(history.pop().map(|e| e.state.round), Some(1));
        assert!(history.pop().is_none());
    }

    #[test]
    fn test_empty_pop_is_noop() {
        let mut history = HistoryStack::new();
        for _ in 0..3 {
            assert!(history.pop().is_none());
        }
        assert!(history.is_empty());
    }

    #[test]
    fn test_snapshot_survives_live_mutation() {
        let mut live = GameState::new(&["A", "B"]);
        let mut history = HistoryStack::new();
        history.push(HistoryEntry::new(
            live.clone(),
            ThrowRecord::new(PlayerId::new(0), Throw::miss(), 1, 0),
        ));

        live.players[PlayerId::new(0)].marks.set(CricketNumber::Twenty, 3);
        live.throw_count = 2;

        let snapshot = history.pop().unwrap().state;
        assert_eq!(snapshot.player(PlayerId::new(0)).marks.get(CricketNumber::Twenty), 0);
        assert_eq!(snapshot.throw_count, 0);
    }

    #[test]
    fn test_clone_shares_nothing_observable() {
        let mut history = HistoryStack::new();
        history.push(entry(1, Throw::miss()));

        let copy = history.clone();
        history.clear();

        assert!(history.is_empty());
        assert_eq!(copy.len(), 1);
    }

    #[test]
    fn test_records() {
        let mut history = HistoryStack::new();
        history.push(entry(1, Throw::miss()));
        history.push(entry(1, Throw::cricket(CricketNumber::Twenty, Multiplier::Single)));

        let throws: Vec<_> = history.records().map(|r| r.throw).collect();
        assert_eq!(
            throws,
            vec![
                Throw::miss(),
                Throw::cricket(CricketNumber::Twenty, Multiplier::Single)
            ]
        );
    }
}
