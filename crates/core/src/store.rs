//! Persistence capability for the score list.
//!
//! Stores are best-effort: `load` returns an empty list when nothing usable
//! is stored and `save` swallows write failures. Nothing here returns an error.

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

/// One leaderboard entry as persisted: `{"name": .., "score": .., "ts": ..}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub name: String,
    pub score: u32,
    /// Milliseconds since the Unix epoch.
    #[serde(default)]
    pub ts: u64,
}

impl ScoreRecord {
    pub fn new(name: impl Into<String>, score: u32, ts: u64) -> Self {
        Self {
            name: name.into(),
            score,
            ts,
        }
    }
}

/// Read/write access to the persisted score list.
pub trait ScoreStore {
    fn load(&self) -> Vec<ScoreRecord>;

    fn save(&mut self, records: &[ScoreRecord]);
}

#[derive(Debug, Default)]
struct MemoryInner {
    records: Vec<ScoreRecord>,
    writes: u32,
}

/// In-memory store.
///
/// Clones share the same storage, so a test can keep a handle while the game
/// owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Rc<RefCell<MemoryInner>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<ScoreRecord>) -> Self {
        let store = Self::default();
        store.inner.borrow_mut().records = records;
        store
    }

    /// Current stored records.
    pub fn records(&self) -> Vec<ScoreRecord> {
        self.inner.borrow().records.clone()
    }

    /// Number of `save` calls seen.
    pub fn writes(&self) -> u32 {
        self.inner.borrow().writes
    }
}

impl ScoreStore for MemoryStore {
    fn load(&self) -> Vec<ScoreRecord> {
        self.records()
    }

    fn save(&mut self, records: &[ScoreRecord]) {
        let mut inner = self.inner.borrow_mut();
        inner.records = records.to_vec();
        inner.writes += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_clones_share_storage() {
        let handle = MemoryStore::new();
        let mut owned = handle.clone();
        owned.save(&[ScoreRecord::new("ada", 3, 1)]);

        assert_eq!(handle.writes(), 1);
        assert_eq!(handle.records(), vec![ScoreRecord::new("ada", 3, 1)]);
    }
}
