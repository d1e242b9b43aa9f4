//! Top-five leaderboard over an injected [`ScoreStore`].

use std::time::{SystemTime, UNIX_EPOCH};

use crate::store::{ScoreRecord, ScoreStore};
use crate::types::LEADERBOARD_CAP;

const DEFAULT_NAME: &str = "Player";

/// Sort by score descending, newest first among equal scores.
pub fn rank(records: &mut Vec<ScoreRecord>) {
    records.sort_by(|a, b| b.score.cmp(&a.score).then(b.ts.cmp(&a.ts)));
    records.truncate(LEADERBOARD_CAP);
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

pub struct Leaderboard {
    store: Box<dyn ScoreStore>,
    entries: Vec<ScoreRecord>,
}

impl Leaderboard {
    pub fn new(store: Box<dyn ScoreStore>) -> Self {
        let mut board = Self {
            store,
            entries: Vec::new(),
        };
        board.reload();
        board
    }

    /// Re-read the store. Whatever it holds is re-ranked and capped.
    pub fn reload(&mut self) {
        let mut entries = self.store.load();
        rank(&mut entries);
        self.entries = entries;
    }

    pub fn entries(&self) -> &[ScoreRecord] {
        &self.entries
    }

    /// Highest stored score.
    pub fn best(&self) -> Option<u32> {
        self.entries.first().map(|r| r.score)
    }

    /// Record a finished game stamped with the current time.
    pub fn record(&mut self, name: &str, score: u32) -> Option<ScoreRecord> {
        self.record_at(name, score, now_ms())
    }

    /// Record a finished game and persist the list.
    ///
    /// Zero scores are not recorded and cause no write.
    pub fn record_at(&mut self, name: &str, score: u32, ts: u64) -> Option<ScoreRecord> {
        if score == 0 {
            return None;
        }
        let name = match name.trim() {
            "" => DEFAULT_NAME,
            trimmed => trimmed,
        };
        let record = ScoreRecord::new(name, score, ts);

        let mut entries = self.store.load();
        entries.push(record.clone());
        rank(&mut entries);
        self.store.save(&entries);
        self.entries = entries;
        Some(record)
    }

    pub fn clear(&mut self) {
        self.store.save(&[]);
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn zero_score_is_not_recorded() {
        let store = MemoryStore::new();
        let mut board = Leaderboard::new(Box::new(store.clone()));
        assert_eq!(board.record_at("ada", 0, 1), None);
        assert_eq!(store.writes(), 0);
        assert!(board.entries().is_empty());
    }

    #[test]
    fn empty_name_becomes_player() {
        let store = MemoryStore::new();
        let mut board = Leaderboard::new(Box::new(store.clone()));
        board.record_at("  ", 3, 1);
        assert_eq!(store.records(), vec![ScoreRecord::new("Player", 3, 1)]);
    }

    #[test]
    fn keeps_top_five_newest_first_on_ties() {
        let store = MemoryStore::new();
        let mut board = Leaderboard::new(Box::new(store.clone()));
        for (i, score) in [5, 1, 9, 5, 7, 3].into_iter().enumerate() {
            board.record_at(&format!("p{i}"), score, i as u64);
        }

        let scores: Vec<(u32, u64)> = board.entries().iter().map(|r| (r.score, r.ts)).collect();
        assert_eq!(scores, vec![(9, 2), (7, 4), (5, 3), (5, 0), (3, 5)]);
        assert_eq!(store.records(), board.entries());
        assert_eq!(board.best(), Some(9));
    }

    #[test]
    fn loaded_lists_are_ranked() {
        let store = MemoryStore::with_records(vec![
            ScoreRecord::new("a", 1, 0),
            ScoreRecord::new("b", 4, 0),
            ScoreRecord::new("c", 2, 0),
        ]);
        let board = Leaderboard::new(Box::new(store));
        let names: Vec<&str> = board.entries().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["b", "c", "a"]);
    }

    #[test]
    fn clear_empties_store() {
        let store = MemoryStore::with_records(vec![ScoreRecord::new("a", 1, 0)]);
        let mut board = Leaderboard::new(Box::new(store.clone()));
        board.clear();
        assert!(store.records().is_empty());
        assert_eq!(board.best(), None);
    }
}
