//! Translation history
//!
//! Memory-only, bounded log of successful translations. Nothing here is
//! persisted; the store lives and dies with the application.

use std::collections::VecDeque;

/// Maximum number of records kept
pub const HISTORY_CAPACITY: usize = 10;

/// A single completed translation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRecord {
    pub source_lang: String,
    pub input_text: String,
    pub target_lang: String,
    pub translated_text: String,
}

/// Bounded most-recent-first history with FIFO eviction
#[derive(Debug, Default)]
pub struct HistoryStore {
    records: VecDeque<TranslationRecord>,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self {
            records: VecDeque::with_capacity(HISTORY_CAPACITY + 1),
        }
    }

    /// Add a record as the newest entry, evicting the oldest when full
    pub fn append(&mut self, record: TranslationRecord) {
        self.records.push_front(record);
        if self.records.len() > HISTORY_CAPACITY {
            self.records.pop_back();
        }
    }

    /// Snapshot of all records, newest first
    pub fn all(&self) -> Vec<TranslationRecord> {
        self.records.iter().cloned().collect()
    }

    pub fn get(&self, index: usize) -> Option<&TranslationRecord> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(n: usize) -> TranslationRecord {
        TranslationRecord {
            source_lang: "Russian".to_string(),
            input_text: format!("input {}", n),
            target_lang: "Aleut".to_string(),
            translated_text: format!("output {}", n),
        }
    }

    #[test]
    fn test_history_starts_empty() {
        let store = HistoryStore::new();
        assert!(store.is_empty());
        assert!(store.all().is_empty());
    }

    #[test]
    fn test_history_is_most_recent_first() {
        let mut store = HistoryStore::new();
        store.append(record(1));
        store.append(record(2));
        store.append(record(3));

        let inputs: Vec<_> = store.all().into_iter().map(|r| r.input_text).collect();
        assert_eq!(inputs, vec!["input 3", "input 2", "input 1"]);
    }

    #[test]
    fn test_eleventh_append_evicts_oldest() {
        let mut store = HistoryStore::new();
        for n in 1..=11 {
            store.append(record(n));
        }

        let all = store.all();
        assert_eq!(all.len(), HISTORY_CAPACITY);
        assert_eq!(all[0], record(11));
        assert_eq!(all[9], record(2));
        assert!(!all.contains(&record(1)));
    }

    #[test]
    fn test_history_never_exceeds_capacity() {
        let mut store = HistoryStore::new();
        for n in 0..57 {
            store.append(record(n));
            assert!(store.len() <= HISTORY_CAPACITY);
        }

        let expected: Vec<_> = (47..57).rev().map(record).collect();
        assert_eq!(store.all(), expected);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut store = HistoryStore::new();
        store.append(record(1));
        let snapshot = store.all();

        store.append(record(2));
        store.clear();

        assert_eq!(snapshot, vec![record(1)]);
        assert!(store.is_empty());
    }

    #[test]
    fn test_reads_do_not_reorder() {
        let mut store = HistoryStore::new();
        for n in 1..=10 {
            store.append(record(n));
        }
        // Reading the oldest entry must not protect it from eviction
        assert_eq!(store.get(9), Some(&record(1)));
        store.append(record(11));
        assert_eq!(store.get(9), Some(&record(2)));
    }
}
