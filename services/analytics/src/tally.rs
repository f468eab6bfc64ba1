//! First-seen occurrence tally shared by the aggregate views.

use std::collections::HashMap;
use std::hash::Hash;

/// Counts occurrences per key while remembering the order keys first
/// appeared in, so output order is deterministic without a secondary sort
/// key.
pub struct Tally<K> {
    index: HashMap<K, usize>,
    entries: Vec<(K, u64)>,
}

impl<K: Eq + Hash + Clone> Tally<K> {
    pub fn new() -> Self {
        Self {
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }

    /// Count one occurrence of `key`.
    pub fn bump(&mut self, key: K) {
        match self.index.get(&key) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, 1));
            }
        }
    }

    /// Entries in first-seen order.
    pub fn into_first_seen(self) -> Vec<(K, u64)> {
        self.entries
    }

    /// Entries by descending count; equal counts keep first-seen order
    /// (the sort is stable).
    pub fn into_by_count_desc(self) -> Vec<(K, u64)> {
        let mut entries = self.entries;
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries
    }
}
