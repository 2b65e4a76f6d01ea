//! Per-key use counters for LFU.
//!
//! The insert itself counts as the first use, so a key that was put and never
//! read has a count of 1. Counts saturate at `u64::MAX`.

use std::hash::Hash;

use rustc_hash::FxHashMap;

/// Map from live key to its use count.
#[derive(Debug)]
pub struct FrequencyTracker<K> {
    counts: FxHashMap<K, u64>,
}

impl<K> FrequencyTracker<K>
where
    K: Clone + Eq + Hash,
{
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            counts: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Bumps the count for `key`, starting untracked keys at 0, and returns
    /// the new count.
    pub fn increment(&mut self, key: &K) -> u64 {
        if let Some(count) = self.counts.get_mut(key) {
            *count = count.saturating_add(1);
            return *count;
        }
        self.counts.insert(key.clone(), 1);
        1
    }

    /// Current count; 0 for untracked keys.
    pub fn count(&self, key: &K) -> u64 {
        self.counts.get(key).copied().unwrap_or(0)
    }

    pub fn remove(&mut self, key: &K) -> Option<u64> {
        self.counts.remove(key)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.counts.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn clear(&mut self) {
        self.counts.clear();
    }
}

impl<K> Default for FrequencyTracker<K>
where
    K: Clone + Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}
