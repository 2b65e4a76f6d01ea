//! MRU (Most Recently Used) replacement.
//!
//! Mirror image of [`Lru`](super::Lru): reads and overwrites move a key to
//! the tail, and the victim is taken from the tail. Useful for cyclic scans
//! larger than the cache, where the entry just used is the one least likely
//! to be needed again soon.
//!
//! ```text
//!   put A, B, C, D          recency: [A, B, C, D]
//!   get A                   recency: [B, C, D, A]
//!   put E                   evict A → [B, C, D, E]
//! ```

use std::hash::Hash;

use crate::ds::{FrequencyTracker, RecencyTracker};
use crate::policy::EvictionPolicy;

/// Evicts the most recently used key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Mru;

impl EvictionPolicy for Mru {
    fn name(&self) -> &'static str {
        "mru"
    }

    fn touch_on_overwrite(&self) -> bool {
        true
    }

    fn touch_on_hit(&self) -> bool {
        true
    }

    fn select_victim<'a, K>(
        &self,
        recency: &'a RecencyTracker<K>,
        _frequency: &'a FrequencyTracker<K>,
    ) -> Option<&'a K>
    where
        K: Clone + Eq + Hash,
    {
        recency.newest()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use super::*;
    use crate::cache::Cache;

    fn filled() -> (Cache<&'static str, &'static str, Mru>, mpsc::Receiver<&'static str>) {
        let (tx, rx) = mpsc::channel();
        let mut cache: Cache<&str, &str, Mru> = Cache::try_new(4).unwrap();
        cache.on_discard(move |key| {
            let _ = tx.send(*key);
        });
        cache.insert("A", "Hello");
        cache.insert("B", "World");
        cache.insert("C", "Welcome");
        cache.insert("D", "Home");
        (cache, rx)
    }

    #[test]
    fn evicts_last_touched_key() {
        let (mut cache, rx) = filled();
        cache.get(&"A");
        cache.insert("E", "Bye");
        assert_eq!(rx.try_recv(), Ok("A"));
        assert!(cache.contains(&"D"));
    }

    #[test]
    fn without_access_evicts_last_inserted() {
        let (mut cache, rx) = filled();
        cache.insert("E", "Bye");
        assert_eq!(rx.try_recv(), Ok("D"));
    }

    #[test]
    fn overwrite_counts_as_use() {
        let (mut cache, rx) = filled();
        cache.insert("B", "Street");
        cache.insert("E", "Bye");
        assert_eq!(rx.try_recv(), Ok("B"));
    }

    #[test]
    fn newcomer_is_next_victim() {
        let (mut cache, rx) = filled();
        cache.insert("E", "x");
        cache.insert("F", "x");
        assert_eq!(rx.try_iter().collect::<Vec<_>>(), vec!["D", "E"]);
        assert_eq!(cache.peek_victim(), Some(&"F"));
    }
}
