//! LRU (Least Recently Used) replacement.
//!
//! ## Architecture
//!
//! ```text
//!   RecencyTracker (owned by Cache)
//!
//!   head ──► [A] ◄──► [B] ◄──► [C] ◄──► [D] ◄── tail
//!          (LRU)                            (MRU)
//!
//!   get(B)        → [A, C, D, B]
//!   put(C, ..)    → [A, D, B, C]     overwrite is a use
//!   put(E, ..)    → evict A, [D, B, C, E]
//! ```
//!
//! Every successful `get` and every overwrite moves the key to the tail.
//! The victim is always the head. All operations are O(1).
//!
//! ## Example Usage
//!
//! ```
//! use boundcache::Cache;
//! use boundcache::policy::Lru;
//!
//! let mut cache: Cache<u32, &str, Lru> = Cache::try_new(2).unwrap();
//! cache.insert(1, "one");
//! cache.insert(2, "two");
//! cache.get(&1);
//! cache.insert(3, "three");
//!
//! assert!(cache.contains(&1));
//! assert!(!cache.contains(&2));
//! ```

use std::hash::Hash;

use crate::ds::{FrequencyTracker, RecencyTracker};
use crate::policy::EvictionPolicy;

/// Evicts the least recently used key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Lru;

impl EvictionPolicy for Lru {
    fn name(&self) -> &'static str {
        "lru"
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
        recency.oldest()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use super::*;
    use crate::cache::Cache;

    fn filled() -> (Cache<&'static str, &'static str, Lru>, mpsc::Receiver<&'static str>) {
        let (tx, rx) = mpsc::channel();
        let mut cache: Cache<&str, &str, Lru> = Cache::try_new(4).unwrap();
        cache.on_discard(move |key| {
            let _ = tx.send(*key);
        });
        cache.insert("A", "Hello");
        cache.insert("B", "World");
        cache.insert("C", "Welcome");
        cache.insert("D", "Home");
        (cache, rx)
    }

    // ==============================================
    // Eviction Order
    // ==============================================

    mod eviction_order {
        use super::*;

        #[test]
        fn evicts_oldest_without_accesses() {
            let (mut cache, rx) = filled();
            cache.insert("E", "Bye");
            assert_eq!(rx.try_recv(), Ok("A"));
        }

        #[test]
        fn get_protects_key() {
            let (mut cache, rx) = filled();
            assert_eq!(cache.get(&"A"), Some(&"Hello"));
            cache.insert("E", "Bye");
            assert_eq!(rx.try_recv(), Ok("B"));
            assert!(cache.contains(&"A"));
        }

        #[test]
        fn overwrite_protects_key() {
            let (mut cache, rx) = filled();
            cache.insert("A", "Hi");
            cache.insert("E", "Bye");
            assert_eq!(rx.try_recv(), Ok("B"));
        }

        #[test]
        fn miss_does_not_change_victim() {
            let (mut cache, rx) = filled();
            assert_eq!(cache.get(&"Z"), None);
            cache.insert("E", "Bye");
            assert_eq!(rx.try_recv(), Ok("A"));
        }
    }

    // ==============================================
    // Sequences
    // ==============================================

    mod sequences {
        use super::*;

        #[test]
        fn repeated_access_cycle() {
            let (mut cache, rx) = filled();
            for key in ["B", "C", "D"] {
                cache.get(&key);
            }
            cache.insert("E", "x");
            cache.insert("F", "x");
            assert_eq!(rx.try_iter().collect::<Vec<_>>(), vec!["A", "B"]);
            assert_eq!(
                cache.keys_by_recency().copied().collect::<Vec<_>>(),
                vec!["C", "D", "E", "F"]
            );
        }

        #[test]
        fn capacity_one_always_replaces() {
            let mut cache: Cache<u32, u32, Lru> = Cache::try_new(1).unwrap();
            for i in 0..10 {
                cache.insert(i, i);
                assert_eq!(cache.len(), 1);
                assert_eq!(cache.peek(&i), Some(&i));
            }
        }
    }
}
