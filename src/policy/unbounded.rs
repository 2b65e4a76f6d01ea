//! Unbounded policy: the cache grows without limit and never evicts.

use std::hash::Hash;

use crate::ds::{FrequencyTracker, RecencyTracker};
use crate::policy::EvictionPolicy;

/// No capacity bound. Every distinct key put is retained.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Unbounded;

impl EvictionPolicy for Unbounded {
    fn name(&self) -> &'static str {
        "unbounded"
    }

    fn is_bounded(&self) -> bool {
        false
    }

    fn tracks_recency(&self) -> bool {
        false
    }

    fn select_victim<'a, K>(
        &self,
        _recency: &'a RecencyTracker<K>,
        _frequency: &'a FrequencyTracker<K>,
    ) -> Option<&'a K>
    where
        K: Clone + Eq + Hash,
    {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::Cache;

    #[test]
    fn retains_every_distinct_key() {
        let mut cache: Cache<u32, u32, Unbounded> = Cache::unbounded();
        for i in 0..1_000 {
            cache.insert(i, i * 2);
        }
        assert_eq!(cache.len(), 1_000);
        assert_eq!(cache.capacity(), None);
        assert!(!cache.is_full());
        assert_eq!(cache.get(&0), Some(&0));
        assert_eq!(cache.get(&999), Some(&1998));
    }

    #[test]
    fn keeps_no_recency_order() {
        let mut cache: Cache<&str, u32, Unbounded> = Cache::unbounded();
        cache.insert("A", 1);
        cache.insert("B", 2);
        cache.get(&"A");
        assert_eq!(cache.keys_by_recency().count(), 0);
        assert_eq!(cache.peek_victim(), None);
        assert!(cache.check_invariants().is_ok());
    }

    #[test]
    fn overwrite_replaces_value() {
        let mut cache: Cache<&str, &str, Unbounded> = Cache::unbounded();
        cache.insert("A", "Hello");
        assert_eq!(cache.insert("A", "Bye"), Some("Hello"));
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(&"A"), Some(&"Bye"));
    }
}
