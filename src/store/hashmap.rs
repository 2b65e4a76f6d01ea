//! HashMap-backed store.
//!
//! ## Architecture
//! - Entries live in an `FxHashMap<K, V>` for O(1) average lookup.
//! - Capacity is a count of entries, fixed at construction.
//! - The store reports `is_full()` but accepts any write; the cache evicts
//!   first.
//!
//! ## Example Usage
//! ```rust
//! use std::num::NonZeroUsize;
//!
//! use boundcache::store::hashmap::HashMapStore;
//! use boundcache::store::traits::{StoreCore, StoreMut};
//!
//! let mut store: HashMapStore<u64, String> = HashMapStore::bounded(NonZeroUsize::new(2).unwrap());
//! store.set(1, "a".to_string());
//! store.set(2, "b".to_string());
//! assert!(store.contains(&1));
//! assert!(store.is_full());
//! ```
use std::hash::Hash;
use std::num::NonZeroUsize;

use rustc_hash::FxHashMap;

use crate::store::traits::{StoreCore, StoreMut};

/// Single-threaded `FxHashMap`-backed store.
#[derive(Debug)]
pub struct HashMapStore<K, V> {
    map: FxHashMap<K, V>,
    capacity: Option<NonZeroUsize>,
}

impl<K, V> HashMapStore<K, V>
where
    K: Eq + Hash,
{
    /// Create a store holding at most `capacity` entries.
    pub fn bounded(capacity: NonZeroUsize) -> Self {
        Self {
            map: FxHashMap::with_capacity_and_hasher(capacity.get(), Default::default()),
            capacity: Some(capacity),
        }
    }

    /// Create a store with no capacity bound.
    pub fn unbounded() -> Self {
        Self {
            map: FxHashMap::default(),
            capacity: None,
        }
    }

    /// Iterate entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.map.iter()
    }

    /// Iterate keys in arbitrary order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.map.keys()
    }
}

impl<K, V> StoreCore<K, V> for HashMapStore<K, V>
where
    K: Eq + Hash,
{
    fn get(&self, key: &K) -> Option<&V> {
        self.map.get(key)
    }

    fn contains(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }

    fn len(&self) -> usize {
        self.map.len()
    }

    fn capacity(&self) -> Option<usize> {
        self.capacity.map(NonZeroUsize::get)
    }
}

impl<K, V> StoreMut<K, V> for HashMapStore<K, V>
where
    K: Eq + Hash,
{
    fn set(&mut self, key: K, value: V) -> Option<V> {
        self.map.insert(key, value)
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        self.map.remove(key)
    }

    fn clear(&mut self) {
        self.map.clear();
    }
}
