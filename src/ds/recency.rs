//! Recency tracker: the ordered sequence of live keys.
//!
//! FIFO, LIFO, LRU and MRU pick their victim from one end of this sequence,
//! and LFU uses it to break frequency ties. Which operations reorder it is
//! decided by the policy, not here.
//!
//! ## Architecture
//!
//! ```text
//!   index: FxHashMap<K, SlotId>          order: IntrusiveList<K>
//!   ┌──────┬────────┐
//!   │  "A" │ id_0   │──┐      head (oldest)              tail (newest)
//!   │  "B" │ id_1   │──┼──►   [A] ◄──► [B] ◄──► [C] ◄──► [D]
//!   │  "C" │ id_2   │──┤
//!   │  "D" │ id_3   │──┘
//!   └──────┴────────┘
//!
//!   record_insert(E)  → append E at the tail
//!   record_access(B)  → unlink B, re-append at the tail   [A, C, D, B]
//!   oldest() / newest() → head / tail
//! ```
//!
//! Every operation except iteration is O(1).

use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::ds::intrusive_list::{self, IntrusiveList};
use crate::ds::slot_arena::SlotId;

/// Ordered set of keys, oldest at the head and newest at the tail.
#[derive(Debug)]
pub struct RecencyTracker<K> {
    order: IntrusiveList<K>,
    index: FxHashMap<K, SlotId>,
}

impl<K> RecencyTracker<K>
where
    K: Clone + Eq + Hash,
{
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            order: IntrusiveList::with_capacity(capacity),
            index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Appends `key` at the tail.
    ///
    /// A key that is already tracked is moved to the tail instead, so the
    /// sequence never holds duplicates.
    pub fn record_insert(&mut self, key: K) {
        if let Some(&id) = self.index.get(&key) {
            self.order.move_to_back(id);
            return;
        }
        let id = self.order.push_back(key.clone());
        self.index.insert(key, id);
    }

    /// Moves an existing key to the tail. Returns `false` for unknown keys.
    pub fn record_access(&mut self, key: &K) -> bool {
        match self.index.get(key) {
            Some(&id) => self.order.move_to_back(id),
            None => false,
        }
    }

    /// Key at the head: inserted (or touched) longest ago.
    pub fn oldest(&self) -> Option<&K> {
        self.order.front()
    }

    /// Key at the tail: inserted (or touched) most recently.
    pub fn newest(&self) -> Option<&K> {
        self.order.back()
    }

    pub fn remove(&mut self, key: &K) -> bool {
        match self.index.remove(key) {
            Some(id) => self.order.remove(id).is_some(),
            None => false,
        }
    }

    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Iterates keys from oldest to newest.
    pub fn iter(&self) -> intrusive_list::Iter<'_, K> {
        self.order.iter()
    }

    pub fn clear(&mut self) {
        self.order.clear();
        self.index.clear();
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        self.order.debug_validate_invariants();
        assert_eq!(self.order.len(), self.index.len(), "index/list size mismatch");
        for (key, &id) in &self.index {
            assert!(
                self.order.get(id).is_some_and(|k| k == key),
                "index points at the wrong node"
            );
        }
    }
}

impl<K> Default for RecencyTracker<K>
where
    K: Clone + Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}
