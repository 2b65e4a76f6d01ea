//! LFU (Least Frequently Used) replacement.
//!
//! ## Architecture
//!
//! ```text
//!   FrequencyTracker                RecencyTracker
//!   ┌─────┬───────┐
//!   │ key │ count │                 head ──► [B] [C] [D] [A] ◄── tail
//!   ├─────┼───────┤                        (least recently touched first)
//!   │  A  │   3   │
//!   │  B  │   1   │    victim = first key in recency order whose
//!   │  C  │   1   │             count is the minimum   → B
//!   │  D  │   1   │
//!   └─────┴───────┘
//! ```
//!
//! ## Counting Rules
//!
//! - Inserting a new key starts its count at 1.
//! - A successful `get` adds 1 and moves the key to the recency tail.
//! - An overwrite adds 1 but leaves the recency position alone.
//! - A miss changes nothing.
//!
//! Ties on the minimum count go to the key touched longest ago. Eviction is
//! O(n) in the number of live keys, which is fine for the small capacities
//! this cache targets.

use std::hash::Hash;

use crate::ds::{FrequencyTracker, RecencyTracker};
use crate::policy::EvictionPolicy;

/// Evicts the least frequently used key, oldest first on ties.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Lfu;

impl EvictionPolicy for Lfu {
    fn name(&self) -> &'static str {
        "lfu"
    }

    fn tracks_frequency(&self) -> bool {
        true
    }

    fn touch_on_hit(&self) -> bool {
        true
    }

    fn select_victim<'a, K>(
        &self,
        recency: &'a RecencyTracker<K>,
        frequency: &'a FrequencyTracker<K>,
    ) -> Option<&'a K>
    where
        K: Clone + Eq + Hash,
    {
        // `min_by_key` keeps the first minimum, i.e. the oldest.
        recency.iter().min_by_key(|key| frequency.count(key))
    }
}
