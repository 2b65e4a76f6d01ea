//! FIFO (First In, First Out) replacement.
//!
//! Evicts the key that was inserted longest ago. Neither reads nor
//! overwrites change a key's position, so the victim depends only on the
//! order in which keys first entered the cache.
//!
//! ```text
//!   put A, B, C, D          recency: [A, B, C, D]
//!   get A                   recency: [A, B, C, D]   (unchanged)
//!   put A = "x"             recency: [A, B, C, D]   (unchanged)
//!   put E                   evict A → [B, C, D, E]
//! ```

use std::hash::Hash;

use crate::ds::{FrequencyTracker, RecencyTracker};
use crate::policy::EvictionPolicy;

/// Evicts the oldest inserted key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Fifo;

impl EvictionPolicy for Fifo {
    fn name(&self) -> &'static str {
        "fifo"
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
