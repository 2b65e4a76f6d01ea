//! LIFO (Last In, First Out) replacement.
//!
//! Evicts the key whose `put` happened most recently. An overwrite counts as
//! a put, so overwriting an existing key makes it the next victim. Reads do
//! not move keys.
//!
//! ```text
//!   put A, B, C, D          recency: [A, B, C, D]    victim → D
//!   get A                   recency: [A, B, C, D]    victim → D
//!   put B = "x"             recency: [A, C, D, B]    victim → B
//!   put E                   evict B → [A, C, D, E]
//! ```

use std::hash::Hash;

use crate::ds::{FrequencyTracker, RecencyTracker};
use crate::policy::EvictionPolicy;

/// Evicts the most recently put key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Lifo;

impl EvictionPolicy for Lifo {
    fn name(&self) -> &'static str {
        "lifo"
    }

    fn touch_on_overwrite(&self) -> bool {
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
