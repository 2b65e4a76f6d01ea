//! Eviction policies.
//!
//! A policy is a stateless selector: it declares which trackers it needs and
//! when they are touched, and picks a victim from them when the cache is full
//! and a new key arrives. All mutable state (store, recency order, counts)
//! lives in [`Cache`](crate::cache::Cache).
//!
//! ## Policy Comparison
//!
//! | Policy      | Victim                          | Reorders on overwrite | Reorders on hit |
//! |-------------|---------------------------------|-----------------------|-----------------|
//! | [`Unbounded`] | never evicts                  | -                     | -               |
//! | [`Fifo`]    | oldest insert                   | no                    | no              |
//! | [`Lifo`]    | last put (overwrites included)  | yes                   | no              |
//! | [`Lru`]     | least recently touched          | yes                   | yes             |
//! | [`Mru`]     | most recently touched           | yes                   | yes             |
//! | [`Lfu`]     | lowest count, oldest on ties    | no (count +1)         | yes (count +1)  |
//!
//! Each policy is a zero-sized type, so `Cache<K, V, Lru>` pays nothing for
//! dispatch. [`CachePolicy`] is the tagged union for choosing at runtime.

use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use crate::ds::{FrequencyTracker, RecencyTracker};
use crate::error::ConfigError;

pub mod fifo;
pub mod lfu;
pub mod lifo;
pub mod lru;
pub mod mru;
pub mod unbounded;

pub use fifo::Fifo;
pub use lfu::Lfu;
pub use lifo::Lifo;
pub use lru::Lru;
pub use mru::Mru;
pub use unbounded::Unbounded;

/// Victim selection plus the tracker-update rules that go with it.
pub trait EvictionPolicy {
    /// Short lowercase name, used in logs and error messages.
    fn name(&self) -> &'static str;

    /// `false` only for policies that never evict.
    fn is_bounded(&self) -> bool {
        true
    }

    /// Whether the cache must maintain a [`RecencyTracker`].
    fn tracks_recency(&self) -> bool {
        true
    }

    /// Whether the cache must maintain a [`FrequencyTracker`].
    fn tracks_frequency(&self) -> bool {
        false
    }

    /// Move a key to the newest position when an existing key is overwritten.
    fn touch_on_overwrite(&self) -> bool {
        false
    }

    /// Move a key to the newest position on a successful `get`.
    fn touch_on_hit(&self) -> bool {
        false
    }

    /// Choose the key to discard. Only called when the store is full.
    fn select_victim<'a, K>(
        &self,
        recency: &'a RecencyTracker<K>,
        frequency: &'a FrequencyTracker<K>,
    ) -> Option<&'a K>
    where
        K: Clone + Eq + Hash;
}

/// Runtime-selected eviction policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CachePolicy {
    /// No capacity bound, never evicts.
    Unbounded,
    /// First In, First Out.
    Fifo,
    /// Last In, First Out.
    Lifo,
    /// Least Recently Used.
    #[default]
    Lru,
    /// Most Recently Used.
    Mru,
    /// Least Frequently Used, oldest-touched on ties.
    Lfu,
}

impl CachePolicy {
    /// Every policy, unbounded first.
    pub const ALL: [CachePolicy; 6] = [
        CachePolicy::Unbounded,
        CachePolicy::Fifo,
        CachePolicy::Lifo,
        CachePolicy::Lru,
        CachePolicy::Mru,
        CachePolicy::Lfu,
    ];

    /// The five policies that take a capacity.
    pub const BOUNDED: [CachePolicy; 5] = [
        CachePolicy::Fifo,
        CachePolicy::Lifo,
        CachePolicy::Lru,
        CachePolicy::Mru,
        CachePolicy::Lfu,
    ];
}

macro_rules! dispatch {
    ($self:expr, $p:ident => $body:expr) => {
        match $self {
            CachePolicy::Unbounded => {
                let $p = Unbounded;
                $body
            },
            CachePolicy::Fifo => {
                let $p = Fifo;
                $body
            },
            CachePolicy::Lifo => {
                let $p = Lifo;
                $body
            },
            CachePolicy::Lru => {
                let $p = Lru;
                $body
            },
            CachePolicy::Mru => {
                let $p = Mru;
                $body
            },
            CachePolicy::Lfu => {
                let $p = Lfu;
                $body
            },
        }
    };
}

impl EvictionPolicy for CachePolicy {
    fn name(&self) -> &'static str {
        dispatch!(self, p => p.name())
    }

    fn is_bounded(&self) -> bool {
        dispatch!(self, p => p.is_bounded())
    }

    fn tracks_recency(&self) -> bool {
        dispatch!(self, p => p.tracks_recency())
    }

    fn tracks_frequency(&self) -> bool {
        dispatch!(self, p => p.tracks_frequency())
    }

    fn touch_on_overwrite(&self) -> bool {
        dispatch!(self, p => p.touch_on_overwrite())
    }

    fn touch_on_hit(&self) -> bool {
        dispatch!(self, p => p.touch_on_hit())
    }

    fn select_victim<'a, K>(
        &self,
        recency: &'a RecencyTracker<K>,
        frequency: &'a FrequencyTracker<K>,
    ) -> Option<&'a K>
    where
        K: Clone + Eq + Hash,
    {
        dispatch!(self, p => p.select_victim(recency, frequency))
    }
}

impl fmt::Display for CachePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CachePolicy {
    type Err = ConfigError;

    /// Parses a policy name, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "unbounded" | "basic" => Ok(CachePolicy::Unbounded),
            "fifo" => Ok(CachePolicy::Fifo),
            "lifo" => Ok(CachePolicy::Lifo),
            "lru" => Ok(CachePolicy::Lru),
            "mru" => Ok(CachePolicy::Mru),
            "lfu" => Ok(CachePolicy::Lfu),
            other => Err(ConfigError::new(format!(
                "unknown eviction policy: {other:?}"
            ))),
        }
    }
}
