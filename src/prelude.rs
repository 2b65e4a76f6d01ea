//! Common imports: `use boundcache::prelude::*;`

pub use crate::builder::CacheBuilder;
pub use crate::cache::{Cache, DEFAULT_CAPACITY, print_discard};
#[cfg(feature = "concurrency")]
pub use crate::concurrent::ConcurrentCache;
pub use crate::error::ConfigError;
pub use crate::policy::{CachePolicy, EvictionPolicy, Fifo, Lfu, Lifo, Lru, Mru, Unbounded};
pub use crate::traits::{CoreCache, MutableCache, ReadOnlyCache};
