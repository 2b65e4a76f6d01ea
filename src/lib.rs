//! boundcache: a bounded in-memory key-value cache with pluggable eviction.
//!
//! One generic [`Cache<K, V, P>`](Cache) serves every policy. The policy is
//! either a zero-sized type chosen at compile time ([`policy::Fifo`],
//! [`policy::Lifo`], [`policy::Lru`], [`policy::Mru`], [`policy::Lfu`],
//! [`policy::Unbounded`]) or a [`policy::CachePolicy`] value chosen at
//! runtime through [`CacheBuilder`].
//!
//! ```
//! use boundcache::prelude::*;
//!
//! let mut cache = CacheBuilder::new(Some(4))
//!     .policy_name("fifo")
//!     .try_build::<&str, &str>()
//!     .unwrap()
//!     .with_discard_listener(print_discard);
//!
//! cache.put(Some("A"), Some("Hello"));
//! cache.put(None, Some("ignored"));
//! assert_eq!(cache.lookup(Some(&"A")), Some(&"Hello"));
//! ```
//!
//! Feature flags:
//!
//! - `metrics`: per-cache counters and a Prometheus text exporter.
//! - `concurrency`: [`concurrent::ConcurrentCache`], a lock-protected
//!   shareable handle.

pub mod builder;
pub mod cache;
#[cfg(feature = "concurrency")]
pub mod concurrent;
pub mod ds;
pub mod error;
#[cfg(feature = "metrics")]
pub mod metrics;
pub mod policy;
pub mod prelude;
pub mod store;
pub mod traits;

pub use crate::builder::CacheBuilder;
pub use crate::cache::{Cache, DEFAULT_CAPACITY, print_discard};
#[cfg(feature = "concurrency")]
pub use crate::concurrent::ConcurrentCache;
pub use crate::error::{ConfigError, InvariantError};
#[cfg(feature = "metrics")]
pub use crate::metrics::snapshot::CacheMetricsSnapshot;
pub use crate::policy::{CachePolicy, EvictionPolicy};
