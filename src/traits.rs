//! # Cache Trait Hierarchy
//!
//! Policy-agnostic cache contracts. The single-threaded [`Cache`] implements
//! all three; [`ConcurrentCache`] implements [`ReadOnlyCache`] (its mutators
//! take `&self`).
//!
//! ```text
//!        ┌──────────────────────────────┐
//!        │     ReadOnlyCache<K, V>      │
//!        │  contains / len / capacity   │
//!        └──────────────┬───────────────┘
//!                       ▼
//!        ┌──────────────────────────────┐
//!        │       CoreCache<K, V>        │
//!        │  insert / get / clear        │
//!        └──────────────┬───────────────┘
//!                       ▼
//!        ┌──────────────────────────────┐
//!        │     MutableCache<K, V>       │
//!        │  remove                      │
//!        └──────────────────────────────┘
//! ```
//!
//! [`Cache`]: crate::cache::Cache
//! [`ConcurrentCache`]: crate::concurrent::ConcurrentCache

/// Inspection that never touches eviction state.
pub trait ReadOnlyCache<K, V> {
    /// Check if a key is live. Does not count as an access.
    fn contains(&self, key: &K) -> bool;

    /// Number of live entries.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maximum number of entries, or `None` for an unbounded cache.
    fn capacity(&self) -> Option<usize>;
}

/// Operations every cache policy supports.
///
/// # Example
///
/// ```
/// use boundcache::Cache;
/// use boundcache::policy::Fifo;
/// use boundcache::traits::{CoreCache, ReadOnlyCache};
///
/// fn fill<C: CoreCache<u32, u32>>(cache: &mut C) {
///     for i in 0..10 {
///         cache.insert(i, i * 10);
///     }
/// }
///
/// let mut cache: Cache<u32, u32, Fifo> = Cache::try_new(4).unwrap();
/// fill(&mut cache);
/// assert_eq!(cache.len(), 4);
/// assert_eq!(CoreCache::get(&mut cache, &9), Some(&90));
/// ```
pub trait CoreCache<K, V>: ReadOnlyCache<K, V> {
    /// Insert or overwrite. Returns the previous value for an existing key.
    ///
    /// Evicts one entry first when the key is new and the cache is full.
    fn insert(&mut self, key: K, value: V) -> Option<V>;

    /// Look up a value, recording the hit where the policy cares.
    fn get(&mut self, key: &K) -> Option<&V>;

    /// Drop every entry. No discard notifications are emitted.
    fn clear(&mut self);
}

/// Caches that allow removing an arbitrary key.
pub trait MutableCache<K, V>: CoreCache<K, V> {
    /// Remove a key without emitting a discard notification.
    fn remove(&mut self, key: &K) -> Option<V>;
}
