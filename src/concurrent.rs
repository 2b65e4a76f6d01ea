//! Thread-safe wrapper around [`Cache`].
//!
//! ```text
//!   ConcurrentCache<K, V, P>  (Clone = another handle to the same cache)
//!        │
//!        ▼
//!   Arc<Mutex<Cache<K, V, P>>>
//!        │
//!        ▼
//!   store + recency + frequency + listener, guarded as one unit
//! ```
//!
//! Every operation takes the lock for its whole duration, so eviction,
//! the discard notification and the insert that caused them are atomic with
//! respect to other handles. A `Mutex` rather than an `RwLock`: even `get`
//! mutates the recency and frequency trackers.
//!
//! The discard listener runs while the lock is held. It must not call back
//! into the same cache.

use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::cache::Cache;
use crate::error::ConfigError;
#[cfg(feature = "metrics")]
use crate::metrics::{CacheMetricsSnapshot, MetricsSnapshotProvider};
use crate::policy::{CachePolicy, EvictionPolicy};
use crate::traits::ReadOnlyCache;

/// Shared, lock-protected cache handle.
pub struct ConcurrentCache<K, V, P = CachePolicy> {
    inner: Arc<Mutex<Cache<K, V, P>>>,
}

impl<K, V, P> Clone for ConcurrentCache<K, V, P> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<K, V, P> fmt::Debug for ConcurrentCache<K, V, P>
where
    K: Eq + Hash,
    P: EvictionPolicy,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ConcurrentCache")
            .field(&*self.inner.lock())
            .finish()
    }
}

impl<K, V, P> From<Cache<K, V, P>> for ConcurrentCache<K, V, P> {
    fn from(cache: Cache<K, V, P>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(cache)),
        }
    }
}

impl<K, V, P> ConcurrentCache<K, V, P>
where
    K: Clone + Eq + Hash,
    P: EvictionPolicy,
{
    /// Wraps an already configured cache (listener included).
    ///
    /// # Example
    ///
    /// ```
    /// use std::thread;
    ///
    /// use boundcache::Cache;
    /// use boundcache::concurrent::ConcurrentCache;
    /// use boundcache::policy::Lru;
    ///
    /// let cache = ConcurrentCache::new(Cache::<u32, u32, Lru>::try_new(64).unwrap());
    /// let handles: Vec<_> = (0..4)
    ///     .map(|t| {
    ///         let cache = cache.clone();
    ///         thread::spawn(move || {
    ///             for i in 0..100 {
    ///                 cache.insert(t * 100 + i, i);
    ///             }
    ///         })
    ///     })
    ///     .collect();
    /// for h in handles {
    ///     h.join().unwrap();
    /// }
    /// assert_eq!(cache.len(), 64);
    /// ```
    pub fn new(cache: Cache<K, V, P>) -> Self {
        Self::from(cache)
    }

    /// Nullable put; see [`Cache::put`].
    pub fn put(&self, key: Option<K>, value: Option<V>) {
        self.inner.lock().put(key, value);
    }

    /// See [`Cache::insert`].
    pub fn insert(&self, key: K, value: V) -> Option<V> {
        self.inner.lock().insert(key, value)
    }

    /// Looks up `key` and clones the value out of the lock.
    pub fn get(&self, key: &K) -> Option<V>
    where
        V: Clone,
    {
        self.inner.lock().get(key).cloned()
    }

    /// Nullable lookup; see [`Cache::lookup`].
    pub fn lookup(&self, key: Option<&K>) -> Option<V>
    where
        V: Clone,
    {
        self.inner.lock().lookup(key).cloned()
    }

    /// Looks up `key` and runs `f` on the value while the lock is held.
    ///
    /// Counts as an access exactly like [`get`](Self::get).
    pub fn get_with<R>(&self, key: &K, f: impl FnOnce(&V) -> R) -> Option<R> {
        self.inner.lock().get(key).map(f)
    }

    /// Removes `key` without a discard notification.
    pub fn remove(&self, key: &K) -> Option<V> {
        self.inner.lock().remove(key)
    }

    pub fn clear(&self) {
        self.inner.lock().clear();
    }

    /// Runs `f` with exclusive access to the underlying cache.
    pub fn with_lock<R>(&self, f: impl FnOnce(&mut Cache<K, V, P>) -> R) -> R {
        f(&mut self.inner.lock())
    }

    /// Unwraps the cache if this is the last handle.
    pub fn try_into_inner(self) -> Result<Cache<K, V, P>, Self> {
        Arc::try_unwrap(self.inner)
            .map(Mutex::into_inner)
            .map_err(|inner| Self { inner })
    }
}

impl<K, V> ConcurrentCache<K, V, CachePolicy>
where
    K: Clone + Eq + Hash,
{
    /// Shorthand for `ConcurrentCache::new(Cache::with_policy(..)?)`.
    pub fn with_policy(policy: CachePolicy, capacity: Option<usize>) -> Result<Self, ConfigError> {
        Cache::with_policy(policy, capacity).map(Self::new)
    }
}

impl<K, V, P> ReadOnlyCache<K, V> for ConcurrentCache<K, V, P>
where
    K: Clone + Eq + Hash,
    P: EvictionPolicy,
{
    fn contains(&self, key: &K) -> bool {
        self.inner.lock().contains(key)
    }

    fn len(&self) -> usize {
        self.inner.lock().len()
    }

    fn capacity(&self) -> Option<usize> {
        self.inner.lock().capacity()
    }
}

impl<K, V, P> ConcurrentCache<K, V, P>
where
    K: Clone + Eq + Hash,
    P: EvictionPolicy,
{
    pub fn contains(&self, key: &K) -> bool {
        ReadOnlyCache::contains(self, key)
    }

    pub fn len(&self) -> usize {
        ReadOnlyCache::len(self)
    }

    pub fn is_empty(&self) -> bool {
        ReadOnlyCache::is_empty(self)
    }

    pub fn capacity(&self) -> Option<usize> {
        ReadOnlyCache::capacity(self)
    }
}

#[cfg(feature = "metrics")]
impl<K, V, P> MetricsSnapshotProvider<CacheMetricsSnapshot> for ConcurrentCache<K, V, P>
where
    K: Clone + Eq + Hash,
    P: EvictionPolicy,
{
    fn snapshot(&self) -> CacheMetricsSnapshot {
        self.inner.lock().metrics_snapshot()
    }
}
