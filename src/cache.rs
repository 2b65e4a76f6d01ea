//! The cache façade: one store, the trackers a policy needs, and the policy.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Cache<K, V, P>                                 │
//! │                                                                         │
//! │   store: HashMapStore<K, V>        key → value, capacity bound          │
//! │   recency: RecencyTracker<K>       oldest ─► newest   (if P needs it)   │
//! │   frequency: FrequencyTracker<K>   key → count        (if P needs it)   │
//! │   policy: P                        victim selection + touch rules       │
//! │   on_discard: listener             called once per eviction             │
//! └─────────────────────────────────────────────────────────────────────────┘
//!
//! insert(key, value)
//! ──────────────────
//!   key live?  ── yes ──► overwrite value, touch per policy   (never evicts)
//!      │
//!      no
//!      ▼
//!   store full? ── yes ──► victim = policy.select_victim(..)
//!      │                   remove victim from store + trackers
//!      │                   notify listener(victim)
//!      ▼
//!   record key in trackers, write (key, value)
//!
//! get(key)
//! ────────
//!   miss ──► None, no side effects
//!   hit  ──► touch per policy, return &value
//! ```
//!
//! ## States
//!
//! empty → partial (0 < len < capacity) → full (len == capacity). An
//! unbounded cache never becomes full. Overflow is never an error: it is
//! always resolved by evicting exactly one entry.
//!
//! ## Example Usage
//!
//! ```
//! use std::sync::mpsc;
//!
//! use boundcache::Cache;
//! use boundcache::policy::Lru;
//!
//! let (tx, rx) = mpsc::channel();
//! let mut cache: Cache<&str, u32, Lru> = Cache::try_new(2).unwrap();
//! cache.on_discard(move |key| {
//!     let _ = tx.send(*key);
//! });
//!
//! cache.insert("a", 1);
//! cache.insert("b", 2);
//! cache.get(&"a");
//! cache.insert("c", 3);
//!
//! assert_eq!(rx.try_recv(), Ok("b"));
//! assert_eq!(cache.get(&"b"), None);
//! ```
//!
//! ## Thread Safety
//!
//! `Cache` is a single-owner type. Share it through
//! [`ConcurrentCache`](crate::concurrent::ConcurrentCache) (feature
//! `concurrency`) or your own lock around the whole cache.

use std::fmt;
use std::hash::Hash;
use std::num::NonZeroUsize;

use tracing::{debug, trace, warn};

use crate::ds::{FrequencyTracker, RecencyTracker};
use crate::error::{ConfigError, InvariantError};
#[cfg(feature = "metrics")]
use crate::metrics::{
    CacheMetrics, CacheMetricsSnapshot, CoreMetricsRecorder, MetricsSnapshotProvider,
};
use crate::policy::{CachePolicy, EvictionPolicy, Unbounded};
use crate::store::{HashMapStore, StoreCore, StoreMut};
use crate::traits::{CoreCache, MutableCache, ReadOnlyCache};

/// Capacity used by the reference caching exercises.
pub const DEFAULT_CAPACITY: usize = 4;

/// Callback invoked with the key of every evicted entry.
pub type DiscardListener<K> = Box<dyn FnMut(&K) + Send>;

/// Listener that prints `DISCARD: <key>` to stdout.
///
/// ```
/// use boundcache::Cache;
/// use boundcache::cache::print_discard;
/// use boundcache::policy::Fifo;
///
/// let mut cache: Cache<String, u32, Fifo> = Cache::try_new(1).unwrap();
/// cache.on_discard(print_discard);
/// cache.insert("a".to_string(), 1);
/// cache.insert("b".to_string(), 2); // prints "DISCARD: a"
/// ```
pub fn print_discard<K: fmt::Display>(key: &K) {
    println!("DISCARD: {key}");
}

/// Bounded (or unbounded) key-value cache with a pluggable eviction policy.
///
/// `P` defaults to [`CachePolicy`], the runtime-selected policy produced by
/// [`CacheBuilder`](crate::builder::CacheBuilder). Use a unit policy type
/// (`Cache<K, V, Lru>`) when the policy is known at compile time.
pub struct Cache<K, V, P = CachePolicy> {
    store: HashMapStore<K, V>,
    recency: RecencyTracker<K>,
    frequency: FrequencyTracker<K>,
    policy: P,
    on_discard: Option<DiscardListener<K>>,
    #[cfg(feature = "metrics")]
    metrics: CacheMetrics,
}

impl<K, V, P> Cache<K, V, P>
where
    K: Clone + Eq + Hash,
    P: EvictionPolicy,
{
    /// Creates a cache for `policy`.
    ///
    /// Bounded policies need `Some(capacity)` with `capacity > 0`; the
    /// unbounded policy needs `None`. Anything else is a [`ConfigError`].
    ///
    /// # Example
    ///
    /// ```
    /// use boundcache::Cache;
    /// use boundcache::policy::CachePolicy;
    ///
    /// let cache: Cache<u32, u32> = Cache::with_policy(CachePolicy::Mru, Some(4)).unwrap();
    /// assert_eq!(cache.capacity(), Some(4));
    ///
    /// assert!(Cache::<u32, u32>::with_policy(CachePolicy::Mru, None).is_err());
    /// assert!(Cache::<u32, u32>::with_policy(CachePolicy::Unbounded, Some(4)).is_err());
    /// ```
    pub fn with_policy(policy: P, capacity: Option<usize>) -> Result<Self, ConfigError> {
        let store = match Self::store_for(&policy, capacity) {
            Ok(store) => store,
            Err(err) => {
                warn!(policy = policy.name(), ?capacity, error = %err, "rejected cache configuration");
                return Err(err);
            },
        };
        let reserve = capacity.unwrap_or(0);
        let recency = if policy.tracks_recency() {
            RecencyTracker::with_capacity(reserve)
        } else {
            RecencyTracker::new()
        };
        let frequency = if policy.tracks_frequency() {
            FrequencyTracker::with_capacity(reserve)
        } else {
            FrequencyTracker::new()
        };

        debug!(policy = policy.name(), ?capacity, "created cache");
        Ok(Self {
            store,
            recency,
            frequency,
            policy,
            on_discard: None,
            #[cfg(feature = "metrics")]
            metrics: CacheMetrics::default(),
        })
    }

    fn store_for(policy: &P, capacity: Option<usize>) -> Result<HashMapStore<K, V>, ConfigError> {
        match (policy.is_bounded(), capacity) {
            (true, Some(cap)) => NonZeroUsize::new(cap)
                .map(HashMapStore::bounded)
                .ok_or_else(|| ConfigError::zero_capacity(policy.name())),
            (true, None) => Err(ConfigError::missing_capacity(policy.name())),
            (false, None) => Ok(HashMapStore::unbounded()),
            (false, Some(cap)) => Err(ConfigError::unexpected_capacity(cap)),
        }
    }

    /// Registers the discard listener, replacing any previous one.
    ///
    /// The listener runs synchronously inside `insert`/`put`, after the
    /// victim is gone and before the new entry is written.
    pub fn on_discard(&mut self, listener: impl FnMut(&K) + Send + 'static) {
        self.on_discard = Some(Box::new(listener));
    }

    /// Builder-style variant of [`on_discard`](Self::on_discard).
    pub fn with_discard_listener(mut self, listener: impl FnMut(&K) + Send + 'static) -> Self {
        self.on_discard(listener);
        self
    }

    /// Nullable `put`: an absent key or value makes this a no-op.
    ///
    /// # Example
    ///
    /// ```
    /// use boundcache::Cache;
    /// use boundcache::policy::Fifo;
    ///
    /// let mut cache: Cache<&str, u32, Fifo> = Cache::try_new(4).unwrap();
    /// cache.put(None, Some(1));
    /// cache.put(Some("a"), None);
    /// assert!(cache.is_empty());
    ///
    /// cache.put(Some("a"), Some(1));
    /// assert_eq!(cache.lookup(Some(&"a")), Some(&1));
    /// assert_eq!(cache.lookup(None), None);
    /// ```
    pub fn put(&mut self, key: Option<K>, value: Option<V>) {
        let (Some(key), Some(value)) = (key, value) else {
            #[cfg(feature = "metrics")]
            self.metrics.record_null_put();
            return;
        };
        self.insert(key, value);
    }

    /// Inserts or overwrites `key`. Returns the previous value when the key
    /// was already live.
    ///
    /// Overwriting never evicts. A new key on a full cache evicts exactly one
    /// victim first.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        #[cfg(feature = "metrics")]
        self.metrics.record_insert_call();

        if self.store.contains(&key) {
            #[cfg(feature = "metrics")]
            self.metrics.record_insert_update();
            self.record_overwrite(&key);
            trace!(policy = self.policy.name(), "overwrote live entry");
            return self.store.set(key, value);
        }

        #[cfg(feature = "metrics")]
        self.metrics.record_insert_new();

        if self.store.is_full() {
            self.evict();
        }

        if self.policy.tracks_recency() {
            self.recency.record_insert(key.clone());
        }
        if self.policy.tracks_frequency() {
            self.frequency.increment(&key);
        }
        self.store.set(key, value);

        debug_assert!(self.store.capacity().is_none_or(|cap| self.store.len() <= cap));
        debug_assert!(!self.policy.tracks_recency() || self.recency.len() == self.store.len());
        None
    }

    fn record_overwrite(&mut self, key: &K) {
        if self.policy.touch_on_overwrite() {
            self.recency.record_access(key);
        }
        if self.policy.tracks_frequency() {
            self.frequency.increment(key);
        }
    }

    /// Discards the policy's victim from the store and every tracker, then
    /// notifies the listener.
    fn evict(&mut self) -> Option<K> {
        let Some(victim) = self
            .policy
            .select_victim(&self.recency, &self.frequency)
            .cloned()
        else {
            debug_assert!(false, "full {} cache has no victim", self.policy.name());
            return None;
        };

        self.store.remove(&victim);
        self.recency.remove(&victim);
        self.frequency.remove(&victim);

        #[cfg(feature = "metrics")]
        self.metrics.record_evicted_entry();
        debug!(
            policy = self.policy.name(),
            len = self.store.len(),
            capacity = ?self.store.capacity(),
            "discarded entry"
        );

        if let Some(listener) = self.on_discard.as_mut() {
            listener(&victim);
        }
        Some(victim)
    }

    /// Looks up `key`. A hit is recorded where the policy cares; a miss has
    /// no side effects.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        if !self.store.contains(key) {
            #[cfg(feature = "metrics")]
            self.metrics.record_get_miss();
            return None;
        }

        #[cfg(feature = "metrics")]
        self.metrics.record_get_hit();
        if self.policy.touch_on_hit() {
            self.recency.record_access(key);
        }
        if self.policy.tracks_frequency() {
            self.frequency.increment(key);
        }
        self.store.get(key)
    }

    /// Nullable `get`: an absent key is a miss.
    pub fn lookup(&mut self, key: Option<&K>) -> Option<&V> {
        self.get(key?)
    }

    /// Reads a value without recording an access.
    pub fn peek(&self, key: &K) -> Option<&V> {
        self.store.get(key)
    }

    /// The key that the next eviction would discard, if the cache were full.
    ///
    /// Always `None` for an unbounded cache.
    pub fn peek_victim(&self) -> Option<&K> {
        if !self.policy.is_bounded() {
            return None;
        }
        self.policy.select_victim(&self.recency, &self.frequency)
    }

    /// Use count of a live key under a frequency-tracking policy.
    pub fn frequency(&self, key: &K) -> Option<u64> {
        (self.policy.tracks_frequency() && self.store.contains(key))
            .then(|| self.frequency.count(key))
    }

    /// Live keys from oldest to newest recency position.
    ///
    /// Empty when the policy keeps no recency order.
    pub fn keys_by_recency(&self) -> impl Iterator<Item = &K> {
        self.recency.iter()
    }

    /// Removes `key` without emitting a discard notification.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let value = self.store.remove(key)?;
        self.recency.remove(key);
        self.frequency.remove(key);
        Some(value)
    }

    /// Drops every entry. No discard notifications are emitted.
    pub fn clear(&mut self) {
        self.store.clear();
        self.recency.clear();
        self.frequency.clear();
        #[cfg(feature = "metrics")]
        self.metrics.record_clear();
    }

    pub fn contains(&self, key: &K) -> bool {
        self.store.contains(key)
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Maximum number of entries, or `None` when unbounded.
    pub fn capacity(&self) -> Option<usize> {
        self.store.capacity()
    }

    /// `true` once a new key would force an eviction.
    pub fn is_full(&self) -> bool {
        self.store.is_full()
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.store.iter()
    }

    /// Checks that the trackers mirror the store exactly.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        let len = self.store.len();
        if let Some(cap) = self.store.capacity().filter(|&cap| len > cap) {
            return Err(InvariantError::new(format!(
                "len {len} exceeds capacity {cap}"
            )));
        }

        if self.policy.tracks_recency() {
            if self.recency.len() != len {
                return Err(InvariantError::new(format!(
                    "recency tracker holds {} keys, store holds {len}",
                    self.recency.len()
                )));
            }
            if self.recency.iter().any(|key| !self.store.contains(key)) {
                return Err(InvariantError::new("recency tracker holds a dead key"));
            }
        } else if !self.recency.is_empty() {
            return Err(InvariantError::new(
                "recency tracker in use by a policy that does not track recency",
            ));
        }

        if self.policy.tracks_frequency() {
            if self.frequency.len() != len {
                return Err(InvariantError::new(format!(
                    "frequency tracker holds {} keys, store holds {len}",
                    self.frequency.len()
                )));
            }
            if self.store.keys().any(|key| self.frequency.count(key) == 0) {
                return Err(InvariantError::new("live key has no recorded use"));
            }
        } else if !self.frequency.is_empty() {
            return Err(InvariantError::new(
                "frequency tracker in use by a policy that does not track frequency",
            ));
        }

        Ok(())
    }
}

impl<K, V, P> Cache<K, V, P>
where
    K: Clone + Eq + Hash,
    P: EvictionPolicy + Default,
{
    /// Creates a bounded cache for the policy type `P`.
    ///
    /// # Example
    ///
    /// ```
    /// use boundcache::Cache;
    /// use boundcache::policy::Lfu;
    ///
    /// let cache: Cache<String, u64, Lfu> = Cache::try_new(4).unwrap();
    /// assert_eq!(cache.capacity(), Some(4));
    /// assert!(Cache::<String, u64, Lfu>::try_new(0).is_err());
    /// ```
    pub fn try_new(capacity: usize) -> Result<Self, ConfigError> {
        Self::with_policy(P::default(), Some(capacity))
    }
}

impl<K, V> Cache<K, V, Unbounded>
where
    K: Clone + Eq + Hash,
{
    /// Creates a cache with no capacity bound.
    pub fn unbounded() -> Self {
        debug!(policy = Unbounded.name(), "created cache");
        Self {
            store: HashMapStore::unbounded(),
            recency: RecencyTracker::new(),
            frequency: FrequencyTracker::new(),
            policy: Unbounded,
            on_discard: None,
            #[cfg(feature = "metrics")]
            metrics: CacheMetrics::default(),
        }
    }
}

impl<K, V> Default for Cache<K, V, Unbounded>
where
    K: Clone + Eq + Hash,
{
    fn default() -> Self {
        Self::unbounded()
    }
}

impl<K, V, P> Cache<K, V, P>
where
    K: Clone + Eq + Hash + Ord + fmt::Display,
    V: fmt::Display,
    P: EvictionPolicy,
{
    /// A displayable listing of the cache, keys in ascending order.
    ///
    /// ```
    /// use boundcache::Cache;
    ///
    /// let mut cache = Cache::unbounded();
    /// cache.insert("B", "World");
    /// cache.insert("A", "Hello");
    /// assert_eq!(cache.dump().to_string(), "Current cache:\nA: Hello\nB: World\n");
    /// ```
    pub fn dump(&self) -> CacheDump<'_, K, V> {
        CacheDump { store: &self.store }
    }

    /// Prints [`dump`](Self::dump) to stdout.
    pub fn print_cache(&self) {
        print!("{}", self.dump());
    }
}

/// Sorted `key: value` listing returned by [`Cache::dump`].
pub struct CacheDump<'a, K, V> {
    store: &'a HashMapStore<K, V>,
}

impl<K, V> fmt::Display for CacheDump<'_, K, V>
where
    K: Eq + Hash + Ord + fmt::Display,
    V: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Current cache:")?;
        let mut entries: Vec<_> = self.store.iter().collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        for (key, value) in entries {
            writeln!(f, "{key}: {value}")?;
        }
        Ok(())
    }
}

impl<K, V, P> fmt::Debug for Cache<K, V, P>
where
    K: Eq + Hash,
    P: EvictionPolicy,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cache")
            .field("policy", &self.policy.name())
            .field("capacity", &self.store.capacity())
            .field("len", &self.store.len())
            .field("has_discard_listener", &self.on_discard.is_some())
            .finish_non_exhaustive()
    }
}

impl<K, V, P> ReadOnlyCache<K, V> for Cache<K, V, P>
where
    K: Clone + Eq + Hash,
    P: EvictionPolicy,
{
    fn contains(&self, key: &K) -> bool {
        Cache::contains(self, key)
    }

    fn len(&self) -> usize {
        Cache::len(self)
    }

    fn capacity(&self) -> Option<usize> {
        Cache::capacity(self)
    }
}

impl<K, V, P> CoreCache<K, V> for Cache<K, V, P>
where
    K: Clone + Eq + Hash,
    P: EvictionPolicy,
{
    fn insert(&mut self, key: K, value: V) -> Option<V> {
        Cache::insert(self, key, value)
    }

    fn get(&mut self, key: &K) -> Option<&V> {
        Cache::get(self, key)
    }

    fn clear(&mut self) {
        Cache::clear(self);
    }
}

impl<K, V, P> MutableCache<K, V> for Cache<K, V, P>
where
    K: Clone + Eq + Hash,
    P: EvictionPolicy,
{
    fn remove(&mut self, key: &K) -> Option<V> {
        Cache::remove(self, key)
    }
}

#[cfg(feature = "metrics")]
impl<K, V, P> Cache<K, V, P>
where
    K: Clone + Eq + Hash,
    P: EvictionPolicy,
{
    /// Returns a snapshot of cache metrics.
    pub fn metrics_snapshot(&self) -> CacheMetricsSnapshot {
        CacheMetricsSnapshot {
            get_calls: self.metrics.get_calls,
            get_hits: self.metrics.get_hits,
            get_misses: self.metrics.get_misses,
            insert_calls: self.metrics.insert_calls,
            insert_new: self.metrics.insert_new,
            insert_updates: self.metrics.insert_updates,
            null_puts: self.metrics.null_puts,
            evicted_entries: self.metrics.evicted_entries,
            clears: self.metrics.clears,
            cache_len: self.len(),
            capacity: self.capacity(),
        }
    }
}

#[cfg(feature = "metrics")]
impl<K, V, P> MetricsSnapshotProvider<CacheMetricsSnapshot> for Cache<K, V, P>
where
    K: Clone + Eq + Hash,
    P: EvictionPolicy,
{
    fn snapshot(&self) -> CacheMetricsSnapshot {
        self.metrics_snapshot()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use super::*;
    use crate::policy::{Fifo, Lfu, Lifo, Lru, Mru};

    fn bounded(policy: CachePolicy, capacity: usize) -> Cache<&'static str, u32> {
        Cache::with_policy(policy, Some(capacity)).unwrap()
    }

    fn recency_of<P: EvictionPolicy>(cache: &Cache<&'static str, u32, P>) -> Vec<&'static str> {
        cache.keys_by_recency().copied().collect()
    }

    // ==============================================
    // Construction
    // ==============================================

    mod construction {
        use super::*;

        #[test]
        fn zero_capacity_is_rejected_for_every_bounded_policy() {
            for policy in CachePolicy::BOUNDED {
                let err = Cache::<u32, u32>::with_policy(policy, Some(0)).unwrap_err();
                assert!(err.message().contains("capacity"), "{policy}: {err}");
            }
        }

        #[test]
        fn bounded_policy_without_capacity_is_rejected() {
            let err = Cache::<u32, u32>::with_policy(CachePolicy::Fifo, None).unwrap_err();
            assert_eq!(err.message(), "fifo policy requires a capacity");
        }

        #[test]
        fn unbounded_policy_with_capacity_is_rejected() {
            assert!(Cache::<u32, u32>::with_policy(CachePolicy::Unbounded, Some(4)).is_err());
            assert!(Cache::<u32, u32, Unbounded>::try_new(4).is_err());
        }

        #[test]
        fn new_cache_is_empty() {
            let cache: Cache<u32, u32, Lru> = Cache::try_new(DEFAULT_CAPACITY).unwrap();
            assert!(cache.is_empty());
            assert!(!cache.is_full());
            assert_eq!(cache.capacity(), Some(4));
            assert_eq!(cache.peek_victim(), None);
            assert!(cache.check_invariants().is_ok());
        }

        #[test]
        fn debug_output_names_policy() {
            let cache: Cache<u32, u32, Mru> = Cache::try_new(3).unwrap();
            let dbg = format!("{cache:?}");
            assert!(dbg.contains("mru"));
            assert!(dbg.contains("capacity: Some(3)"));
        }
    }

    // ==============================================
    // Null Sentinel Handling
    // ==============================================

    mod null_sentinel {
        use super::*;

        #[test]
        fn put_with_absent_key_or_value_changes_nothing() {
            for policy in CachePolicy::BOUNDED {
                let mut cache = bounded(policy, 2);
                cache.put(Some("a"), Some(1));
                cache.put(Some("b"), Some(2));
                let before = recency_of(&cache);

                cache.put(None, Some(9));
                cache.put(Some("c"), None);
                cache.put(None, None);

                assert_eq!(cache.len(), 2, "{policy}");
                assert!(!cache.contains(&"c"), "{policy}");
                assert_eq!(cache.peek(&"a"), Some(&1));
                assert_eq!(recency_of(&cache), before, "{policy}");
            }
        }

        #[test]
        fn lookup_of_absent_key_is_a_miss() {
            let mut cache = bounded(CachePolicy::Lfu, 2);
            cache.insert("a", 1);
            assert_eq!(cache.lookup(None), None);
            assert_eq!(cache.frequency(&"a"), Some(1));
        }
    }

    // ==============================================
    // Hit / Miss Semantics
    // ==============================================

    mod hit_miss {
        use super::*;

        #[test]
        fn miss_has_no_side_effects() {
            for policy in CachePolicy::BOUNDED {
                let mut cache = bounded(policy, 3);
                cache.insert("a", 1);
                cache.insert("b", 2);
                let order = recency_of(&cache);
                let victim = cache.peek_victim().copied();

                assert_eq!(cache.get(&"zzz"), None);

                assert_eq!(recency_of(&cache), order, "{policy}");
                assert_eq!(cache.peek_victim().copied(), victim, "{policy}");
                assert_eq!(cache.len(), 2);
            }
        }

        #[test]
        fn peek_does_not_touch() {
            let mut cache: Cache<&str, u32, Lru> = Cache::try_new(3).unwrap();
            cache.insert("a", 1);
            cache.insert("b", 2);
            assert_eq!(cache.peek(&"a"), Some(&1));
            assert_eq!(recency_of(&cache), vec!["a", "b"]);
        }

        #[test]
        fn hit_moves_key_only_for_touching_policies() {
            let expectations = [
                (CachePolicy::Fifo, vec!["a", "b", "c"]),
                (CachePolicy::Lifo, vec!["a", "b", "c"]),
                (CachePolicy::Lru, vec!["b", "c", "a"]),
                (CachePolicy::Mru, vec!["b", "c", "a"]),
                (CachePolicy::Lfu, vec!["b", "c", "a"]),
            ];
            for (policy, expected) in expectations {
                let mut cache = bounded(policy, 4);
                cache.insert("a", 1);
                cache.insert("b", 2);
                cache.insert("c", 3);
                assert_eq!(cache.get(&"a"), Some(&1));
                assert_eq!(recency_of(&cache), expected, "{policy}");
            }
        }
    }

    // ==============================================
    // Overwrite Behavior
    // ==============================================

    mod overwrite {
        use super::*;

        #[test]
        fn overwrite_at_capacity_never_evicts() {
            for policy in CachePolicy::BOUNDED {
                let (tx, rx) = mpsc::channel();
                let mut cache = bounded(policy, 2).with_discard_listener(move |k| {
                    let _ = tx.send(*k);
                });
                cache.insert("a", 1);
                cache.insert("b", 2);

                assert_eq!(cache.insert("a", 10), Some(1));
                assert_eq!(cache.insert("b", 20), Some(2));

                assert_eq!(cache.len(), 2);
                assert!(rx.try_recv().is_err(), "{policy} evicted on overwrite");
                assert_eq!(cache.peek(&"a"), Some(&10));
            }
        }

        #[test]
        fn overwrite_reorders_per_policy() {
            let expectations = [
                (CachePolicy::Fifo, vec!["a", "b", "c"]),
                (CachePolicy::Lifo, vec!["b", "c", "a"]),
                (CachePolicy::Lru, vec!["b", "c", "a"]),
                (CachePolicy::Mru, vec!["b", "c", "a"]),
                (CachePolicy::Lfu, vec!["a", "b", "c"]),
            ];
            for (policy, expected) in expectations {
                let mut cache = bounded(policy, 4);
                cache.insert("a", 1);
                cache.insert("b", 2);
                cache.insert("c", 3);
                cache.insert("a", 4);
                assert_eq!(recency_of(&cache), expected, "{policy}");
            }
        }

        #[test]
        fn lfu_overwrite_counts_as_use() {
            let mut cache: Cache<&str, u32, Lfu> = Cache::try_new(4).unwrap();
            cache.insert("a", 1);
            cache.insert("a", 2);
            assert_eq!(cache.frequency(&"a"), Some(2));
        }
    }

    // ==============================================
    // Discard Notification
    // ==============================================

    mod discard {
        use super::*;

        #[test]
        fn one_event_per_eviction_with_victim_key() {
            let (tx, rx) = mpsc::channel();
            let mut cache: Cache<u32, u32, Fifo> = Cache::try_new(2).unwrap();
            cache.on_discard(move |k| {
                let _ = tx.send(*k);
            });

            for i in 0..5 {
                cache.insert(i, i);
            }

            let discarded: Vec<u32> = rx.try_iter().collect();
            assert_eq!(discarded, vec![0, 1, 2]);
        }

        #[test]
        fn listener_can_be_replaced() {
            let (tx1, rx1) = mpsc::channel();
            let (tx2, rx2) = mpsc::channel();
            let mut cache: Cache<u32, u32, Lifo> = Cache::try_new(1).unwrap();
            cache.on_discard(move |k| {
                let _ = tx1.send(*k);
            });
            cache.insert(1, 1);
            cache.insert(2, 2);
            cache.on_discard(move |k| {
                let _ = tx2.send(*k);
            });
            cache.insert(3, 3);

            assert_eq!(rx1.try_iter().collect::<Vec<_>>(), vec![1]);
            assert_eq!(rx2.try_iter().collect::<Vec<_>>(), vec![2]);
        }

        #[test]
        fn remove_and_clear_do_not_notify() {
            let (tx, rx) = mpsc::channel();
            let mut cache: Cache<u32, u32, Lru> = Cache::try_new(2).unwrap();
            cache.on_discard(move |k| {
                let _ = tx.send(*k);
            });
            cache.insert(1, 1);
            cache.insert(2, 2);
            assert_eq!(cache.remove(&1), Some(1));
            cache.clear();
            assert!(rx.try_recv().is_err());
            assert!(cache.check_invariants().is_ok());
        }
    }

    // ==============================================
    // Remove / Clear
    // ==============================================

    mod remove_clear {
        use super::*;

        #[test]
        fn remove_frees_a_slot() {
            let mut cache: Cache<u32, u32, Lfu> = Cache::try_new(2).unwrap();
            cache.insert(1, 1);
            cache.insert(2, 2);
            cache.remove(&1);
            assert_eq!(cache.frequency(&1), None);
            cache.insert(3, 3);
            assert!(cache.contains(&2));
            assert!(cache.contains(&3));
            assert!(cache.check_invariants().is_ok());
        }

        #[test]
        fn remove_missing_key_is_none() {
            let mut cache: Cache<u32, u32, Mru> = Cache::try_new(2).unwrap();
            assert_eq!(cache.remove(&42), None);
        }

        #[test]
        fn clear_then_reuse() {
            let mut cache = bounded(CachePolicy::Lru, 2);
            cache.insert("a", 1);
            cache.insert("b", 2);
            cache.clear();
            assert!(cache.is_empty());
            assert_eq!(cache.keys_by_recency().count(), 0);
            cache.insert("c", 3);
            assert_eq!(cache.peek_victim(), Some(&"c"));
        }
    }

    // ==============================================
    // Dump / Print
    // ==============================================

    mod dump {
        use super::*;

        #[test]
        fn dump_lists_entries_sorted_by_key() {
            let mut cache: Cache<&str, &str, Fifo> = Cache::try_new(4).unwrap();
            cache.insert("D", "School");
            cache.insert("A", "Hello");
            cache.insert("C", "Street");
            cache.insert("B", "World");
            assert_eq!(
                cache.dump().to_string(),
                "Current cache:\nA: Hello\nB: World\nC: Street\nD: School\n"
            );
        }

        #[test]
        fn empty_dump_has_only_header() {
            let cache: Cache<u32, u32, Unbounded> = Cache::default();
            assert_eq!(cache.dump().to_string(), "Current cache:\n");
        }
    }

    // ==============================================
    // Metrics
    // ==============================================

    #[cfg(feature = "metrics")]
    mod metrics {
        use super::*;

        #[test]
        fn snapshot_counts_operations() {
            let mut cache: Cache<u32, u32, Lru> = Cache::try_new(2).unwrap();
            cache.put(None, Some(1));
            cache.insert(1, 1);
            cache.insert(2, 2);
            cache.insert(1, 10);
            cache.insert(3, 3);
            cache.get(&1);
            cache.get(&2);

            let snap = cache.snapshot();
            assert_eq!(snap.null_puts, 1);
            assert_eq!(snap.insert_calls, 4);
            assert_eq!(snap.insert_new, 3);
            assert_eq!(snap.insert_updates, 1);
            assert_eq!(snap.evicted_entries, 1);
            assert_eq!(snap.get_hits, 1);
            assert_eq!(snap.get_misses, 1);
            assert_eq!(snap.cache_len, 2);
            assert_eq!(snap.capacity, Some(2));
        }
    }

    // ==============================================
    // Invariants
    // ==============================================

    mod invariants {
        use super::*;
        use proptest::prelude::*;

        #[derive(Debug, Clone)]
        enum Op {
            Put(Option<u8>, Option<u16>),
            Get(u8),
            Remove(u8),
        }

        fn op_strategy() -> impl Strategy<Value = Op> {
            prop_oneof![
                4 => (proptest::option::weighted(0.9, 0u8..24), proptest::option::weighted(0.9, any::<u16>()))
                    .prop_map(|(k, v)| Op::Put(k, v)),
                3 => (0u8..24).prop_map(Op::Get),
                1 => (0u8..24).prop_map(Op::Remove),
            ]
        }

        fn policy_strategy() -> impl Strategy<Value = CachePolicy> {
            prop::sample::select(CachePolicy::BOUNDED.to_vec())
        }

        proptest! {
            #[cfg_attr(miri, ignore)]
            #[test]
            fn prop_invariants_hold_under_churn(
                policy in policy_strategy(),
                capacity in 1usize..8,
                ops in prop::collection::vec(op_strategy(), 0..200)
            ) {
                let mut cache: Cache<u8, u16> = Cache::with_policy(policy, Some(capacity)).unwrap();
                for op in ops {
                    match op {
                        Op::Put(k, v) => cache.put(k, v),
                        Op::Get(k) => { cache.get(&k); },
                        Op::Remove(k) => { cache.remove(&k); },
                    }
                    prop_assert!(cache.len() <= capacity);
                    prop_assert_eq!(cache.check_invariants(), Ok(()));
                }
            }

            #[cfg_attr(miri, ignore)]
            #[test]
            fn prop_unbounded_keeps_everything(
                keys in prop::collection::vec(any::<u16>(), 0..300)
            ) {
                let mut cache: Cache<u16, u16, Unbounded> = Cache::unbounded();
                for &k in &keys {
                    cache.insert(k, k);
                }
                let distinct: std::collections::HashSet<_> = keys.iter().collect();
                prop_assert_eq!(cache.len(), distinct.len());
                prop_assert_eq!(cache.peek_victim(), None);
                prop_assert_eq!(cache.check_invariants(), Ok(()));
            }
        }
    }
}
