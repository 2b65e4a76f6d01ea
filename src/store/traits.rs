//! Storage backend contract.
//!
//! Stores own keys and values and know their capacity bound, but never
//! enforce it: deciding what to drop when full is the cache's job. This keeps
//! policy logic independent of how values are stored.

/// Read-side store operations.
pub trait StoreCore<K, V> {
    /// Fetch a value by key.
    fn get(&self, key: &K) -> Option<&V>;

    /// Check if a key exists.
    fn contains(&self, key: &K) -> bool;

    /// Current number of entries.
    fn len(&self) -> usize;

    /// Check if the store is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maximum number of entries, or `None` when unbounded.
    fn capacity(&self) -> Option<usize>;

    /// `true` when one more new key would exceed the capacity.
    fn is_full(&self) -> bool {
        self.capacity().is_some_and(|cap| self.len() >= cap)
    }
}

/// Write-side store operations for single-threaded backends.
pub trait StoreMut<K, V>: StoreCore<K, V> {
    /// Insert or overwrite a value. Returns the previous value if present.
    ///
    /// Never refuses a key, even past capacity.
    fn set(&mut self, key: K, value: V) -> Option<V>;

    /// Remove a value by key.
    fn remove(&mut self, key: &K) -> Option<V>;

    /// Remove all entries.
    fn clear(&mut self);
}
