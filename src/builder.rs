//! Runtime cache configuration.
//!
//! [`CacheBuilder`] picks the eviction policy from a value (or a name read
//! from configuration) instead of a type parameter, and validates the
//! capacity/policy combination in one place.
//!
//! ## Example
//!
//! ```rust
//! use boundcache::builder::CacheBuilder;
//! use boundcache::policy::CachePolicy;
//!
//! let mut cache = CacheBuilder::new(Some(100))
//!     .policy(CachePolicy::Lfu)
//!     .try_build::<u64, String>()
//!     .unwrap();
//! cache.insert(1, "hello".to_string());
//! assert_eq!(cache.get(&1), Some(&"hello".to_string()));
//! ```

use std::hash::Hash;

use tracing::warn;

use crate::cache::{Cache, DEFAULT_CAPACITY};
use crate::error::ConfigError;
use crate::policy::CachePolicy;

/// Builder for runtime-selected caches.
///
/// A capacity of `None` selects [`CachePolicy::Unbounded`] unless a policy is
/// set explicitly. A bounded capacity without an explicit policy selects LRU.
#[derive(Debug, Clone)]
pub struct CacheBuilder {
    capacity: Option<usize>,
    policy: Option<Result<CachePolicy, ConfigError>>,
}

impl CacheBuilder {
    /// Create a new builder with the given capacity (`None` for unbounded).
    pub fn new(capacity: Option<usize>) -> Self {
        Self {
            capacity,
            policy: None,
        }
    }

    /// Set the eviction policy.
    pub fn policy(mut self, policy: CachePolicy) -> Self {
        self.policy = Some(Ok(policy));
        self
    }

    /// Set the eviction policy by name (`"lru"`, `"FIFO"`, ...).
    ///
    /// An unknown name is reported by [`try_build`](Self::try_build).
    pub fn policy_name(mut self, name: &str) -> Self {
        self.policy = Some(name.parse());
        self
    }

    /// The policy `try_build` will use, if it is valid.
    pub fn resolved_policy(&self) -> Result<CachePolicy, ConfigError> {
        match &self.policy {
            Some(policy) => policy.clone(),
            None if self.capacity.is_none() => Ok(CachePolicy::Unbounded),
            None => Ok(CachePolicy::default()),
        }
    }

    /// Build the cache.
    ///
    /// # Example
    ///
    /// ```rust
    /// use boundcache::builder::CacheBuilder;
    ///
    /// // Unbounded when no capacity is given.
    /// let cache = CacheBuilder::new(None).try_build::<u32, u32>().unwrap();
    /// assert_eq!(cache.capacity(), None);
    ///
    /// // Policy names are case-insensitive.
    /// let cache = CacheBuilder::new(Some(4)).policy_name("MRU").try_build::<u32, u32>();
    /// assert!(cache.is_ok());
    ///
    /// // Zero capacity is rejected.
    /// assert!(CacheBuilder::new(Some(0)).try_build::<u32, u32>().is_err());
    /// ```
    pub fn try_build<K, V>(self) -> Result<Cache<K, V, CachePolicy>, ConfigError>
    where
        K: Clone + Eq + Hash,
    {
        let policy = self.resolved_policy().inspect_err(|err| {
            warn!(error = %err, "rejected cache configuration");
        })?;
        Cache::with_policy(policy, self.capacity)
    }
}

impl Default for CacheBuilder {
    /// Capacity [`DEFAULT_CAPACITY`] with LRU eviction.
    fn default() -> Self {
        Self::new(Some(DEFAULT_CAPACITY)).policy(CachePolicy::Lru)
    }
}
