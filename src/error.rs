//! Error types for boundcache.
//!
//! `put` and `get` never fail: overflow is always resolved by eviction and a
//! miss is simply `None`. Errors only appear at the edges.
//!
//! ## Key Components
//!
//! - [`ConfigError`]: returned by fallible constructors when the requested
//!   capacity/policy combination cannot describe a working cache (zero
//!   capacity, a bounded policy without a capacity, an unknown policy name).
//! - [`InvariantError`]: returned by [`Cache::check_invariants`] when the
//!   store and the trackers disagree.
//!
//! ## Example Usage
//!
//! ```
//! use boundcache::error::ConfigError;
//! use boundcache::policy::Lru;
//! use boundcache::Cache;
//!
//! let cache: Result<Cache<&str, u32, Lru>, ConfigError> = Cache::try_new(4);
//! assert!(cache.is_ok());
//!
//! let bad = Cache::<&str, u32, Lru>::try_new(0);
//! assert!(bad.unwrap_err().to_string().contains("capacity"));
//! ```
//!
//! [`Cache::check_invariants`]: crate::cache::Cache::check_invariants

use std::fmt;

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Error returned when cache configuration parameters are invalid.
///
/// Produced by [`Cache::try_new`](crate::cache::Cache::try_new),
/// [`Cache::with_policy`](crate::cache::Cache::with_policy),
/// [`CacheBuilder::try_build`](crate::builder::CacheBuilder::try_build) and
/// the `FromStr` impl of [`CachePolicy`](crate::policy::CachePolicy).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError(String);

impl ConfigError {
    /// Creates a new `ConfigError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    pub(crate) fn zero_capacity(policy: &str) -> Self {
        Self::new(format!("{policy} cache capacity must be greater than 0"))
    }

    pub(crate) fn missing_capacity(policy: &str) -> Self {
        Self::new(format!("{policy} policy requires a capacity"))
    }

    pub(crate) fn unexpected_capacity(capacity: usize) -> Self {
        Self::new(format!(
            "unbounded policy does not take a capacity (got {capacity})"
        ))
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// InvariantError
// ---------------------------------------------------------------------------

/// Error returned when the store and its trackers have drifted apart.
///
/// Carries a human-readable description of which invariant failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    /// Creates a new `InvariantError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for InvariantError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
