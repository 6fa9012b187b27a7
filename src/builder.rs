//! Configuration and construction of LRU caches.
//!
//! [`CacheConfig`] is a plain data struct that can be embedded in an
//! application's own config file (feature `serde`); [`CacheBuilder`] turns it
//! into a cache, validating the capacity on the way.
//!
//! | Field             | Type    | Default | Description                        |
//! |-------------------|---------|---------|------------------------------------|
//! | `capacity`        | `usize` | 100     | Maximum number of entries          |
//! | `prealloc_memory` | `bool`  | true    | Reserve index and arena up front   |
//!
//! ## Example
//!
//! ```rust
//! use structkit::builder::CacheBuilder;
//!
//! let mut cache = CacheBuilder::new().capacity(2).build::<u64, String>().unwrap();
//! cache.put(1, "one".to_string()).put(2, "two".to_string());
//! assert_eq!(cache.get(&1), Some(&"one".to_string()));
//!
//! assert!(CacheBuilder::new().capacity(0).build::<u64, String>().is_err());
//! ```

use std::hash::Hash;
use std::num::NonZeroUsize;
#[cfg(feature = "concurrency")]
use std::sync::Arc;

use crate::error::CacheError;
#[cfg(feature = "concurrency")]
use crate::policy::lru::ConcurrentLruCache;
use crate::policy::lru::LruCache;

/// Capacity used by `Default` impls and [`CacheConfig::default`].
pub const DEFAULT_CAPACITY: usize = 100;

/// Cache settings.
///
/// With feature `serde`, missing fields fall back to their defaults:
///
/// ```
/// # #[cfg(feature = "serde")]
/// # {
/// use structkit::builder::CacheConfig;
///
/// let config: CacheConfig = serde_json::from_str(r#"{ "capacity": 512 }"#).unwrap();
/// assert_eq!(config.capacity, 512);
/// assert!(config.prealloc_memory);
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CacheConfig {
    /// Maximum number of entries. Must be greater than zero.
    pub capacity: usize,

    /// Reserve room for `capacity` entries at construction.
    ///
    /// Avoids rehashing while the cache warms up, at the cost of allocating
    /// the full footprint immediately.
    pub prealloc_memory: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            prealloc_memory: true,
        }
    }
}

impl CacheConfig {
    fn checked_capacity(&self) -> Result<NonZeroUsize, CacheError> {
        NonZeroUsize::new(self.capacity).ok_or_else(CacheError::zero_capacity)
    }
}

/// Fluent builder over [`CacheConfig`].
#[derive(Debug, Clone, Default)]
pub struct CacheBuilder {
    config: CacheConfig,
}

impl CacheBuilder {
    /// Starts from [`CacheConfig::default`].
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: CacheConfig) -> Self {
        Self { config }
    }

    pub fn capacity(mut self, capacity: usize) -> Self {
        self.config.capacity = capacity;
        self
    }

    pub fn prealloc_memory(mut self, prealloc: bool) -> Self {
        self.config.prealloc_memory = prealloc;
        self
    }

    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Builds a single-threaded cache.
    ///
    /// # Errors
    ///
    /// [`CacheError::InvalidArgument`] when the configured capacity is zero.
    pub fn build<K, V>(&self) -> Result<LruCache<K, V>, CacheError>
    where
        K: Eq + Hash + Clone,
    {
        let capacity = self.config.checked_capacity()?;
        Ok(LruCache::with_prealloc(
            capacity,
            self.config.prealloc_memory,
        ))
    }

    /// Builds a shareable, lock-protected cache.
    ///
    /// ```
    /// use structkit::builder::CacheBuilder;
    ///
    /// let cache = CacheBuilder::new().capacity(8).build_concurrent::<u64, String>().unwrap();
    /// let handle = cache.clone();
    /// std::thread::spawn(move || {
    ///     handle.put(1, "one".to_string());
    /// })
    /// .join()
    /// .unwrap();
    /// assert!(cache.contains(&1));
    /// ```
    ///
    /// # Errors
    ///
    /// [`CacheError::InvalidArgument`] when the configured capacity is zero.
    #[cfg(feature = "concurrency")]
    pub fn build_concurrent<K, V>(&self) -> Result<ConcurrentLruCache<K, V>, CacheError>
    where
        K: Eq + Hash + Clone + Send + Sync,
        V: Send + Sync,
    {
        self.build::<K, Arc<V>>().map(ConcurrentLruCache::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let config = CacheConfig::default();
        assert_eq!(config.capacity, DEFAULT_CAPACITY);
        assert!(config.prealloc_memory);
    }

    #[test]
    fn builder_applies_settings() {
        let builder = CacheBuilder::new().capacity(7).prealloc_memory(false);
        assert_eq!(
            builder.config(),
            &CacheConfig {
                capacity: 7,
                prealloc_memory: false
            }
        );
        let cache = builder.build::<u32, u32>().unwrap();
        assert_eq!(cache.capacity(), 7);
    }

    #[test]
    fn capacity_enforcement() {
        let mut cache = CacheBuilder::new().capacity(2).build::<u64, String>().unwrap();
        cache.insert(1, "one".to_string());
        cache.insert(2, "two".to_string());
        cache.insert(3, "three".to_string());

        assert_eq!(cache.len(), 2);
        assert!(!cache.contains(&1));
        assert!(cache.contains(&2));
        assert!(cache.contains(&3));
    }

    #[test]
    fn zero_capacity_fails() {
        let err = CacheBuilder::from_config(CacheConfig {
            capacity: 0,
            ..Default::default()
        })
        .build::<u8, u8>()
        .unwrap_err();
        assert!(matches!(err, CacheError::InvalidArgument(_)));
    }

    #[cfg(feature = "concurrency")]
    #[test]
    fn concurrent_build_shares_config() {
        let cache = CacheBuilder::new()
            .capacity(3)
            .build_concurrent::<u8, u8>()
            .unwrap();
        assert_eq!(cache.capacity(), 3);
        assert!(CacheBuilder::new().capacity(0).build_concurrent::<u8, u8>().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn config_round_trips_through_json() {
        let config: CacheConfig =
            serde_json::from_str(r#"{ "capacity": 3, "prealloc_memory": false }"#).unwrap();
        assert_eq!(config.capacity, 3);
        assert!(!config.prealloc_memory);

        let empty: CacheConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, CacheConfig::default());
    }
}
