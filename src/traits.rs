//! # Cache Traits
//!
//! Policy-neutral interfaces implemented by the caches in this crate, so
//! callers can write code against behavior instead of a concrete type.
//!
//! ## Architecture
//!
//! ```text
//!   ┌─────────────────────────────────────────┐
//!   │            CoreCache<K, V>              │
//!   │                                         │
//!   │  insert(&mut, K, V) → Option<V>         │
//!   │  get(&mut, &K) → Option<&V>             │
//!   │  contains(&, &K) → bool                 │
//!   │  len(&) / is_empty(&) / capacity(&)     │
//!   │  clear(&mut)                            │
//!   └──────────────────┬──────────────────────┘
//!                      ▼
//!   ┌─────────────────────────────────────────┐
//!   │           MutableCache<K, V>            │
//!   │  remove(&K) → Option<V>                 │
//!   │  remove_batch(&[K])                     │
//!   └──────────────────┬──────────────────────┘
//!                      ▼
//!   ┌─────────────────────────────────────────┐
//!   │          LruCacheTrait<K, V>            │
//!   │  pop_lru() → (K, V)                     │
//!   │  peek_lru() → (&K, &V)                  │
//!   │  touch(&K) → bool                       │
//!   │  recency_rank(&K) → usize               │
//!   └─────────────────────────────────────────┘
//!
//!   ConcurrentCache: Send + Sync marker for shared handles
//! ```
//!
//! | Trait              | Extends        | Purpose                            |
//! |--------------------|----------------|------------------------------------|
//! | `CoreCache`        | -              | Universal cache operations         |
//! | `MutableCache`     | `CoreCache`    | Arbitrary key removal              |
//! | `LruCacheTrait`    | `MutableCache` | Recency-ordered eviction           |
//! | `ConcurrentCache`  | `Send + Sync`  | Marker for thread-safe caches      |
//!
//! ## Example
//!
//! ```
//! use structkit::policy::lru::LruCache;
//! use structkit::traits::{CoreCache, LruCacheTrait};
//!
//! fn warm<C: CoreCache<u64, String>>(cache: &mut C, data: &[(u64, &str)]) {
//!     for (key, value) in data {
//!         cache.insert(*key, value.to_string());
//!     }
//! }
//!
//! let mut cache = LruCache::try_new(2).unwrap();
//! warm(&mut cache, &[(1, "one"), (2, "two"), (3, "three")]);
//! assert_eq!(CoreCache::len(&cache), 2);
//! assert_eq!(LruCacheTrait::peek_lru(&cache).map(|(k, _)| *k), Some(2));
//! ```

/// Operations every cache supports.
pub trait CoreCache<K, V> {
    /// Inserts a key-value pair, returning the previous value if it existed.
    ///
    /// If the cache is at capacity and `key` is new, an entry is evicted
    /// according to the cache's policy first.
    fn insert(&mut self, key: K, value: V) -> Option<V>;

    /// Gets a reference to a value, updating policy state (e.g. recency).
    ///
    /// Use [`contains`](Self::contains) to test membership without side effects.
    fn get(&mut self, key: &K) -> Option<&V>;

    /// Checks if a key exists without updating access state.
    fn contains(&self, key: &K) -> bool;

    /// Returns the current number of entries.
    fn len(&self) -> usize;

    /// Returns `true` if the cache holds no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the maximum number of entries.
    fn capacity(&self) -> usize;

    /// Removes every entry. Capacity is unchanged.
    fn clear(&mut self);
}

/// Caches that allow removal of arbitrary keys.
pub trait MutableCache<K, V>: CoreCache<K, V> {
    /// Removes `key`, returning its value if it was present.
    fn remove(&mut self, key: &K) -> Option<V>;

    /// Removes each key in order, returning the per-key results.
    ///
    /// ```
    /// use structkit::policy::lru::LruCache;
    /// use structkit::traits::MutableCache;
    ///
    /// let mut cache = LruCache::try_new(4).unwrap();
    /// cache.put(1, "a").put(2, "b");
    /// assert_eq!(cache.remove_batch(&[1, 3]), vec![Some("a"), None]);
    /// ```
    fn remove_batch(&mut self, keys: &[K]) -> Vec<Option<V>> {
        keys.iter().map(|key| self.remove(key)).collect()
    }
}

/// Recency-ordered caches.
///
/// ```
/// use structkit::policy::lru::LruCache;
/// use structkit::traits::LruCacheTrait;
///
/// let mut cache = LruCache::try_new(3).unwrap();
/// cache.put(1, "one").put(2, "two").put(3, "three");
///
/// assert!(LruCacheTrait::touch(&mut cache, &1));
/// assert_eq!(LruCacheTrait::recency_rank(&cache, &1), Some(0));
/// assert_eq!(LruCacheTrait::pop_lru(&mut cache), Some((2, "two")));
/// ```
pub trait LruCacheTrait<K, V>: MutableCache<K, V> {
    /// Removes and returns the least recently used entry.
    fn pop_lru(&mut self) -> Option<(K, V)>;

    /// Peeks at the least recently used entry without reordering.
    fn peek_lru(&self) -> Option<(&K, &V)>;

    /// Marks `key` as most recently used. Returns `false` if absent.
    fn touch(&mut self, key: &K) -> bool;

    /// Position of `key` in recency order (0 = most recent).
    fn recency_rank(&self, key: &K) -> Option<usize>;
}

/// Marker for cache handles that can be shared across threads.
///
/// ```
/// use structkit::traits::ConcurrentCache;
///
/// fn assert_shared<C: ConcurrentCache>(_: &C) {}
///
/// # #[cfg(feature = "concurrency")]
/// # {
/// use structkit::policy::lru::ConcurrentLruCache;
/// let cache: ConcurrentLruCache<u64, String> = ConcurrentLruCache::try_new(8).unwrap();
/// assert_shared(&cache);
/// # }
/// ```
pub trait ConcurrentCache: Send + Sync {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::lru::LruCache;

    fn fill<C: CoreCache<u32, u32>>(cache: &mut C, n: u32) {
        for i in 0..n {
            cache.insert(i, i * 10);
        }
    }

    #[test]
    fn core_cache_insert_returns_previous_value() {
        let mut cache: LruCache<u32, &str> = LruCache::try_new(4).unwrap();
        assert_eq!(CoreCache::insert(&mut cache, 1, "first"), None);
        assert_eq!(CoreCache::insert(&mut cache, 1, "second"), Some("first"));
    }

    #[test]
    fn generic_fill_respects_capacity() {
        let mut cache: LruCache<u32, u32> = LruCache::try_new(3).unwrap();
        fill(&mut cache, 10);
        assert_eq!(CoreCache::len(&cache), 3);
        assert!(!CoreCache::is_empty(&cache));
        assert_eq!(CoreCache::capacity(&cache), 3);
    }

    #[test]
    fn remove_batch_default_method() {
        let mut cache: LruCache<u32, u32> = LruCache::try_new(8).unwrap();
        fill(&mut cache, 4);
        assert_eq!(cache.remove_batch(&[0, 9, 3]), vec![Some(0), None, Some(30)]);
        assert_eq!(CoreCache::len(&cache), 2);
    }
}
