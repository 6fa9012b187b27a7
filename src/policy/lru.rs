//! # Least Recently Used (LRU) Cache
//!
//! A bounded key/value map that remembers the order in which entries were
//! last used and, when full, evicts the one untouched for the longest time.
//!
//! ## Architecture
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────────────────┐
//!   │                    ConcurrentLruCache<K, V>                          │
//!   │         Arc<parking_lot::RwLock<LruCache<K, Arc<V>>>>                │
//!   └──────────────────────────────────┬───────────────────────────────────┘
//!                                      ▼
//!   ┌──────────────────────────────────────────────────────────────────────┐
//!   │                         LruCache<K, V>                               │
//!   │                                                                      │
//!   │   ┌──────────────────────────────────────────────────────────────┐   │
//!   │   │  FxHashMap<K, SlotId>                                        │   │
//!   │   │     "a" ───────────────────────────────┐                     │   │
//!   │   │     "b" ─────────────────────┐         │                     │   │
//!   │   │     "c" ───────────┐         │         │                     │   │
//!   │   └────────────────────┼─────────┼─────────┼─────────────────────┘   │
//!   │                        ▼         ▼         ▼                         │
//!   │   ┌──────────────────────────────────────────────────────────────┐   │
//!   │   │  IntrusiveList<Entry<K, V>>  (nodes live in a SlotArena)     │   │
//!   │   │                                                              │   │
//!   │   │  head ──► [c=3] ◄──► [b=2] ◄──► [a=1] ◄── tail               │   │
//!   │   │           MRU                    LRU                         │   │
//!   │   └──────────────────────────────────────────────────────────────┘   │
//!   └──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Links are `SlotId` indices into the arena, so the structure contains no
//! raw pointers and no `unsafe`.
//!
//! ## Operations Flow
//!
//! ```text
//!   put(d) on a full cache (capacity = 3)
//!   ═════════════════════════════════════════════════════════════════════
//!     before:  head ──► [c] ◄──► [b] ◄──► [a] ◄── tail
//!     1. pop [a] from tail, drop its index entry
//!     2. push [d] at head, index it
//!     after:   head ──► [d] ◄──► [c] ◄──► [b] ◄── tail
//!
//!   get(b)
//!   ═════════════════════════════════════════════════════════════════════
//!     before:  head ──► [d] ◄──► [c] ◄──► [b] ◄── tail
//!     1. index lookup: O(1)
//!     2. move_to_front: O(1)
//!     after:   head ──► [b] ◄──► [d] ◄──► [c] ◄── tail
//!
//!   contains(c) / peek(c) / peek_lru()
//!   ═════════════════════════════════════════════════════════════════════
//!     order unchanged
//! ```
//!
//! ## LruCache Methods
//!
//! | Method              | Complexity | Description                               |
//! |---------------------|------------|-------------------------------------------|
//! | `new` / `try_new`   | O(1)       | Create with a non-zero capacity           |
//! | `get(&k)`           | O(1)       | Read value, promote to MRU                |
//! | `put(k, v)`         | O(1)       | Insert or replace, promote, maybe evict   |
//! | `insert(k, v)`      | O(1)       | Like `put`, returns replaced value        |
//! | `push(k, v)`        | O(1)       | Like `put`, returns evicted entry         |
//! | `peek(&k)`          | O(1)       | Read value without reordering             |
//! | `contains(&k)`      | O(1)       | Membership, no reordering                 |
//! | `remove` / `delete` | O(1)       | Drop one entry                            |
//! | `touch(&k)`         | O(1)       | Promote without reading                   |
//! | `pop_lru()`         | O(1)       | Evict the LRU entry explicitly            |
//! | `peek_lru/peek_mru` | O(1)       | Inspect either end                        |
//! | `recency_rank(&k)`  | O(n)       | Position in recency order (0 = MRU)       |
//! | `resize(n)`         | O(k)       | Change capacity, evicting k oldest        |
//! | `keys/values/entries` | O(n)     | Owned snapshots, MRU → LRU                |
//! | `stats()`           | O(1)       | Size / capacity / utilization             |
//! | `clear()`           | O(n)       | Remove everything, keep capacity          |
//!
//! ## ConcurrentLruCache Methods
//!
//! | Method                         | Lock  |
//! |--------------------------------|-------|
//! | `get`, `put`, `insert`, `push` | Write |
//! | `remove`, `delete`, `touch`    | Write |
//! | `pop_lru`, `resize`, `clear`   | Write |
//! | `peek`, `contains`, `len`      | Read  |
//! | `keys`, `values`, `entries`    | Read  |
//! | `peek_lru`, `peek_mru`, `stats`| Read  |
//!
//! `get` needs the write lock because it reorders. Every method takes the
//! lock exactly once, so each call is atomic with respect to the others.
//!
//! ## Thread Safety
//!
//! - `LruCache`: not synchronized; `Send` when `K` and `V` are.
//! - `ConcurrentLruCache`: `Send + Sync` via `parking_lot::RwLock`; values are
//!   handed out as `Arc<V>` so they stay valid after eviction.
//!
//! ## Example
//!
//! ```
//! use structkit::policy::lru::LruCache;
//!
//! let mut cache = LruCache::try_new(3).unwrap();
//! cache.put("a", 1).put("b", 2).put("c", 3);
//!
//! // "a" becomes most recent, so "b" is the next victim
//! assert_eq!(cache.get(&"a"), Some(&1));
//! cache.put("d", 4);
//!
//! assert!(!cache.contains(&"b"));
//! assert_eq!(cache.keys(), vec!["d", "a", "c"]);
//! assert_eq!(cache.stats().utilization_label(), "100.00%");
//! ```

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::iter::FusedIterator;
use std::mem;
use std::num::NonZeroUsize;
#[cfg(feature = "concurrency")]
use std::sync::Arc;

#[cfg(feature = "concurrency")]
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::builder::DEFAULT_CAPACITY;
use crate::ds::intrusive_list::{IntrusiveList, IntrusiveListIter};
use crate::ds::slot_arena::SlotId;
use crate::error::{CacheError, InvariantError};
#[cfg(feature = "metrics")]
use crate::metrics::metrics_impl::LruMetrics;
#[cfg(feature = "metrics")]
use crate::metrics::snapshot::LruMetricsSnapshot;
#[cfg(feature = "metrics")]
use crate::metrics::traits::{CoreMetricsRecorder, LruMetricsRecorder, MetricsSnapshotProvider};
use crate::stats::CacheStats;
#[cfg(feature = "concurrency")]
use crate::traits::ConcurrentCache;
use crate::traits::{CoreCache, LruCacheTrait, MutableCache};

const DEFAULT_NONZERO_CAPACITY: NonZeroUsize = match NonZeroUsize::new(DEFAULT_CAPACITY) {
    Some(capacity) => capacity,
    None => panic!("DEFAULT_CAPACITY must be non-zero"),
};

#[derive(Debug)]
struct Entry<K, V> {
    key: K,
    value: V,
}

enum Upsert<K, V> {
    Inserted,
    Replaced(V),
    Evicted(K, V),
}

/// Single-threaded LRU cache with a fixed, non-zero capacity.
///
/// `len() <= capacity()` holds after every call. Reads that count as a use
/// (`get`, `put`, `touch`) move the entry to the most-recently-used end;
/// inspection methods (`peek*`, `contains`, snapshots, `stats`) never do.
pub struct LruCache<K, V> {
    map: FxHashMap<K, SlotId>,
    list: IntrusiveList<Entry<K, V>>,
    capacity: usize,
    #[cfg(feature = "metrics")]
    metrics: LruMetrics,
}

impl<K, V> LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Creates an empty cache holding at most `capacity` entries.
    ///
    /// ```
    /// use std::num::NonZeroUsize;
    /// use structkit::policy::lru::LruCache;
    ///
    /// let cache: LruCache<u32, String> = LruCache::new(NonZeroUsize::new(16).unwrap());
    /// assert_eq!(cache.capacity(), 16);
    /// assert!(cache.is_empty());
    /// ```
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self::with_prealloc(capacity, false)
    }

    /// Fallible constructor for capacities that come from user input.
    ///
    /// # Errors
    ///
    /// [`CacheError::InvalidArgument`] when `capacity` is zero.
    pub fn try_new(capacity: usize) -> Result<Self, CacheError> {
        NonZeroUsize::new(capacity)
            .map(Self::new)
            .ok_or_else(CacheError::zero_capacity)
    }

    /// Creates an empty cache, optionally reserving room for `capacity` entries up front.
    pub(crate) fn with_prealloc(capacity: NonZeroUsize, prealloc: bool) -> Self {
        let capacity = capacity.get();
        let (map, list) = if prealloc {
            (
                FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
                IntrusiveList::with_capacity(capacity),
            )
        } else {
            (FxHashMap::default(), IntrusiveList::new())
        };
        Self {
            map,
            list,
            capacity,
            #[cfg(feature = "metrics")]
            metrics: LruMetrics::default(),
        }
    }

    /// Maximum number of entries.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// `true` when the next new key will evict.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.list.len() >= self.capacity
    }

    /// Returns the value for `key` and marks it most recently used.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        let Some(&id) = self.map.get(key) else {
            #[cfg(feature = "metrics")]
            self.metrics.record_get_miss();
            return None;
        };
        #[cfg(feature = "metrics")]
        self.metrics.record_get_hit();

        self.list.move_to_front(id);
        self.list.get(id).map(|entry| &entry.value)
    }

    /// Returns the value for `key` without touching recency.
    pub fn peek(&self, key: &K) -> Option<&V> {
        let id = *self.map.get(key)?;
        self.list.get(id).map(|entry| &entry.value)
    }

    /// Membership test; never changes recency.
    #[inline]
    pub fn contains(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }

    /// Inserts or replaces `key` and marks it most recently used.
    ///
    /// When `key` is new and the cache is full, the least recently used entry
    /// is evicted first. Returns `self` so calls can be chained.
    ///
    /// ```
    /// use structkit::policy::lru::LruCache;
    ///
    /// let mut cache = LruCache::try_new(2).unwrap();
    /// cache.put(1, "one").put(2, "two").put(3, "three");
    /// assert_eq!(cache.len(), 2);
    /// assert!(!cache.contains(&1));
    /// ```
    pub fn put(&mut self, key: K, value: V) -> &mut Self {
        self.upsert(key, value);
        self
    }

    /// Same as [`put`](Self::put), returning the value that was replaced.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        match self.upsert(key, value) {
            Upsert::Replaced(old) => Some(old),
            Upsert::Inserted | Upsert::Evicted(..) => None,
        }
    }

    /// Same as [`put`](Self::put), returning the entry evicted to make room.
    ///
    /// ```
    /// use structkit::policy::lru::LruCache;
    ///
    /// let mut cache = LruCache::try_new(1).unwrap();
    /// assert_eq!(cache.push("a", 1), None);
    /// assert_eq!(cache.push("a", 2), None);
    /// assert_eq!(cache.push("b", 3), Some(("a", 2)));
    /// ```
    pub fn push(&mut self, key: K, value: V) -> Option<(K, V)> {
        match self.upsert(key, value) {
            Upsert::Evicted(key, value) => Some((key, value)),
            Upsert::Inserted | Upsert::Replaced(_) => None,
        }
    }

    fn upsert(&mut self, key: K, value: V) -> Upsert<K, V> {
        #[cfg(feature = "metrics")]
        self.metrics.record_insert_call();

        if let Some(&id) = self.map.get(&key) {
            if let Some(entry) = self.list.get_mut(id) {
                let old = mem::replace(&mut entry.value, value);
                self.list.move_to_front(id);
                #[cfg(feature = "metrics")]
                self.metrics.record_insert_update();
                return Upsert::Replaced(old);
            }
        }

        #[cfg(feature = "metrics")]
        self.metrics.record_insert_new();

        let evicted = if self.is_full() {
            self.evict_lru()
        } else {
            None
        };

        let id = self.list.push_front(Entry {
            key: key.clone(),
            value,
        });
        self.map.insert(key, id);

        match evicted {
            Some((key, value)) => Upsert::Evicted(key, value),
            None => Upsert::Inserted,
        }
    }

    fn evict_lru(&mut self) -> Option<(K, V)> {
        #[cfg(feature = "metrics")]
        self.metrics.record_evict_call();

        let entry = self.list.pop_back()?;
        self.map.remove(&entry.key);

        #[cfg(feature = "metrics")]
        self.metrics.record_evicted_entry();
        trace!(
            len = self.list.len(),
            capacity = self.capacity,
            "evicted least recently used entry"
        );
        Some((entry.key, entry.value))
    }

    /// Removes `key`, returning its value.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        #[cfg(feature = "metrics")]
        self.metrics.record_remove_call();

        let id = self.map.remove(key)?;
        let entry = self.list.remove(id)?;

        #[cfg(feature = "metrics")]
        self.metrics.record_remove_found();
        Some(entry.value)
    }

    /// Removes `key`; returns whether it was present.
    pub fn delete(&mut self, key: &K) -> bool {
        self.remove(key).is_some()
    }

    /// Drops every entry. Capacity is unchanged; calling it twice is harmless.
    pub fn clear(&mut self) {
        let dropped = self.list.len();
        self.map.clear();
        self.list.clear();

        #[cfg(feature = "metrics")]
        self.metrics.record_clear();
        debug!(dropped, capacity = self.capacity, "cleared cache");
    }

    /// Marks `key` most recently used without reading it.
    pub fn touch(&mut self, key: &K) -> bool {
        #[cfg(feature = "metrics")]
        self.metrics.record_touch_call();

        let Some(&id) = self.map.get(key) else {
            return false;
        };
        let moved = self.list.move_to_front(id);

        #[cfg(feature = "metrics")]
        if moved {
            self.metrics.record_touch_found();
        }
        moved
    }

    /// Removes and returns the least recently used entry.
    pub fn pop_lru(&mut self) -> Option<(K, V)> {
        #[cfg(feature = "metrics")]
        self.metrics.record_pop_lru_call();

        let entry = self.list.pop_back()?;
        self.map.remove(&entry.key);

        #[cfg(feature = "metrics")]
        self.metrics.record_pop_lru_found();
        Some((entry.key, entry.value))
    }

    /// Least recently used entry (next eviction victim).
    pub fn peek_lru(&self) -> Option<(&K, &V)> {
        self.list.back().map(|entry| (&entry.key, &entry.value))
    }

    /// Most recently used entry.
    pub fn peek_mru(&self) -> Option<(&K, &V)> {
        self.list.front().map(|entry| (&entry.key, &entry.value))
    }

    /// Position of `key` in recency order, 0 being most recent. O(n).
    pub fn recency_rank(&self, key: &K) -> Option<usize> {
        let id = *self.map.get(key)?;
        self.list.position(id)
    }

    /// Changes capacity, evicting least recently used entries until the cache fits.
    ///
    /// Returns the evicted entries, oldest first. Growing never evicts.
    ///
    /// # Errors
    ///
    /// [`CacheError::InvalidArgument`] when `capacity` is zero; the cache is
    /// left untouched.
    ///
    /// ```
    /// use structkit::policy::lru::LruCache;
    ///
    /// let mut cache = LruCache::try_new(3).unwrap();
    /// cache.put('a', 1).put('b', 2).put('c', 3);
    ///
    /// let evicted = cache.resize(1).unwrap();
    /// assert_eq!(evicted, vec![('a', 1), ('b', 2)]);
    /// assert_eq!(cache.keys(), vec!['c']);
    /// assert!(cache.resize(0).is_err());
    /// assert_eq!(cache.capacity(), 1);
    /// ```
    pub fn resize(&mut self, capacity: usize) -> Result<Vec<(K, V)>, CacheError> {
        if capacity == 0 {
            return Err(CacheError::zero_capacity());
        }

        let old_capacity = mem::replace(&mut self.capacity, capacity);
        let mut evicted = Vec::with_capacity(self.list.len().saturating_sub(capacity));
        while self.list.len() > capacity {
            match self.evict_lru() {
                Some(entry) => evicted.push(entry),
                None => break,
            }
        }

        #[cfg(feature = "metrics")]
        self.metrics.record_resize();
        debug!(
            old_capacity,
            new_capacity = capacity,
            evicted = evicted.len(),
            "resized cache"
        );
        Ok(evicted)
    }

    /// Borrowing iterator over entries, most recent first.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.list.iter(),
            remaining: self.list.len(),
        }
    }

    /// Keys, most recent first.
    pub fn keys(&self) -> Vec<K> {
        self.iter().map(|(key, _)| key.clone()).collect()
    }

    /// Values, most recent first.
    pub fn values(&self) -> Vec<V>
    where
        V: Clone,
    {
        self.iter().map(|(_, value)| value.clone()).collect()
    }

    /// `(key, value)` pairs, most recent first.
    pub fn entries(&self) -> Vec<(K, V)>
    where
        V: Clone,
    {
        self.iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    /// Occupancy summary.
    pub fn stats(&self) -> CacheStats {
        CacheStats::new(self.len(), self.capacity)
    }

    /// Plain key/value map of the current contents. Recency order is lost.
    pub fn to_plain_mapping(&self) -> HashMap<K, V>
    where
        V: Clone,
    {
        self.iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    /// Serializes the contents as a JSON object, most recent entry first.
    ///
    /// # Errors
    ///
    /// Fails when a key or value cannot be represented in JSON (for example
    /// keys that are not strings or numbers).
    ///
    /// ```
    /// use structkit::policy::lru::LruCache;
    ///
    /// let mut cache = LruCache::try_new(2).unwrap();
    /// cache.put("x", 1).put("y", 2);
    /// assert_eq!(cache.to_json_string().unwrap(), r#"{"y":2,"x":1}"#);
    /// ```
    #[cfg(feature = "serde")]
    pub fn to_json_string(&self) -> serde_json::Result<String>
    where
        K: serde::Serialize,
        V: serde::Serialize,
    {
        serde_json::to_string(self)
    }

    /// Checks that the index and the recency list agree.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        self.list.validate()?;
        if self.capacity == 0 {
            return Err(InvariantError::new("capacity is zero"));
        }
        if self.map.len() != self.list.len() {
            return Err(InvariantError::new(format!(
                "index has {} keys but list has {} entries",
                self.map.len(),
                self.list.len()
            )));
        }
        if self.list.len() > self.capacity {
            return Err(InvariantError::new(format!(
                "len {} exceeds capacity {}",
                self.list.len(),
                self.capacity
            )));
        }
        for (key, &id) in &self.map {
            match self.list.get(id) {
                Some(entry) if entry.key == *key => {},
                Some(_) => return Err(InvariantError::new("index points at an entry with another key")),
                None => return Err(InvariantError::new("index points at a vacant slot")),
            }
        }
        Ok(())
    }
}

#[cfg(feature = "metrics")]
impl<K, V> LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Copies the operation counters along with current len and capacity.
    pub fn metrics_snapshot(&self) -> LruMetricsSnapshot {
        LruMetricsSnapshot::from_counters(&self.metrics, self.len(), self.capacity)
    }
}

#[cfg(feature = "metrics")]
impl<K, V> MetricsSnapshotProvider<LruMetricsSnapshot> for LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn snapshot(&self) -> LruMetricsSnapshot {
        self.metrics_snapshot()
    }
}

impl<K, V> CoreCache<K, V> for LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn insert(&mut self, key: K, value: V) -> Option<V> {
        LruCache::insert(self, key, value)
    }

    fn get(&mut self, key: &K) -> Option<&V> {
        LruCache::get(self, key)
    }

    fn contains(&self, key: &K) -> bool {
        LruCache::contains(self, key)
    }

    fn len(&self) -> usize {
        LruCache::len(self)
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn clear(&mut self) {
        LruCache::clear(self)
    }
}

impl<K, V> MutableCache<K, V> for LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn remove(&mut self, key: &K) -> Option<V> {
        LruCache::remove(self, key)
    }
}

impl<K, V> LruCacheTrait<K, V> for LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn pop_lru(&mut self) -> Option<(K, V)> {
        LruCache::pop_lru(self)
    }

    fn peek_lru(&self) -> Option<(&K, &V)> {
        LruCache::peek_lru(self)
    }

    fn touch(&mut self, key: &K) -> bool {
        LruCache::touch(self, key)
    }

    fn recency_rank(&self, key: &K) -> Option<usize> {
        LruCache::recency_rank(self, key)
    }
}

impl<K, V> fmt::Debug for LruCache<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCache")
            .field("len", &self.list.len())
            .field("capacity", &self.capacity)
            .finish_non_exhaustive()
    }
}

impl<K, V> Default for LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Cache with [`DEFAULT_CAPACITY`] (100) entries.
    fn default() -> Self {
        Self::new(DEFAULT_NONZERO_CAPACITY)
    }
}

impl<K, V> Extend<(K, V)> for LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.upsert(key, value);
        }
    }
}

impl<'a, K, V> IntoIterator for &'a LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(feature = "serde")]
impl<K, V> serde::Serialize for LruCache<K, V>
where
    K: Eq + Hash + Clone + serde::Serialize,
    V: serde::Serialize,
{
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

/// Iterator over `(&K, &V)` from most to least recently used.
pub struct Iter<'a, K, V> {
    inner: IntrusiveListIter<'a, Entry<K, V>>,
    remaining: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.inner.next()?;
        self.remaining = self.remaining.saturating_sub(1);
        Some((&entry.key, &entry.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

/// Thread-safe handle to a shared [`LruCache`].
///
/// Cloning the handle shares the same cache. Values are stored as `Arc<V>`
/// and returned by clone, so readers never hold the lock while using them.
#[cfg(feature = "concurrency")]
pub struct ConcurrentLruCache<K, V> {
    inner: Arc<RwLock<LruCache<K, Arc<V>>>>,
}

#[cfg(feature = "concurrency")]
impl<K, V> Clone for ConcurrentLruCache<K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

#[cfg(feature = "concurrency")]
impl<K, V> fmt::Debug for ConcurrentLruCache<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cache = self.inner.read();
        f.debug_struct("ConcurrentLruCache")
            .field("len", &cache.list.len())
            .field("capacity", &cache.capacity)
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "concurrency")]
impl<K, V> Default for ConcurrentLruCache<K, V>
where
    K: Eq + Hash + Clone + Send + Sync,
    V: Send + Sync,
{
    fn default() -> Self {
        Self::new(DEFAULT_NONZERO_CAPACITY)
    }
}

#[cfg(feature = "concurrency")]
impl<K, V> From<LruCache<K, Arc<V>>> for ConcurrentLruCache<K, V> {
    fn from(cache: LruCache<K, Arc<V>>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(cache)),
        }
    }
}

#[cfg(feature = "concurrency")]
impl<K, V> ConcurrentLruCache<K, V>
where
    K: Eq + Hash + Clone + Send + Sync,
    V: Send + Sync,
{
    /// ```
    /// use std::num::NonZeroUsize;
    /// use structkit::policy::lru::ConcurrentLruCache;
    ///
    /// let cache: ConcurrentLruCache<u32, String> =
    ///     ConcurrentLruCache::new(NonZeroUsize::new(100).unwrap());
    /// assert_eq!(cache.capacity(), 100);
    /// ```
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self::from(LruCache::new(capacity))
    }

    /// # Errors
    ///
    /// [`CacheError::InvalidArgument`] when `capacity` is zero.
    pub fn try_new(capacity: usize) -> Result<Self, CacheError> {
        LruCache::try_new(capacity).map(Self::from)
    }

    /// Inserts `value`, returning the replaced value if `key` existed.
    pub fn insert(&self, key: K, value: V) -> Option<Arc<V>> {
        let value = Arc::new(value);
        self.inner.write().insert(key, value)
    }

    /// Inserts an already shared value.
    pub fn insert_arc(&self, key: K, value: Arc<V>) -> Option<Arc<V>> {
        self.inner.write().insert(key, value)
    }

    /// Chainable insert; see [`LruCache::put`].
    ///
    /// ```
    /// use structkit::policy::lru::ConcurrentLruCache;
    ///
    /// let cache = ConcurrentLruCache::try_new(2).unwrap();
    /// cache.put("a", 1).put("b", 2).put("c", 3);
    /// assert_eq!(cache.keys(), vec!["c", "b"]);
    /// ```
    pub fn put(&self, key: K, value: V) -> &Self {
        let value = Arc::new(value);
        self.inner.write().put(key, value);
        self
    }

    /// Inserts, returning the entry evicted to make room.
    pub fn push(&self, key: K, value: V) -> Option<(K, Arc<V>)> {
        let value = Arc::new(value);
        self.inner.write().push(key, value)
    }

    /// Reads and promotes `key`. Takes the write lock.
    pub fn get(&self, key: &K) -> Option<Arc<V>> {
        self.inner.write().get(key).map(Arc::clone)
    }

    /// Reads without promoting. Takes the read lock.
    pub fn peek(&self, key: &K) -> Option<Arc<V>> {
        self.inner.read().peek(key).map(Arc::clone)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.inner.read().contains(key)
    }

    pub fn remove(&self, key: &K) -> Option<Arc<V>> {
        self.inner.write().remove(key)
    }

    pub fn delete(&self, key: &K) -> bool {
        self.inner.write().delete(key)
    }

    pub fn touch(&self, key: &K) -> bool {
        self.inner.write().touch(key)
    }

    pub fn pop_lru(&self) -> Option<(K, Arc<V>)> {
        self.inner.write().pop_lru()
    }

    pub fn peek_lru(&self) -> Option<(K, Arc<V>)> {
        self.inner
            .read()
            .peek_lru()
            .map(|(key, value)| (key.clone(), Arc::clone(value)))
    }

    pub fn peek_mru(&self) -> Option<(K, Arc<V>)> {
        self.inner
            .read()
            .peek_mru()
            .map(|(key, value)| (key.clone(), Arc::clone(value)))
    }

    pub fn recency_rank(&self, key: &K) -> Option<usize> {
        self.inner.read().recency_rank(key)
    }

    /// Atomically changes capacity; see [`LruCache::resize`].
    ///
    /// # Errors
    ///
    /// [`CacheError::InvalidArgument`] when `capacity` is zero.
    pub fn resize(&self, capacity: usize) -> Result<Vec<(K, Arc<V>)>, CacheError> {
        self.inner.write().resize(capacity)
    }

    pub fn clear(&self) {
        self.inner.write().clear();
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.inner.read().is_full()
    }

    pub fn capacity(&self) -> usize {
        self.inner.read().capacity()
    }

    /// Keys, most recent first, taken under one read lock.
    pub fn keys(&self) -> Vec<K> {
        self.inner.read().keys()
    }

    pub fn values(&self) -> Vec<Arc<V>> {
        self.inner.read().values()
    }

    pub fn entries(&self) -> Vec<(K, Arc<V>)> {
        self.inner.read().entries()
    }

    pub fn stats(&self) -> CacheStats {
        self.inner.read().stats()
    }

    pub fn to_plain_mapping(&self) -> HashMap<K, Arc<V>> {
        self.inner.read().to_plain_mapping()
    }

    #[cfg(feature = "serde")]
    pub fn to_json_string(&self) -> serde_json::Result<String>
    where
        K: serde::Serialize,
        V: serde::Serialize,
    {
        self.inner.read().to_json_string()
    }

    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        self.inner.read().check_invariants()
    }
}

#[cfg(all(feature = "metrics", feature = "concurrency"))]
impl<K, V> MetricsSnapshotProvider<LruMetricsSnapshot> for ConcurrentLruCache<K, V>
where
    K: Eq + Hash + Clone + Send + Sync,
    V: Send + Sync,
{
    fn snapshot(&self) -> LruMetricsSnapshot {
        self.inner.read().metrics_snapshot()
    }
}

#[cfg(feature = "concurrency")]
impl<K, V> ConcurrentCache for ConcurrentLruCache<K, V>
where
    K: Eq + Hash + Clone + Send + Sync,
    V: Send + Sync,
{
}
