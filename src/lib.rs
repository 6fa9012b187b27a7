//! structkit: a bounded LRU cache plus the arena-backed structures it is
//! built from, and two general-purpose containers (binary search tree and
//! directed graph).
//!
//! ## Modules
//!
//! | Module      | Contents                                               |
//! |-------------|--------------------------------------------------------|
//! | [`policy`]  | `LruCache`, `ConcurrentLruCache` (feature `concurrency`) |
//! | [`ds`]      | `SlotArena`, `IntrusiveList`, `BinarySearchTree`, `DirectedGraph` |
//! | [`builder`] | `CacheConfig`, `CacheBuilder`                          |
//! | [`traits`]  | `CoreCache`, `MutableCache`, `LruCacheTrait`           |
//! | [`stats`]   | `CacheStats`                                           |
//! | [`error`]   | `CacheError`, `InvariantError`                         |
//! | `metrics`   | operation counters and Prometheus export (feature `metrics`) |
//!
//! ## Example
//!
//! ```
//! use structkit::prelude::*;
//!
//! let mut cache = LruCache::try_new(2)?;
//! cache.put("a", 1).put("b", 2).put("c", 3);
//! assert_eq!(cache.keys(), vec!["c", "b"]);
//!
//! let mut tree: BinarySearchTree<i32> = [5, 3, 8].into_iter().collect();
//! tree.insert(4);
//! assert_eq!(tree.in_order(), vec![&3, &4, &5, &8]);
//!
//! let mut graph = DirectedGraph::new();
//! graph.add_edge('a', 'b').add_edge('b', 'c');
//! assert_eq!(graph.topological_sort(), Some(vec![&'a', &'b', &'c']));
//! # Ok::<(), CacheError>(())
//! ```
//!
//! Events are emitted through `tracing` (`trace` on eviction, `debug` on
//! resize and clear); install a subscriber to see them.

#![forbid(unsafe_code)]

pub mod builder;
pub mod ds;
pub mod error;
#[cfg(feature = "metrics")]
pub mod metrics;
pub mod policy;
pub mod prelude;
pub mod stats;
pub mod traits;

pub use crate::builder::{CacheBuilder, CacheConfig, DEFAULT_CAPACITY};
pub use crate::ds::{BinarySearchTree, DirectedGraph, Edge, IntrusiveList, SlotArena, SlotId};
pub use crate::error::{CacheError, InvariantError};
#[cfg(feature = "concurrency")]
pub use crate::policy::lru::ConcurrentLruCache;
pub use crate::policy::lru::LruCache;
pub use crate::stats::CacheStats;
