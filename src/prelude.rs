//! Common imports: `use structkit::prelude::*;`

pub use crate::builder::{CacheBuilder, CacheConfig};
pub use crate::ds::{BinarySearchTree, DirectedGraph, Edge};
pub use crate::error::CacheError;
#[cfg(feature = "concurrency")]
pub use crate::policy::lru::ConcurrentLruCache;
pub use crate::policy::lru::LruCache;
pub use crate::stats::CacheStats;
pub use crate::traits::{CoreCache, LruCacheTrait, MutableCache};
#[cfg(feature = "concurrency")]
pub use crate::traits::ConcurrentCache;
