//! Error types for the structkit library.
//!
//! ## Key Components
//!
//! - [`CacheError`]: Returned when caller-supplied parameters are invalid
//!   (e.g. zero capacity at construction or resize).
//! - [`InvariantError`]: Returned when internal data-structure invariants are
//!   violated (`check_invariants` methods).
//!
//! ## Example Usage
//!
//! ```
//! use structkit::error::CacheError;
//! use structkit::policy::lru::LruCache;
//!
//! // Fallible constructor for user-configurable capacity
//! let cache: Result<LruCache<String, i32>, CacheError> = LruCache::try_new(100);
//! assert!(cache.is_ok());
//!
//! // Zero capacity is caught without panicking
//! let bad = LruCache::<String, i32>::try_new(0);
//! assert!(matches!(bad, Err(CacheError::InvalidArgument(_))));
//! ```

use std::fmt;

// ---------------------------------------------------------------------------
// CacheError
// ---------------------------------------------------------------------------

/// Error returned when a caller passes an invalid argument.
///
/// Produced synchronously by [`LruCache::try_new`](crate::policy::lru::LruCache::try_new),
/// [`LruCache::resize`](crate::policy::lru::LruCache::resize) and
/// [`CacheBuilder::build`](crate::builder::CacheBuilder::build). A failing call
/// never mutates cache state.
///
/// # Example
///
/// ```
/// use structkit::policy::lru::LruCache;
///
/// let err = LruCache::<u64, u64>::try_new(0).unwrap_err();
/// assert!(err.to_string().contains("capacity"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum CacheError {
    /// A parameter was outside its valid range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl CacheError {
    pub(crate) fn zero_capacity() -> Self {
        Self::InvalidArgument("capacity must be greater than zero".to_string())
    }
}

// ---------------------------------------------------------------------------
// InvariantError
// ---------------------------------------------------------------------------

/// Error returned when internal invariants are violated.
///
/// Produced by `check_invariants` methods (e.g.
/// [`LruCache::check_invariants`](crate::policy::lru::LruCache::check_invariants)).
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
