//! Occupancy summary returned by [`LruCache::stats`](crate::policy::lru::LruCache::stats).

use std::fmt;

/// Point-in-time occupancy of a cache.
///
/// ```
/// use structkit::stats::CacheStats;
///
/// let stats = CacheStats::new(2, 3);
/// assert_eq!(stats.utilization_percent, 66.67);
/// assert_eq!(stats.to_string(), "2/3 entries (66.67%)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CacheStats {
    pub size: usize,
    pub capacity: usize,
    /// `size / capacity * 100`, rounded to two decimal places.
    pub utilization_percent: f64,
    pub is_empty: bool,
    pub is_full: bool,
}

impl CacheStats {
    pub fn new(size: usize, capacity: usize) -> Self {
        let utilization_percent = if capacity == 0 {
            0.0
        } else {
            (size as f64 / capacity as f64 * 10_000.0).round() / 100.0
        };
        Self {
            size,
            capacity,
            utilization_percent,
            is_empty: size == 0,
            is_full: size >= capacity,
        }
    }

    /// Utilization formatted with two decimals and a percent sign, e.g. `"66.67%"`.
    pub fn utilization_label(&self) -> String {
        format!("{:.2}%", self.utilization_percent)
    }
}

impl fmt::Display for CacheStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} entries ({:.2}%)",
            self.size, self.capacity, self.utilization_percent
        )
    }
}
