use crate::metrics::metrics_impl::LruMetrics;

/// Counters plus gauges for one [`LruCache`](crate::policy::lru::LruCache).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LruMetricsSnapshot {
    pub get_calls: u64,
    pub get_hits: u64,
    pub get_misses: u64,
    pub insert_calls: u64,
    pub insert_updates: u64,
    pub insert_new: u64,
    pub evict_calls: u64,
    pub evicted_entries: u64,
    pub clear_calls: u64,
    pub pop_lru_calls: u64,
    pub pop_lru_found: u64,
    pub touch_calls: u64,
    pub touch_found: u64,
    pub remove_calls: u64,
    pub remove_found: u64,
    pub resize_calls: u64,
    pub cache_len: usize,
    pub capacity: usize,
}

impl LruMetricsSnapshot {
    pub(crate) fn from_counters(metrics: &LruMetrics, cache_len: usize, capacity: usize) -> Self {
        Self {
            get_calls: metrics.get_calls,
            get_hits: metrics.get_hits,
            get_misses: metrics.get_misses,
            insert_calls: metrics.insert_calls,
            insert_updates: metrics.insert_updates,
            insert_new: metrics.insert_new,
            evict_calls: metrics.evict_calls,
            evicted_entries: metrics.evicted_entries,
            clear_calls: metrics.clear_calls,
            pop_lru_calls: metrics.pop_lru_calls,
            pop_lru_found: metrics.pop_lru_found,
            touch_calls: metrics.touch_calls,
            touch_found: metrics.touch_found,
            remove_calls: metrics.remove_calls,
            remove_found: metrics.remove_found,
            resize_calls: metrics.resize_calls,
            cache_len,
            capacity,
        }
    }

    /// Fraction of `get` calls that hit, or `0.0` before the first call.
    pub fn hit_ratio(&self) -> f64 {
        if self.get_calls == 0 {
            0.0
        } else {
            self.get_hits as f64 / self.get_calls as f64
        }
    }

    /// Monotonic counters as `(name, value)` pairs, in export order.
    pub fn counters(&self) -> [(&'static str, u64); 16] {
        [
            ("get_calls_total", self.get_calls),
            ("get_hits_total", self.get_hits),
            ("get_misses_total", self.get_misses),
            ("insert_calls_total", self.insert_calls),
            ("insert_updates_total", self.insert_updates),
            ("insert_new_total", self.insert_new),
            ("evict_calls_total", self.evict_calls),
            ("evicted_entries_total", self.evicted_entries),
            ("clear_calls_total", self.clear_calls),
            ("pop_lru_calls_total", self.pop_lru_calls),
            ("pop_lru_found_total", self.pop_lru_found),
            ("touch_calls_total", self.touch_calls),
            ("touch_found_total", self.touch_found),
            ("remove_calls_total", self.remove_calls),
            ("remove_found_total", self.remove_found),
            ("resize_calls_total", self.resize_calls),
        ]
    }

    /// Point-in-time gauges as `(name, value)` pairs.
    pub fn gauges(&self) -> [(&'static str, u64); 2] {
        [
            ("cache_len", self.cache_len as u64),
            ("capacity", self.capacity as u64),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_ratio_handles_zero_calls() {
        assert_eq!(LruMetricsSnapshot::default().hit_ratio(), 0.0);
        let snap = LruMetricsSnapshot {
            get_calls: 4,
            get_hits: 1,
            ..Default::default()
        };
        assert_eq!(snap.hit_ratio(), 0.25);
    }

    #[test]
    fn from_counters_copies_gauges() {
        let mut metrics = LruMetrics::default();
        metrics.insert_calls = 5;
        let snap = LruMetricsSnapshot::from_counters(&metrics, 3, 8);
        assert_eq!(snap.insert_calls, 5);
        assert_eq!(snap.gauges(), [("cache_len", 3), ("capacity", 8)]);
    }
}
