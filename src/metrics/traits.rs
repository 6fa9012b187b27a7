//! # Metrics Traits
//!
//! Recording, snapshotting and exporting are kept apart so cache code only
//! ever bumps counters and never knows where they end up.
//!
//! ```text
//!   ┌─────────────────────┐
//!   │ CoreMetricsRecorder │  get / insert / evict / clear
//!   └──────────┬──────────┘
//!              ▼
//!   ┌─────────────────────┐
//!   │ LruMetricsRecorder  │  pop_lru / touch / remove / resize
//!   └─────────────────────┘
//!
//!   MetricsSnapshotProvider<S>  ──► S ──►  MetricsExporter<S>
//! ```

/// Counters shared by every cache.
pub trait CoreMetricsRecorder {
    fn record_get_hit(&mut self);
    fn record_get_miss(&mut self);
    fn record_insert_call(&mut self);
    fn record_insert_new(&mut self);
    fn record_insert_update(&mut self);
    fn record_evict_call(&mut self);
    fn record_evicted_entry(&mut self);
    fn record_clear(&mut self);
}

/// Recency-specific counters.
pub trait LruMetricsRecorder: CoreMetricsRecorder {
    fn record_pop_lru_call(&mut self);
    fn record_pop_lru_found(&mut self);
    fn record_touch_call(&mut self);
    fn record_touch_found(&mut self);
    fn record_remove_call(&mut self);
    fn record_remove_found(&mut self);
    fn record_resize(&mut self);
}

/// Produces a point-in-time copy of a cache's counters.
pub trait MetricsSnapshotProvider<S> {
    fn snapshot(&self) -> S;
}

/// Publishes a snapshot to a monitoring backend.
pub trait MetricsExporter<S> {
    fn export(&self, snapshot: &S);
}
