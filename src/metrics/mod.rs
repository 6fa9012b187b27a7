//! Operation counters for [`LruCache`](crate::policy::lru::LruCache)
//! (feature `metrics`).

pub mod exporter;
pub mod metrics_impl;
pub mod snapshot;
pub mod traits;

pub use exporter::PrometheusTextExporter;
pub use metrics_impl::LruMetrics;
pub use snapshot::LruMetricsSnapshot;
pub use traits::{CoreMetricsRecorder, LruMetricsRecorder, MetricsExporter, MetricsSnapshotProvider};
