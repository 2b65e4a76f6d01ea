//! # Metrics Traits
//!
//! Recording, snapshotting and exporting are separate concerns so policy code
//! only ever writes counters.
//!
//! ```text
//!   Cache ──records──► CoreMetricsRecorder (CacheMetrics)
//!     │
//!     └──snapshot()──► MetricsSnapshotProvider<CacheMetricsSnapshot>
//!                              │
//!                              ▼
//!                      MetricsExporter<CacheMetricsSnapshot>
//!                      (e.g. PrometheusTextExporter)
//! ```

/// Counters shared by every policy.
pub trait CoreMetricsRecorder {
    fn record_get_hit(&mut self);
    fn record_get_miss(&mut self);
    fn record_insert_call(&mut self);
    fn record_insert_new(&mut self);
    fn record_insert_update(&mut self);
    /// A `put` that carried an absent key or value and was ignored.
    fn record_null_put(&mut self);
    fn record_evicted_entry(&mut self);
    fn record_clear(&mut self);
}

/// Produce a point-in-time snapshot for tests, benches or exporters.
pub trait MetricsSnapshotProvider<S> {
    fn snapshot(&self) -> S;
}

/// Publish snapshots to a monitoring system.
pub trait MetricsExporter<S> {
    fn export(&self, snapshot: &S);
}
