use super::{TraceId, timestamp};
use axum::Json;
use axum::extract::State;
use numerus_derive::{api_handler, api_model};
use numerus_domain::constants::SYSTEM_TAG;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

/// Request counters owned by the application state.
///
/// Clones share the same counters; separately constructed collectors never do.
/// Updates use relaxed ordering: the numbers are telemetry, not synchronization.
#[derive(Debug, Clone, Default)]
pub struct Metrics {
    inner: Arc<Counters>,
}

#[derive(Debug)]
struct Counters {
    started: Instant,
    total_requests: AtomicU64,
    successful_conversions: AtomicU64,
    error_count: AtomicU64,
}

impl Default for Counters {
    fn default() -> Self {
        Self {
            started: Instant::now(),
            total_requests: AtomicU64::new(0),
            successful_conversions: AtomicU64::new(0),
            error_count: AtomicU64::new(0),
        }
    }
}

/// Point-in-time copy of the counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub uptime_secs: u64,
    pub total_requests: u64,
    pub successful_conversions: u64,
    pub error_count: u64,
}

impl Metrics {
    pub fn record_request(&self) {
        self.inner.total_requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_success(&self) {
        self.inner.successful_conversions.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_error(&self) {
        self.inner.error_count.fetch_add(1, Ordering::Relaxed);
    }

    #[must_use]
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            uptime_secs: self.inner.started.elapsed().as_secs(),
            total_requests: self.inner.total_requests.load(Ordering::Relaxed),
            successful_conversions: self.inner.successful_conversions.load(Ordering::Relaxed),
            error_count: self.inner.error_count.load(Ordering::Relaxed),
        }
    }
}

#[api_model]
/// Counters exposed by the metrics endpoint
pub struct MetricsResponse {
    /// Seconds since the server state was created
    pub uptime: u64,
    pub total_requests: u64,
    pub successful_conversions: u64,
    pub error_count: u64,
    pub timestamp: String,
    pub trace_id: String,
}

#[api_handler(
    get,
    path = "/metrics",
    responses((status = OK, description = "Request counters", body = MetricsResponse)),
    tag = SYSTEM_TAG,
)]
pub(super) async fn metrics_handler(
    State(metrics): State<Metrics>,
    trace_id: TraceId,
) -> Json<MetricsResponse> {
    tracing::info!(trace_id = %trace_id, "Metrics requested");

    let snapshot = metrics.snapshot();
    Json(MetricsResponse {
        uptime: snapshot.uptime_secs,
        total_requests: snapshot.total_requests,
        successful_conversions: snapshot.successful_conversions,
        error_count: snapshot.error_count,
        timestamp: timestamp(),
        trace_id: trace_id.into_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_start_at_zero() {
        let snapshot = Metrics::default().snapshot();
        assert_eq!(snapshot.total_requests, 0);
        assert_eq!(snapshot.successful_conversions, 0);
        assert_eq!(snapshot.error_count, 0);
    }

    #[test]
    fn clones_share_counters() {
        let metrics = Metrics::default();
        let clone = metrics.clone();

        clone.record_request();
        clone.record_error();
        metrics.record_success();

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.total_requests, 1);
        assert_eq!(snapshot.successful_conversions, 1);
        assert_eq!(snapshot.error_count, 1);
        assert_eq!(clone.snapshot().successful_conversions, 1);
    }

    #[test]
    fn independent_collectors_do_not_leak() {
        let first = Metrics::default();
        let second = Metrics::default();

        first.record_request();
        first.record_request();

        assert_eq!(first.snapshot().total_requests, 2);
        assert_eq!(second.snapshot().total_requests, 0);
    }

    #[test]
    fn concurrent_updates_are_counted() {
        let metrics = Metrics::default();

        std::thread::scope(|scope| {
            for _ in 0..4 {
                let metrics = metrics.clone();
                scope.spawn(move || {
                    for _ in 0..250 {
                        metrics.record_request();
                    }
                });
            }
        });

        assert_eq!(metrics.snapshot().total_requests, 1000);
    }
}
