//! HTTP building blocks shared by every server: application state, the injected
//! metrics collector, per-request trace ids, and the system endpoints.

mod fallback;
mod health;
mod info;
mod metrics;
pub mod router;
mod state;
mod trace;

pub use fallback::{NotFoundResponse, not_found};
pub use metrics::{Metrics, MetricsSnapshot};
pub use state::{ApiState, ApiStateBuilder, ApiStateError, ApiStateInner};
pub use trace::{TraceId, trace_requests};

use chrono::{SecondsFormat, Utc};

/// Current UTC time as an RFC 3339 string with millisecond precision.
#[must_use]
pub fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
