use super::{TraceId, timestamp};
use axum::http::header;
use axum::{Json, response::IntoResponse};
use numerus_derive::{api_handler, api_model};
use numerus_domain::constants::SYSTEM_TAG;

#[api_model]
/// Health check response
struct HealthResponse {
    /// Always `healthy` while the process serves requests
    status: String,
    version: String,
    /// RFC 3339 time of the check
    timestamp: String,
    trace_id: String,
}

#[api_handler(
    get,
    path = "/health",
    responses((status = OK, description = "Healthcheck endpoint", body = HealthResponse)),
    tag = SYSTEM_TAG,
)]
pub(super) async fn health_handler(trace_id: TraceId) -> impl IntoResponse {
    tracing::info!(trace_id = %trace_id, "Health check accessed");

    let body = HealthResponse {
        status: "healthy".to_owned(),
        version: env!("CARGO_PKG_VERSION").to_owned(),
        timestamp: timestamp(),
        trace_id: trace_id.into_string(),
    };

    (
        [
            (header::CACHE_CONTROL, "no-store, no-cache, must-revalidate"),
            (header::PRAGMA, "no-cache"),
        ],
        Json(body),
    )
}
