use super::TraceId;
use axum::Json;
use axum::http::{Method, StatusCode, Uri};
use numerus_derive::api_model;
use numerus_domain::constants::{HEALTH_PATH, METRICS_PATH, ROMAN_NUMERAL_PATH, ROOT_PATH};

#[api_model]
pub struct AvailableEndpoints {
    pub root: String,
    pub health: String,
    pub metrics: String,
    pub convert: String,
}

#[api_model]
/// Body returned for unmatched routes
pub struct NotFoundResponse {
    pub error: String,
    pub trace_id: String,
    pub available_endpoints: AvailableEndpoints,
}

/// Router fallback answering unmatched routes with a JSON endpoint listing.
pub async fn not_found(
    trace_id: TraceId,
    method: Method,
    uri: Uri,
) -> (StatusCode, Json<NotFoundResponse>) {
    tracing::info!(trace_id = %trace_id, %method, %uri, "Route not found");

    let body = NotFoundResponse {
        error: "Route not found".to_owned(),
        trace_id: trace_id.into_string(),
        available_endpoints: AvailableEndpoints {
            root: format!("GET {ROOT_PATH}"),
            health: format!("GET {HEALTH_PATH}"),
            metrics: format!("GET {METRICS_PATH}"),
            convert: format!("GET {ROMAN_NUMERAL_PATH}?query={{number}}"),
        },
    };

    (StatusCode::NOT_FOUND, Json(body))
}
