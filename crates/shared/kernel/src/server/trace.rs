use super::Metrics;
use crate::safe_nanoid;
use axum::extract::{FromRequestParts, Request, State};
use axum::http::HeaderValue;
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::Response;
use numerus_domain::constants::TRACE_ID_HEADER;
use std::convert::Infallible;
use std::fmt;
use std::time::Instant;

/// Per-request correlation id: `<unix millis>-<9 char nanoid>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TraceId(String);

impl TraceId {
    #[must_use]
    pub fn generate() -> Self {
        let millis = chrono::Utc::now().timestamp_millis();
        Self(format!("{millis}-{}", safe_nanoid!(9)))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Reads the id stored by [`trace_requests`], or mints one when the
/// middleware is not installed.
impl<S> FromRequestParts<S> for TraceId
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts.extensions.get::<Self>().cloned().unwrap_or_else(Self::generate))
    }
}

/// Assigns a trace id, counts the request and logs its start and completion.
pub async fn trace_requests(
    State(metrics): State<Metrics>,
    mut request: Request,
    next: Next,
) -> Response {
    let trace_id = TraceId::generate();
    let started = Instant::now();

    metrics.record_request();
    tracing::info!(
        trace_id = %trace_id,
        method = %request.method(),
        uri = %request.uri(),
        "Request started"
    );

    request.extensions_mut().insert(trace_id.clone());
    let mut response = next.run(request).await;

    let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    tracing::info!(
        trace_id = %trace_id,
        status = response.status().as_u16(),
        elapsed_ms,
        "Request completed"
    );

    if let Ok(value) = HeaderValue::from_str(trace_id.as_str()) {
        response.headers_mut().insert(TRACE_ID_HEADER, value);
    }

    response
}
