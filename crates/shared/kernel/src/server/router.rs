use super::{Metrics, health, info, metrics};
use axum::extract::FromRef;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

/// Root information, health and metrics endpoints.
pub fn system_router<S>() -> OpenApiRouter<S>
where
    S: Send + Sync + Clone + 'static,
    Metrics: FromRef<S>,
{
    OpenApiRouter::<S>::new()
        .routes(routes!(info::info_handler))
        .routes(routes!(health::health_handler))
        .routes(routes!(metrics::metrics_handler))
}
