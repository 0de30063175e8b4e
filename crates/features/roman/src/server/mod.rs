//! HTTP surface of the slice.
mod error;
mod handler;

pub use error::{ConversionError, ConversionErrorExt};
pub use handler::{ConvertQuery, ConvertResponse, parse_query};

use axum::extract::FromRef;
use numerus_kernel::server::Metrics;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

/// `GET /romannumeral`.
pub fn roman_router<S>() -> OpenApiRouter<S>
where
    S: Send + Sync + Clone + 'static,
    Metrics: FromRef<S>,
{
    OpenApiRouter::<S>::new().routes(routes!(handler::convert_handler))
}
