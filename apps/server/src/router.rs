use axum::Router;
use axum::middleware::from_fn_with_state;
use axum::response::Html;
use axum::routing::get;
use numerus::domain::constants::{CLIENT_PATH, DOCS_PATH};
use numerus::kernel::prelude::ApiState;
use numerus::kernel::server::{not_found, trace_requests};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_scalar::{Scalar, Servable};

const CLIENT_PAGE: &str = include_str!("../assets/index.html");

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Roman Numeral Converter API",
        description = "Converts integers between 1 and 3999 to Roman numerals."
    ),
    tags(
        (name = "System", description = "Service information, health and metrics"),
        (name = "Conversion", description = "Integer to Roman numeral conversion"),
    )
)]
struct ApiDoc;

async fn client_page() -> Html<&'static str> {
    Html(CLIENT_PAGE)
}

#[allow(unreachable_pub)]
pub fn init(state: ApiState) -> Router {
    let metrics = state.metrics.clone();

    // Separate the OpenAPI routes and the API documentation object
    let (openapi_routes, api_doc) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(numerus::server::router::api_router())
        .with_state(state)
        .split_for_parts();

    let scalar_routes = Scalar::with_url(DOCS_PATH, api_doc);

    Router::new()
        .merge(openapi_routes)
        .merge(scalar_routes)
        .route(CLIENT_PATH, get(client_page))
        .fallback(not_found)
        .method_not_allowed_fallback(not_found)
        .layer(from_fn_with_state(metrics, trace_requests))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
