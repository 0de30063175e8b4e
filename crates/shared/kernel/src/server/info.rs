use super::TraceId;
use axum::Json;
use numerus_derive::{api_handler, api_model};
use numerus_domain::constants::{
    CLIENT_PATH, DOCS_PATH, HEALTH_PATH, METRICS_PATH, ROMAN_NUMERAL_PATH, SYSTEM_TAG,
};

const EXAMPLE_QUERIES: [u16; 3] = [1, 42, 1984];

#[api_model]
/// Endpoint directory
pub struct EndpointList {
    pub health: String,
    pub convert: String,
    pub metrics: String,
    pub docs: String,
    pub examples: Vec<String>,
}

#[api_model]
/// API information returned from the root path
pub struct InfoResponse {
    pub message: String,
    pub version: String,
    pub endpoints: EndpointList,
    /// Where the browser client is served
    pub frontend: String,
}

impl InfoResponse {
    fn current() -> Self {
        Self {
            message: "Roman Numeral Converter API".to_owned(),
            version: env!("CARGO_PKG_VERSION").to_owned(),
            endpoints: EndpointList {
                health: format!("GET {HEALTH_PATH}"),
                convert: format!("GET {ROMAN_NUMERAL_PATH}?query={{number}}"),
                metrics: format!("GET {METRICS_PATH}"),
                docs: format!("GET {DOCS_PATH}"),
                examples: EXAMPLE_QUERIES
                    .iter()
                    .map(|n| format!("GET {ROMAN_NUMERAL_PATH}?query={n}"))
                    .collect(),
            },
            frontend: format!("Open GET {CLIENT_PATH} in a browser for the web interface"),
        }
    }
}

#[api_handler(
    get,
    path = "/",
    responses((status = OK, description = "API information", body = InfoResponse)),
    tag = SYSTEM_TAG,
)]
pub(super) async fn info_handler(trace_id: TraceId) -> Json<InfoResponse> {
    tracing::info!(trace_id = %trace_id, "API info requested");
    Json(InfoResponse::current())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_convert_examples() {
        let info = InfoResponse::current();
        assert_eq!(info.endpoints.convert, "GET /romannumeral?query={number}");
        assert_eq!(info.endpoints.examples[1], "GET /romannumeral?query=42");
        assert_eq!(info.endpoints.examples.len(), 3);
    }
}
