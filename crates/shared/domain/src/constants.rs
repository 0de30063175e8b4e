//! Route paths and `OpenAPI` tags shared by every slice.

pub const SYSTEM_TAG: &str = "System";
pub const CONVERSION_TAG: &str = "Conversion";

pub const ROOT_PATH: &str = "/";
pub const HEALTH_PATH: &str = "/health";
pub const METRICS_PATH: &str = "/metrics";
pub const ROMAN_NUMERAL_PATH: &str = "/romannumeral";
pub const DOCS_PATH: &str = "/docs";
pub const CLIENT_PATH: &str = "/app";

/// Response header carrying the per-request correlation identifier.
pub const TRACE_ID_HEADER: &str = "x-trace-id";

pub const DEFAULT_PORT: u16 = 8080;
