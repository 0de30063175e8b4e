#[cfg(not(target_arch = "wasm32"))]
pub use crate::config::load_config;
pub use crate::domain::config::ApiConfig;
#[cfg(feature = "server")]
pub use crate::server::{ApiState, Metrics, MetricsSnapshot, TraceId};
