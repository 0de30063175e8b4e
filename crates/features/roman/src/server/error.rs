use crate::RomanError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use std::borrow::Cow;

/// Failures of `GET /romannumeral`, each with the plain-text body sent to the client.
#[numerus_derive::numerus_error]
pub enum ConversionError {
    #[error("Missing query parameter")]
    MissingQuery {},
    #[error("Invalid number format")]
    InvalidFormat { input: String },
    #[error("Number must be between 1 and 3999")]
    OutOfRange { value: i64 },
    #[error("Conversion failed{}: {source}", format_context(.context))]
    Conversion { source: RomanError, context: Option<Cow<'static, str>> },
}

impl ConversionError {
    /// Whether the failure is the caller's fault.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        !matches!(self, Self::Conversion { .. })
    }
}

impl IntoResponse for ConversionError {
    fn into_response(self) -> Response {
        if self.is_client_error() {
            (StatusCode::BAD_REQUEST, self.to_string()).into_response()
        } else {
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
        }
    }
}
