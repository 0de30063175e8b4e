use super::error::{ConversionError, ConversionErrorExt};
use crate::{MAX_VALUE, MIN_VALUE, convert};
use axum::Json;
use axum::extract::{Query, State};
use numerus_derive::{api_handler, api_model};
use numerus_domain::constants::CONVERSION_TAG;
use numerus_kernel::server::{Metrics, TraceId};
use std::time::Instant;

#[api_model(deny_unknown_fields = false)]
#[derive(utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
/// Conversion query string
pub struct ConvertQuery {
    /// Integer to convert; leading whitespace and trailing characters are ignored
    pub query: Option<String>,
}

impl ConvertQuery {
    /// Picks the first `query` value; later duplicates are ignored.
    #[must_use]
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let query = pairs.into_iter().find_map(|(key, value)| (key == "query").then_some(value));
        Self { query }
    }
}

#[api_model]
/// Successful conversion
pub struct ConvertResponse {
    /// The query exactly as received
    pub input: String,
    /// Roman numeral
    pub output: String,
    pub trace_id: String,
}

/// Reads a base-10 integer prefix the way lenient web clients do: leading
/// whitespace, an optional sign, then as many ASCII digits as are present.
///
/// Returns `None` when no digit follows. Long digit runs saturate.
pub(crate) fn parse_leading_integer(input: &str) -> Option<i64> {
    let rest = input.trim_start();
    let (negative, digits) = match rest.as_bytes().first() {
        Some(b'-') => (true, &rest[1..]),
        Some(b'+') => (false, &rest[1..]),
        _ => (false, rest),
    };

    let run = digits.bytes().take_while(u8::is_ascii_digit);
    let mut seen = false;
    let magnitude = run.fold(0_i64, |acc, digit| {
        seen = true;
        acc.saturating_mul(10).saturating_add(i64::from(digit - b'0'))
    });

    seen.then_some(if negative { -magnitude } else { magnitude })
}

/// Validates the raw `query` value into a convertible number.
///
/// # Errors
/// [`ConversionError::MissingQuery`] when absent or empty,
/// [`ConversionError::InvalidFormat`] when no integer prefix exists and
/// [`ConversionError::OutOfRange`] outside `1..=3999`.
pub fn parse_query(query: Option<&str>) -> Result<u16, ConversionError> {
    let input = query.filter(|q| !q.is_empty()).ok_or(ConversionError::MissingQuery {})?;

    let value = parse_leading_integer(input)
        .ok_or_else(|| ConversionError::InvalidFormat { input: input.to_owned() })?;

    u16::try_from(value)
        .ok()
        .filter(|number| (MIN_VALUE..=MAX_VALUE).contains(number))
        .ok_or(ConversionError::OutOfRange { value })
}

#[api_handler(
    get,
    path = "/romannumeral",
    params(ConvertQuery),
    responses(
        (status = OK, description = "Roman numeral for the query", body = ConvertResponse),
        (status = BAD_REQUEST, description = "Missing, malformed or out-of-range query", body = String, content_type = "text/plain"),
        (status = INTERNAL_SERVER_ERROR, description = "Unexpected conversion failure", body = String, content_type = "text/plain"),
    ),
    tag = CONVERSION_TAG,
)]
pub(super) async fn convert_handler(
    State(metrics): State<Metrics>,
    trace_id: TraceId,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<ConvertResponse>, ConversionError> {
    let params = ConvertQuery::from_pairs(pairs);
    let started = Instant::now();
    tracing::info!(trace_id = %trace_id, query = ?params.query, "Roman numeral conversion requested");

    let outcome = parse_query(params.query.as_deref()).and_then(|number| {
        convert(number).context("Validated input rejected by converter").map(|out| (number, out))
    });

    match outcome {
        Ok((number, output)) => {
            metrics.record_success();
            tracing::info!(
                trace_id = %trace_id,
                number,
                output = %output,
                elapsed_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX),
                "Conversion succeeded"
            );

            Ok(Json(ConvertResponse {
                input: params.query.unwrap_or_default(),
                output,
                trace_id: trace_id.into_string(),
            }))
        },
        Err(error) => {
            metrics.record_error();
            if error.is_client_error() {
                tracing::warn!(trace_id = %trace_id, error = ?error, "Conversion rejected: {error}");
            } else {
                tracing::error!(trace_id = %trace_id, error = ?error, "Conversion failed: {error}");
            }
            Err(error)
        },
    }
}
