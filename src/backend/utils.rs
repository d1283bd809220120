use serde::Deserialize;
use tracing::error;

use crate::error::SketchCodeError;

/// Fallback used when an error-shaped response carries no message field.
pub(crate) const GENERIC_ERROR_MESSAGE: &str = "Unknown error";

/// Convert a reqwest error to a SketchCodeError, handling timeout errors specially.
pub(crate) fn handle_http_error(e: reqwest::Error) -> SketchCodeError {
    error!(error = %e, "HTTP request to inference endpoint failed");
    if e.is_timeout() {
        SketchCodeError::Timeout
    } else {
        SketchCodeError::HttpError(e)
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    error: Option<ErrorBody>,
}

/// Extract the human-readable message from an error-shaped response body.
///
/// Falls back to [`GENERIC_ERROR_MESSAGE`] when the body is not JSON, is not
/// error-shaped, or the error object carries no message field.
pub(crate) fn service_error_message(body: &str) -> String {
    serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .and_then(|response| response.error)
        .and_then(|error| error.message)
        .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string())
}
