//! Request body middleware
//!
//! JSON bodies are parsed up front for every route, whatever the handler
//! does with them: a malformed body is a 400 before routing.

use crate::error::AppError;
use axum::{
    body::{to_bytes, Body},
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::debug;

/// Buffer and validate `application/json` bodies up to `max_body_bytes`.
///
/// Only objects and arrays are accepted at the top level. An empty body is
/// passed through untouched; other content types are not inspected.
pub async fn json_body(
    State(max_body_bytes): State<usize>,
    request: Request,
    next: Next,
) -> Response {
    if !is_json(request.headers()) {
        return next.run(request).await;
    }

    let (parts, body) = request.into_parts();
    let bytes = match to_bytes(body, max_body_bytes).await {
        Ok(bytes) => bytes,
        Err(e) => {
            debug!(error = %e, limit = max_body_bytes, "Failed to buffer JSON body");
            return AppError::PayloadTooLarge.into_response();
        }
    };

    if !bytes.is_empty() {
        if let Err(e) = validate_json(&bytes) {
            debug!(error = %e, uri = %parts.uri, "Rejected malformed JSON body");
            return e.into_response();
        }
    }

    next.run(Request::from_parts(parts, Body::from(bytes))).await
}

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map_or(false, |mime| mime.trim().eq_ignore_ascii_case("application/json"))
}

fn validate_json(bytes: &[u8]) -> Result<(), AppError> {
    match serde_json::from_slice::<serde_json::Value>(bytes) {
        Ok(serde_json::Value::Object(_)) | Ok(serde_json::Value::Array(_)) => Ok(()),
        _ => Err(AppError::MalformedJson),
    }
}
