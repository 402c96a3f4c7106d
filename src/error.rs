//! Error types for the gateway
//!
//! Request-level failures are all "not configured" or "not found"; each
//! variant renders as a plain-text response with a fixed message.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Application-level error types
#[derive(Debug, Error)]
pub enum AppError {
    /// No model identifier was supplied or discovered at startup
    #[error("MODEL_ID not configured.")]
    ModelNotConfigured,

    /// The model directory has neither `index.modified.html` nor `index.html`
    #[error("index.html not found for model.")]
    IndexNotFound,

    /// The helper script is missing from the root directory
    #[error("JSNetProxy.js not found")]
    ProxyScriptNotFound,

    /// No route, stub document, or static asset matched the request
    #[error("File not found")]
    NotFound,

    /// A JSON request body did not parse as an object or array
    #[error("Invalid JSON body")]
    MalformedJson,

    /// The request body exceeded `http.max_body_bytes`
    #[error("Payload too large")]
    PayloadTooLarge,

    /// Settings could not be loaded or failed validation
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl AppError {
    /// HTTP status this error maps to
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::ModelNotConfigured | AppError::MalformedJson => StatusCode::BAD_REQUEST,
            AppError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::IndexNotFound | AppError::ProxyScriptNotFound | AppError::NotFound => {
                StatusCode::NOT_FOUND
            }
            AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            AppError::Config(e) => {
                tracing::error!(error = %e, "Configuration error surfaced in a request");
                "Internal server error".to_string()
            }
            _ => self.to_string(),
        };

        (status, body).into_response()
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, AppError>;
