//! Error types shared across the application.
//!
//! - [`FetchError`] covers everything that can go wrong while talking to an
//!   upstream (CMS page or catalog API). It is caught per request and turned
//!   into a single user-facing message.
//! - [`AppError`] is the HTTP-facing error rendered as a JSON body.

use axum::{
    Json,
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;
use validator::ValidationErrors;

/// Failure of a single upstream fetch-parse sequence.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection, TLS or timeout failure.
    #[error("Failed to fetch: {0}")]
    Network(#[from] reqwest::Error),

    /// Catalog API answered with a non-2xx status.
    #[error("HTTP error! status: {}", .0.as_u16())]
    Status(reqwest::StatusCode),

    /// CMS page answered with a non-2xx status.
    #[error("Failed to fetch: {}", .0.canonical_reason().unwrap_or("Unknown Status"))]
    PageStatus(reqwest::StatusCode),

    /// The JSON envelope did not report success.
    #[error("{0}")]
    Envelope(String),

    /// The HTML document has no node matching any of the page selectors.
    #[error("{0}")]
    MissingNode(String),

    #[error("Invalid selector `{0}`")]
    Selector(String),

    /// A request header could not be built (e.g. a token with control characters).
    #[error("Invalid value for header `{0}`")]
    Header(&'static str),

    /// Body could not be decoded into the expected shape.
    #[error("Malformed response: {0}")]
    Decode(String),
}

impl FetchError {
    /// Short machine-readable kind, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Network(_) => "network",
            Self::Status(_) => "status",
            Self::PageStatus(_) => "page_status",
            Self::Envelope(_) => "envelope",
            Self::MissingNode(_) => "missing_node",
            Self::Selector(_) => "selector",
            Self::Header(_) => "header",
            Self::Decode(_) => "decode",
        }
    }
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: ErrorInfo,
}

#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug)]
pub enum AppError {
    Validation { message: String, details: Value },
    NotFound { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let details = serde_json::to_value(&errors).unwrap_or_else(|_| json!({}));
        AppError::bad_request("Invalid request parameters", details)
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::bad_request(
            "Invalid query string",
            json!({ "query": rejection.body_text() }),
        )
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match self {
            AppError::Validation { message, details } => (
                StatusCode::BAD_REQUEST,
                "validation_error",
                message,
                details,
            ),
            AppError::NotFound { message, details } => {
                (StatusCode::NOT_FOUND, "not_found", message, details)
            }
        };

        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}
