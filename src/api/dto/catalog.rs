//! Normalized response shape of the catalog endpoints.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::domain::entities::Service;
use crate::error::FetchError;

/// Uniform `{success, ...}` wrapper.
///
/// ```json
/// { "success": true, "services": [...], "total": 41, "perPage": 20, "totalPages": 3 }
/// { "success": false, "error": "Failed to fetch services" }
/// ```
///
/// The payload's fields are flattened next to `success`. A failure carries
/// only the message.
#[derive(Debug, Serialize)]
pub struct Outcome<T: Serialize> {
    pub success: bool,

    #[serde(flatten)]
    pub payload: Option<T>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> Outcome<T> {
    pub fn success(payload: T) -> Self {
        Self {
            success: true,
            payload: Some(payload),
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            payload: None,
            error: Some(message.into()),
        }
    }
}

impl<T: Serialize> From<Result<T, FetchError>> for Outcome<T> {
    fn from(result: Result<T, FetchError>) -> Self {
        match result {
            Ok(payload) => Outcome::success(payload),
            Err(e) => Outcome::failure(e.to_string()),
        }
    }
}

impl<T: Serialize> IntoResponse for Outcome<T> {
    fn into_response(self) -> Response {
        let status = if self.success {
            StatusCode::OK
        } else {
            StatusCode::BAD_GATEWAY
        };
        (status, Json(self)).into_response()
    }
}

/// Payload of the detail endpoint: `{ "service": {...} }`.
#[derive(Debug, Serialize)]
pub struct ServiceDetailPayload {
    pub service: Service,
}
