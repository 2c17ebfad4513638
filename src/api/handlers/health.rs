//! Handler for health check endpoint.

use axum::{Json, extract::State};

use crate::api::dto::health::{HealthResponse, UpstreamInfo};
use crate::state::AppState;
use crate::utils::upstream_url::display_host;

/// Returns liveness status and the upstream hosts pages are scraped from.
///
/// Does not call any upstream: the site has no dependency whose outage makes
/// the process itself unhealthy.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "upstreams": [
///     { "name": "about", "host": "admin.workwaale.in" }
///   ]
/// }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let upstreams = state
        .page_service
        .sources()
        .iter()
        .map(|(page, url)| UpstreamInfo {
            name: page.slug().to_string(),
            host: display_host(url),
        })
        .collect();

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        upstreams,
    })
}
