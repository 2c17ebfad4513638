//! Top-level router combining site and API routes.
//!
//! # Route Structure
//!
//! - `GET  /`                 - Redirect to the service catalog
//! - `GET  /{page}`           - About, contact, privacy and terms pages
//! - `GET  /fragments/{page}` - Page bodies scraped from the CMS
//! - `GET  /services*`, `/subcategories/{id}` - Catalog pages
//! - `/api/*`                 - Catalog JSON API
//! - `GET  /health`           - Liveness (public, not rate limited)
//! - `/static/*`              - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket on every route that reaches an upstream
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{rate_limit, tracing};
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Routes that call an upstream, without rate limiting.
pub fn upstream_routes() -> Router<AppState> {
    Router::new()
        .merge(web::routes::routes())
        .nest("/api", api::routes::routes())
}

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `behind_proxy` - when `true`, rate limiting reads client IP from
///   `X-Forwarded-For` / `X-Real-IP` headers instead of the peer socket address;
///   enable only when the service runs behind a trusted reverse proxy
pub fn app_router(state: AppState, behind_proxy: bool) -> NormalizePath<Router> {
    let limited = if behind_proxy {
        upstream_routes().layer(rate_limit::proxied_layer())
    } else {
        upstream_routes().layer(rate_limit::layer())
    };

    let router = Router::new()
        .route("/health", get(health_handler))
        .merge(limited)
        .nest_service("/static", ServeDir::new("static"))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
