//! API route configuration.
//!
//! Routes are public; callers may pass `Authorization: Bearer <token>`,
//! which is forwarded to the catalog API (see
//! [`crate::api::extractors::CallerCredentials`]).

use crate::api::handlers::{
    list_services_handler, service_detail_handler, subcategory_services_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Catalog JSON routes, nested under `/api`.
///
/// # Endpoints
///
/// - `GET /services` - All services, paginated
/// - `GET /services/{id}` - Service detail
/// - `GET /subcategories/{id}/services` - Services of a subcategory, paginated
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/services", get(list_services_handler))
        .route("/services/{id}", get(service_detail_handler))
        .route(
            "/subcategories/{id}/services",
            get(subcategory_services_handler),
        )
}
