//! Handlers for the catalog endpoints.

use axum::extract::{Path, State};

use crate::api::dto::catalog::{Outcome, ServiceDetailPayload};
use crate::api::extractors::{CallerCredentials, RequestedPage};
use crate::domain::entities::{ServiceList, SubcategoryServices};
use crate::state::AppState;

/// Lists all services.
///
/// # Endpoint
///
/// `GET /api/services?page=N`
///
/// # Response
///
/// ```json
/// { "success": true, "services": [...], "total": 41, "perPage": 20, "totalPages": 3 }
/// ```
///
/// Upstream failures answer `502` with `{ "success": false, "error": "..." }`.
///
/// # Errors
///
/// Returns 400 Bad Request if `page` is not a number or is out of range.
pub async fn list_services_handler(
    State(state): State<AppState>,
    RequestedPage(page): RequestedPage,
    CallerCredentials(credentials): CallerCredentials,
) -> Outcome<ServiceList> {
    state
        .catalog_service
        .list_services(page, &credentials)
        .await
        .into()
}

/// Returns a single service.
///
/// # Endpoint
///
/// `GET /api/services/{id}`
///
/// # Response
///
/// ```json
/// { "success": true, "service": { "id": "...", "name": "..." } }
/// ```
pub async fn service_detail_handler(
    State(state): State<AppState>,
    Path(service_id): Path<String>,
    CallerCredentials(credentials): CallerCredentials,
) -> Outcome<ServiceDetailPayload> {
    state
        .catalog_service
        .service_detail(&service_id, &credentials)
        .await
        .map(|service| ServiceDetailPayload { service })
        .into()
}

/// Lists the services of a subcategory.
///
/// # Endpoint
///
/// `GET /api/subcategories/{id}/services?page=N`
///
/// # Response
///
/// ```json
/// {
///   "success": true,
///   "services": [...],
///   "currentPage": 1,
///   "totalPages": 2,
///   "total": 13,
///   "category": { "id": "...", "name": "Cleaning", "image_full_path": "...", "description": "Cleaning Services" }
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if `page` is not a number or is out of range.
pub async fn subcategory_services_handler(
    State(state): State<AppState>,
    Path(subcategory_id): Path<String>,
    RequestedPage(page): RequestedPage,
    CallerCredentials(credentials): CallerCredentials,
) -> Outcome<SubcategoryServices> {
    state
        .catalog_service
        .subcategory_services(&subcategory_id, page, &credentials)
        .await
        .into()
}
