//! Site route configuration.

use crate::state::AppState;
use crate::web::handlers::{
    fragment_handler, home_handler, page_handler, service_detail_page_handler,
    services_page_handler, subcategory_page_handler,
};
use axum::{Router, routing::get};

/// Server-rendered pages.
///
/// # Endpoints
///
/// - `GET /` - Redirect to `/services`
/// - `GET /{page}` - Informational page shell (about, contact, privacy, terms)
/// - `GET /fragments/{page}` - Page body: content or error panel
/// - `GET /services` - Service grid
/// - `GET /services/{id}` - Service detail
/// - `GET /subcategories/{id}` - Services of a subcategory
///
/// Static segments take precedence over `/{page}`, so `/services` and
/// `/health` never reach the page handler.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home_handler))
        .route("/{page}", get(page_handler))
        .route("/fragments/{page}", get(fragment_handler))
        .route("/services", get(services_page_handler))
        .route("/services/{id}", get(service_detail_page_handler))
        .route("/subcategories/{id}", get(subcategory_page_handler))
}
