//! Service catalog page handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::api::extractors::{CallerCredentials, RequestedPage};
use crate::domain::entities::{CategorySummary, Service};
use crate::state::AppState;

/// Previous/next navigation for a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    pub current: u64,
    pub total: u64,
    pub prev: Option<u64>,
    pub next: Option<u64>,
}

impl Pager {
    pub fn new(current: u64, total: u64) -> Self {
        Self {
            current,
            total,
            prev: (current > 1).then(|| (current - 1).min(total.max(1))),
            next: (current < total).then(|| current + 1),
        }
    }

    /// Whether there is anything to navigate to.
    pub fn is_visible(&self) -> bool {
        self.total > 1
    }
}

/// `templates/services.html`: the service grid.
#[derive(Template, WebTemplate)]
#[template(path = "services.html")]
pub struct ServicesTemplate {
    pub services: Vec<Service>,
    pub pager: Pager,
    pub error: Option<String>,
}

/// `templates/service_detail.html`: one service card.
#[derive(Template, WebTemplate)]
#[template(path = "service_detail.html")]
pub struct ServiceDetailTemplate {
    pub service: Option<Service>,
    pub error: Option<String>,
}

/// `templates/subcategory.html`: category header and its services.
#[derive(Template, WebTemplate)]
#[template(path = "subcategory.html")]
pub struct SubcategoryTemplate {
    pub subcategory_id: String,
    pub category: Option<CategorySummary>,
    pub services: Vec<Service>,
    pub pager: Pager,
    pub error: Option<String>,
}

fn status_for(error: &Option<String>) -> StatusCode {
    if error.is_some() {
        StatusCode::BAD_GATEWAY
    } else {
        StatusCode::OK
    }
}

/// Renders the paginated service grid.
///
/// # Endpoint
///
/// `GET /services?page=N`
///
/// Upstream failures render the error panel with `502 Bad Gateway`.
///
/// # Errors
///
/// Returns 400 Bad Request if `page` is not a number or is out of range.
pub async fn services_page_handler(
    State(state): State<AppState>,
    RequestedPage(page): RequestedPage,
    CallerCredentials(credentials): CallerCredentials,
) -> impl IntoResponse {
    let current = u64::from(page);

    let template = match state.catalog_service.list_services(page, &credentials).await {
        Ok(list) => ServicesTemplate {
            services: list.services,
            pager: Pager::new(current, list.total_pages),
            error: None,
        },
        Err(e) => ServicesTemplate {
            services: Vec::new(),
            pager: Pager::new(current, 0),
            error: Some(e.to_string()),
        },
    };

    (status_for(&template.error), template)
}

/// Renders a single service.
///
/// # Endpoint
///
/// `GET /services/{id}`
pub async fn service_detail_page_handler(
    State(state): State<AppState>,
    Path(service_id): Path<String>,
    CallerCredentials(credentials): CallerCredentials,
) -> impl IntoResponse {
    let template = match state
        .catalog_service
        .service_detail(&service_id, &credentials)
        .await
    {
        Ok(service) => ServiceDetailTemplate {
            service: Some(service),
            error: None,
        },
        Err(e) => ServiceDetailTemplate {
            service: None,
            error: Some(e.to_string()),
        },
    };

    (status_for(&template.error), template)
}

/// Renders the services of a subcategory under its category header.
///
/// # Endpoint
///
/// `GET /subcategories/{id}?page=N`
///
/// # Errors
///
/// Returns 400 Bad Request if `page` is not a number or is out of range.
pub async fn subcategory_page_handler(
    State(state): State<AppState>,
    Path(subcategory_id): Path<String>,
    RequestedPage(page): RequestedPage,
    CallerCredentials(credentials): CallerCredentials,
) -> impl IntoResponse {
    let template = match state
        .catalog_service
        .subcategory_services(&subcategory_id, page, &credentials)
        .await
    {
        Ok(listing) => SubcategoryTemplate {
            subcategory_id,
            category: listing.category,
            services: listing.services,
            pager: Pager::new(listing.current_page, listing.total_pages),
            error: None,
        },
        Err(e) => SubcategoryTemplate {
            subcategory_id,
            category: None,
            services: Vec::new(),
            pager: Pager::new(u64::from(page), 0),
            error: Some(e.to_string()),
        },
    };

    (status_for(&template.error), template)
}
