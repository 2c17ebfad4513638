//! Catalog listing/detail service.

use std::sync::Arc;

use crate::domain::entities::{
    CategorySummary, Credentials, Service, ServiceList, SubcategoryServices, total_pages,
};
use crate::domain::repositories::CatalogRepository;
use crate::error::FetchError;

const LIST_FAILED: &str = "Failed to fetch services";
const DETAIL_FAILED: &str = "Failed to fetch service details";

/// Normalizes catalog API envelopes into typed results.
///
/// One GET per call. No pagination caching, retry, or request
/// deduplication.
pub struct CatalogService<R: CatalogRepository> {
    repository: Arc<R>,
}

impl<R: CatalogRepository> CatalogService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists all services on `page` (1-based, passed through as `offset`).
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Envelope`] (`Failed to fetch services`) unless the
    /// envelope reports success and carries `content.data`; transport and
    /// decode errors are passed through.
    pub async fn list_services(
        &self,
        page: u32,
        credentials: &Credentials,
    ) -> Result<ServiceList, FetchError> {
        let content = self
            .repository
            .list_services(page, credentials)
            .await
            .and_then(|envelope| envelope.into_content(LIST_FAILED))
            .inspect_err(|e| log_failure("services", e))?;

        let services = content
            .data
            .ok_or_else(|| FetchError::Envelope(LIST_FAILED.to_string()))
            .inspect_err(|e| log_failure("services", e))?;

        Ok(ServiceList {
            services,
            total: content.total,
            per_page: content.per_page,
            total_pages: total_pages(content.total, content.per_page),
        })
    }

    /// Fetches a single service.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Envelope`] (`Failed to fetch service details`)
    /// unless the envelope reports success and carries content.
    pub async fn service_detail(
        &self,
        service_id: &str,
        credentials: &Credentials,
    ) -> Result<Service, FetchError> {
        self.repository
            .service_detail(service_id, credentials)
            .await
            .and_then(|envelope| envelope.into_content(DETAIL_FAILED))
            .inspect_err(|e| log_failure("service details", e))
    }

    /// Lists the services of a subcategory on `page`.
    ///
    /// The category header is derived from the first service on the page.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Status`] on a non-2xx answer, and
    /// [`FetchError::Envelope`] carrying the API's own `message` (or
    /// `Failed to fetch services`) when the envelope does not report success
    /// or carries no `content.data`.
    pub async fn subcategory_services(
        &self,
        subcategory_id: &str,
        page: u32,
        credentials: &Credentials,
    ) -> Result<SubcategoryServices, FetchError> {
        self.fetch_subcategory(subcategory_id, page, credentials)
            .await
            .inspect_err(|e| log_failure("subcategory services", e))
    }

    async fn fetch_subcategory(
        &self,
        subcategory_id: &str,
        page: u32,
        credentials: &Credentials,
    ) -> Result<SubcategoryServices, FetchError> {
        let envelope = self
            .repository
            .subcategory_services(subcategory_id, page, credentials)
            .await?;

        let fallback = envelope
            .message
            .clone()
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| LIST_FAILED.to_string());
        let content = envelope.into_content(&fallback)?;

        let services = content.data.ok_or(FetchError::Envelope(fallback))?;
        let category = CategorySummary::from_services(&services);

        Ok(SubcategoryServices {
            current_page: content.current_page.unwrap_or(u64::from(page)),
            total_pages: content
                .last_page
                .unwrap_or_else(|| total_pages(content.total, content.per_page)),
            total: content.total,
            category,
            services,
        })
    }
}

fn log_failure(what: &str, e: &FetchError) {
    tracing::warn!(kind = e.kind(), error = %e, "Error fetching {what}");
}
