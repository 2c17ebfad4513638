//! Repository trait for the customer-service catalog API.

use crate::domain::entities::{Credentials, Envelope, ListingContent, Service};
use crate::error::FetchError;
use async_trait::async_trait;

/// Raw access to the catalog API.
///
/// Methods return the decoded envelope as-is; interpreting `response_code`
/// is left to [`crate::application::services::CatalogService`].
///
/// # Implementations
///
/// - [`crate::infrastructure::http::HttpCatalogClient`] - reqwest implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Lists all services, `limit=20`, `offset=page`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Network`] or [`FetchError::Decode`].
    async fn list_services(
        &self,
        page: u32,
        credentials: &Credentials,
    ) -> Result<Envelope<ListingContent>, FetchError>;

    /// Fetches a single service by id.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Network`] or [`FetchError::Decode`].
    async fn service_detail(
        &self,
        service_id: &str,
        credentials: &Credentials,
    ) -> Result<Envelope<Service>, FetchError>;

    /// Lists the services of a subcategory, `limit=12`, `offset=page`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Status`] on a non-2xx answer, otherwise
    /// [`FetchError::Network`] or [`FetchError::Decode`].
    async fn subcategory_services(
        &self,
        subcategory_id: &str,
        page: u32,
        credentials: &Credentials,
    ) -> Result<Envelope<ListingContent>, FetchError>;
}
