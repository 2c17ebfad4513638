//! HTTP implementation of [`CatalogRepository`].

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use super::headers::ApiHeaders;
use crate::domain::entities::{Credentials, Envelope, ListingContent, Service};
use crate::domain::repositories::CatalogRepository;
use crate::error::FetchError;

/// Page size of the "all services" listing.
pub const SERVICES_PAGE_SIZE: u32 = 20;
/// Page size of a subcategory listing.
pub const SUBCATEGORY_PAGE_SIZE: u32 = 12;

/// Catalog API client.
///
/// Endpoints are resolved relative to `base_url`, so a base with a path
/// prefix (`https://host/backend`) works as expected.
pub struct HttpCatalogClient {
    client: Client,
    base_url: Url,
    headers: ApiHeaders,
}

impl HttpCatalogClient {
    pub fn new(client: Client, base_url: Url, headers: ApiHeaders) -> Self {
        Self {
            client,
            base_url,
            headers,
        }
    }

    /// Appends `segments` to the base URL path, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn get(
        &self,
        url: Url,
        query: &[(&str, u32)],
        credentials: &Credentials,
    ) -> Result<Response, FetchError> {
        debug!(%url, guest = credentials.is_guest(), "Calling catalog API");

        let response = self
            .client
            .get(url)
            .headers(self.headers.to_header_map(credentials)?)
            .query(query)
            .send()
            .await?;

        Ok(response)
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<Envelope<T>, FetchError> {
    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|e| FetchError::Decode(e.to_string()))
}

#[async_trait]
impl CatalogRepository for HttpCatalogClient {
    async fn list_services(
        &self,
        page: u32,
        credentials: &Credentials,
    ) -> Result<Envelope<ListingContent>, FetchError> {
        let url = self.endpoint(&["api", "v1", "customer", "service"]);
        let response = self
            .get(
                url,
                &[("limit", SERVICES_PAGE_SIZE), ("offset", page)],
                credentials,
            )
            .await?;

        decode(response).await
    }

    async fn service_detail(
        &self,
        service_id: &str,
        credentials: &Credentials,
    ) -> Result<Envelope<Service>, FetchError> {
        let url = self.endpoint(&["api", "v1", "customer", "service", "detail", service_id]);
        let response = self.get(url, &[], credentials).await?;

        decode(response).await
    }

    async fn subcategory_services(
        &self,
        subcategory_id: &str,
        page: u32,
        credentials: &Credentials,
    ) -> Result<Envelope<ListingContent>, FetchError> {
        let url = self.endpoint(&[
            "api",
            "v1",
            "customer",
            "service",
            "sub-category",
            subcategory_id,
        ]);
        let response = self
            .get(
                url,
                &[("limit", SUBCATEGORY_PAGE_SIZE), ("offset", page)],
                credentials,
            )
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        decode(response).await
    }
}
