//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::{CatalogService, PageService};
use crate::config::Config;
use crate::infrastructure::http::{
    ApiHeaders, HttpCatalogClient, HttpContentSource, build_client,
};
use crate::utils::upstream_url::parse_upstream_url;

pub type SitePageService = PageService<HttpContentSource>;
pub type SiteCatalogService = CatalogService<HttpCatalogClient>;

/// Immutable, cheaply clonable state. Holds no per-request data.
#[derive(Clone)]
pub struct AppState {
    pub page_service: Arc<SitePageService>,
    pub catalog_service: Arc<SiteCatalogService>,
}

impl AppState {
    pub fn new(page_service: Arc<SitePageService>, catalog_service: Arc<SiteCatalogService>) -> Self {
        Self {
            page_service,
            catalog_service,
        }
    }

    /// Wires the HTTP clients and services described by `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if `api_url` is not a valid upstream URL or the HTTP
    /// client cannot be built.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let client = build_client(config.http_timeout())?;
        let base_url = parse_upstream_url(&config.api_url)?;

        let content_source = Arc::new(HttpContentSource::new(client.clone()));
        let catalog_client = Arc::new(HttpCatalogClient::new(
            client,
            base_url,
            ApiHeaders::new(&config.zone_id, &config.locale, &config.guest_id),
        ));

        Ok(Self::new(
            Arc::new(PageService::new(
                content_source,
                config.page_sources.clone(),
            )),
            Arc::new(CatalogService::new(catalog_client)),
        ))
    }
}
