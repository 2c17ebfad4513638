//! HTTP implementation of [`ContentSource`].

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::ACCEPT;
use tracing::debug;

use crate::domain::repositories::ContentSource;
use crate::error::FetchError;

/// Fetches CMS documents over HTTP.
pub struct HttpContentSource {
    client: Client,
}

impl HttpContentSource {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ContentSource for HttpContentSource {
    async fn fetch_html(&self, url: &str) -> Result<String, FetchError> {
        debug!(url, "Fetching CMS document");

        let response = self
            .client
            .get(url)
            .header(ACCEPT, "text/html,application/xhtml+xml")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::PageStatus(status));
        }

        Ok(response.text().await?)
    }
}
