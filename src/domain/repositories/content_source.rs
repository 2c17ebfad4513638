//! Source of raw CMS documents.

use crate::error::FetchError;
use async_trait::async_trait;

/// Fetches an HTML document by URL.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::HttpContentSource`] - reqwest implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Performs a single GET and returns the response body as text.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Network`] on transport failure and
    /// [`FetchError::PageStatus`] when the upstream answers with a non-2xx status.
    async fn fetch_html(&self, url: &str) -> Result<String, FetchError>;
}
