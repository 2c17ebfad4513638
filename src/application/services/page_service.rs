//! Remote-fragment page service.

use std::sync::Arc;

use crate::domain::entities::{Fragment, Page, PageSources, PageState};
use crate::domain::repositories::ContentSource;
use crate::error::FetchError;
use crate::utils::fragment::extract_fragment;

/// Loads the body of a CMS-backed page.
///
/// Each load is a single attempt: fetch the page's source document, parse
/// it, and serialize the first node matching the page's selectors. Nothing
/// is cached; every call replaces the previous content wholesale.
pub struct PageService<S: ContentSource> {
    source: Arc<S>,
    sources: PageSources,
}

impl<S: ContentSource> PageService<S> {
    pub fn new(source: Arc<S>, sources: PageSources) -> Self {
        Self { source, sources }
    }

    pub fn sources(&self) -> &PageSources {
        &self.sources
    }

    /// Fetches and extracts the fragment for `page`.
    ///
    /// # Errors
    ///
    /// - [`FetchError::Network`] / [`FetchError::PageStatus`] from the fetch
    /// - [`FetchError::MissingNode`] with the page's message when no selector matches
    /// - [`FetchError::Selector`] if a selector does not parse
    pub async fn load(&self, page: Page) -> Result<Fragment, FetchError> {
        let url = self.sources.url_for(page);
        let html = self.source.fetch_html(url).await?;

        extract_fragment(&html, page.selectors())?
            .map(Fragment::new)
            .ok_or_else(|| FetchError::MissingNode(page.missing_message().to_string()))
    }

    /// Loads `page` and folds the outcome into a render state.
    ///
    /// Failures are logged here and surfaced only as their message.
    pub async fn render_state(&self, page: Page) -> PageState {
        match self.load(page).await {
            Ok(fragment) => PageState::Ready(fragment),
            Err(e) => {
                tracing::warn!(
                    page = page.slug(),
                    kind = e.kind(),
                    error = %e,
                    "Error loading page content"
                );
                PageState::Failed(e.to_string())
            }
        }
    }
}
