//! Fragment extraction: select a sub-tree of an HTML document by CSS
//! selector and serialize it back to markup.

use scraper::{Html, Selector};

use crate::error::FetchError;

/// Extracts the outer HTML of the first node matching any of `selectors`.
///
/// Selectors are tried in order; the first one with a match wins, even if a
/// later selector would match a node earlier in the document.
///
/// Returns `Ok(None)` when nothing matches.
///
/// # Errors
///
/// Returns [`FetchError::Selector`] if a selector does not parse.
pub fn extract_fragment(html: &str, selectors: &[&str]) -> Result<Option<String>, FetchError> {
    let doc = Html::parse_document(html);

    for raw in selectors {
        let selector =
            Selector::parse(raw).map_err(|_| FetchError::Selector((*raw).to_string()))?;

        if let Some(node) = doc.select(&selector).next() {
            tracing::debug!(selector = *raw, "Fragment selector matched");
            return Ok(Some(node.html()));
        }
    }

    Ok(None)
}
