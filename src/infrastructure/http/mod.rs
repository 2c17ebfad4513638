//! reqwest-based upstream clients.
//!
//! A single [`reqwest::Client`] (and its connection pool) is built at
//! startup with [`build_client`] and shared by both clients.

mod catalog_client;
mod content_source;
mod headers;

pub use catalog_client::HttpCatalogClient;
pub use content_source::HttpContentSource;
pub use headers::ApiHeaders;

use std::time::Duration;

/// User agent sent on every outbound request.
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Builds the shared outbound HTTP client.
///
/// `timeout` bounds the whole request (connect, headers and body), so a slow
/// upstream cannot hold a page render open indefinitely.
///
/// # Errors
///
/// Returns an error if the TLS backend cannot be initialized.
pub fn build_client(timeout: Duration) -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .connect_timeout(timeout.min(Duration::from_secs(5)))
        .build()
}
