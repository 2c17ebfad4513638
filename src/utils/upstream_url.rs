//! Validation of configured upstream URLs.
//!
//! Every outbound URL (catalog base URL, CMS page URLs) comes from
//! configuration and is checked once at startup.

use url::Url;

/// Errors that can occur while validating an upstream URL.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamUrlError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL has no host")]
    MissingHost,
}

/// Parses an upstream URL, accepting only absolute `http`/`https` URLs
/// with a host. Fragments are dropped.
///
/// # Examples
///
/// ```ignore
/// let url = parse_upstream_url("https://admin.example.com/api#x").unwrap();
/// assert_eq!(url.as_str(), "https://admin.example.com/api");
/// ```
pub fn parse_upstream_url(input: &str) -> Result<Url, UpstreamUrlError> {
    let mut url = Url::parse(input).map_err(|e| UpstreamUrlError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UpstreamUrlError::UnsupportedProtocol),
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(UpstreamUrlError::MissingHost);
    }

    url.set_fragment(None);
    Ok(url)
}

/// Returns `host[:port]` of a URL string for log lines, or the input
/// unchanged when it does not parse.
pub fn display_host(input: &str) -> String {
    match Url::parse(input) {
        Ok(url) => match (url.host_str(), url.port()) {
            (Some(host), Some(port)) => format!("{host}:{port}"),
            (Some(host), None) => host.to_string(),
            _ => input.to_string(),
        },
        Err(_) => input.to_string(),
    }
}
