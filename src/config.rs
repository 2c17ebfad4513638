//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Upstreams
//!
//! ```bash
//! export API_URL="https://admin.sarvoclub.com"
//! export ZONE_ID="a02c55ff-cb84-4bbb-bf91-5300d1766a29"
//! export LOCALE="en"
//! export GUEST_ID="7e223db0-9f62-11f0-bba0-779e4e64bbc8"
//!
//! export ABOUT_URL="https://admin.workwaale.in/business-page/about-us"
//! export CONTACT_URL="https://www.admin.clickads.in/page/contact-us"
//! export PRIVACY_URL="https://www.admin.clickads.in/business-page/privacy-policy"
//! export TERMS_URL="https://www.admin.clickads.in/business-page/terms-and-conditions"
//! ```
//!
//! Every variable is optional; the values above are the defaults.
//!
//! ## Server Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `HTTP_TIMEOUT_SECONDS` - Outbound request timeout (default: 10, max: 120)
//! - `BEHIND_PROXY` - Read client IP from `X-Forwarded-For` for rate limiting (default: false)

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

use crate::domain::entities::{Page, PageSources};
use crate::utils::upstream_url::{display_host, parse_upstream_url};

pub const DEFAULT_API_URL: &str = "https://admin.sarvoclub.com";
pub const DEFAULT_ZONE_ID: &str = "a02c55ff-cb84-4bbb-bf91-5300d1766a29";
pub const DEFAULT_LOCALE: &str = "en";
pub const DEFAULT_GUEST_ID: &str = "7e223db0-9f62-11f0-bba0-779e4e64bbc8";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// When true, rate limiting reads client IP from X-Forwarded-For / X-Real-IP headers.
    /// Enable only when the service is behind a trusted reverse proxy.
    pub behind_proxy: bool,

    // ── Catalog API ─────────────────────────────────────────────────────────
    /// Base URL of the catalog REST API (`API_URL`).
    pub api_url: String,
    /// Tenant zone sent as the `zoneId` header.
    pub zone_id: String,
    /// Locale sent as the `X-localization` header.
    pub locale: String,
    /// Sent as `guest_id` when the caller has no bearer token.
    pub guest_id: String,

    // ── CMS pages ───────────────────────────────────────────────────────────
    pub page_sources: PageSources,

    /// Timeout for a whole outbound request in seconds.
    pub http_timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            behind_proxy: false,
            api_url: DEFAULT_API_URL.to_string(),
            zone_id: DEFAULT_ZONE_ID.to_string(),
            locale: DEFAULT_LOCALE.to_string(),
            guest_id: DEFAULT_GUEST_ID.to_string(),
            page_sources: PageSources::default(),
            http_timeout_seconds: 10,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Unset or empty variables fall back to the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if `HTTP_TIMEOUT_SECONDS` is set but not a number.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let http_timeout_seconds = match non_empty("HTTP_TIMEOUT_SECONDS") {
            Some(v) => v
                .parse()
                .with_context(|| format!("HTTP_TIMEOUT_SECONDS must be a number, got '{v}'"))?,
            None => defaults.http_timeout_seconds,
        };

        let behind_proxy = env::var("BEHIND_PROXY")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);

        let page_sources = PageSources {
            about: non_empty("ABOUT_URL").unwrap_or(defaults.page_sources.about),
            contact: non_empty("CONTACT_URL").unwrap_or(defaults.page_sources.contact),
            privacy: non_empty("PRIVACY_URL").unwrap_or(defaults.page_sources.privacy),
            terms: non_empty("TERMS_URL").unwrap_or(defaults.page_sources.terms),
        };

        Ok(Self {
            listen_addr: non_empty("LISTEN").unwrap_or(defaults.listen_addr),
            log_level: non_empty("RUST_LOG").unwrap_or(defaults.log_level),
            log_format: non_empty("LOG_FORMAT").unwrap_or(defaults.log_format),
            behind_proxy,
            api_url: non_empty("API_URL").unwrap_or(defaults.api_url),
            zone_id: non_empty("ZONE_ID").unwrap_or(defaults.zone_id),
            locale: non_empty("LOCALE").unwrap_or(defaults.locale),
            guest_id: non_empty("GUEST_ID").unwrap_or(defaults.guest_id),
            page_sources,
            http_timeout_seconds,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - `api_url` or any page URL is not an absolute http(s) URL
    /// - `http_timeout_seconds` is 0 or above 120
    /// - a header value (`zone_id`, `locale`, `guest_id`) is empty
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        parse_upstream_url(&self.api_url)
            .with_context(|| format!("API_URL is invalid: '{}'", self.api_url))?;

        for (page, url) in self.page_sources.iter() {
            parse_upstream_url(url).with_context(|| {
                format!("{}_URL is invalid: '{}'", env_prefix(page), url)
            })?;
        }

        if self.http_timeout_seconds == 0 || self.http_timeout_seconds > 120 {
            anyhow::bail!(
                "HTTP_TIMEOUT_SECONDS must be between 1 and 120, got {}",
                self.http_timeout_seconds
            );
        }

        for (name, value) in [
            ("ZONE_ID", &self.zone_id),
            ("LOCALE", &self.locale),
            ("GUEST_ID", &self.guest_id),
        ] {
            if value.trim().is_empty() {
                anyhow::bail!("{name} must not be empty");
            }
        }

        Ok(())
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_seconds)
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Catalog API: {}", display_host(&self.api_url));
        tracing::info!("  Zone: {} (locale: {})", self.zone_id, self.locale);
        for (page, url) in self.page_sources.iter() {
            tracing::info!("  {} page: {}", page.title(), display_host(url));
        }
        tracing::info!("  HTTP timeout: {}s", self.http_timeout_seconds);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

fn non_empty(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn env_prefix(page: Page) -> &'static str {
    match page {
        Page::About => "ABOUT",
        Page::Contact => "CONTACT",
        Page::Privacy => "PRIVACY",
        Page::Terms => "TERMS",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: &[&str] = &[
        "API_URL",
        "ZONE_ID",
        "LOCALE",
        "GUEST_ID",
        "ABOUT_URL",
        "CONTACT_URL",
        "PRIVACY_URL",
        "TERMS_URL",
        "HTTP_TIMEOUT_SECONDS",
        "LOG_FORMAT",
        "LISTEN",
    ];

    fn clear_env() {
        // SAFETY: Tests touching the environment are run serially via #[serial]
        unsafe {
            for var in VARS {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.api_url, "https://admin.sarvoclub.com");
        assert_eq!(config.http_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());
        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.listen_addr = "3000".to_string();
        assert!(config.validate().is_err());
        config.listen_addr = "127.0.0.1:3000".to_string();

        config.api_url = "ftp://admin.example.com".to_string();
        assert!(config.validate().is_err());
        config.api_url = DEFAULT_API_URL.to_string();

        config.page_sources.contact = "not a url".to_string();
        assert!(config.validate().is_err());
        config.page_sources = PageSources::default();

        config.http_timeout_seconds = 0;
        assert!(config.validate().is_err());
        config.http_timeout_seconds = 10;

        config.guest_id = " ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_from_env_falls_back_to_defaults() {
        clear_env();

        let config = Config::from_env().unwrap();

        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.zone_id, DEFAULT_ZONE_ID);
        assert_eq!(config.guest_id, DEFAULT_GUEST_ID);
        assert_eq!(config.page_sources, PageSources::default());
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("API_URL", "http://localhost:9000");
            env::set_var("TERMS_URL", "http://localhost:9001/terms");
            env::set_var("LOCALE", "hi");
            env::set_var("HTTP_TIMEOUT_SECONDS", "3");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.api_url, "http://localhost:9000");
        assert_eq!(config.page_sources.terms, "http://localhost:9001/terms");
        assert_eq!(
            config.page_sources.about,
            Page::About.default_url().to_string()
        );
        assert_eq!(config.locale, "hi");
        assert_eq!(config.http_timeout_seconds, 3);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_empty_variable_counts_as_unset() {
        clear_env();
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("API_URL", "");
        }

        let config = Config::from_env().unwrap();
        assert_eq!(config.api_url, DEFAULT_API_URL);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_invalid_timeout_is_error() {
        clear_env();
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("HTTP_TIMEOUT_SECONDS", "soon");
        }

        assert!(Config::from_env().is_err());

        clear_env();
    }
}
