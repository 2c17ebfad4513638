//! Helper functions used across the application.
//!
//! - [`fragment`] - CSS-selector extraction of HTML fragments
//! - [`logger`] - Tracing subscriber setup
//! - [`upstream_url`] - Validation of configured upstream URLs

pub mod fragment;
pub mod logger;
pub mod upstream_url;
