//! # Storefront
//!
//! Server-rendered storefront built with Axum and Askama.
//!
//! The informational pages (about, contact, privacy, terms) show a fragment
//! scraped from a CMS-rendered HTML page; the catalog pages and the JSON API
//! wrap a customer-service REST API.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Pages, catalog records and upstream traits
//! - **Application Layer** ([`application`]) - Fragment loading and envelope normalization
//! - **Infrastructure Layer** ([`infrastructure`]) - `reqwest` clients for the CMS and the catalog API
//! - **API Layer** ([`api`]) - JSON handlers, DTOs, extractors and middleware
//! - **Web Layer** ([`web`]) - HTML pages
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional, defaults point at the production upstreams
//! export API_URL="https://admin.sarvoclub.com"
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::{AppError, FetchError};
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{CatalogService, PageService};
    pub use crate::config::Config;
    pub use crate::domain::entities::{Credentials, Page, PageState, Service};
    pub use crate::error::{AppError, FetchError};
    pub use crate::state::AppState;
}
