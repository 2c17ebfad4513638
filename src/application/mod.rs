//! Application layer services.
//!
//! Services consume the upstream traits from [`crate::domain::repositories`]
//! and give HTTP handlers a small, typed API.
//!
//! # Available Services
//!
//! - [`services::page_service::PageService`] - Fetch-and-extract for CMS-backed pages
//! - [`services::catalog_service::CatalogService`] - Catalog listing/detail with envelope normalization

pub mod services;
