//! Upstream contracts for the domain layer.
//!
//! Both upstreams are read-only HTTP services. The traits abstract them so
//! the application services can be tested without a network.
//!
//! # Available Repositories
//!
//! - [`ContentSource`] - Fetches raw HTML documents from the CMS hosts
//! - [`CatalogRepository`] - Calls the customer-service catalog API
//!
//! Implementations live in `crate::infrastructure::http`; mock
//! implementations are auto-generated via `mockall` for testing.

pub mod catalog_repository;
pub mod content_source;

pub use catalog_repository::CatalogRepository;
pub use content_source::ContentSource;

#[cfg(test)]
pub use catalog_repository::MockCatalogRepository;
#[cfg(test)]
pub use content_source::MockContentSource;
