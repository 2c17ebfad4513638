//! Business logic services for the application layer.

pub mod catalog_service;
pub mod page_service;

pub use catalog_service::CatalogService;
pub use page_service::PageService;
