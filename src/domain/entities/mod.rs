//! Core domain entities.
//!
//! All entities are request-scoped view models: nothing is persisted and
//! nothing outlives the request that fetched it.
//!
//! # Entity Types
//!
//! - [`Page`] - One of the CMS-backed informational pages
//! - [`Fragment`] / [`PageState`] - Extracted markup and the page's render state
//! - [`Service`] - A catalog record with its embedded category reference
//! - [`Envelope`] - The catalog API's JSON wrapper
//! - [`Credentials`] - Who the catalog request is made for (guest or bearer)

pub mod catalog;
pub mod credentials;
pub mod page;

pub use catalog::{
    CategoryRef, CategorySummary, Envelope, ListingContent, Service, ServiceList,
    SubcategoryServices, total_pages,
};
pub use credentials::Credentials;
pub use page::{Fragment, Page, PageSources, PageState};
