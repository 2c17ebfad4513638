//! Domain layer containing the site's data model and upstream contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Pages, fragments, catalog records and the API envelope
//! - [`repositories`] - Traits for the two upstreams (CMS pages and catalog API)
//!
//! The domain layer knows nothing about reqwest or axum. Concrete upstream
//! clients live in [`crate::infrastructure::http`]; orchestration lives in
//! [`crate::application::services`].

pub mod entities;
pub mod repositories;
