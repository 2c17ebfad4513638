//! Infrastructure layer for external integrations.
//!
//! This layer implements the upstream traits defined by the domain layer.
//!
//! # Modules
//!
//! - [`http`] - reqwest clients for the CMS hosts and the catalog API

pub mod http;
