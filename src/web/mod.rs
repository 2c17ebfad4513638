//! Server-rendered site.
//!
//! Askama templates live in `templates/`, assets in `static/`.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`routes`] - Site route configuration

pub mod handlers;
pub mod routes;
